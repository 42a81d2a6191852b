pub mod components;
pub mod utils;

#[cfg(feature = "demo")]
pub mod app;

#[cfg(test)]
mod testing;

pub use components::{
    ContentProps, ContextMenu, ContextMenuChildren, ContextMenuChildrenProps, MenuContent, Popover,
    PopoverConfig,
};
pub use context_menu_shared::{classes, ContextMenuError, Offset, Placement, PopoverOptions};

#[cfg(feature = "demo")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "demo")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
