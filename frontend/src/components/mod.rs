pub mod context_menu;
pub mod popover;

pub use context_menu::{
    ContentProps, ContextMenu, ContextMenuChildren, ContextMenuChildrenProps, MenuContent,
};
pub use popover::{Popover, PopoverConfig};
