//! Browser fixtures shared by the component tests.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit};

/// Creates an element, appends it to `parent` (or the document body) and
/// returns it.
pub fn append_element(parent: Option<&Element>, tag: &str, class: &str, style: &str) -> HtmlElement {
    let document = leptos::document();
    let element = document.create_element(tag).unwrap();
    if !class.is_empty() {
        element.set_class_name(class);
    }
    if !style.is_empty() {
        element.set_attribute("style", style).unwrap();
    }
    match parent {
        Some(parent) => parent.append_child(&element).unwrap(),
        None => document.body().unwrap().append_child(&element).unwrap(),
    };
    element.unchecked_into()
}

pub fn remove(element: &Element) {
    element.remove();
}

/// A cancelable, bubbling mouse event of `kind` at viewport position `(x, y)`.
pub fn mouse_event(kind: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap()
}

pub fn context_menu_event(x: i32, y: i32) -> MouseEvent {
    mouse_event("contextmenu", x, y)
}

pub fn key_event(key: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_bubbles(true);
    init.set_key(key);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

pub fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

pub fn dispatch(target: &Element, event: &web_sys::Event) -> bool {
    target.dispatch_event(event).unwrap()
}
