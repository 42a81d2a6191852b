//! Read-only DOM queries used to position the menu.

use context_menu_shared::classes::{self, selector};
use context_menu_shared::{ContextMenuError, Offset, Rect};
use web_sys::Element;

/// Nearest inclusive ancestor of `element` carrying `class_name`.
pub fn closest(element: &Element, class_name: &str) -> Result<Option<Element>, ContextMenuError> {
    let selector = selector(class_name);
    element
        .closest(&selector)
        .map_err(|err| ContextMenuError::Selector {
            message: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
            selector,
        })
}

/// Viewport-relative bounding box of `element`.
pub fn bounding_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Box of `element` relative to its offset parent.
pub fn offset_rect(element: &web_sys::HtmlElement) -> Rect {
    Rect::new(
        f64::from(element.offset_left()),
        f64::from(element.offset_top()),
        f64::from(element.offset_width()),
        f64::from(element.offset_height()),
    )
}

/// Viewport position of the containing block that fixed-position
/// descendants of `element` are laid out against.
///
/// Ancestors that establish such a block (transforms, filters, ...) carry
/// the `fixed-positioning-containing-block` class. Without one the viewport
/// itself is the containing block and the offset is zero.
pub fn containing_block_offset(element: &Element) -> Offset {
    match closest(element, classes::FIXED_POSITIONING_CONTAINING_BLOCK) {
        Ok(Some(block)) => bounding_rect(&block).origin(),
        Ok(None) => Offset::ZERO,
        Err(err) => {
            log::warn!("{}", err);
            Offset::ZERO
        }
    }
}

/// Whether `element` is rendered inside a dark-themed subtree.
pub fn is_dark_theme(element: &Element) -> bool {
    match closest(element, classes::DARK) {
        Ok(found) => found.is_some(),
        Err(err) => {
            log::warn!("{}", err);
            false
        }
    }
}
