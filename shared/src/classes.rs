//! CSS class names used by the context menu and its popover.
//!
//! All names share the [`NS`] prefix so that stylesheets can target them
//! without colliding with application classes.

pub const NS: &str = "ui";

pub const CONTEXT_MENU: &str = "ui-context-menu";
pub const CONTEXT_MENU_POPOVER: &str = "ui-context-menu-popover";
pub const CONTEXT_MENU_POPOVER_TARGET: &str = "ui-context-menu-popover-target";
pub const CONTEXT_MENU_BACKDROP: &str = "ui-context-menu-backdrop";
pub const CONTEXT_MENU_CONTENT: &str = "ui-context-menu-content";

/// Marks an element that establishes a containing block for fixed-position
/// descendants (for example one with a CSS transform).
pub const FIXED_POSITIONING_CONTAINING_BLOCK: &str = "ui-fixed-positioning-containing-block";

pub const DARK: &str = "ui-dark";

pub const POPOVER: &str = "ui-popover";
pub const POPOVER_MINIMAL: &str = "ui-minimal";
pub const POPOVER_BACKDROP: &str = "ui-popover-backdrop";
pub const POPOVER_ENTER: &str = "ui-popover-enter";
pub const POPOVER_EXIT: &str = "ui-popover-exit";
/// Clicking an element with this class inside a popover closes it.
pub const POPOVER_DISMISS: &str = "ui-popover-dismiss";

/// Panel class for a placement such as `left-start`.
pub fn popover_placement(placement: &str) -> String {
    format!("{}-popover-{}", NS, placement)
}

/// Builds a CSS selector matching elements carrying `class_name`.
pub fn selector(class_name: &str) -> String {
    format!(".{}", class_name)
}

/// Joins class names, skipping empty entries and disabled conditional ones.
pub fn class_names<'a>(
    base: impl IntoIterator<Item = Option<&'a str>>,
    conditional: &[(&'a str, bool)],
) -> String {
    base.into_iter()
        .flatten()
        .chain(
            conditional
                .iter()
                .filter(|(_, enabled)| *enabled)
                .map(|(name, _)| *name),
        )
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector() {
        assert_eq!(
            selector(FIXED_POSITIONING_CONTAINING_BLOCK),
            ".ui-fixed-positioning-containing-block"
        );
        assert_eq!(selector(DARK), ".ui-dark");
    }

    #[test]
    fn test_class_names_skips_empty_and_disabled() {
        let classes = class_names(
            [Some("custom  extra"), None, Some(""), Some(CONTEXT_MENU)],
            &[(DARK, false), (POPOVER_MINIMAL, true)],
        );
        assert_eq!(classes, "custom extra ui-context-menu ui-minimal");
    }

    #[test]
    fn test_popover_placement() {
        assert_eq!(popover_placement("left-end"), "ui-popover-left-end");
    }

    #[test]
    fn test_class_names_empty() {
        assert_eq!(class_names([None], &[]), "");
    }

    #[test]
    fn test_class_names_share_namespace() {
        for class in [
            CONTEXT_MENU,
            CONTEXT_MENU_POPOVER,
            CONTEXT_MENU_POPOVER_TARGET,
            CONTEXT_MENU_BACKDROP,
            CONTEXT_MENU_CONTENT,
            FIXED_POSITIONING_CONTAINING_BLOCK,
            DARK,
            POPOVER,
            POPOVER_MINIMAL,
            POPOVER_BACKDROP,
            POPOVER_ENTER,
            POPOVER_EXIT,
            POPOVER_DISMISS,
        ] {
            assert!(class.starts_with(&format!("{}-", NS)), "{} lacks prefix", class);
        }
    }
}
