use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContextMenuError;

/// A position in CSS pixels, relative to some origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub left: f64,
    pub top: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { left: 0.0, top: 0.0 };

    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Translates viewport coordinates of a pointer event into the
    /// coordinate space of a containing block whose origin sits at
    /// `containing_block` in the viewport.
    pub fn from_client(client_x: f64, client_y: f64, containing_block: Offset) -> Self {
        Self {
            left: client_x - containing_block.left,
            top: client_y - containing_block.top,
        }
    }

    /// Inline style placing a zero-size anchor at this offset.
    pub fn to_style(&self) -> String {
        format!("left: {}px; top: {}px;", self.left, self.top)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.left, self.top)
    }
}

/// Key identifying the popover subtree for a given anchor.
///
/// The popover is rebuilt from scratch whenever this changes so that it
/// never carries measurements from a previous anchor.
pub fn popover_key(offset: Option<Offset>) -> String {
    match offset {
        Some(offset) => offset.to_string(),
        None => "default".to_string(),
    }
}

/// Axis-aligned rectangle, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn origin(&self) -> Offset {
        Offset::new(self.left, self.top)
    }

    pub fn translate(&self, by: Offset) -> Rect {
        Rect {
            left: self.left - by.left,
            top: self.top - by.top,
            ..*self
        }
    }
}

/// Side of the anchor the panel opens on, and its alignment along that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    RightStart,
    Right,
    RightEnd,
    LeftStart,
    Left,
    LeftEnd,
    BottomStart,
    Bottom,
    BottomEnd,
    TopStart,
    Top,
    TopEnd,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::RightStart => "right-start",
            Placement::Right => "right",
            Placement::RightEnd => "right-end",
            Placement::LeftStart => "left-start",
            Placement::Left => "left",
            Placement::LeftEnd => "left-end",
            Placement::BottomStart => "bottom-start",
            Placement::Bottom => "bottom",
            Placement::BottomEnd => "bottom-end",
            Placement::TopStart => "top-start",
            Placement::Top => "top",
            Placement::TopEnd => "top-end",
        }
    }

    /// Point on `anchor` the panel attaches to.
    ///
    /// The panel's top-left corner is placed here; [`Placement::transform`]
    /// then shifts it so that it grows away from the anchor.
    pub fn anchor_point(&self, anchor: Rect) -> Offset {
        let center_x = anchor.left + anchor.width / 2.0;
        let center_y = anchor.top + anchor.height / 2.0;
        let (left, top) = match self {
            Placement::RightStart => (anchor.right(), anchor.top),
            Placement::Right => (anchor.right(), center_y),
            Placement::RightEnd => (anchor.right(), anchor.bottom()),
            Placement::LeftStart => (anchor.left, anchor.top),
            Placement::Left => (anchor.left, center_y),
            Placement::LeftEnd => (anchor.left, anchor.bottom()),
            Placement::BottomStart => (anchor.left, anchor.bottom()),
            Placement::Bottom => (center_x, anchor.bottom()),
            Placement::BottomEnd => (anchor.right(), anchor.bottom()),
            Placement::TopStart => (anchor.left, anchor.top),
            Placement::Top => (center_x, anchor.top),
            Placement::TopEnd => (anchor.right(), anchor.top),
        };
        Offset::new(left, top)
    }

    /// CSS transform moving a panel whose top-left corner sits on the
    /// attachment point to its side of the anchor.
    pub fn transform(&self) -> &'static str {
        match self {
            Placement::RightStart | Placement::BottomStart => "none",
            Placement::Right => "translate(0, -50%)",
            Placement::RightEnd => "translate(0, -100%)",
            Placement::LeftStart => "translate(-100%, 0)",
            Placement::Left => "translate(-100%, -50%)",
            Placement::LeftEnd => "translate(-100%, -100%)",
            Placement::Bottom => "translate(-50%, 0)",
            Placement::BottomEnd => "translate(-100%, 0)",
            Placement::TopStart => "translate(0, -100%)",
            Placement::Top => "translate(-50%, -100%)",
            Placement::TopEnd => "translate(-100%, -100%)",
        }
    }
}

impl FromStr for Placement {
    type Err = ContextMenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "right-start" => Ok(Placement::RightStart),
            "right" => Ok(Placement::Right),
            "right-end" => Ok(Placement::RightEnd),
            "left-start" => Ok(Placement::LeftStart),
            "left" => Ok(Placement::Left),
            "left-end" => Ok(Placement::LeftEnd),
            "bottom-start" => Ok(Placement::BottomStart),
            "bottom" => Ok(Placement::Bottom),
            "bottom-end" => Ok(Placement::BottomEnd),
            "top-start" => Ok(Placement::TopStart),
            "top" => Ok(Placement::Top),
            "top-end" => Ok(Placement::TopEnd),
            _ => Err(ContextMenuError::UnknownPlacement(s.to_string())),
        }
    }
}
