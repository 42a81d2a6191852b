use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ContextMenuError;
use crate::geometry::Placement;

/// Element rendered by the context menu when children are static.
pub const DEFAULT_TAG_NAME: &str = "div";

/// Popover enter/exit transition length in milliseconds.
pub const DEFAULT_TRANSITION_DURATION: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositioningStrategy {
    /// Coordinates relative to the viewport (or the nearest containing block).
    #[default]
    Fixed,
    /// Coordinates relative to the offset parent.
    Absolute,
}

impl PositioningStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositioningStrategy::Fixed => "fixed",
            PositioningStrategy::Absolute => "absolute",
        }
    }
}

impl FromStr for PositioningStrategy {
    type Err = ContextMenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(PositioningStrategy::Fixed),
            "absolute" => Ok(PositioningStrategy::Absolute),
            _ => Err(ContextMenuError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Serializable part of the popover configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopoverOptions {
    pub placement: Placement,
    pub positioning_strategy: PositioningStrategy,
    pub transition_duration: u32,
    pub popover_class_name: Option<String>,
    pub has_backdrop: bool,
    pub can_escape_key_close: bool,
    pub minimal: bool,
}

impl Default for PopoverOptions {
    fn default() -> Self {
        Self {
            placement: Placement::RightStart,
            positioning_strategy: PositioningStrategy::Fixed,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            popover_class_name: None,
            has_backdrop: true,
            can_escape_key_close: true,
            minimal: true,
        }
    }
}

impl PopoverOptions {
    /// Parses options from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ContextMenuError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.popover_class_name = Some(class_name.into());
        self
    }

    pub fn with_transition_duration(mut self, millis: u32) -> Self {
        self.transition_duration = millis;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}
