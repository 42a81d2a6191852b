pub mod classes;
pub mod config;
pub mod error;
pub mod geometry;
pub mod phase;
pub mod state;

pub use config::{PopoverOptions, PositioningStrategy, DEFAULT_TAG_NAME, DEFAULT_TRANSITION_DURATION};
pub use error::ContextMenuError;
pub use geometry::{popover_key, Offset, Placement, Rect};
pub use phase::{LifecycleHook, OverlayPhase};
pub use state::{
    evaluate_trigger, ContextMenuContentProps, ContextMenuState, SkipReason, TriggerContext,
    TriggerOutcome,
};
