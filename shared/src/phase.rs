//! Open/close transition phases of an overlay panel.
//!
//! The panel stays mounted while it animates out, so "open" alone cannot
//! tell whether it should be in the DOM. Toggling moves into a transitional
//! phase; a timer of the configured transition duration completes it.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Lifecycle callback that should fire as the result of a phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleHook {
    Opening,
    Opened,
    Closing,
    Closed,
}

impl OverlayPhase {
    /// Applies a change of the requested open state.
    ///
    /// Returns the new phase and the hook to fire, or `None` when the
    /// request does not change anything.
    pub fn request(self, open: bool) -> Option<(OverlayPhase, LifecycleHook)> {
        match (self, open) {
            (OverlayPhase::Closed | OverlayPhase::Closing, true) => {
                Some((OverlayPhase::Opening, LifecycleHook::Opening))
            }
            (OverlayPhase::Open | OverlayPhase::Opening, false) => {
                Some((OverlayPhase::Closing, LifecycleHook::Closing))
            }
            _ => None,
        }
    }

    /// Finishes a running transition.
    pub fn complete(self) -> Option<(OverlayPhase, LifecycleHook)> {
        match self {
            OverlayPhase::Opening => Some((OverlayPhase::Open, LifecycleHook::Opened)),
            OverlayPhase::Closing => Some((OverlayPhase::Closed, LifecycleHook::Closed)),
            OverlayPhase::Open | OverlayPhase::Closed => None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        !matches!(self, OverlayPhase::Closed)
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self, OverlayPhase::Opening | OverlayPhase::Closing)
    }
}
