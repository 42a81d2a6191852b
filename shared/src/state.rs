//! Interaction state of a context menu.
//!
//! Generic over the event handle `E` so the transitions can be exercised
//! without a browser. The component stores a `ContextMenuState<MouseEvent>`.

use crate::geometry::Offset;

/// Props handed to content render functions.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuContentProps<E> {
    pub is_open: bool,
    pub target_offset: Option<Offset>,
    pub mouse_event: Option<E>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuState<E> {
    pub is_open: bool,
    pub mouse_event: Option<E>,
    pub target_offset: Option<Offset>,
}

impl<E> Default for ContextMenuState<E> {
    fn default() -> Self {
        Self {
            is_open: false,
            mouse_event: None,
            target_offset: None,
        }
    }
}

impl<E: Clone> ContextMenuState<E> {
    pub fn content_props(&self) -> ContextMenuContentProps<E> {
        ContextMenuContentProps {
            is_open: self.is_open,
            target_offset: self.target_offset,
            mouse_event: self.mouse_event.clone(),
        }
    }
}

impl<E> ContextMenuState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the menu for `event`, anchored at `offset`. A later trigger
    /// replaces both the event and the anchor.
    pub fn open(&mut self, event: E, offset: Offset) {
        self.mouse_event = Some(event);
        self.target_offset = Some(offset);
        self.is_open = true;
    }

    /// Applies the popover's report of its next open state.
    ///
    /// Only closing is acted upon; the menu opens itself. Returns whether
    /// the state changed.
    pub fn handle_interaction(&mut self, next_open: bool) -> bool {
        if next_open {
            return false;
        }
        let changed = self.is_open || self.mouse_event.is_some();
        self.is_open = false;
        self.mouse_event = None;
        changed
    }

    /// Called whenever the disabled flag changes, in either direction.
    /// The retained event and anchor are kept; only a new trigger reopens.
    pub fn sync_disabled(&mut self) {
        self.is_open = false;
    }
}

/// Facts about a trigger event needed to decide how to handle it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerContext {
    /// A nested context menu already claimed the event.
    pub default_prevented: bool,
    pub disabled: bool,
    pub has_content: bool,
    /// Children use the render-function form.
    pub renders_children: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyHandled,
    Disabled,
    NoContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Suppress the native menu, retain the event and open.
    Open,
    /// Leave the state untouched. The pass-through callback still runs.
    Skip(SkipReason),
}

pub fn evaluate_trigger(context: TriggerContext) -> TriggerOutcome {
    if context.default_prevented {
        return TriggerOutcome::Skip(SkipReason::AlreadyHandled);
    }
    if context.disabled {
        return TriggerOutcome::Skip(SkipReason::Disabled);
    }
    if !context.has_content && !context.renders_children {
        return TriggerOutcome::Skip(SkipReason::NoContent);
    }
    TriggerOutcome::Open
}
