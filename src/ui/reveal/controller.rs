// SPDX-License-Identifier: MPL-2.0
//! Interaction mode controller.
//!
//! Decides which unified pointer events may move the divider, based on the
//! configured [`SlideMode`], and owns the drag lifecycle.
//!
//! In drag mode a press inside the widget acquires the window-level
//! listeners and a release observed anywhere gives them back. The listeners
//! themselves are a subscription built by the slider state from
//! [`ListenerScope::is_held`], so releasing the scope is what detaches them.

use super::pointer::{PointerEvent, PointerSample};
use crate::domain::reveal::SlideMode;

/// Where an event was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Delivered by the slider's own canvas (pointer over the widget).
    Widget,
    /// Delivered by the window-level listeners held during a drag.
    Window,
}

/// Drag lifecycle phase. Only meaningful in [`SlideMode::Drag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Scoped ownership of the window-level move/release listeners.
#[derive(Debug, Clone, Default)]
pub struct ListenerScope {
    held: bool,
}

impl ListenerScope {
    /// Takes the listeners. Returns `false` if they were already held.
    pub fn acquire(&mut self) -> bool {
        !std::mem::replace(&mut self.held, true)
    }

    /// Gives the listeners back. Returns `false` if nothing was held.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.held, false)
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Outcome of feeding one event to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Nothing to do.
    Ignore,
    /// Resolve this sample and commit it as the new percentage.
    Track(PointerSample),
    /// `Idle -> Dragging`; listeners were acquired.
    DragStarted,
    /// `Dragging -> Idle`; listeners were released.
    DragEnded,
}

/// State machine gating pointer events by input mode.
#[derive(Debug, Clone)]
pub struct Controller {
    mode: SlideMode,
    phase: DragPhase,
    listeners: ListenerScope,
}

impl Controller {
    #[must_use]
    pub fn new(mode: SlideMode) -> Self {
        Self {
            mode,
            phase: DragPhase::Idle,
            listeners: ListenerScope::default(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> SlideMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Returns whether the window-level listeners should be attached.
    #[must_use]
    pub fn listeners_attached(&self) -> bool {
        self.listeners.is_held()
    }

    /// Feeds one unified pointer event through the active input policy.
    pub fn handle(&mut self, event: PointerEvent, origin: Origin) -> Decision {
        if self.mode.tracks_without_press() {
            return match (event, origin) {
                (PointerEvent::Move(sample), Origin::Widget) => Decision::Track(sample),
                _ => Decision::Ignore,
            };
        }

        match (self.phase, event) {
            (DragPhase::Idle, PointerEvent::Down(_)) if origin == Origin::Widget => {
                self.phase = DragPhase::Dragging;
                if self.listeners.acquire() {
                    tracing::debug!("reveal: window listeners attached");
                }
                Decision::DragStarted
            }
            (DragPhase::Dragging, PointerEvent::Move(sample)) => Decision::Track(sample),
            (DragPhase::Dragging, PointerEvent::Up) => {
                self.end_drag();
                Decision::DragEnded
            }
            _ => Decision::Ignore,
        }
    }

    /// Drops any drag in progress and detaches the listeners.
    ///
    /// Returns whether a drag was interrupted.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.end_drag();
        was_dragging
    }

    fn end_drag(&mut self) {
        self.phase = DragPhase::Idle;
        if self.listeners.release() {
            tracing::debug!("reveal: window listeners detached");
        }
    }
}
