// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison slider.
//!
//! Draws a background ("after") image with a foreground ("before") image
//! clipped to the left of a vertical divider. The divider follows the pointer
//! according to the configured [`SlideMode`] and can be advanced by a timer.
//!
//! # Components
//!
//! - [`pointer`] - Mouse/touch unification into a single pointer sample
//! - [`resolver`] - Pointer position to clamped percentage
//! - [`controller`] - Input mode gating and drag lifecycle
//! - [`autoplay`] - Periodic, input-independent advancement
//! - [`renderer`] - Geometry and canvas drawing
//!
//! # Wiring
//!
//! The host forwards [`Message`]s to [`State::update`], renders
//! [`State::view`], and includes [`State::subscription`] in its own
//! subscription. Window-level pointer listeners only exist in that
//! subscription while a drag is in progress, keyed by a [`ListenerKey`]
//! that changes with every drag.

pub mod autoplay;
pub mod controller;
pub mod pointer;
pub mod renderer;
pub mod resolver;

pub use autoplay::Autoplay;
pub use controller::{Controller, Decision, DragPhase, Origin};
pub use pointer::{PointerEvent, PointerSample, RawPointer, TouchTracker};
pub use renderer::{CanvasState, RevealCanvas, RevealGeometry};
pub use resolver::{resolve, WidgetBounds};

use crate::config::SliderConfig;
use crate::domain::reveal::{AutoplayStep, RevealPercent, SlideMode};
use crate::media::ImageData;
use crate::ui::design_tokens::sizing;
use iced::widget::Canvas;
use iced::{event, time, window, Element, Length, Rectangle, Size, Subscription};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one slider instance so its listeners and timer stay private.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(u64);

impl Id {
    /// Returns a process-wide unique id.
    #[must_use]
    pub fn unique() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Tags the window listeners of one drag of one instance.
///
/// Each drag gets a fresh key, so a release queued by the previous drag's
/// listeners cannot end the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerKey {
    instance: Id,
    drag: u64,
}

/// Construction-time configuration of a slider.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub slide_mode: SlideMode,
    pub show_handlebar: bool,
    /// Autoplay period in milliseconds; 0 disables autoplay.
    pub autoplay_duration_ms: u64,
    pub autoplay_step: AutoplayStep,
    pub initial_percentage: RevealPercent,
    pub width: Length,
    pub height: Length,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            slide_mode: SlideMode::default(),
            show_handlebar: true,
            autoplay_duration_ms: 0,
            autoplay_step: AutoplayStep::default(),
            initial_percentage: RevealPercent::default(),
            width: Length::Fill,
            height: Length::Fill,
        }
    }
}

impl From<&SliderConfig> for RevealConfig {
    fn from(config: &SliderConfig) -> Self {
        Self {
            slide_mode: config.slide_mode,
            show_handlebar: config.show_handlebar,
            autoplay_duration_ms: config.clamped_autoplay_duration_ms(),
            autoplay_step: AutoplayStep::new(config.autoplay_step),
            initial_percentage: RevealPercent::new(config.initial_percentage),
            ..Self::default()
        }
    }
}

/// Messages for the slider.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Input observed by the slider's canvas, with its current layout bounds.
    Pointer {
        bounds: Rectangle,
        input: RawPointer,
    },
    /// The canvas was laid out with new bounds.
    Resized { bounds: Rectangle },
    /// Input observed by the window-level listeners held during a drag.
    Window {
        listener: ListenerKey,
        input: RawPointer,
    },
    /// Autoplay timer fired.
    AutoplayTick { instance: Id },
}

/// Effects produced by slider updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    PercentChanged(RevealPercent),
    DragStarted,
    DragEnded,
}

/// Slider state owned by the host.
#[derive(Debug, Clone)]
pub struct State {
    id: Id,
    percent: RevealPercent,
    controller: Controller,
    touches: TouchTracker,
    autoplay: Autoplay,
    bounds: Option<WidgetBounds>,
    drags: u64,
    show_handlebar: bool,
    width: Length,
    height: Length,
    mounted: bool,
}

impl State {
    #[must_use]
    pub fn new(config: &RevealConfig) -> Self {
        let autoplay = Autoplay::new(config.autoplay_duration_ms, config.autoplay_step);
        if let Some(period) = autoplay.period() {
            tracing::debug!(?period, "reveal: autoplay enabled");
        }

        Self {
            id: Id::unique(),
            percent: config.initial_percentage,
            controller: Controller::new(config.slide_mode),
            touches: TouchTracker::default(),
            autoplay,
            bounds: None,
            drags: 0,
            show_handlebar: config.show_handlebar,
            width: config.width,
            height: config.height,
            mounted: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> Id {
        self.id
    }

    #[must_use]
    pub fn percent(&self) -> RevealPercent {
        self.percent
    }

    #[must_use]
    pub fn mode(&self) -> SlideMode {
        self.controller.mode()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    /// Key of the current (or most recent) drag's window listeners.
    #[must_use]
    pub fn listener_key(&self) -> ListenerKey {
        ListenerKey {
            instance: self.id,
            drag: self.drags,
        }
    }

    /// Returns whether window-level listeners are currently part of the subscription.
    #[must_use]
    pub fn listeners_attached(&self) -> bool {
        self.mounted && self.controller.listeners_attached()
    }

    /// Changes the autoplay period. The previous timer is dropped with it.
    pub fn set_autoplay_duration(&mut self, period_ms: u64) {
        if self.autoplay.set_period_ms(period_ms) {
            tracing::debug!(period_ms, "reveal: autoplay period changed");
        }
    }

    /// Tears the slider down: releases listeners, stops the timer, and
    /// ignores every later message.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        if self.controller.cancel() {
            tracing::debug!("reveal: drag interrupted by unmount");
        }
        self.touches.reset();
        self.autoplay.disable();
        self.mounted = false;
    }

    /// Handles a slider message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, message: Message) -> Effect {
        if !self.mounted {
            return Effect::None;
        }

        match message {
            Message::Pointer { bounds, input } => {
                self.bounds = Some(WidgetBounds::from(bounds));
                self.handle_pointer(input, Origin::Widget)
            }
            Message::Resized { bounds } => {
                self.bounds = Some(WidgetBounds::from(bounds));
                Effect::None
            }
            Message::Window { listener, input } => {
                if listener != self.listener_key() || !self.controller.listeners_attached() {
                    return Effect::None;
                }
                self.handle_pointer(input, Origin::Window)
            }
            Message::AutoplayTick { instance } => {
                if instance != self.id || !self.autoplay.is_enabled() {
                    return Effect::None;
                }
                self.commit(self.autoplay.advance(self.percent))
            }
        }
    }

    fn handle_pointer(&mut self, input: RawPointer, origin: Origin) -> Effect {
        let Some(event) = self.touches.unify(input) else {
            return Effect::None;
        };

        match self.controller.handle(event, origin) {
            Decision::Ignore => Effect::None,
            Decision::DragStarted => {
                self.drags = self.drags.wrapping_add(1);
                Effect::DragStarted
            }
            Decision::DragEnded => Effect::DragEnded,
            Decision::Track(sample) => match self.bounds.and_then(|b| resolve(b, sample)) {
                Some(percent) => self.commit(percent),
                None => Effect::None,
            },
        }
    }

    fn commit(&mut self, percent: RevealPercent) -> Effect {
        if percent == self.percent {
            return Effect::None;
        }
        self.percent = percent;
        Effect::PercentChanged(percent)
    }

    /// Renders the slider for the given image pair.
    pub fn view<'a>(&'a self, before: &'a ImageData, after: &'a ImageData) -> Element<'a, Message> {
        let handle = self
            .show_handlebar
            .then(|| Size::new(sizing::REVEAL_HANDLE_SIZE, sizing::REVEAL_HANDLE_SIZE));

        Canvas::new(RevealCanvas {
            before,
            after,
            percent: self.percent,
            mode: self.controller.mode(),
            dragging: self.controller.is_dragging(),
            handle,
            divider_width: sizing::REVEAL_DIVIDER_WIDTH,
        })
        .width(self.width)
        .height(self.height)
        .into()
    }

    /// Window-level listeners (only while dragging) and the autoplay timer.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.mounted {
            return Subscription::none();
        }

        let listeners = if self.controller.listeners_attached() {
            event::listen_with(window_pointer)
                .with(self.listener_key())
                .map(|(listener, input)| Message::Window { listener, input })
        } else {
            Subscription::none()
        };

        let autoplay = match self.autoplay.period() {
            Some(period) => time::every(period)
                .with(self.id)
                .map(|(instance, _)| Message::AutoplayTick { instance }),
            None => Subscription::none(),
        };

        Subscription::batch([listeners, autoplay])
    }
}

/// Moves and releases anywhere in the window. Presses only count on the widget.
fn window_pointer(
    event: iced::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<RawPointer> {
    RawPointer::from_event(&event, None).filter(|raw| !raw.is_press())
}
