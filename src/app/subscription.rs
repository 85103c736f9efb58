// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Combines the slider's own subscription (drag listeners and autoplay timer)
//! with window close handling so the slider is torn down before exit.

use super::Message;
use crate::ui::reveal;
use iced::{window, Subscription};

/// Creates the application subscription for the current slider state.
pub fn create_subscription(reveal: &reveal::State) -> Subscription<Message> {
    Subscription::batch([
        reveal.subscription().map(Message::Reveal),
        window::close_requests().map(Message::WindowCloseRequested),
    ])
}
