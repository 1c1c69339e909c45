// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard, window) to the
//! update loop and drives the player's idle tick. The tick subscription
//! only exists while the overlay is open: closing it tears the
//! subscription down, so no idle deadline can fire for a dead overlay.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Listens for runtime events the update loop routes per screen.
///
/// Window events always pass through (they carry the window id needed
/// for fullscreen requests). Keyboard events are forwarded only when no
/// widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match &event {
        event::Event::Window(_) => Some(Message::EventOccurred {
            window: window_id,
            event,
        }),
        event::Event::Keyboard(_) => match status {
            event::Status::Ignored => Some(Message::EventOccurred {
                window: window_id,
                event,
            }),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates a periodic tick subscription for the player's control
/// auto-hide while the overlay is open.
pub fn create_tick_subscription(player_open: bool) -> Subscription<Message> {
    if player_open {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
