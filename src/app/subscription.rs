// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and touch events are routed to the lightbox only while it is
//! open. While it is closed the subscription is inert, so the viewer cannot
//! swallow input meant for anything else.

use super::Message;
use crate::ui::lightbox;
use iced::{event, Event, Subscription};

/// Creates the event subscription for the current viewer mode.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| match &event {
        Event::Keyboard(_) => match status {
            event::Status::Ignored => {
                Some(Message::Lightbox(lightbox::Message::RawEvent(event)))
            }
            event::Status::Captured => None,
        },
        // Touch gestures drive swipe navigation regardless of capture.
        Event::Touch(_) => Some(Message::Lightbox(lightbox::Message::RawEvent(event))),
        _ => None,
    })
}
