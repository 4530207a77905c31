// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only two native events matter to the form: files dropped on the window
//! and the Escape key, which closes the zoom overlay.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

/// Routes file drops and Escape presses to the application.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}
