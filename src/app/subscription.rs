// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Listeners are installed from state on every `subscription()` call, so a
//! listener whose condition no longer holds is dropped by Iced on the next
//! pass. Nothing stays registered after the modal slot empties.

use super::Message;
use crate::application::input::KeyInput;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Frame interval while a fade is running.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Which optional listeners the current state needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Listeners {
    /// Arrow keys and Escape, routed to the open modal.
    pub modal_keys: bool,
    /// Space, toggling the featured showreel once the splash is gone.
    pub playback_key: bool,
    /// Animation tick.
    pub tick: bool,
}

/// Builds the subscription for `listeners`. Window events are always on.
pub fn create(listeners: Listeners) -> Subscription<Message> {
    let mut subscriptions = vec![create_window_subscription()];

    if listeners.modal_keys {
        subscriptions.push(event::listen_with(|event, _status, _window| {
            pressed_key(&event)
                .filter(|key| *key != KeyInput::Space)
                .map(Message::KeyPressed)
        }));
    }

    if listeners.playback_key {
        subscriptions.push(event::listen_with(|event, status, _window| match status {
            event::Status::Ignored => pressed_key(&event)
                .filter(|key| *key == KeyInput::Space)
                .map(Message::KeyPressed),
            event::Status::Captured => None,
        }));
    }

    if listeners.tick {
        subscriptions.push(time::every(TICK_INTERVAL).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

fn pressed_key(event: &event::Event) -> Option<KeyInput> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => key_input(key),
        _ => None,
    }
}

/// Maps a toolkit key to the keys the portfolio understands.
#[must_use]
pub fn key_input(key: &Key) -> Option<KeyInput> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(KeyInput::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(KeyInput::ArrowRight),
        Key::Named(Named::Escape) => Some(KeyInput::Escape),
        Key::Named(Named::Space) => Some(KeyInput::Space),
        _ => None,
    }
}
