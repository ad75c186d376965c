// SPDX-License-Identifier: MPL-2.0
//! Stand-in player for the featured showreel.
//!
//! Streaming services do not hand out raw video, so the in-app player is a
//! poster with a play/pause state. The first `play()` hands the video URL to
//! the system browser; later toggles only flip the local state.

use crate::application::port::{LinkOpener, PlaybackHandle};
use std::fmt;
use std::sync::Arc;

pub struct PreviewPlayer {
    url: String,
    paused: bool,
    launched: bool,
    opener: Arc<dyn LinkOpener>,
}

impl fmt::Debug for PreviewPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewPlayer")
            .field("url", &self.url)
            .field("paused", &self.paused)
            .field("launched", &self.launched)
            .finish()
    }
}

impl PreviewPlayer {
    /// Creates a paused player for `url`.
    #[must_use]
    pub fn new(url: impl Into<String>, opener: Arc<dyn LinkOpener>) -> Self {
        Self {
            url: url.into(),
            paused: true,
            launched: false,
            opener,
        }
    }

    /// Whether the URL has already been handed to the browser.
    #[must_use]
    pub fn has_launched(&self) -> bool {
        self.launched
    }
}

impl PlaybackHandle for PreviewPlayer {
    fn play(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        if !self.launched && !self.url.is_empty() {
            self.launched = true;
            self.opener.open(&self.url);
        }
        log::debug!("Showreel playing");
    }

    fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        log::debug!("Showreel paused");
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
