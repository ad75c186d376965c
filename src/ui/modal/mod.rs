// SPDX-License-Identifier: MPL-2.0
//! Single-slot modal overlay.
//!
//! At most one modal is open. Opening replaces whatever is shown, closing is
//! idempotent. The slot is what the keyboard subscription keys off: the
//! listener exists exactly while [`ModalSlot::is_open`] is true.
//!
//! ```text
//! Closed --open(m)--> Open(m) --close--> Closed
//! Open(a) --open(b)--> Open(b)
//! ```
//!
//! Closing starts a short fade drawn from a [`ModalKind`] snapshot. The slot
//! is already empty at that point, so nothing in the fade reacts to input.

pub mod gallery;
pub mod notice;
pub mod video;
pub mod view;

pub use gallery::GalleryState;
pub use view::{view, ViewContext};

use crate::application::carousel::KeyOutcome;
use crate::application::input::KeyInput;
use crate::ui::state::presence::{Presence, DEFAULT_FADE};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Content of the open modal.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Gallery(GalleryState),
    Video { url: String, title: String },
    Notice,
}

impl Modal {
    #[must_use]
    pub fn kind(&self) -> ModalKind {
        match self {
            Modal::Gallery(_) => ModalKind::Gallery,
            Modal::Video { .. } => ModalKind::Video,
            Modal::Notice => ModalKind::Notice,
        }
    }
}

/// Serializable tag of a modal, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
    Gallery,
    Video,
    Notice,
}

#[derive(Debug, Clone)]
pub struct ModalSlot {
    active: Option<Modal>,
    presence: Presence,
    /// Snapshot drawn while the last closed modal fades out.
    exiting: Option<ModalKind>,
    fade: Duration,
}

impl Default for ModalSlot {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl ModalSlot {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            active: None,
            presence: Presence::gone(now),
            exiting: None,
            fade: DEFAULT_FADE,
        }
    }

    /// Overrides the fade length (zero disables it).
    #[must_use]
    pub fn with_fade(mut self, fade: Duration) -> Self {
        self.fade = fade;
        self
    }

    /// Shows `modal`, replacing any open one.
    pub fn open(&mut self, modal: Modal, now: Instant) {
        match &self.active {
            Some(current) => log::debug!("Modal {:?} replaced by {:?}", current.kind(), modal.kind()),
            None => log::debug!("Modal {:?} opened", modal.kind()),
        }
        self.active = Some(modal);
        self.exiting = None;
        self.presence = Presence::entering(now, self.fade);
    }

    /// Clears the slot. Returns `false` if nothing was open.
    pub fn close(&mut self, now: Instant) -> bool {
        let Some(modal) = self.active.take() else {
            return false;
        };
        log::debug!("Modal {:?} closed", modal.kind());
        self.presence.exit(now);
        self.exiting = self.presence.is_rendered().then(|| modal.kind());
        true
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn active(&self) -> Option<&Modal> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut Modal> {
        self.active.as_mut()
    }

    #[must_use]
    pub fn kind(&self) -> Option<ModalKind> {
        self.active.as_ref().map(Modal::kind)
    }

    /// The open gallery, if the slot holds one.
    pub fn gallery_mut(&mut self) -> Option<&mut GalleryState> {
        match self.active.as_mut() {
            Some(Modal::Gallery(gallery)) => Some(gallery),
            _ => None,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> Option<&GalleryState> {
        match self.active.as_ref() {
            Some(Modal::Gallery(gallery)) => Some(gallery),
            _ => None,
        }
    }

    /// Kind of the modal still fading out after a close.
    #[must_use]
    pub fn exiting(&self) -> Option<ModalKind> {
        self.exiting
    }

    /// Advances the fade. Returns `true` while it is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.presence.advance(now);
        if !self.presence.is_rendered() {
            self.exiting = None;
        }
        self.presence.is_animating()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.presence.is_animating()
    }

    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.presence.opacity(now)
    }
}

/// Messages emitted by the modal views.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Explicit close button.
    Close,
    /// Press on the scrim around the content.
    Backdrop,
    Gallery(gallery::Message),
    /// Hand the video URL to the browser.
    OpenExternal,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Closed,
    /// The gallery index changed; neighbours may need fetching.
    Navigated,
    OpenLink(String),
}

/// Process a modal message.
pub fn update(slot: &mut ModalSlot, message: Message, now: Instant) -> Event {
    match message {
        Message::Close | Message::Backdrop => {
            if slot.close(now) {
                Event::Closed
            } else {
                Event::None
            }
        }
        Message::Gallery(message) => match slot.gallery_mut() {
            Some(gallery) => {
                if gallery.update(message) {
                    Event::Navigated
                } else {
                    Event::None
                }
            }
            None => Event::None,
        },
        Message::OpenExternal => match slot.active() {
            Some(Modal::Video { url, .. }) => Event::OpenLink(url.clone()),
            _ => Event::None,
        },
    }
}

/// Routes a key press to the open modal. Keys do nothing while closed.
pub fn handle_key(slot: &mut ModalSlot, key: KeyInput, now: Instant) -> Event {
    let outcome = match slot.active_mut() {
        None => return Event::None,
        Some(Modal::Gallery(gallery)) => gallery.carousel_mut().handle_key(key),
        Some(Modal::Video { .. } | Modal::Notice) => match key {
            KeyInput::Escape => KeyOutcome::RequestClose,
            _ => KeyOutcome::Ignored,
        },
    };

    match outcome {
        KeyOutcome::Navigated => Event::Navigated,
        KeyOutcome::RequestClose => {
            slot.close(now);
            Event::Closed
        }
        KeyOutcome::Ignored => Event::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaSequence;
    use crate::domain::ui::DragThreshold;

    fn gallery(len: usize, start: usize) -> Modal {
        let media: MediaSequence = (0..len).map(|i| format!("{i}.png")).collect();
        Modal::Gallery(GalleryState::new(media, start, DragThreshold::default()))
    }

    fn video() -> Modal {
        Modal::Video {
            url: "https://youtu.be/x".into(),
            title: "Bachelor Movie".into(),
        }
    }

    #[test]
    fn opening_b_over_a_leaves_only_b() {
        let now = Instant::now();
        let mut slot = ModalSlot::new(now);

        slot.open(gallery(3, 0), now);
        slot.open(video(), now);

        assert_eq!(slot.kind(), Some(ModalKind::Video));
        assert!(slot.gallery().is_none());
    }

    #[test]
    fn closing_twice_equals_closing_once() {
        let now = Instant::now();
        let mut slot = ModalSlot::new(now);
        slot.open(Modal::Notice, now);

        assert!(slot.close(now));
        let after_first = (slot.is_open(), slot.kind());
        assert!(!slot.close(now));
        assert_eq!((slot.is_open(), slot.kind()), after_first);
    }

    #[test]
    fn escape_closes_any_open_modal() {
        let now = Instant::now();
        for modal in [gallery(2, 1), video(), Modal::Notice] {
            let mut slot = ModalSlot::new(now);
            slot.open(modal, now);
            assert_eq!(handle_key(&mut slot, KeyInput::Escape, now), Event::Closed);
            assert!(!slot.is_open());
        }
    }

    #[test]
    fn escape_without_modal_has_no_effect() {
        let now = Instant::now();
        let mut slot = ModalSlot::new(now);
        assert_eq!(handle_key(&mut slot, KeyInput::Escape, now), Event::None);
        assert!(!slot.is_open());
        assert!(slot.exiting().is_none());
        assert!(!slot.is_animating());
    }

    #[test]
    fn arrows_drive_the_gallery() {
        let now = Instant::now();
        let mut slot = ModalSlot::new(now);
        slot.open(gallery(4, 0), now);

        assert_eq!(handle_key(&mut slot, KeyInput::ArrowLeft, now), Event::Navigated);
        assert_eq!(slot.gallery().unwrap().carousel().current_index(), Some(3));
        assert_eq!(handle_key(&mut slot, KeyInput::Space, now), Event::None);
    }

    #[test]
    fn arrows_are_ignored_by_video_and_notice() {
        let now = Instant::now();
        let mut slot = ModalSlot::new(now);
        slot.open(video(), now);
        assert_eq!(handle_key(&mut slot, KeyInput::ArrowRight, now), Event::None);
        assert!(slot.is_open());
    }

    #[test]
    fn backdrop_and_close_button_both_close() {
        let now = Instant::now();
        let mut slot = ModalSlot::new(now);

        slot.open(video(), now);
        assert_eq!(update(&mut slot, Message::Backdrop, now), Event::Closed);

        slot.open(video(), now);
        assert_eq!(update(&mut slot, Message::Close, now), Event::Closed);
        assert_eq!(update(&mut slot, Message::Close, now), Event::None);
    }

    #[test]
    fn gallery_messages_without_gallery_are_ignored() {
        let now = Instant::now();
        let mut slot = ModalSlot::new(now);
        slot.open(Modal::Notice, now);
        assert_eq!(
            update(&mut slot, Message::Gallery(gallery::Message::Next), now),
            Event::None
        );
        assert_eq!(slot.kind(), Some(ModalKind::Notice));
    }

    #[test]
    fn video_open_external_links_its_url() {
        let now = Instant::now();
        let mut slot = ModalSlot::new(now);
        slot.open(video(), now);
        assert_eq!(
            update(&mut slot, Message::OpenExternal, now),
            Event::OpenLink("https://youtu.be/x".into())
        );
    }

    #[test]
    fn closed_modal_fades_out_then_disappears() {
        let now = Instant::now();
        let mut slot = ModalSlot::new(now);
        slot.open(video(), now);
        slot.tick(now + DEFAULT_FADE);

        slot.close(now + DEFAULT_FADE);
        assert!(!slot.is_open());
        assert_eq!(slot.exiting(), Some(ModalKind::Video));
        assert!(slot.is_animating());

        assert!(!slot.tick(now + DEFAULT_FADE * 2));
        assert!(slot.exiting().is_none());
    }

    #[test]
    fn reopening_during_exit_fade_drops_snapshot() {
        let now = Instant::now();
        let mut slot = ModalSlot::new(now);
        slot.open(video(), now);
        slot.close(now);
        slot.open(Modal::Notice, now);
        assert!(slot.exiting().is_none());
        assert_eq!(slot.kind(), Some(ModalKind::Notice));
    }

    #[test]
    fn zero_fade_closes_without_snapshot() {
        let now = Instant::now();
        let mut slot = ModalSlot::new(now).with_fade(Duration::ZERO);
        slot.open(video(), now);
        slot.close(now);
        assert!(slot.exiting().is_none());
        assert!(!slot.is_animating());
    }
}
