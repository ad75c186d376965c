// SPDX-License-Identifier: MPL-2.0
//! Playback port for the featured video.
//!
//! The portfolio never decodes video itself. It only needs to know whether
//! the featured showreel is paused and to flip that state, so the player is
//! injected as a [`PlaybackHandle`].

/// Minimal play/pause capability of an external video player.
///
/// # Example
///
/// ```
/// use showreel::application::port::PlaybackHandle;
///
/// struct Toy(bool);
/// impl PlaybackHandle for Toy {
///     fn play(&mut self) { self.0 = false; }
///     fn pause(&mut self) { self.0 = true; }
///     fn is_paused(&self) -> bool { self.0 }
/// }
///
/// let mut player = Toy(true);
/// player.toggle();
/// assert!(!player.is_paused());
/// ```
pub trait PlaybackHandle: Send {
    fn play(&mut self);

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Plays when paused, pauses when playing.
    fn toggle(&mut self) {
        if self.is_paused() {
            self.play();
        } else {
            self.pause();
        }
    }
}
