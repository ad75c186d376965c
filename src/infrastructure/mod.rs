// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer - adapters implementing application ports.
//!
//! - [`browser`]: [`LinkOpener`](crate::application::port::LinkOpener) backed by the `open` crate
//! - [`preview_player`]: [`PlaybackHandle`](crate::application::port::PlaybackHandle)
//!   for the featured showreel

pub mod browser;
pub mod preview_player;

pub use browser::SystemBrowser;
pub use preview_player::PreviewPlayer;
