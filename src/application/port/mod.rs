// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`video`]: Playback control of the featured showreel
//! - [`links`]: Handing external URLs to the host system
//!
//! Traits use domain types only and never block; infrastructure adapters in
//! [`crate::infrastructure`] implement them.

pub mod links;
pub mod video;

pub use links::LinkOpener;
pub use video::PlaybackHandle;
