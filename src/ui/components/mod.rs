// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across cards, sections and modals.
//!
//! # Components
//!
//! - [`chips`] - Wrapping row of technology / tool chips
//! - [`media_frame`] - Image from the media cache, or a loading / failed
//!   placeholder of the same size

pub mod chips;
pub mod media_frame;
