// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! Media are opaque references. Ordering matters, identity does not.

pub mod types;

pub use types::{MediaItem, MediaKind, MediaSequence, MediaSource};
