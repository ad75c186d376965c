// SPDX-License-Identifier: MPL-2.0
//! Media loading and caching.
//!
//! The navigation state machines only ever see opaque [`MediaItem`]s. This
//! module turns them into image handles for the views: [`loader`] fetches
//! the bytes and [`cache`] keeps a bounded set of them around so that
//! stepping through a gallery does not refetch what was just shown.
//!
//! [`MediaItem`]: crate::domain::media::MediaItem

pub mod cache;
pub mod loader;

pub use cache::{CacheConfig, CacheStats, MediaCache, MediaStatus};
