// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Drag threshold and prefetch radius
//! - **Startup**: Splash duration
//! - **Media cache**: Byte and entry budgets

use crate::domain::ui::newtypes::{drag_bounds, splash_bounds};

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Drag distance (logical pixels) a gallery swipe must exceed.
pub const DEFAULT_DRAG_THRESHOLD: f32 = drag_bounds::DEFAULT;

pub const MIN_DRAG_THRESHOLD: f32 = drag_bounds::MIN;

pub const MAX_DRAG_THRESHOLD: f32 = drag_bounds::MAX;

/// Neighbours fetched on each side of the current gallery item.
pub const DEFAULT_PREFETCH_COUNT: usize = 1;

/// Upper bound for `prefetch_count`.
pub const MAX_PREFETCH_COUNT: usize = 4;

// ==========================================================================
// Startup Defaults
// ==========================================================================

pub const DEFAULT_SPLASH_DURATION_MS: u64 = splash_bounds::DEFAULT_MS;

pub const MIN_SPLASH_DURATION_MS: u64 = splash_bounds::MIN_MS;

pub const MAX_SPLASH_DURATION_MS: u64 = splash_bounds::MAX_MS;

// ==========================================================================
// Media Cache Defaults
// ==========================================================================

/// Total bytes of decoded media kept in memory (32 MiB).
pub const DEFAULT_MEDIA_CACHE_BYTES: usize = 32 * 1024 * 1024;

/// Maximum number of cached media items.
pub const DEFAULT_MEDIA_CACHE_ENTRIES: usize = 64;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width below which the sidebar collapses into the mobile menu.
pub const COMPACT_LAYOUT_BREAKPOINT: f32 = 768.0;

/// Scroll distance after which the "back to top" button appears.
pub const SCROLL_TOP_THRESHOLD: f32 = 300.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DRAG_THRESHOLD > 0.0);
    assert!(MAX_DRAG_THRESHOLD > MIN_DRAG_THRESHOLD);
    assert!(DEFAULT_DRAG_THRESHOLD >= MIN_DRAG_THRESHOLD);
    assert!(DEFAULT_DRAG_THRESHOLD <= MAX_DRAG_THRESHOLD);

    assert!(DEFAULT_PREFETCH_COUNT <= MAX_PREFETCH_COUNT);

    assert!(MAX_SPLASH_DURATION_MS > MIN_SPLASH_DURATION_MS);
    assert!(DEFAULT_SPLASH_DURATION_MS >= MIN_SPLASH_DURATION_MS);
    assert!(DEFAULT_SPLASH_DURATION_MS <= MAX_SPLASH_DURATION_MS);

    assert!(DEFAULT_MEDIA_CACHE_BYTES > 0);
    assert!(DEFAULT_MEDIA_CACHE_ENTRIES > 0);

    assert!(COMPACT_LAYOUT_BREAKPOINT > 0.0);
    assert!(SCROLL_TOP_THRESHOLD > 0.0);
};
