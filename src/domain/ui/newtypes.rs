// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Drag Threshold
// =============================================================================

/// Horizontal drag distance bounds, in logical pixels.
pub mod drag_bounds {
    /// Smallest accepted threshold.
    pub const MIN: f32 = 20.0;
    /// Largest accepted threshold.
    pub const MAX: f32 = 400.0;
    /// Threshold used by the gallery when nothing is configured.
    pub const DEFAULT: f32 = 100.0;
}

/// Distance a gallery drag must exceed (strictly) before it navigates.
///
/// # Example
///
/// ```
/// use showreel::domain::ui::DragThreshold;
///
/// assert_eq!(DragThreshold::default().value(), 100.0);
/// assert_eq!(DragThreshold::new(5.0).value(), 20.0);
/// assert!(DragThreshold::default().is_exceeded_by(-101.0));
/// assert!(!DragThreshold::default().is_exceeded_by(100.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragThreshold(f32);

impl DragThreshold {
    /// Creates a threshold, clamping to the valid range. NaN maps to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(drag_bounds::MIN, drag_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when `|delta|` is strictly greater than the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, delta: f32) -> bool {
        delta.abs() > self.0
    }
}

impl Default for DragThreshold {
    fn default() -> Self {
        Self(drag_bounds::DEFAULT)
    }
}

// =============================================================================
// Splash Delay
// =============================================================================

/// Splash screen duration bounds, in milliseconds.
pub mod splash_bounds {
    pub const MIN_MS: u64 = 0;
    pub const MAX_MS: u64 = 10_000;
    pub const DEFAULT_MS: u64 = 1_500;
}

/// How long the start-up splash stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashDelay(u64);

impl SplashDelay {
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(splash_bounds::MIN_MS, splash_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// A zero delay skips the splash entirely.
    #[must_use]
    pub fn is_disabled(self) -> bool {
        self.0 == 0
    }
}

impl Default for SplashDelay {
    fn default() -> Self {
        Self(splash_bounds::DEFAULT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_threshold_clamps_to_bounds() {
        assert_eq!(DragThreshold::new(0.0).value(), drag_bounds::MIN);
        assert_eq!(DragThreshold::new(10_000.0).value(), drag_bounds::MAX);
        assert_eq!(DragThreshold::new(150.0).value(), 150.0);
        assert_eq!(DragThreshold::new(f32::NAN), DragThreshold::default());
    }

    #[test]
    fn drag_threshold_is_strict() {
        let threshold = DragThreshold::default();
        assert!(!threshold.is_exceeded_by(100.0));
        assert!(!threshold.is_exceeded_by(-100.0));
        assert!(threshold.is_exceeded_by(100.5));
        assert!(threshold.is_exceeded_by(-120.0));
    }

    #[test]
    fn splash_delay_clamps_and_converts() {
        assert_eq!(SplashDelay::from_millis(99_999).as_millis(), splash_bounds::MAX_MS);
        assert_eq!(
            SplashDelay::default().as_duration(),
            Duration::from_millis(1_500)
        );
        assert!(SplashDelay::from_millis(0).is_disabled());
        assert!(!SplashDelay::default().is_disabled());
    }
}
