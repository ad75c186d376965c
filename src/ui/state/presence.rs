// SPDX-License-Identifier: MPL-2.0
//! Enter/exit state for elements that fade in and out.
//!
//! Mounting and unmounting are explicit phases rather than widget lifecycle
//! callbacks, so the choreography can be driven and tested without a window:
//!
//! ```text
//! Entering --advance--> Visible --exit--> Exiting --advance--> Gone
//! ```
//!
//! Time is always passed in, never read from the clock.

use std::time::{Duration, Instant};

/// Default fade length for section and modal transitions.
pub const DEFAULT_FADE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Exiting,
    Gone,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presence {
    phase: Phase,
    started: Instant,
    duration: Duration,
}

impl Presence {
    /// Starts fading in at `now`. A zero duration is visible immediately.
    #[must_use]
    pub fn entering(now: Instant, duration: Duration) -> Self {
        let phase = if duration.is_zero() {
            Phase::Visible
        } else {
            Phase::Entering
        };
        Self {
            phase,
            started: now,
            duration,
        }
    }

    #[must_use]
    pub fn visible(now: Instant, duration: Duration) -> Self {
        Self {
            phase: Phase::Visible,
            started: now,
            duration,
        }
    }

    #[must_use]
    pub fn gone(now: Instant) -> Self {
        Self {
            phase: Phase::Gone,
            started: now,
            duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Starts fading out at `now`.
    ///
    /// An element interrupted while entering fades out from its current
    /// opacity instead of jumping to fully visible first.
    pub fn exit(&mut self, now: Instant) {
        match self.phase {
            Phase::Gone | Phase::Exiting => {}
            _ if self.duration.is_zero() => {
                self.phase = Phase::Gone;
                self.started = now;
            }
            Phase::Entering => {
                let shown = self.progress(now);
                let remaining = self.duration.mul_f32(1.0 - shown);
                self.phase = Phase::Exiting;
                self.started = now.checked_sub(remaining).unwrap_or(now);
            }
            Phase::Visible => {
                self.phase = Phase::Exiting;
                self.started = now;
            }
        }
    }

    /// Moves to the next phase once the running transition is complete.
    ///
    /// Returns `true` if the phase changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.is_animating() || now.saturating_duration_since(self.started) < self.duration {
            return false;
        }
        self.phase = match self.phase {
            Phase::Entering => Phase::Visible,
            Phase::Exiting => Phase::Gone,
            other => other,
        };
        true
    }

    /// Opacity in `0.0..=1.0` at `now`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Entering => self.progress(now),
            Phase::Visible => 1.0,
            Phase::Exiting => 1.0 - self.progress(now),
            Phase::Gone => 0.0,
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Exiting)
    }

    /// Whether the element still needs to be drawn.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.phase != Phase::Gone
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const FADE: Duration = Duration::from_millis(200);

    #[test]
    fn enter_runs_to_visible() {
        let t0 = Instant::now();
        let mut presence = Presence::entering(t0, FADE);
        assert!(presence.is_animating());
        assert_abs_diff_eq!(presence.opacity(t0), 0.0);
        assert_abs_diff_eq!(presence.opacity(t0 + FADE / 2), 0.5, epsilon = 1e-3);

        assert!(!presence.advance(t0 + FADE / 2));
        assert!(presence.advance(t0 + FADE));
        assert_eq!(presence.phase(), Phase::Visible);
        assert!(!presence.is_animating());
        assert_abs_diff_eq!(presence.opacity(t0 + FADE * 10), 1.0);
    }

    #[test]
    fn exit_runs_to_gone() {
        let t0 = Instant::now();
        let mut presence = Presence::visible(t0, FADE);
        presence.exit(t0);
        assert_eq!(presence.phase(), Phase::Exiting);
        assert_abs_diff_eq!(presence.opacity(t0 + FADE / 4), 0.75, epsilon = 1e-3);

        assert!(presence.advance(t0 + FADE));
        assert_eq!(presence.phase(), Phase::Gone);
        assert!(!presence.is_rendered());
        assert_abs_diff_eq!(presence.opacity(t0 + FADE), 0.0);
    }

    #[test]
    fn interrupted_enter_exits_from_current_opacity() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let mut presence = Presence::entering(t0, FADE);
        let t1 = t0 + FADE / 4;
        presence.exit(t1);
        assert_abs_diff_eq!(presence.opacity(t1), 0.25, epsilon = 1e-3);
        assert!(presence.advance(t1 + FADE / 4));
        assert_eq!(presence.phase(), Phase::Gone);
    }

    #[test]
    fn exit_is_idempotent() {
        let t0 = Instant::now();
        let mut presence = Presence::visible(t0, FADE);
        presence.exit(t0);
        presence.exit(t0 + FADE / 2);
        assert_abs_diff_eq!(presence.opacity(t0 + FADE / 2), 0.5, epsilon = 1e-3);

        let mut gone = Presence::gone(t0);
        gone.exit(t0);
        assert_eq!(gone.phase(), Phase::Gone);
    }

    #[test]
    fn zero_duration_skips_animation() {
        let t0 = Instant::now();
        let mut presence = Presence::entering(t0, Duration::ZERO);
        assert_eq!(presence.phase(), Phase::Visible);
        presence.exit(t0);
        assert_eq!(presence.phase(), Phase::Gone);
    }
}
