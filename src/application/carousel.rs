// SPDX-License-Identifier: MPL-2.0
//! Carousel controller for gallery navigation.
//!
//! [`Carousel`] owns the current index into a fixed [`MediaSequence`] and
//! turns discrete input (buttons, arrow keys, dot indicators) and continuous
//! input (horizontal drags) into index changes.
//!
//! # Invariants
//!
//! - With `N > 0` items, the current index is always in `0..N`.
//! - With `N = 0` the controller is inert: every operation is a no-op.
//! - Navigation wraps in both directions.
//! - The drag offset is back at `0.0` after every drag end, whether or not the
//!   drag navigated.
//!
//! # Drag direction
//!
//! A drag that ends to the right of its start (`delta > 0`) goes to the
//! *previous* item; a drag that ends to the left goes to the *next* one.

use crate::application::input::KeyInput;
use crate::domain::media::{MediaItem, MediaSequence};
use crate::domain::ui::DragThreshold;

/// Outcome of feeding a key to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key moved (or would have moved) the index.
    Navigated,
    /// Escape: the owner of the carousel should close it.
    RequestClose,
    /// The carousel has no use for this key.
    Ignored,
}

/// Gallery navigation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    sequence: MediaSequence,
    current_index: usize,
    drag_offset: f32,
    threshold: DragThreshold,
}

impl Carousel {
    /// Creates a carousel positioned at `start_index`.
    ///
    /// An out-of-range start index falls back to the first item, matching
    /// the "reject, don't clamp" policy of [`Carousel::go_to`].
    #[must_use]
    pub fn new(sequence: MediaSequence, start_index: usize, threshold: DragThreshold) -> Self {
        let current_index = if start_index < sequence.len() {
            start_index
        } else {
            0
        };

        Self {
            sequence,
            current_index,
            drag_offset: 0.0,
            threshold,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &MediaSequence {
        &self.sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Current position, or `None` while the carousel is inert.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.current_index)
        }
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.current_index().and_then(|index| self.sequence.get(index))
    }

    /// Horizontal offset of the in-progress drag, in logical pixels.
    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Index reached by moving `delta` steps from the current index, wrapping.
    ///
    /// Uses Euclidean remainder so negative steps wrap to the end.
    #[must_use]
    pub fn peek(&self, delta: isize) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let len = len as isize;
        let target = (self.current_index as isize + delta).rem_euclid(len);
        Some(target as usize)
    }

    /// Indices of up to `radius` neighbours on each side of the current item,
    /// without duplicates and without the current index itself.
    #[must_use]
    pub fn neighbours(&self, radius: usize) -> Vec<usize> {
        let mut indices = Vec::new();
        let Some(current) = self.current_index() else {
            return indices;
        };

        for step in 1..=radius as isize {
            for delta in [step, -step] {
                if let Some(index) = self.peek(delta) {
                    if index != current && !indices.contains(&index) {
                        indices.push(index);
                    }
                }
            }
        }
        indices
    }

    /// Moves to the next item, wrapping from the last to the first.
    pub fn next(&mut self) {
        if let Some(index) = self.peek(1) {
            self.current_index = index;
        }
    }

    /// Moves to the previous item, wrapping from the first to the last.
    pub fn previous(&mut self) {
        if let Some(index) = self.peek(-1) {
            self.current_index = index;
        }
    }

    /// Jumps to `index`.
    ///
    /// Out-of-range indices are rejected: the current index is kept and
    /// `false` is returned.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len() {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    /// Records the live offset of an in-progress drag.
    pub fn drag_to(&mut self, offset: f32) {
        if self.is_empty() || !offset.is_finite() {
            return;
        }
        self.drag_offset = offset;
    }

    /// Resolves a finished drag of `delta` pixels.
    ///
    /// Navigates only when `|delta|` exceeds the threshold: right (`delta > 0`)
    /// goes to the previous item, left goes to the next one. The drag offset
    /// is reset in every case.
    pub fn end_drag(&mut self, delta: f32) {
        if delta.is_finite() && self.threshold.is_exceeded_by(delta) {
            if delta > 0.0 {
                self.previous();
            } else {
                self.next();
            }
        }
        self.drag_offset = 0.0;
    }

    /// Handles a key press while the carousel has focus.
    pub fn handle_key(&mut self, key: KeyInput) -> KeyOutcome {
        match key {
            KeyInput::ArrowRight => {
                self.next();
                KeyOutcome::Navigated
            }
            KeyInput::ArrowLeft => {
                self.previous();
                KeyOutcome::Navigated
            }
            KeyInput::Escape => KeyOutcome::RequestClose,
            KeyInput::Space => KeyOutcome::Ignored,
        }
    }
}
