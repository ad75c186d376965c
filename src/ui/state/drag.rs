// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a horizontal swipe over the gallery image. Only the x axis
//! matters; vertical movement is ignored.

use iced::Point;

/// Manages swipe state for the gallery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Position where the drag started
    pub start_position: Option<Point>,

    /// Last known cursor position while dragging
    pub last_position: Option<Point>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.last_position = Some(position);
    }

    /// Records cursor movement and returns the horizontal delta from the start.
    pub fn update(&mut self, position: Point) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        self.last_position = Some(position);
        self.delta()
    }

    /// Horizontal distance from the drag start to the last known position.
    #[must_use]
    pub fn delta(&self) -> Option<f32> {
        if !self.is_dragging {
            return None;
        }
        let start = self.start_position?;
        let last = self.last_position?;
        Some(last.x - start.x)
    }

    /// Stops the drag operation and returns its final horizontal delta.
    pub fn finish(&mut self) -> Option<f32> {
        let delta = self.delta();
        self.is_dragging = false;
        self.start_position = None;
        self.last_position = None;
        delta
    }
}
