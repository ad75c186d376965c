// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Window-independent interaction state shared by several views.

pub mod drag;
pub mod presence;

pub use drag::DragState;
pub use presence::{Phase, Presence};
