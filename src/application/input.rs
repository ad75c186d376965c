// SPDX-License-Identifier: MPL-2.0
//! Keys the portfolio reacts to, independent of the windowing toolkit.

/// A key press relevant to gallery navigation or playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    ArrowLeft,
    ArrowRight,
    Escape,
    Space,
}
