// SPDX-License-Identifier: MPL-2.0
//! Shared color helpers for text and accents.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::{Color, Theme};

/// Accent color, slightly darker on light backgrounds for contrast.
pub fn accent_color(theme: &Theme) -> Color {
    if theme.extended_palette().is_dark {
        palette::ACCENT_500
    } else {
        palette::ACCENT_600
    }
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Standard color for error text (failed media).
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Text style for headings that carry the accent.
pub fn accent_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(accent_color(theme)),
    }
}

/// Text style for durations, studios and other secondary lines.
pub fn muted_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(muted_text_color()),
    }
}
