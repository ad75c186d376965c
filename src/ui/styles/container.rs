// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::content::CardVariant;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theme::accent_color;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface (compact navigation menu).
///
/// Derived from the active Iced `Theme` background with a slight opacity so
/// panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Content card; the variant picks border and fill.
pub fn card(variant: CardVariant) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let accent = accent_color(theme);

        let (background, border_color, border_width) = match variant {
            CardVariant::Default => (
                Some(palette.background.weak.color.into()),
                palette.background.strong.color,
                border::WIDTH_SM,
            ),
            CardVariant::Featured => (
                Some(palette.background.weak.color.into()),
                accent,
                border::WIDTH_MD,
            ),
            CardVariant::Outline => (None, palette.background.strong.color, border::WIDTH_SM),
        };

        container::Style {
            background,
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::MD.into(),
            },
            shadow: if matches!(variant, CardVariant::Featured) {
                shadow::MD
            } else {
                shadow::NONE
            },
            ..Default::default()
        }
    }
}

/// Technology / tool chip.
pub fn chip(theme: &Theme) -> container::Style {
    let accent = accent_color(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        text_color: Some(accent),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window backdrop behind a modal, faded by `alpha` (0..=1).
pub fn scrim(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SCRIM * alpha.clamp(0.0, 1.0),
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Placeholder shown while an image loads or after it failed.
pub fn media_placeholder(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.strong.color.into()),
        text_color: Some(palette::GRAY_400),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
