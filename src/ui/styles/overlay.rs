// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the gallery counter and modal surfaces.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, GRAY_900, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Pill-shaped indicator such as the "3 / 8" counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Content region of a modal (video poster, notice dialog).
#[must_use]
pub fn modal_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_900)),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
