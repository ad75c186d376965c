// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theme::accent_color;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Call-to-action button (contact, resume, watch).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::ACCENT_500)),
            text_color: palette::GRAY_950,
            border: Border {
                color: palette::ACCENT_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::ACCENT_400)),
            text_color: palette::GRAY_950,
            border: Border {
                color: palette::ACCENT_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_700)),
            text_color: palette::GRAY_400,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Round translucent buttons drawn over media (gallery arrows, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Sidebar navigation entry; the active section is highlighted.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let accent = accent_color(theme);

        let (background, text_color) = match (active, status) {
            (true, _) => (
                Some(Background::Color(Color { a: 0.15, ..accent })),
                accent,
            ),
            (false, button::Status::Hovered) => (
                Some(palette.background.strong.color.into()),
                palette.background.base.text,
            ),
            (false, _) => (None, palette.background.base.text),
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Text-only button for links and card toggles.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let base = accent_color(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_300,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active => base,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Gallery position dot.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match (active, status) {
            (true, _) => WHITE,
            (false, button::Status::Hovered) => Color {
                a: opacity::OVERLAY_HOVER,
                ..WHITE
            },
            (false, _) => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            },
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Media thumbnail inside a card.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => accent_color(theme),
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(theme.extended_palette().background.strong.color.into()),
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_accent() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::ACCENT_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn active_nav_item_is_highlighted() {
        let active = nav_item(true)(&Theme::Dark, button::Status::Active);
        let inactive = nav_item(false)(&Theme::Dark, button::Status::Active);

        assert!(active.background.is_some());
        assert!(inactive.background.is_none());
    }

    #[test]
    fn active_dot_is_opaque() {
        let style = dot(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(WHITE)));
    }
}
