// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub accent: Color,
    pub accent_hover: Color,

    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            accent: palette::ACCENT_600,
            accent_hover: palette::ACCENT_500,
            scrim: Color {
                a: opacity::SCRIM,
                ..palette::GRAY_950
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_950,
            surface_secondary: palette::GRAY_800,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            accent: palette::ACCENT_500,
            accent_hover: palette::ACCENT_400,
            scrim: Color {
                a: opacity::SCRIM,
                ..palette::BLACK
            },
        }
    }
}

/// Resolved theme: the mode the user picked plus the colors it implies.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detection errors default to dark
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

impl AppTheme {
    /// Resolves `mode` once; `System` is detected at construction time.
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        Self { colors, mode, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Iced theme used for the whole window.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(AppTheme::new(ThemeMode::Light).iced_theme(), Theme::Light);
        assert_eq!(AppTheme::new(ThemeMode::Dark).iced_theme(), Theme::Dark);
        // System mode depends on the desktop; it must only resolve without panicking
        let _ = AppTheme::new(ThemeMode::System).iced_theme();
    }

    #[test]
    fn theme_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"dark\"").unwrap();
        assert_eq!(parsed.mode, ThemeMode::Dark);
    }
}
