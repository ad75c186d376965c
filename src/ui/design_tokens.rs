// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by every view of the portfolio.

## Organization

- **Palette**: Base colors (neutral grays plus the amber accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use showreel::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.06, 0.06, 0.07);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.11);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.18);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.32);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.77);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.91);

    // Accent (amber scale)
    pub const ACCENT_300: Color = Color::from_rgb(1.0, 0.82, 0.45);
    pub const ACCENT_400: Color = Color::from_rgb(0.98, 0.74, 0.3);
    pub const ACCENT_500: Color = Color::from_rgb(0.95, 0.65, 0.15);
    pub const ACCENT_600: Color = Color::from_rgb(0.82, 0.53, 0.08);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Card and panel backgrounds
    pub const SURFACE: f32 = 0.95;

    /// Modal backdrop
    pub const SCRIM: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Glyph button sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Layout
    pub const SIDEBAR_WIDTH: f32 = 290.0;
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
    pub const AVATAR: f32 = 120.0;

    // Media
    pub const THUMBNAIL_WIDTH: f32 = 160.0;
    pub const THUMBNAIL_HEIGHT: f32 = 90.0;
    pub const GALLERY_MAX_WIDTH: f32 = 1100.0;
    pub const GALLERY_MAX_HEIGHT: f32 = 680.0;
    pub const DOT: f32 = 10.0;
    pub const DOT_ACTIVE: f32 = 14.0;

    // Notice dialog
    pub const DIALOG_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: the artist name on the summary page
    //! - Titles: section and card headings
    //! - Body: descriptions and detail lines
    //! - Caption: chips, counters, durations

    pub const DISPLAY: f32 = 40.0;

    /// Section headings
    pub const TITLE_LG: f32 = 30.0;

    /// Card titles, sidebar name
    pub const TITLE_MD: f32 = 20.0;

    pub const TITLE_SM: f32 = 18.0;

    /// Emphasised body text (summary paragraphs)
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    /// Chips, durations, gallery counter
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SCRIM > opacity::OVERLAY_STRONG && opacity::SCRIM < opacity::OPAQUE);

    assert!(sizing::DOT_ACTIVE > sizing::DOT);
    assert!(sizing::THUMBNAIL_WIDTH > sizing::THUMBNAIL_HEIGHT);
    assert!(sizing::CONTENT_MAX_WIDTH > sizing::SIDEBAR_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
