// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants of the studio site.

## Organization

- **Palette**: Base colors (ink black, gold accent, red alerts)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Layout**: Section heights used for scroll tracking
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use inkfolio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    // Neutral colors
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const INK_900: Color = Color::from_rgb(0.04, 0.04, 0.04); // Page background
    pub const INK_800: Color = Color::from_rgb(0.1, 0.1, 0.1); // Cards, navbar
    pub const INK_700: Color = Color::from_rgb(0.16, 0.16, 0.16);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.92);

    // Brand colors
    pub const GOLD_400: Color = Color::from_rgb(0.9, 0.76, 0.35);
    pub const GOLD_500: Color = Color::from_rgb(0.83, 0.69, 0.22);
    pub const GOLD_600: Color = Color::from_rgb(0.7, 0.57, 0.16);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.8, 0.16, 0.16);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Levels
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_LIGHTBOX: f32 = 0.92;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Component Sizes
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;
    pub const TOAST_WIDTH: f32 = 400.0;
    pub const CARD_WIDTH: f32 = 260.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 220.0;
    pub const LIGHTBOX_IMAGE_HEIGHT: f32 = 480.0;
    pub const LIGHTBOX_NAV: f32 = 48.0;
    pub const BACK_TO_TOP: f32 = 48.0;
    pub const FORM_WIDTH: f32 = 640.0;
    pub const NAV_MENU_WIDTH: f32 = 240.0;
}

// ============================================================================
// Page Layout
// ============================================================================

/// Fixed section heights. Sections are laid out in page order with these
/// heights so scroll offsets map to sections without measuring widgets.
pub mod layout {
    pub const NAVBAR_HEIGHT: f32 = 70.0;
    pub const HOME_HEIGHT: f32 = 640.0;
    pub const ABOUT_HEIGHT: f32 = 520.0;
    pub const PORTFOLIO_HEIGHT: f32 = 1240.0;
    pub const SERVICES_HEIGHT: f32 = 520.0;
    pub const ESTIMATE_HEIGHT: f32 = 900.0;
    pub const CONTACT_HEIGHT: f32 = 1040.0;
    /// Width below which the navbar collapses into a menu button.
    pub const COMPACT_WIDTH: f32 = 900.0;
    /// Portfolio grid columns on a wide window.
    pub const PORTFOLIO_COLUMNS: usize = 3;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 48.0;
    /// Section titles.
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Widths
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radii
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

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 5.0 },
        blur_radius: 20.0,
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
    assert!(opacity::OVERLAY_LIGHTBOX > opacity::OVERLAY_STRONG);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // The navbar covers exactly the scroll target offset.
    assert!(layout::NAVBAR_HEIGHT == crate::config::SCROLL_TARGET_OFFSET);
    assert!(layout::HOME_HEIGHT > crate::config::NAVBAR_SCROLLED_THRESHOLD);
};
