// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_page)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Alternate section band, one step lighter than the page.
pub fn band(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Navbar; translucent at the top of the page, solid once scrolled.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let alpha = if scrolled {
            opacity::OPAQUE
        } else {
            opacity::OVERLAY_STRONG
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..colors.surface_card
            })),
            text_color: Some(colors.text_primary),
            shadow: if scrolled { shadow::MD } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Rounded card (portfolio items, service tiles, the estimate result).
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.surface_raised,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Card being faded out by a filter change.
pub fn card_faded(theme: &Theme) -> container::Style {
    let base = card(theme);
    container::Style {
        text_color: base.text_color.map(|color| Color {
            a: opacity::OVERLAY_SUBTLE,
            ..color
        }),
        ..base
    }
}

/// Stand-in for an image that is not available.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_raised)),
        text_color: Some(colors.text_secondary),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the lightbox and loading splash.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Inline form error text.
pub fn field_error(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(ColorScheme::for_theme(theme).error),
    }
}

/// Secondary text (captions, category labels).
pub fn muted_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

/// Gold headline text.
pub fn accent_text(theme: &Theme) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(ColorScheme::for_theme(theme).accent),
    }
}
