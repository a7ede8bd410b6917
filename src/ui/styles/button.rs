// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Gold call-to-action button (calculate, send, hero buttons).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let fill = match status {
        button::Status::Hovered => colors.accent_hover,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..colors.accent
        },
        button::Status::Active | button::Status::Pressed => colors.accent,
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: BLACK,
        border: Border {
            color: palette::GOLD_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Text-only navbar link. The active section is drawn in the accent color.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let text_color = if active || status == button::Status::Hovered {
            colors.accent
        } else {
            colors.text_primary
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Portfolio filter chip; the selected one is filled.
pub fn filter_chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let (background, text_color) = match (selected, status) {
            (true, _) => (Some(Background::Color(colors.accent)), BLACK),
            (false, button::Status::Hovered) => (
                Some(Background::Color(colors.surface_raised)),
                colors.accent,
            ),
            (false, _) => (None, colors.text_primary),
        };

        button::Style {
            background,
            text_color,
            border: Border {
                color: colors.accent,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round buttons floating over content (lightbox arrows, back-to-top).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha_hover,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Invisible button wrapping a clickable card or backdrop.
pub fn bare(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: WHITE,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
