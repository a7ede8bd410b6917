// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the current notification.
//!
//! The toast sits in the top-right corner below the navbar. While it is
//! entering or leaving it is drawn translucent, standing in for the slide
//! transition.

use super::manager::{Manager, Message, Phase};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{
    border, layout, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &Notification, phase: Phase, i18n: &I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();
        let alpha = phase_alpha(phase);

        let message_text = notification.text(i18n);

        let glyph = Text::new(severity.glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(Color {
                    a: alpha,
                    ..accent_color
                }),
            });

        let message_widget =
            Text::new(message_text)
                .size(typography::BODY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(Color {
                        a: alpha,
                        ..ColorScheme::for_theme(theme).text_primary
                    }),
                });

        let dismiss_button = button(Text::new("\u{00d7}").size(typography::TITLE_SM))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XS])
            .style(dismiss_button_style);

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, alpha))
            .into()
    }

    /// Renders the toast layer: the current toast, or an empty shrunk container.
    pub fn view_overlay<'a>(manager: &Manager, i18n: &I18n) -> Element<'a, Message> {
        match manager.visible() {
            Some((notification, phase)) => Container::new(Self::view(notification, phase, i18n))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(iced::Padding {
                    top: layout::NAVBAR_HEIGHT + spacing::XL,
                    right: spacing::LG,
                    bottom: 0.0,
                    left: 0.0,
                })
                .into(),
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
        }
    }
}

fn phase_alpha(phase: Phase) -> f32 {
    match phase {
        Phase::Shown => opacity::OPAQUE,
        Phase::Entering | Phase::Leaving => opacity::OVERLAY_SUBTLE,
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color, alpha: f32) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..colors.surface_card
        })),
        border: iced::Border {
            color: Color {
                a: alpha,
                ..accent_color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            }))
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: colors.text_secondary,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let accent = palette::GOLD_500;
        let style = toast_container_style(&Theme::Dark, accent, opacity::OPAQUE);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn only_the_shown_phase_is_opaque() {
        assert_eq!(phase_alpha(Phase::Shown), opacity::OPAQUE);
        assert!(phase_alpha(Phase::Entering) < opacity::OPAQUE);
        assert!(phase_alpha(Phase::Leaving) < opacity::OPAQUE);
    }
}
