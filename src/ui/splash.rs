// SPDX-License-Identifier: MPL-2.0
//! Chrome drawn above the page: the loading splash and the back-to-top
//! button.

use crate::application::chrome::LoadingPhase;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, Element, Length,
};

/// Full-window splash; `None` once removed.
pub fn loading<'a, M: 'a>(i18n: &I18n, phase: LoadingPhase) -> Option<Element<'a, M>> {
    let alpha = match phase {
        LoadingPhase::Visible => opacity::OPAQUE,
        LoadingPhase::FadingOut => opacity::OVERLAY_MEDIUM,
        LoadingPhase::Removed => return None,
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("brand-name"))
                .size(typography::DISPLAY)
                .color(Color {
                    a: alpha,
                    ..palette::GOLD_500
                }),
        )
        .push(
            Text::new(i18n.tr("loading-text"))
                .size(typography::BODY)
                .color(Color {
                    a: alpha,
                    ..palette::GRAY_200
                }),
        );

    Some(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::backdrop(alpha))
            .into(),
    )
}

/// Floating button in the bottom-right corner.
pub fn back_to_top<'a, M: Clone + 'a>(on_press: M) -> Element<'a, M> {
    let arrow = Container::new(Text::new("\u{2191}").size(typography::TITLE_MD))
        .center_x(Length::Fixed(sizing::BACK_TO_TOP))
        .center_y(Length::Fixed(sizing::BACK_TO_TOP));

    Container::new(
        button(arrow)
            .on_press(on_press)
            .padding(0.0)
            .style(styles::button::overlay(
                palette::GOLD_500,
                opacity::OVERLAY_STRONG,
                opacity::OPAQUE,
            )),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom)
    .padding(spacing::LG)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_splash_renders_nothing() {
        let i18n = I18n::default();
        assert!(loading::<()>(&i18n, LoadingPhase::Visible).is_some());
        assert!(loading::<()>(&i18n, LoadingPhase::FadingOut).is_some());
        assert!(loading::<()>(&i18n, LoadingPhase::Removed).is_none());
    }
}
