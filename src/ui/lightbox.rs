// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox drawn over the page while the viewer is open.

use crate::application::lightbox::{Direction, LightboxEvent, LightboxView};
use crate::domain::gallery::GalleryItem;
use crate::i18n::I18n;
use crate::infrastructure::SiteData;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::portfolio::thumbnail;
use crate::ui::styles;
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view: LightboxView<'a>,
    pub site: &'a SiteData,
}

/// Render the overlay. Clicking the backdrop closes it.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, LightboxEvent> {
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop(opacity::OVERLAY_LIGHTBOX)),
    )
    .on_press(LightboxEvent::Close);

    let panel = Container::new(opaque(panel(&ctx)))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new().push(backdrop).push(panel).into()
}

fn panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, LightboxEvent> {
    let view = &ctx.view;

    let close = button(Text::new("\u{2715}").size(typography::TITLE_MD))
        .on_press(LightboxEvent::Close)
        .padding(spacing::XS)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ));

    let picture = Container::new(thumbnail(
        ctx.site,
        view.image,
        view.alt_text,
        sizing::LIGHTBOX_IMAGE_HEIGHT,
    ))
    .width(Length::Fixed(sizing::LIGHTBOX_IMAGE_HEIGHT));

    let mut stage = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center);
    if view.show_nav_controls {
        stage = stage
            .push(nav_button("\u{2039}", Direction::Previous))
            .push(picture)
            .push(nav_button("\u{203a}", Direction::Next));
    } else {
        stage = stage.push(picture);
    }

    let title = if view.title == GalleryItem::UNTITLED {
        ctx.i18n.tr("portfolio-untitled")
    } else {
        view.title.to_string()
    };
    let position = (view.position + 1).to_string();
    let total = view.total.to_string();
    let counter = ctx.i18n.tr_with_args(
        "lightbox-counter",
        &[("position", position.as_str()), ("total", total.as_str())],
    );

    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill))
                .push(close)
                .width(Length::Fixed(
                    sizing::LIGHTBOX_IMAGE_HEIGHT + 2.0 * (sizing::LIGHTBOX_NAV + spacing::MD),
                )),
        )
        .push(stage)
        .push(
            Text::new(title)
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(
            Text::new(view.category.to_string())
                .size(typography::BODY)
                .style(styles::container::accent_text),
        )
        .push(
            Text::new(counter)
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        )
        .into()
}

fn nav_button<'a>(glyph: &'static str, direction: Direction) -> Element<'a, LightboxEvent> {
    button(
        Container::new(Text::new(glyph).size(typography::TITLE_LG))
            .center_x(Length::Fixed(sizing::LIGHTBOX_NAV))
            .center_y(Length::Fixed(sizing::LIGHTBOX_NAV)),
    )
    .on_press(LightboxEvent::Navigate(direction))
    .padding(0.0)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ))
    .into()
}
