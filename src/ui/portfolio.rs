// SPDX-License-Identifier: MPL-2.0
//! Portfolio section: filter bar and the card grid.
//!
//! Cards are drawn from the catalog, not the filtered list, so cards still
//! fading out after a filter change stay on screen until their hide effect
//! lands.

use crate::application::lightbox::LightboxEvent;
use crate::application::portfolio::{Portfolio, PortfolioEvent};
use crate::domain::gallery::{FilterTag, GalleryItem, ImageRef};
use crate::i18n::I18n;
use crate::infrastructure::SiteData;
use crate::ui::design_tokens::{layout, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub portfolio: &'a Portfolio,
    pub site: &'a SiteData,
    pub columns: usize,
}

/// Render the whole section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, PortfolioEvent> {
    let title = Text::new(ctx.i18n.tr("portfolio-title"))
        .size(typography::TITLE_LG)
        .style(styles::container::accent_text);
    let subtitle = Text::new(ctx.i18n.tr("portfolio-subtitle"))
        .size(typography::BODY_LG)
        .style(styles::container::muted_text);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(filter_bar(&ctx))
        .push(grid(&ctx));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::PORTFOLIO_HEIGHT))
        .style(styles::container::page)
        .into()
}

fn filter_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, PortfolioEvent> {
    ctx.portfolio
        .filter_tags()
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, tag| {
            let selected = ctx.portfolio.filter() == &tag;
            let label = filter_label(ctx, &tag);
            row.push(
                button(Text::new(label).size(typography::BODY))
                    .on_press(PortfolioEvent::SetFilter(tag))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::filter_chip(selected)),
            )
        })
        .into()
}

/// Chip label: localized "all", else the first label the catalog uses for
/// the category.
fn filter_label(ctx: &ViewContext<'_>, tag: &FilterTag) -> String {
    match tag {
        FilterTag::All => ctx.i18n.tr("filter-all"),
        FilterTag::Category(category) => ctx
            .portfolio
            .catalog()
            .items()
            .iter()
            .find(|item| &item.category_tag == category)
            .map_or_else(|| category.clone(), |item| item.display_category().to_string()),
    }
}

fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, PortfolioEvent> {
    let shown: Vec<&GalleryItem> = ctx
        .portfolio
        .catalog()
        .items()
        .iter()
        .filter(|item| ctx.portfolio.visibility(item.id).displayed)
        .collect();

    if shown.is_empty() {
        return Text::new(ctx.i18n.tr("portfolio-empty"))
            .style(styles::container::muted_text)
            .into();
    }

    shown
        .chunks(ctx.columns.max(1))
        .fold(Column::new().spacing(spacing::MD), |column, chunk| {
            let row = chunk
                .iter()
                .fold(Row::new().spacing(spacing::MD), |row, item| {
                    row.push(card(ctx, item))
                });
            column.push(row)
        })
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, item: &GalleryItem) -> Element<'a, PortfolioEvent> {
    let faded = ctx.portfolio.visibility(item.id).is_fading_out();

    let body = Column::new()
        .spacing(spacing::XS)
        .push(thumbnail(
            ctx.site,
            &item.image,
            &item.alt_text,
            sizing::CARD_IMAGE_HEIGHT,
        ))
        .push(Text::new(item_title(ctx.i18n, item)).size(typography::TITLE_SM))
        .push(
            Text::new(item.display_category().to_string())
                .size(typography::CAPTION)
                .style(styles::container::muted_text),
        );

    let framed = Container::new(body)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::XS)
        .style(if faded {
            styles::container::card_faded
        } else {
            styles::container::card
        });

    let mut clickable = button(framed).padding(0.0).style(styles::button::bare);
    if !faded {
        clickable = clickable.on_press(PortfolioEvent::Lightbox(LightboxEvent::Open(
            item.image.clone(),
        )));
    }
    clickable.into()
}

/// Title of an item; blank titles read "untitled".
pub fn item_title(i18n: &I18n, item: &GalleryItem) -> String {
    if item.title.trim().is_empty() {
        i18n.tr("portfolio-untitled")
    } else {
        item.title.clone()
    }
}

/// Image of an item, or a placeholder carrying its alt text when the file is
/// not available.
pub fn thumbnail<'a, M: 'a>(
    site: &SiteData,
    image_ref: &ImageRef,
    alt_text: &str,
    height: f32,
) -> Element<'a, M> {
    match site.image_path(image_ref).filter(|path| path.is_file()) {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        None => Container::new(
            Text::new(alt_text.to_string()).size(typography::CAPTION),
        )
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .padding(spacing::SM)
        .style(styles::container::image_placeholder)
        .into(),
    }
}
