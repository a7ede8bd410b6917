// SPDX-License-Identifier: MPL-2.0
//! Static page sections: hero, about, services and the footer.
//!
//! Every section has the fixed height listed in [`layout`] so the page
//! layout, and with it the active-section tracking, is known without
//! measuring widgets.

use crate::application::chrome::{SectionBounds, SiteSection};
use crate::i18n::I18n;
use crate::ui::design_tokens::{layout, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Keys of the service tiles: (title, description).
const SERVICES: [(&str, &str); 4] = [
    ("services-custom-title", "services-custom-text"),
    ("services-cover-up-title", "services-cover-up-text"),
    ("services-touch-up-title", "services-touch-up-text"),
    ("services-consultation-title", "services-consultation-text"),
];

/// Keys of the about statistics: (value, label).
const STATS: [(&str, &str); 3] = [
    ("about-stat-years-value", "about-stat-years"),
    ("about-stat-tattoos-value", "about-stat-tattoos"),
    ("about-stat-clients-value", "about-stat-clients"),
];

/// Height of a section.
#[must_use]
pub fn height(section: SiteSection) -> f32 {
    match section {
        SiteSection::Home => layout::HOME_HEIGHT,
        SiteSection::About => layout::ABOUT_HEIGHT,
        SiteSection::Portfolio => layout::PORTFOLIO_HEIGHT,
        SiteSection::Services => layout::SERVICES_HEIGHT,
        SiteSection::Estimate => layout::ESTIMATE_HEIGHT,
        SiteSection::Contact => layout::CONTACT_HEIGHT,
    }
}

/// Bounds of every section in page order, measured from the top of the
/// scrollable content.
#[must_use]
pub fn page_layout() -> Vec<SectionBounds> {
    let mut top = 0.0;
    SiteSection::ALL
        .into_iter()
        .map(|section| {
            let bounds = SectionBounds {
                section,
                top,
                height: height(section),
            };
            top += bounds.height;
            bounds
        })
        .collect()
}

/// Hero banner. `parallax` shifts the headline down as the page scrolls.
pub fn hero<'a>(i18n: &I18n, parallax: f32) -> Element<'a, SiteSection> {
    let shift = parallax.clamp(0.0, layout::HOME_HEIGHT / 2.0);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(i18n.tr("hero-cta-portfolio")).size(typography::BODY_LG))
                .on_press(SiteSection::Portfolio)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("hero-cta-estimate")).size(typography::BODY_LG))
                .on_press(SiteSection::Estimate)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::filter_chip(false)),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Space::new().height(Length::Fixed(layout::NAVBAR_HEIGHT + shift)))
        .push(
            Text::new(i18n.tr("hero-title"))
                .size(typography::DISPLAY)
                .style(styles::container::accent_text),
        )
        .push(Text::new(i18n.tr("hero-subtitle")).size(typography::TITLE_MD))
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::HOME_HEIGHT))
        .padding(spacing::XL)
        .center_x(Length::Fill)
        .clip(true)
        .style(styles::container::page)
        .into()
}

pub fn about<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let stats = STATS
        .into_iter()
        .fold(Row::new().spacing(spacing::XXL), |row, (value, label)| {
            row.push(
                Column::new()
                    .align_x(Horizontal::Center)
                    .push(
                        Text::new(i18n.tr(value))
                            .size(typography::TITLE_LG)
                            .style(styles::container::accent_text),
                    )
                    .push(
                        Text::new(i18n.tr(label))
                            .size(typography::BODY)
                            .style(styles::container::muted_text),
                    ),
            )
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::FORM_WIDTH * 1.5)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("about-title"))
                .size(typography::TITLE_LG)
                .style(styles::container::accent_text),
        )
        .push(Text::new(i18n.tr("about-text")).size(typography::BODY_LG))
        .push(stats);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::ABOUT_HEIGHT))
        .center_x(Length::Fill)
        .style(styles::container::band)
        .into()
}

pub fn services<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let tiles = SERVICES
        .into_iter()
        .fold(Row::new().spacing(spacing::MD), |row, (title, text)| {
            row.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XS)
                        .push(
                            Text::new(i18n.tr(title))
                                .size(typography::TITLE_SM)
                                .style(styles::container::accent_text),
                        )
                        .push(Text::new(i18n.tr(text)).size(typography::BODY)),
                )
                .width(Length::Fixed(sizing::CARD_WIDTH))
                .padding(spacing::MD)
                .style(styles::container::card),
            )
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("services-title"))
                .size(typography::TITLE_LG)
                .style(styles::container::accent_text),
        )
        .push(tiles);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::SERVICES_HEIGHT))
        .center_x(Length::Fill)
        .style(styles::container::band)
        .into()
}

pub fn footer<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    Container::new(
        Text::new(i18n.tr("footer-text"))
            .size(typography::CAPTION)
            .style(styles::container::muted_text),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .center_x(Length::Fill)
    .style(styles::container::band)
    .into()
}
