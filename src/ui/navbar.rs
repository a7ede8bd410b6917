// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with section links and the compact-width menu.
//!
//! On wide windows every section link sits in the bar. Below
//! [`layout::COMPACT_WIDTH`] the links collapse into a menu button and a
//! dropdown that closes when a link is chosen.

use crate::application::chrome::{SiteChrome, SiteSection};
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, layout, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub chrome: &'a SiteChrome,
    /// Window narrower than [`layout::COMPACT_WIDTH`].
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    Navigate(SiteSection),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Scroll to a section; the parent resolves its bounds.
    Navigate(SiteSection),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, chrome: &mut SiteChrome) -> Event {
    match message {
        Message::ToggleMenu => {
            chrome.toggle_menu();
            Event::None
        }
        Message::Navigate(section) => Event::Navigate(section),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.compact && ctx.chrome.menu_open() {
        content = content.push(build_dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar(ctx.chrome.navbar_scrolled()))
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("brand-name"))
        .size(typography::TITLE_MD)
        .style(styles::container::accent_text);

    let mut row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(layout::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let glyph = if ctx.chrome.menu_open() {
            "\u{2715}"
        } else {
            "\u{2630}"
        };
        row = row.push(
            button(Text::new(glyph).size(typography::TITLE_MD))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::nav_link(ctx.chrome.menu_open())),
        );
    } else {
        for section in SiteSection::ALL {
            row = row.push(nav_link(ctx, section));
        }
    }

    row.into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = SiteSection::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, section| {
            column.push(nav_link(ctx, section))
        });

    let menu = Container::new(links)
        .width(Length::Fixed(sizing::NAV_MENU_WIDTH))
        .padding(spacing::XS)
        .style(|theme: &Theme| {
            let colors = ColorScheme::for_theme(theme);
            container::Style {
                background: Some(colors.surface_card.into()),
                border: Border {
                    radius: radius::SM.into(),
                    width: border::WIDTH_SM,
                    color: colors.surface_raised,
                },
                ..Default::default()
            }
        });

    Container::new(menu)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding([0.0, spacing::LG])
        .into()
}

fn nav_link<'a>(ctx: &ViewContext<'a>, section: SiteSection) -> Element<'a, Message> {
    let active = ctx.chrome.active_section() == Some(section);
    button(Text::new(ctx.i18n.tr(section.i18n_key())).size(typography::BODY_LG))
        .on_press(Message::Navigate(section))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::nav_link(active))
        .into()
}
