// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single scrollable column of sections. The navbar, the
//! lightbox, the back-to-top button, the toast and the loading splash are
//! layered above it.

use super::{Message, PAGE_SCROLLABLE_ID};
use crate::application::chrome::SiteChrome;
use crate::application::contact::ContactForm;
use crate::application::estimator::Estimate;
use crate::application::portfolio::{Portfolio, PortfolioEvent};
use crate::domain::budget::BudgetForm;
use crate::i18n::I18n;
use crate::infrastructure::SiteData;
use crate::ui::design_tokens::layout;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{contact, estimator, lightbox, navbar, portfolio, sections, splash};
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a SiteData,
    pub portfolio: &'a Portfolio,
    pub budget_form: &'a BudgetForm,
    pub estimate: Option<&'a Estimate>,
    pub contact: &'a ContactForm,
    pub chrome: &'a SiteChrome,
    pub notifications: &'a Manager,
    pub compact: bool,
}

/// Renders the page and its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut stack = Stack::new().push(page(&ctx)).push(
        Container::new(
            navbar::view(navbar::ViewContext {
                i18n: ctx.i18n,
                chrome: ctx.chrome,
                compact: ctx.compact,
            })
            .map(Message::Navbar),
        )
        .width(Length::Fill),
    );

    if ctx.chrome.back_to_top_visible() {
        stack = stack.push(splash::back_to_top(Message::BackToTop));
    }

    if let Some(view) = ctx.portfolio.lightbox_view() {
        stack = stack.push(
            lightbox::view(lightbox::ViewContext {
                i18n: ctx.i18n,
                view,
                site: ctx.site,
            })
            .map(|event| Message::Portfolio(PortfolioEvent::Lightbox(event))),
        );
    }

    stack = stack.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    if let Some(loading) = splash::loading(ctx.i18n, ctx.chrome.loading()) {
        stack = stack.push(loading);
    }

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = if ctx.compact {
        1
    } else {
        layout::PORTFOLIO_COLUMNS
    };

    let content = Column::new()
        .width(Length::Fill)
        .push(sections::hero(ctx.i18n, ctx.chrome.hero_parallax()).map(Message::Navigate))
        .push(sections::about(ctx.i18n))
        .push(
            portfolio::view(portfolio::ViewContext {
                i18n: ctx.i18n,
                portfolio: ctx.portfolio,
                site: ctx.site,
                columns,
            })
            .map(Message::Portfolio),
        )
        .push(sections::services(ctx.i18n))
        .push(
            estimator::view(estimator::ViewContext {
                i18n: ctx.i18n,
                options: &ctx.site.budget_options,
                form: ctx.budget_form,
                result: ctx.estimate,
            })
            .map(Message::Estimator),
        )
        .push(
            contact::view(contact::ViewContext {
                i18n: ctx.i18n,
                form: ctx.contact,
            })
            .map(Message::Contact),
        )
        .push(sections::footer(ctx.i18n));

    Scrollable::new(content)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
            content_height: viewport.content_bounds().height,
        })
        .into()
}
