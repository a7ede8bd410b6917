// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component updates run first; the events they return are turned into
//! notifications, scheduled messages and scroll operations here.

use super::{Message, PAGE_SCROLLABLE_ID};
use crate::application::chrome::{SectionBounds, SiteChrome, SiteSection};
use crate::application::contact::{messaging_link, ContactForm, ContactSubmission};
use crate::application::estimator::Estimate;
use crate::application::lightbox::{LightboxEvent, LightboxKey};
use crate::application::port::LinkOpener;
use crate::application::portfolio::{Portfolio, PortfolioEvent};
use crate::config::{
    Config, CONTACT_SUBMIT_DELAY_MS, HANDOFF_DELAY_MS, LOADING_REMOVE_DELAY_MS,
};
use crate::domain::budget::BudgetForm;
use crate::domain::contact::ContactField;
use crate::i18n::I18n;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::state::Scheduler;
use crate::ui::{contact, estimator, navbar};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub portfolio: &'a mut Portfolio,
    pub budget_form: &'a mut BudgetForm,
    pub estimate: &'a mut Option<Estimate>,
    pub contact: &'a mut ContactForm,
    pub contact_editing: &'a mut Option<ContactField>,
    pub chrome: &'a mut SiteChrome,
    pub sections: &'a [SectionBounds],
    pub scroll_extent: &'a mut f32,
    pub window_width: &'a mut f32,
    pub scheduler: &'a mut Scheduler<Message>,
    pub notifications: &'a mut Manager,
    pub link_opener: &'a dyn LinkOpener,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.chrome) {
        navbar::Event::None => Task::none(),
        navbar::Event::Navigate(section) => navigate_to(ctx, section),
    }
}

/// Scrolls so the section starts right under the navbar.
pub fn navigate_to(ctx: &mut UpdateContext<'_>, section: SiteSection) -> Task<Message> {
    let Some(bounds) = ctx
        .sections
        .iter()
        .find(|bounds| bounds.section == section)
        .copied()
    else {
        return Task::none();
    };
    let target = ctx.chrome.select_section(bounds);
    debug!(?section, target, "navigating to section");
    scroll_to_offset(ctx, target)
}

/// Snaps the page scrollable to an absolute offset.
///
/// The offset is converted to a relative one using the last known scroll
/// extent, so it stays correct after the window is resized.
pub fn scroll_to_offset(ctx: &UpdateContext<'_>, y: f32) -> Task<Message> {
    let relative = if *ctx.scroll_extent > 0.0 {
        (y / *ctx.scroll_extent).clamp(0.0, 1.0)
    } else {
        0.0
    };
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y: relative },
    )
}

pub fn handle_scrolled(
    ctx: &mut UpdateContext<'_>,
    offset_y: f32,
    viewport_height: f32,
    content_height: f32,
) -> Task<Message> {
    *ctx.scroll_extent = (content_height - viewport_height).max(0.0);
    ctx.chrome.on_scroll(offset_y, ctx.sections);
    Task::none()
}

/// Keyboard input only matters while the lightbox is open.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: LightboxKey) -> Task<Message> {
    if ctx.portfolio.lightbox_view().is_some() {
        handle_portfolio_event(ctx, PortfolioEvent::Lightbox(LightboxEvent::Key(key)))
    } else {
        Task::none()
    }
}

/// Runs a portfolio event and schedules the card transitions it planned.
pub fn handle_portfolio_event(ctx: &mut UpdateContext<'_>, event: PortfolioEvent) -> Task<Message> {
    for planned in ctx.portfolio.dispatch(event) {
        ctx.scheduler.after(
            planned.delay,
            Message::Portfolio(PortfolioEvent::ApplyVisibility(planned.effect)),
        );
    }
    Task::none()
}

pub fn handle_estimator_message(
    ctx: &mut UpdateContext<'_>,
    message: estimator::Message,
) -> Task<Message> {
    match estimator::update(message, ctx.budget_form, ctx.estimate) {
        estimator::Event::None => {}
        estimator::Event::Calculated(_) => {
            ctx.notifications
                .push(Notification::success("notification-budget-success"));
        }
        estimator::Event::Rejected(failure) => {
            ctx.notifications
                .push(Notification::warning(failure.i18n_key()));
        }
    }
    Task::none()
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match contact::update(message, ctx.contact, ctx.contact_editing) {
        contact::Event::None => {}
        contact::Event::Submitted(submission) => {
            info!("contact request submitted");
            ctx.scheduler.after(
                Duration::from_millis(CONTACT_SUBMIT_DELAY_MS),
                Message::SubmitFinished(submission),
            );
        }
        contact::Event::Rejected(failures) => {
            debug!(failures, "contact form has invalid fields");
        }
    }
    Task::none()
}

/// Ends a submission: reset the form, confirm it and queue the hand-off.
pub fn handle_submit_finished(
    ctx: &mut UpdateContext<'_>,
    submission: &ContactSubmission,
) -> Task<Message> {
    ctx.contact.complete();
    ctx.notifications
        .push(Notification::success("notification-contact-success"));

    let text = handoff_text(ctx.i18n, submission);
    let url = messaging_link(&ctx.config.studio.messaging_phone, &text);
    ctx.scheduler.after(
        Duration::from_millis(HANDOFF_DELAY_MS),
        Message::Handoff(url),
    );
    Task::none()
}

/// Pre-filled message for the studio, in the visitor's language.
pub fn handoff_text(i18n: &I18n, submission: &ContactSubmission) -> String {
    let not_specified = i18n.tr("contact-not-specified");
    let service = submission.service.as_deref().unwrap_or(&not_specified);
    let budget = submission.budget.as_deref().unwrap_or(&not_specified);
    i18n.tr_with_args(
        "contact-whatsapp-message",
        &[
            ("name", submission.name.as_str()),
            ("phone", submission.phone.as_str()),
            ("email", submission.email.as_str()),
            ("service", service),
            ("budget", budget),
            ("message", submission.message.as_str()),
        ],
    )
}

pub fn handle_handoff(ctx: &mut UpdateContext<'_>, url: &str) -> Task<Message> {
    if let Err(err) = ctx.link_opener.open(url) {
        warn!(%err, "messaging hand-off failed");
        ctx.notifications
            .push(Notification::error("notification-handoff-failed"));
    }
    Task::none()
}

pub fn handle_loading_fade(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.chrome.fade_loading();
    ctx.scheduler.after(
        Duration::from_millis(LOADING_REMOVE_DELAY_MS),
        Message::LoadingRemoved,
    );
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(service: Option<&str>) -> ContactSubmission {
        ContactSubmission {
            name: "Ana".to_string(),
            phone: "(11) 98765-4321".to_string(),
            email: "ana@example.com".to_string(),
            service: service.map(str::to_string),
            budget: None,
            message: "Rose on the forearm".to_string(),
        }
    }

    #[test]
    fn handoff_text_lists_every_field() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = handoff_text(&i18n, &submission(Some("Cover-up")));
        for expected in ["Ana", "(11) 98765-4321", "ana@example.com", "Cover-up", "Rose on the forearm"] {
            assert!(text.contains(expected), "{expected} missing from {text}");
        }
    }

    #[test]
    fn handoff_text_fills_missing_choices() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let text = handoff_text(&i18n, &submission(None));
        assert!(text.contains(&i18n.tr("contact-not-specified")));
    }
}
