// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the site sections.
//!
//! The `App` struct wires together the portfolio controller, the budget and
//! contact forms, the navigation chrome and the toast presenter, and turns
//! messages into side effects: scroll operations, deferred messages on the
//! scheduler and the messaging hand-off.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::chrome::{SectionBounds, SiteChrome};
use crate::application::contact::ContactForm;
use crate::application::estimator::Estimate;
use crate::application::port::LinkOpener;
use crate::application::portfolio::Portfolio;
use crate::config::{self, Config, LOADING_FADE_DELAY_MS};
use crate::domain::budget::BudgetForm;
use crate::domain::contact::ContactField;
use crate::i18n::I18n;
use crate::infrastructure::{catalog, SiteData, SystemLinkOpener};
use crate::ui::design_tokens::layout;
use crate::ui::notifications;
use crate::ui::sections;
use crate::ui::state::Scheduler;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;
use tracing::error;

/// Id of the scrollable holding the whole page.
pub const PAGE_SCROLLABLE_ID: &str = "page";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    site: SiteData,
    portfolio: Portfolio,
    budget_form: BudgetForm,
    /// Last successful estimate; kept when a later calculation is rejected.
    estimate: Option<Estimate>,
    contact: ContactForm,
    /// Field last typed in, validated when the visitor moves on.
    contact_editing: Option<ContactField>,
    chrome: SiteChrome,
    sections: Vec<SectionBounds>,
    /// Scrollable distance of the page (content minus viewport height).
    scroll_extent: f32,
    window_width: f32,
    scheduler: Scheduler<Message>,
    /// Toast notification manager for visitor feedback.
    notifications: notifications::Manager,
    link_opener: Box<dyn LinkOpener>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("filter", self.portfolio.filter())
            .field("lightbox", &self.portfolio.lightbox_state())
            .field("pending_timers", &self.scheduler.len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, translations and site data, then schedules the
    /// loading splash to fade.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog_path = flags
            .catalog
            .clone()
            .or_else(|| config.studio.catalog_path.clone());
        let (site, catalog_warning) = match catalog::load(catalog_path.as_deref()) {
            Ok(loaded) => loaded,
            Err(err) => {
                error!(%err, "bundled catalog unusable, starting with an empty portfolio");
                (SiteData::default(), Some("error-catalog-unreadable"))
            }
        };

        let mut app = Self::from_parts(config, i18n, site, Box::new(SystemLinkOpener));

        // Show warnings for config/catalog loading issues
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = catalog_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Assembles the application from already loaded parts.
    fn from_parts(
        config: Config,
        i18n: I18n,
        site: SiteData,
        link_opener: Box<dyn LinkOpener>,
    ) -> Self {
        let sections = sections::page_layout();
        let page_height: f32 = sections.iter().map(|bounds| bounds.height).sum();
        let mut scheduler = Scheduler::new();
        scheduler.after(
            Duration::from_millis(LOADING_FADE_DELAY_MS),
            Message::LoadingFade,
        );

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::new(config.notifications.auto_dismiss()),
            portfolio: Portfolio::new(site.catalog.clone()),
            site,
            config,
            budget_form: BudgetForm::new(),
            estimate: None,
            contact: ContactForm::new(),
            contact_editing: None,
            chrome: SiteChrome::new(),
            sections,
            scroll_extent: (page_height - WINDOW_DEFAULT_HEIGHT as f32).max(0.0),
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            scheduler,
            link_opener,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            !self.scheduler.is_empty() || self.notifications.has_pending_timers(),
        );
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Tick(now) = message {
            self.notifications.tick(now);
            let due = self.scheduler.drain_due(now);
            return Task::batch(due.into_iter().map(|message| self.update(message)));
        }

        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            portfolio: &mut self.portfolio,
            budget_form: &mut self.budget_form,
            estimate: &mut self.estimate,
            contact: &mut self.contact,
            contact_editing: &mut self.contact_editing,
            chrome: &mut self.chrome,
            sections: &self.sections,
            scroll_extent: &mut self.scroll_extent,
            window_width: &mut self.window_width,
            scheduler: &mut self.scheduler,
            notifications: &mut self.notifications,
            link_opener: self.link_opener.as_ref(),
        };

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Navigate(section) => update::navigate_to(&mut ctx, section),
            Message::Portfolio(event) => update::handle_portfolio_event(&mut ctx, event),
            Message::Estimator(estimator_message) => {
                update::handle_estimator_message(&mut ctx, estimator_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::Scrolled {
                offset_y,
                viewport_height,
                content_height,
            } => update::handle_scrolled(&mut ctx, offset_y, viewport_height, content_height),
            Message::WindowResized(size) => {
                *ctx.window_width = size.width;
                Task::none()
            }
            Message::Key(key) => update::handle_key(&mut ctx, key),
            Message::BackToTop => update::scroll_to_offset(&ctx, 0.0),
            Message::SubmitFinished(submission) => {
                update::handle_submit_finished(&mut ctx, &submission)
            }
            Message::Handoff(url) => update::handle_handoff(&mut ctx, &url),
            Message::LoadingFade => update::handle_loading_fade(&mut ctx),
            Message::LoadingRemoved => {
                ctx.chrome.remove_loading();
                Task::none()
            }
            Message::Tick(_) => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            site: &self.site,
            portfolio: &self.portfolio,
            budget_form: &self.budget_form,
            estimate: self.estimate.as_ref(),
            contact: &self.contact,
            chrome: &self.chrome,
            notifications: &self.notifications,
            compact: self.window_width < layout::COMPACT_WIDTH,
        })
    }
}
