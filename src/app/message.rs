// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::chrome::SiteSection;
use crate::application::contact::ContactSubmission;
use crate::application::lightbox::LightboxKey;
use crate::application::portfolio::PortfolioEvent;
use crate::ui::contact;
use crate::ui::estimator;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// Call-to-action button pointing at a section.
    Navigate(SiteSection),
    Portfolio(PortfolioEvent),
    Estimator(estimator::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved.
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
    },
    WindowResized(Size),
    /// Lightbox key pressed outside any focused input.
    Key(LightboxKey),
    BackToTop,
    Tick(Instant), // Periodic tick polling the scheduler
    /// The simulated contact request finished.
    SubmitFinished(ContactSubmission),
    /// Open a messaging deep link.
    Handoff(String),
    LoadingFade,
    LoadingRemoved,
}

/// Runtime flags passed into the application from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`).
    pub lang: Option<String>,
    /// Optional data file replacing the bundled portfolio and budget options.
    pub catalog: Option<PathBuf>,
    /// Optional configuration directory override.
    pub config_dir: Option<String>,
}
