// SPDX-License-Identifier: MPL-2.0
//! Navigation chrome: mobile menu, scroll-dependent navbar state, active
//! section highlighting and the loading splash.

use crate::config::{
    ACTIVE_SECTION_PROBE_OFFSET, BACK_TO_TOP_THRESHOLD, NAVBAR_SCROLLED_THRESHOLD,
    SCROLL_TARGET_OFFSET,
};
use tracing::debug;

/// Page sections reachable from the navbar, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteSection {
    Home,
    About,
    Portfolio,
    Services,
    Estimate,
    Contact,
}

impl SiteSection {
    pub const ALL: [SiteSection; 6] = [
        SiteSection::Home,
        SiteSection::About,
        SiteSection::Portfolio,
        SiteSection::Services,
        SiteSection::Estimate,
        SiteSection::Contact,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SiteSection::Home => "nav-home",
            SiteSection::About => "nav-about",
            SiteSection::Portfolio => "nav-portfolio",
            SiteSection::Services => "nav-services",
            SiteSection::Estimate => "nav-estimate",
            SiteSection::Contact => "nav-contact",
        }
    }
}

/// Vertical extent of a rendered section, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: SiteSection,
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Loading splash lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    #[default]
    Visible,
    FadingOut,
    Removed,
}

/// State of the navigation chrome.
#[derive(Debug, Clone, Default)]
pub struct SiteChrome {
    menu_open: bool,
    scroll_y: f32,
    active_section: Option<SiteSection>,
    loading: LoadingPhase,
}

impl SiteChrome {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A navbar link was clicked: close the menu and highlight the link.
    ///
    /// Returns the scroll offset to move to.
    pub fn select_section(&mut self, target: SectionBounds) -> f32 {
        self.close_menu();
        self.active_section = Some(target.section);
        scroll_target(target.top)
    }

    /// Records a new scroll offset and re-resolves the active section.
    ///
    /// Sections without a match keep the previous highlight.
    pub fn on_scroll(&mut self, scroll_y: f32, sections: &[SectionBounds]) {
        self.scroll_y = scroll_y.max(0.0);
        if let Some(section) = active_section(self.scroll_y, sections) {
            if self.active_section != Some(section) {
                debug!(?section, "active section changed");
            }
            self.active_section = Some(section);
        }
    }

    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    #[must_use]
    pub fn active_section(&self) -> Option<SiteSection> {
        self.active_section
    }

    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.scroll_y > NAVBAR_SCROLLED_THRESHOLD
    }

    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        self.scroll_y > BACK_TO_TOP_THRESHOLD
    }

    /// Vertical shift of the hero image, half the scroll offset.
    #[must_use]
    pub fn hero_parallax(&self) -> f32 {
        self.scroll_y * 0.5
    }

    #[must_use]
    pub fn loading(&self) -> LoadingPhase {
        self.loading
    }

    pub fn fade_loading(&mut self) {
        if self.loading == LoadingPhase::Visible {
            self.loading = LoadingPhase::FadingOut;
        }
    }

    pub fn remove_loading(&mut self) {
        self.loading = LoadingPhase::Removed;
    }
}

/// Section whose bounds contain the probe line below the scroll offset.
#[must_use]
pub fn active_section(scroll_y: f32, sections: &[SectionBounds]) -> Option<SiteSection> {
    let probe = scroll_y + ACTIVE_SECTION_PROBE_OFFSET;
    sections
        .iter()
        .find(|bounds| bounds.contains(probe))
        .map(|bounds| bounds.section)
}

/// Scroll offset that puts a section top just under the fixed navbar.
#[must_use]
pub fn scroll_target(section_top: f32) -> f32 {
    (section_top - SCROLL_TARGET_OFFSET).max(0.0)
}
