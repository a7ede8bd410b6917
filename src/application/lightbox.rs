// SPDX-License-Identifier: MPL-2.0
//! Lightbox viewer state machine.
//!
//! The lightbox shows one item of the filtered list at a time and walks the
//! list with wrap-around. It never owns the list: every transition receives
//! the current [`FilteredList`] so the index can be kept in bounds.
//!
//! ```text
//!            open(image)                 navigate(dir)
//!   CLOSED ──────────────▶ OPEN{index} ◀──────────────┐
//!     ▲                        │  │                    │
//!     └──── close() / empty ───┘  └────────────────────┘
//! ```

use crate::domain::gallery::{FilteredList, ImageRef};
use tracing::debug;

/// Direction of a lightbox step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Inputs of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent {
    /// Show the item displaying this image (re-targets when already open).
    Open(ImageRef),
    Close,
    Navigate(Direction),
    Key(LightboxKey),
}

/// Viewer state. `index` points into the filtered list, never the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

/// Everything the display surface needs to draw the open lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView<'a> {
    pub image: &'a ImageRef,
    pub alt_text: &'a str,
    pub title: &'a str,
    pub category: &'a str,
    /// Previous/next affordances are pointless with a single item.
    pub show_nav_controls: bool,
    /// Zero-based position within the filtered list.
    pub position: usize,
    pub total: usize,
}

/// The lightbox viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    state: LightboxState,
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Current index into the filtered list, `None` when closed.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { index } => Some(index),
            LightboxState::Closed => None,
        }
    }

    /// Applies one event and returns the resulting state.
    pub fn dispatch(&mut self, event: LightboxEvent, list: &FilteredList) -> LightboxState {
        match event {
            LightboxEvent::Open(image) => self.open(&image, list),
            LightboxEvent::Close => self.close(),
            LightboxEvent::Navigate(direction) => self.navigate(direction, list),
            LightboxEvent::Key(key) => self.handle_key(key, list),
        }
        self.state
    }

    /// Opens on the item showing `image`.
    ///
    /// An image that is not in the list opens the first item instead; this
    /// lenient fallback is intentional. With an empty list there is nothing
    /// to show and the viewer stays closed.
    pub fn open(&mut self, image: &ImageRef, list: &FilteredList) {
        if list.is_empty() {
            debug!(%image, "lightbox open ignored: filtered list is empty");
            return;
        }
        let index = list.position_of(image).unwrap_or(0);
        debug!(%image, index, "lightbox opened");
        self.state = LightboxState::Open { index };
    }

    /// Closes the viewer. Closing a closed viewer does nothing.
    pub fn close(&mut self) {
        if self.is_open() {
            debug!("lightbox closed");
        }
        self.state = LightboxState::Closed;
    }

    /// Steps one item forward or backward, wrapping at both ends.
    ///
    /// No-op while closed or when the list is empty.
    pub fn navigate(&mut self, direction: Direction, list: &FilteredList) {
        let LightboxState::Open { index } = self.state else {
            return;
        };
        let len = list.len();
        if len == 0 {
            return;
        }

        let index = match direction {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        };
        self.state = LightboxState::Open { index };
    }

    /// Keyboard contract: Escape closes, arrows navigate. Ignored while closed.
    pub fn handle_key(&mut self, key: LightboxKey, list: &FilteredList) {
        if !self.is_open() {
            return;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.navigate(Direction::Previous, list),
            LightboxKey::ArrowRight => self.navigate(Direction::Next, list),
        }
    }

    /// Re-resolves the index after the filtered list was recomputed.
    ///
    /// `previous` is the image that was on screen before the change. The same
    /// image is kept when it survived the filter; otherwise the first item is
    /// shown, and an empty list closes the viewer.
    pub fn on_list_changed(&mut self, previous: Option<&ImageRef>, list: &FilteredList) {
        if !self.is_open() {
            return;
        }
        if list.is_empty() {
            debug!("lightbox closed: filter left no items");
            self.state = LightboxState::Closed;
            return;
        }
        let index = previous.and_then(|image| list.position_of(image)).unwrap_or(0);
        self.state = LightboxState::Open { index };
    }

    /// Image currently shown, if open.
    #[must_use]
    pub fn current_image<'a>(&self, list: &'a FilteredList) -> Option<&'a ImageRef> {
        self.current_index()
            .and_then(|index| list.get(index))
            .map(|item| &item.image)
    }

    /// Content to draw, `None` when closed.
    #[must_use]
    pub fn render<'a>(&self, list: &'a FilteredList) -> Option<LightboxView<'a>> {
        let index = self.current_index()?;
        let item = list.get(index)?;
        Some(LightboxView {
            image: &item.image,
            alt_text: &item.alt_text,
            title: item.display_title(),
            category: item.display_category(),
            show_nav_controls: list.len() > 1,
            position: index,
            total: list.len(),
        })
    }
}
