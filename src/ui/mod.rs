// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! section exposes a `ViewContext`, a `Message` type and, where it owns
//! behavior, an `update` function returning an `Event` for the app.
//!
//! # Sections
//!
//! - [`navbar`] - Section links and the compact-width menu
//! - [`sections`] - Hero, about, services and footer, plus the page layout
//! - [`portfolio`] - Filter bar and card grid
//! - [`lightbox`] - Full-window image viewer
//! - [`estimator`] - Budget form and result card
//! - [`contact`] - Contact form with inline validation
//! - [`splash`] - Loading splash and back-to-top button
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Deferred message scheduler
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and the studio color scheme
//! - [`notifications`] - Toast notification system for visitor feedback

pub mod contact;
pub mod design_tokens;
pub mod estimator;
pub mod lightbox;
pub mod navbar;
pub mod notifications;
pub mod portfolio;
pub mod sections;
pub mod splash;
pub mod state;
pub mod styles;
pub mod theming;
