// SPDX-License-Identifier: MPL-2.0
//! `inkfolio` is the desktop front of a tattoo studio built with the Iced GUI
//! framework.
//!
//! It presents a filterable portfolio with a lightbox, estimates tattoo
//! budgets, and collects contact requests that are handed off to a messaging
//! deep link. Texts are localized with Fluent.

#![doc(html_root_url = "https://docs.rs/inkfolio/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
