// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business rules with no presentation dependencies.
//!
//! This module contains pure domain types, value objects, and business rules,
//! so they can be tested without a window or a clock.
//!
//! # Modules
//!
//! - [`gallery`]: Portfolio catalog and filtering ([`GalleryItem`](gallery::GalleryItem),
//!   [`FilterTag`](gallery::FilterTag), [`FilteredList`](gallery::FilteredList))
//! - [`budget`]: Budget form options, pricing tables and validation
//!   ([`BudgetSelection`](budget::BudgetSelection))
//! - [`contact`]: Contact form rules ([`ContactField`](contact::ContactField),
//!   phone formatting, e-mail shape)

pub mod budget;
pub mod contact;
pub mod gallery;
