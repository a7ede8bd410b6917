// SPDX-License-Identifier: MPL-2.0
//! Budget estimation domain types.
//!
//! - [`options`]: form fields, options and multiplier metadata
//! - [`tables`]: fixed base-price and session-length tables
//! - [`selection`]: form state and the validated [`BudgetSelection`]

pub mod options;
pub mod selection;
pub mod tables;

pub use options::{parse_multiplier, BudgetField, BudgetOption, BudgetOptions};
pub use selection::{BudgetForm, BudgetSelection, ValidationFailure};
pub use tables::{base_price, time_range, TimeRange};
