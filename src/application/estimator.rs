// SPDX-License-Identifier: MPL-2.0
//! Budget estimation use case.
//!
//! The estimate is a pure function of a complete [`BudgetSelection`]: the
//! style picks a base hourly price, the size picks a session length, and the
//! multipliers of style, complexity, body area and colors scale the rate.

use crate::domain::budget::{base_price, time_range, BudgetSelection, TimeRange};

/// Result of a budget estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub min_price: u64,
    pub max_price: u64,
    /// Base price scaled by every multiplier.
    pub hourly_rate: f64,
    pub time_range: TimeRange,
}

impl Estimate {
    /// Session length as shown to the visitor, e.g. `2-4h`.
    #[must_use]
    pub fn time_estimate(&self) -> String {
        self.time_range.to_string()
    }
}

/// Computes the price range and session length of a selection.
#[must_use]
pub fn estimate(selection: &BudgetSelection) -> Estimate {
    let base = base_price(&selection.style.value);
    let time_range = time_range(&selection.size.value);

    let total_multiplier = selection.style.multiplier()
        * selection.complexity.multiplier()
        * selection.body_area.multiplier()
        * selection.colors.multiplier();
    let hourly_rate = base * total_multiplier;

    Estimate {
        min_price: to_price(hourly_rate * f64::from(time_range.min)),
        max_price: to_price(hourly_rate * f64::from(time_range.max)),
        hourly_rate,
        time_range,
    }
}

/// Rounds half away from zero. Negative or non-finite inputs give 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_price(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}
