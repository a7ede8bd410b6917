// SPDX-License-Identifier: MPL-2.0
//! Fixed pricing tables of the budget estimator.
//!
//! Unknown keys are not errors: they resolve to the documented defaults.

use std::fmt;

/// Base hourly price used when the style is not in the table.
pub const DEFAULT_BASE_PRICE: f64 = 200.0;

/// Session length used when the size is not in the table.
pub const DEFAULT_TIME_RANGE: TimeRange = TimeRange { min: 1, max: 2 };

const BASE_PRICES: [(&str, f64); 6] = [
    ("traditional", 200.0),
    ("realistic", 400.0),
    ("minimal", 150.0),
    ("geometric", 250.0),
    ("watercolor", 300.0),
    ("lettering", 180.0),
];

const TIME_RANGES: [(&str, TimeRange); 4] = [
    ("small", TimeRange { min: 1, max: 2 }),
    ("medium", TimeRange { min: 2, max: 4 }),
    ("large", TimeRange { min: 4, max: 6 }),
    ("xlarge", TimeRange { min: 6, max: 8 }),
];

/// Estimated session length in whole hours (both bounds inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub min: u32,
    pub max: u32,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}h", self.min, self.max)
    }
}

/// Base hourly price for a style key.
#[must_use]
pub fn base_price(style: &str) -> f64 {
    BASE_PRICES
        .iter()
        .find(|(key, _)| *key == style)
        .map_or(DEFAULT_BASE_PRICE, |(_, price)| *price)
}

/// Session length for a size key.
#[must_use]
pub fn time_range(size: &str) -> TimeRange {
    TIME_RANGES
        .iter()
        .find(|(key, _)| *key == size)
        .map_or(DEFAULT_TIME_RANGE, |(_, range)| *range)
}

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    let mut i = 0;
    while i < TIME_RANGES.len() {
        assert!(TIME_RANGES[i].1.min > 0);
        assert!(TIME_RANGES[i].1.min <= TIME_RANGES[i].1.max);
        i += 1;
    }
    assert!(DEFAULT_BASE_PRICE > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_styles_have_table_prices() {
        assert_eq!(base_price("traditional"), 200.0);
        assert_eq!(base_price("realistic"), 400.0);
        assert_eq!(base_price("minimal"), 150.0);
        assert_eq!(base_price("geometric"), 250.0);
        assert_eq!(base_price("watercolor"), 300.0);
        assert_eq!(base_price("lettering"), 180.0);
    }

    #[test]
    fn unknown_style_falls_back_to_default() {
        assert_eq!(base_price("neo-trad"), DEFAULT_BASE_PRICE);
        assert_eq!(base_price(""), DEFAULT_BASE_PRICE);
    }

    #[test]
    fn size_buckets_map_to_ranges() {
        assert_eq!(time_range("small"), TimeRange { min: 1, max: 2 });
        assert_eq!(time_range("medium"), TimeRange { min: 2, max: 4 });
        assert_eq!(time_range("large"), TimeRange { min: 4, max: 6 });
        assert_eq!(time_range("xlarge"), TimeRange { min: 6, max: 8 });
        assert_eq!(time_range("huge"), DEFAULT_TIME_RANGE);
    }

    #[test]
    fn time_range_display() {
        assert_eq!(TimeRange { min: 2, max: 4 }.to_string(), "2-4h");
    }
}
