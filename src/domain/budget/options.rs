// SPDX-License-Identifier: MPL-2.0
//! Budget form options and their multiplier metadata.

use std::fmt;

/// One of the five inputs of the budget estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetField {
    Style,
    Size,
    Complexity,
    BodyArea,
    Colors,
}

impl BudgetField {
    /// Every field, in form order.
    pub const ALL: [BudgetField; 5] = [
        BudgetField::Style,
        BudgetField::Size,
        BudgetField::Complexity,
        BudgetField::BodyArea,
        BudgetField::Colors,
    ];

    /// Name of the option group in the catalog data file.
    #[must_use]
    pub fn group_name(self) -> &'static str {
        match self {
            BudgetField::Style => "style",
            BudgetField::Size => "size",
            BudgetField::Complexity => "complexity",
            BudgetField::BodyArea => "body_area",
            BudgetField::Colors => "colors",
        }
    }

    /// Returns the i18n key of the field label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            BudgetField::Style => "budget-field-style",
            BudgetField::Size => "budget-field-size",
            BudgetField::Complexity => "budget-field-complexity",
            BudgetField::BodyArea => "budget-field-body-area",
            BudgetField::Colors => "budget-field-colors",
        }
    }
}

/// A selectable option of the budget form.
///
/// The multiplier is kept as the raw metadata string supplied by the form
/// surface; [`BudgetOption::multiplier`] interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOption {
    /// Machine value (e.g. `traditional`, `medium`). Empty means "nothing chosen".
    pub value: String,
    /// i18n key of the option label.
    pub label_key: String,
    /// Raw multiplier metadata, if any.
    pub multiplier: Option<String>,
}

impl BudgetOption {
    pub fn new(value: impl Into<String>, label_key: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label_key: label_key.into(),
            multiplier: None,
        }
    }

    #[must_use]
    pub fn with_multiplier(mut self, raw: impl Into<String>) -> Self {
        self.multiplier = Some(raw.into());
        self
    }

    /// Returns `true` if this option carries an actual choice.
    #[must_use]
    pub fn is_chosen(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Numeric multiplier, `1.0` when absent or unusable.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        parse_multiplier(self.multiplier.as_deref())
    }
}

impl fmt::Display for BudgetOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Interprets multiplier metadata the way a lenient form would.
///
/// The longest leading numeric prefix is used (`"1.2x"` → 1.2). Missing,
/// unparseable, zero or non-finite values all fall back to `1.0`.
#[must_use]
pub fn parse_multiplier(raw: Option<&str>) -> f64 {
    raw.and_then(leading_float)
        .filter(|value| value.is_finite() && *value != 0.0)
        .unwrap_or(1.0)
}

fn leading_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let prefix_len = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;

    // Shrink until the prefix parses ("1.5e" -> "1.5").
    (1..=prefix_len)
        .rev()
        .find_map(|len| trimmed[..len].parse::<f64>().ok())
}

/// The option lists offered by the budget form, one group per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetOptions {
    pub style: Vec<BudgetOption>,
    pub size: Vec<BudgetOption>,
    pub complexity: Vec<BudgetOption>,
    pub body_area: Vec<BudgetOption>,
    pub colors: Vec<BudgetOption>,
}

impl BudgetOptions {
    #[must_use]
    pub fn group(&self, field: BudgetField) -> &[BudgetOption] {
        match field {
            BudgetField::Style => &self.style,
            BudgetField::Size => &self.size,
            BudgetField::Complexity => &self.complexity,
            BudgetField::BodyArea => &self.body_area,
            BudgetField::Colors => &self.colors,
        }
    }

    /// Finds an option of `field` by its value.
    #[must_use]
    pub fn find(&self, field: BudgetField, value: &str) -> Option<&BudgetOption> {
        self.group(field).iter().find(|option| option.value == value)
    }

    /// First field whose option list is empty, if any.
    #[must_use]
    pub fn first_empty_group(&self) -> Option<BudgetField> {
        BudgetField::ALL
            .into_iter()
            .find(|field| self.group(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_defaults_to_one_when_missing() {
        assert_eq!(parse_multiplier(None), 1.0);
        assert_eq!(BudgetOption::new("x", "k").multiplier(), 1.0);
    }

    #[test]
    fn multiplier_parses_plain_numbers() {
        assert_eq!(parse_multiplier(Some("1.2")), 1.2);
        assert_eq!(parse_multiplier(Some(" 0.8")), 0.8);
    }

    #[test]
    fn multiplier_uses_leading_numeric_prefix() {
        assert_eq!(parse_multiplier(Some("1.5x")), 1.5);
        assert_eq!(parse_multiplier(Some("2e")), 2.0);
    }

    #[test]
    fn multiplier_rejects_garbage_zero_and_infinite() {
        assert_eq!(parse_multiplier(Some("abc")), 1.0);
        assert_eq!(parse_multiplier(Some("")), 1.0);
        assert_eq!(parse_multiplier(Some("0")), 1.0);
        assert_eq!(parse_multiplier(Some("1e400")), 1.0);
    }

    #[test]
    fn blank_value_is_not_a_choice() {
        assert!(!BudgetOption::new("  ", "k").is_chosen());
        assert!(BudgetOption::new("small", "k").is_chosen());
    }

    #[test]
    fn first_empty_group_reports_missing_lists() {
        let mut options = BudgetOptions {
            style: vec![BudgetOption::new("traditional", "k")],
            size: vec![BudgetOption::new("small", "k")],
            complexity: vec![BudgetOption::new("simple", "k")],
            body_area: vec![BudgetOption::new("arm", "k")],
            colors: vec![],
        };
        assert_eq!(options.first_empty_group(), Some(BudgetField::Colors));
        options.colors.push(BudgetOption::new("black", "k"));
        assert_eq!(options.first_empty_group(), None);
        assert!(options.find(BudgetField::Size, "small").is_some());
    }
}
