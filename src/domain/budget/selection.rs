// SPDX-License-Identifier: MPL-2.0
//! Budget form state and its validated counterpart.

use super::options::{BudgetField, BudgetOption};
use thiserror::Error;

/// Raw state of the budget form: each field may still be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetForm {
    pub style: Option<BudgetOption>,
    pub size: Option<BudgetOption>,
    pub complexity: Option<BudgetOption>,
    pub body_area: Option<BudgetOption>,
    pub colors: Option<BudgetOption>,
}

impl BudgetForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: BudgetField) -> Option<&BudgetOption> {
        self.slot(field).as_ref()
    }

    pub fn set(&mut self, field: BudgetField, option: Option<BudgetOption>) {
        *self.slot_mut(field) = option;
    }

    /// Fields that are unset or hold a blank value, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<BudgetField> {
        BudgetField::ALL
            .into_iter()
            .filter(|field| !self.get(*field).is_some_and(BudgetOption::is_chosen))
            .collect()
    }

    fn slot(&self, field: BudgetField) -> &Option<BudgetOption> {
        match field {
            BudgetField::Style => &self.style,
            BudgetField::Size => &self.size,
            BudgetField::Complexity => &self.complexity,
            BudgetField::BodyArea => &self.body_area,
            BudgetField::Colors => &self.colors,
        }
    }

    fn slot_mut(&mut self, field: BudgetField) -> &mut Option<BudgetOption> {
        match field {
            BudgetField::Style => &mut self.style,
            BudgetField::Size => &mut self.size,
            BudgetField::Complexity => &mut self.complexity,
            BudgetField::BodyArea => &mut self.body_area,
            BudgetField::Colors => &mut self.colors,
        }
    }
}

/// A complete set of budget choices; the only input the estimator accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSelection {
    pub style: BudgetOption,
    pub size: BudgetOption,
    pub complexity: BudgetOption,
    pub body_area: BudgetOption,
    pub colors: BudgetOption,
}

/// A user input that cannot be processed yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// At least one budget field has no choice.
    #[error("budget form is incomplete: {missing:?}")]
    IncompleteBudget { missing: Vec<BudgetField> },
}

impl ValidationFailure {
    /// Returns the i18n message key for this failure.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationFailure::IncompleteBudget { .. } => "notification-budget-incomplete",
        }
    }
}

impl TryFrom<&BudgetForm> for BudgetSelection {
    type Error = ValidationFailure;

    fn try_from(form: &BudgetForm) -> Result<Self, Self::Error> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationFailure::IncompleteBudget { missing });
        }

        let take = |field| form.get(field).cloned().ok_or_else(|| {
            ValidationFailure::IncompleteBudget {
                missing: vec![field],
            }
        });

        Ok(Self {
            style: take(BudgetField::Style)?,
            size: take(BudgetField::Size)?,
            complexity: take(BudgetField::Complexity)?,
            body_area: take(BudgetField::BodyArea)?,
            colors: take(BudgetField::Colors)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> BudgetForm {
        BudgetForm {
            style: Some(BudgetOption::new("traditional", "k").with_multiplier("1.0")),
            size: Some(BudgetOption::new("medium", "k")),
            complexity: Some(BudgetOption::new("detailed", "k").with_multiplier("1.2")),
            body_area: Some(BudgetOption::new("arm", "k").with_multiplier("1.0")),
            colors: Some(BudgetOption::new("black", "k").with_multiplier("1.0")),
        }
    }

    #[test]
    fn complete_form_converts_to_selection() {
        let selection = BudgetSelection::try_from(&complete_form()).expect("complete form");
        assert_eq!(selection.style.value, "traditional");
        assert_eq!(selection.colors.value, "black");
    }

    #[test]
    fn each_missing_field_blocks_conversion() {
        for field in BudgetField::ALL {
            let mut form = complete_form();
            form.set(field, None);
            let err = BudgetSelection::try_from(&form).expect_err("incomplete form");
            assert_eq!(
                err,
                ValidationFailure::IncompleteBudget {
                    missing: vec![field]
                }
            );
        }
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let mut form = complete_form();
        form.set(BudgetField::Size, Some(BudgetOption::new("", "k")));
        assert_eq!(form.missing_fields(), vec![BudgetField::Size]);
    }

    #[test]
    fn empty_form_reports_all_fields_in_order() {
        let form = BudgetForm::new();
        assert_eq!(form.missing_fields(), BudgetField::ALL.to_vec());
        let err = BudgetSelection::try_from(&form).expect_err("empty form");
        assert_eq!(err.i18n_key(), "notification-budget-incomplete");
    }
}
