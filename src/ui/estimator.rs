// SPDX-License-Identifier: MPL-2.0
//! Budget estimator section: five pick lists, a calculate button and the
//! result card.

use crate::application::estimator::{self, Estimate};
use crate::domain::budget::{
    BudgetField, BudgetForm, BudgetOption, BudgetOptions, BudgetSelection, ValidationFailure,
};
use crate::i18n::I18n;
use crate::ui::design_tokens::{layout, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};
use std::fmt;
use tracing::{debug, info};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub options: &'a BudgetOptions,
    pub form: &'a BudgetForm,
    pub result: Option<&'a Estimate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Selected(BudgetField, BudgetOption),
    Calculate,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Calculated(Estimate),
    Rejected(ValidationFailure),
}

/// Applies a message to the form. A rejected calculation leaves `result`
/// untouched.
pub fn update(message: Message, form: &mut BudgetForm, result: &mut Option<Estimate>) -> Event {
    match message {
        Message::Selected(field, option) => {
            debug!(?field, value = %option.value, "budget option selected");
            form.set(field, Some(option));
            Event::None
        }
        Message::Calculate => match BudgetSelection::try_from(&*form) {
            Ok(selection) => {
                let estimate = estimator::estimate(&selection);
                info!(
                    min = estimate.min_price,
                    max = estimate.max_price,
                    time = %estimate.time_estimate(),
                    "budget estimated"
                );
                *result = Some(estimate);
                Event::Calculated(estimate)
            }
            Err(failure) => {
                debug!(%failure, "budget calculation rejected");
                Event::Rejected(failure)
            }
        },
    }
}

/// Pick list entry: an option with its translated label.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Choice {
    option: BudgetOption,
    label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("budget-title"))
        .size(typography::TITLE_LG)
        .style(styles::container::accent_text);
    let subtitle = Text::new(ctx.i18n.tr("budget-subtitle"))
        .size(typography::BODY_LG)
        .style(styles::container::muted_text);

    let fields = BudgetField::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::SM), |column, field| {
            column.push(field_picker(&ctx, field))
        });

    let calculate = button(Text::new(ctx.i18n.tr("budget-calculate")).size(typography::BODY_LG))
        .on_press(Message::Calculate)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    let mut form = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(fields)
        .push(calculate);
    if let Some(estimate) = ctx.result {
        form = form.push(result_card(ctx.i18n, estimate));
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(form);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::ESTIMATE_HEIGHT))
        .style(styles::container::band)
        .into()
}

fn field_picker<'a>(ctx: &ViewContext<'a>, field: BudgetField) -> Element<'a, Message> {
    let choices: Vec<Choice> = ctx
        .options
        .group(field)
        .iter()
        .filter(|option| option.is_chosen())
        .map(|option| Choice {
            option: option.clone(),
            label: ctx.i18n.tr(&option.label_key),
        })
        .collect();

    let selected = ctx
        .form
        .get(field)
        .and_then(|current| choices.iter().find(|choice| &choice.option == current))
        .cloned();

    let picker = pick_list(choices, selected, move |choice: Choice| {
        Message::Selected(field, choice.option)
    })
    .placeholder(ctx.i18n.tr("budget-placeholder"))
    .padding(spacing::XS)
    .width(Length::Fill);

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr(field.i18n_key())).size(typography::BODY))
        .push(picker)
        .into()
}

fn result_card<'a>(i18n: &I18n, estimate: &Estimate) -> Element<'a, Message> {
    let separator = i18n.tr("number-group-separator");
    let price = |amount: u64| {
        let amount = group_thousands(amount, &separator);
        i18n.tr_with_args("budget-price", &[("amount", amount.as_str())])
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hourly = estimate.hourly_rate.round().max(0.0) as u64;

    let line = |label_key: &str, value: String| {
        Row::new()
            .spacing(spacing::SM)
            .push(
                Text::new(i18n.tr(label_key))
                    .width(Length::Fill)
                    .style(styles::container::muted_text),
            )
            .push(Text::new(value).size(typography::BODY_LG))
    };

    let time = estimate.time_estimate();
    let body = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(i18n.tr("budget-result-title"))
                .size(typography::TITLE_SM)
                .style(styles::container::accent_text),
        )
        .push(line("budget-result-min", price(estimate.min_price)))
        .push(line("budget-result-max", price(estimate.max_price)))
        .push(line(
            "budget-result-time-label",
            i18n.tr_with_args("budget-result-time", &[("range", time.as_str())]),
        ))
        .push(line("budget-result-hourly", price(hourly)))
        .push(
            Text::new(i18n.tr("budget-result-disclaimer"))
                .size(typography::CAPTION)
                .style(styles::container::muted_text),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

/// Formats an amount with a separator every three digits.
#[must_use]
pub fn group_thousands(amount: u64, separator: &str) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog;

    fn filled_form(options: &BudgetOptions) -> BudgetForm {
        let mut form = BudgetForm::new();
        for (field, value) in [
            (BudgetField::Style, "traditional"),
            (BudgetField::Size, "medium"),
            (BudgetField::Complexity, "medium"),
            (BudgetField::BodyArea, "arm"),
            (BudgetField::Colors, "black"),
        ] {
            form.set(field, options.find(field, value).cloned());
        }
        form
    }

    #[test]
    fn calculate_on_complete_form_stores_result() {
        let site = catalog::load_bundled().expect("bundled catalog");
        let mut form = filled_form(&site.budget_options);
        let mut result = None;

        let event = update(Message::Calculate, &mut form, &mut result);
        let Event::Calculated(estimate) = event else {
            panic!("expected an estimate, got {event:?}");
        };
        assert_eq!(result, Some(estimate));
        assert_eq!(estimate.min_price, 480);
        assert_eq!(estimate.max_price, 960);
    }

    #[test]
    fn incomplete_form_keeps_previous_result() {
        let site = catalog::load_bundled().expect("bundled catalog");
        let mut form = filled_form(&site.budget_options);
        let mut result = None;
        update(Message::Calculate, &mut form, &mut result);
        let previous = result;

        form.set(BudgetField::Colors, None);
        let event = update(Message::Calculate, &mut form, &mut result);
        assert!(matches!(
            event,
            Event::Rejected(ValidationFailure::IncompleteBudget { ref missing })
                if missing == &vec![BudgetField::Colors]
        ));
        assert_eq!(result, previous);
    }

    #[test]
    fn selection_updates_form() {
        let mut form = BudgetForm::new();
        let mut result = None;
        let option = BudgetOption::new("large", "budget-size-large");
        update(
            Message::Selected(BudgetField::Size, option.clone()),
            &mut form,
            &mut result,
        );
        assert_eq!(form.get(BudgetField::Size), Some(&option));
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0, "."), "0");
        assert_eq!(group_thousands(960, "."), "960");
        assert_eq!(group_thousands(1_920, "."), "1.920");
        assert_eq!(group_thousands(1_234_567, ","), "1,234,567");
    }

    #[test]
    fn estimator_view_renders_with_result() {
        let i18n = I18n::default();
        let site = catalog::load_bundled().expect("bundled catalog");
        let mut form = filled_form(&site.budget_options);
        let mut result = None;
        update(Message::Calculate, &mut form, &mut result);
        let _element = view(ViewContext {
            i18n: &i18n,
            options: &site.budget_options,
            form: &form,
            result: result.as_ref(),
        });
    }
}
