// SPDX-License-Identifier: MPL-2.0
//! Contact section: the request form with inline validation.
//!
//! Text inputs have no focus-lost event, so a field is treated as left when
//! the visitor starts typing in another one or presses Enter in it.

use crate::application::contact::{ContactForm, ContactSubmission};
use crate::domain::contact::ContactField;
use crate::i18n::I18n;
use crate::ui::design_tokens::{layout, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, text_input, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Translation keys of the service choices.
pub const SERVICE_KEYS: [&str; 4] = [
    "contact-service-new",
    "contact-service-cover-up",
    "contact-service-touch-up",
    "contact-service-consultation",
];

/// Translation keys of the budget ranges.
pub const BUDGET_KEYS: [&str; 4] = [
    "contact-budget-up-to-500",
    "contact-budget-500-1000",
    "contact-budget-1000-2000",
    "contact-budget-over-2000",
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a ContactForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Edited(ContactField, String),
    /// Enter pressed in a field.
    Left(ContactField),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The form is valid and now submitting.
    Submitted(ContactSubmission),
    /// Number of fields that failed validation.
    Rejected(usize),
}

/// Applies a message. `editing` tracks the field last typed in.
pub fn update(
    message: Message,
    form: &mut ContactForm,
    editing: &mut Option<ContactField>,
) -> Event {
    match message {
        Message::Edited(field, value) => {
            if let Some(previous) = editing.replace(field) {
                if previous != field {
                    form.blur(previous);
                }
            }
            form.edit(field, &value);
            Event::None
        }
        Message::Left(field) => {
            *editing = None;
            form.blur(field);
            Event::None
        }
        Message::Submit => {
            *editing = None;
            match form.submit() {
                Ok(submission) => Event::Submitted(submission),
                // Already submitting.
                Err(failures) if failures.is_empty() => Event::None,
                Err(failures) => Event::Rejected(failures.len()),
            }
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("contact-title"))
        .size(typography::TITLE_LG)
        .style(styles::container::accent_text);
    let subtitle = Text::new(ctx.i18n.tr("contact-subtitle"))
        .size(typography::BODY_LG)
        .style(styles::container::muted_text);

    let fields = ContactField::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::SM), |column, field| {
            column.push(field_row(&ctx, field))
        });

    let submitting = ctx.form.is_submitting();
    let label = if submitting {
        ctx.i18n.tr("contact-sending")
    } else {
        ctx.i18n.tr("contact-submit")
    };
    let mut submit = button(Text::new(label).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);
    if !submitting {
        submit = submit.on_press(Message::Submit);
    }

    let form = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(fields)
        .push(submit);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(form);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::CONTACT_HEIGHT))
        .style(styles::container::page)
        .into()
}

fn field_row<'a>(ctx: &ViewContext<'a>, field: ContactField) -> Element<'a, Message> {
    let mut label = ctx.i18n.tr(field.i18n_key());
    if field.is_required() {
        label.push_str(" *");
    }

    let value = ctx.form.value(field);
    let input: Element<'a, Message> = match field {
        ContactField::Service => choice_picker(ctx, field, &SERVICE_KEYS, value),
        ContactField::Budget => choice_picker(ctx, field, &BUDGET_KEYS, value),
        _ => text_input(&ctx.i18n.tr(placeholder_key(field)), value)
            .on_input(move |text| Message::Edited(field, text))
            .on_submit(Message::Left(field))
            .padding(spacing::XS)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .into(),
    };

    let mut row = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY))
        .push(input);
    if let Some(error) = ctx.form.error(field) {
        row = row.push(
            Text::new(ctx.i18n.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .style(styles::container::field_error),
        );
    }
    row.into()
}

/// Drop-down for the optional fields. The chosen label itself is stored as
/// the field value so it reads naturally in the hand-off message.
fn choice_picker<'a>(
    ctx: &ViewContext<'a>,
    field: ContactField,
    keys: &[&str],
    value: &str,
) -> Element<'a, Message> {
    let labels: Vec<String> = keys.iter().map(|key| ctx.i18n.tr(key)).collect();
    let selected = labels.iter().find(|label| label.as_str() == value).cloned();

    pick_list(labels, selected, move |label: String| {
        Message::Edited(field, label)
    })
    .placeholder(ctx.i18n.tr("contact-select-placeholder"))
    .padding(spacing::XS)
    .width(Length::Fill)
    .into()
}

fn placeholder_key(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "contact-placeholder-name",
        ContactField::Phone => "contact-placeholder-phone",
        ContactField::Email => "contact-placeholder-email",
        ContactField::Service | ContactField::Budget => "contact-select-placeholder",
        ContactField::Message => "contact-placeholder-message",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::FieldError;

    fn fill(form: &mut ContactForm, editing: &mut Option<ContactField>) {
        for (field, value) in [
            (ContactField::Name, "Ana"),
            (ContactField::Phone, "11987654321"),
            (ContactField::Email, "ana@example.com"),
            (ContactField::Message, "Rose on the forearm"),
        ] {
            update(Message::Edited(field, value.to_string()), form, editing);
        }
    }

    #[test]
    fn moving_to_another_field_validates_the_previous_one() {
        let mut form = ContactForm::new();
        let mut editing = None;
        update(
            Message::Edited(ContactField::Email, "not-an-email".to_string()),
            &mut form,
            &mut editing,
        );
        assert_eq!(form.error(ContactField::Email), None);

        update(
            Message::Edited(ContactField::Name, "A".to_string()),
            &mut form,
            &mut editing,
        );
        assert_eq!(form.error(ContactField::Email), Some(FieldError::InvalidEmail));
        assert_eq!(editing, Some(ContactField::Name));
    }

    #[test]
    fn enter_validates_the_field() {
        let mut form = ContactForm::new();
        let mut editing = None;
        update(Message::Left(ContactField::Name), &mut form, &mut editing);
        assert_eq!(form.error(ContactField::Name), Some(FieldError::Required));
    }

    #[test]
    fn phone_is_formatted_while_typing() {
        let mut form = ContactForm::new();
        let mut editing = None;
        update(
            Message::Edited(ContactField::Phone, "11987654321".to_string()),
            &mut form,
            &mut editing,
        );
        assert_eq!(form.value(ContactField::Phone), "(11) 98765-4321");
    }

    #[test]
    fn submit_reports_failures_then_success() {
        let mut form = ContactForm::new();
        let mut editing = None;
        assert_eq!(
            update(Message::Submit, &mut form, &mut editing),
            Event::Rejected(4)
        );

        fill(&mut form, &mut editing);
        let event = update(Message::Submit, &mut form, &mut editing);
        let Event::Submitted(submission) = event else {
            panic!("expected a submission, got {event:?}");
        };
        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.service, None);
        assert!(form.is_submitting());

        // A second click while submitting does nothing.
        assert_eq!(update(Message::Submit, &mut form, &mut editing), Event::None);
    }

    #[test]
    fn contact_view_renders_with_errors() {
        let i18n = I18n::default();
        let mut form = ContactForm::new();
        let mut editing = None;
        update(Message::Submit, &mut form, &mut editing);
        let _element = view(ViewContext {
            i18n: &i18n,
            form: &form,
        });
    }
}
