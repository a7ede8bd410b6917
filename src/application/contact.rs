// SPDX-License-Identifier: MPL-2.0
//! Contact form state and the messaging deep link.
//!
//! The form keeps the raw field values, the inline errors and the submission
//! phase. Sending is simulated: once the presentation layer has waited out
//! the submission delay it calls [`ContactForm::complete`] and hands the
//! deep link built by [`messaging_link`] to a
//! [`LinkOpener`](crate::application::port::LinkOpener).

use crate::domain::contact::{phone, validate_field, ContactField, FieldError};
use std::collections::HashMap;
use tracing::debug;

/// Base URL of the messaging hand-off.
pub const MESSAGING_BASE_URL: &str = "https://wa.me";

/// Where the form is in its send cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    /// Submit button disabled while the simulated request runs.
    Submitting,
}

/// Values captured when a valid form is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: Option<String>,
    pub budget: Option<String>,
    pub message: String,
}

/// Contact form state.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: HashMap<ContactField, String>,
    errors: HashMap<ContactField, FieldError>,
    phase: SubmitPhase,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn error(&self, field: ContactField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Stores typed input and clears the field's error.
    ///
    /// Phone input is reformatted as it is typed.
    pub fn edit(&mut self, field: ContactField, value: &str) {
        let value = match field {
            ContactField::Phone => phone::format(value),
            _ => value.to_string(),
        };
        self.values.insert(field, value);
        self.errors.remove(&field);
    }

    /// Validates a field when it loses focus. Returns `true` if it is valid.
    pub fn blur(&mut self, field: ContactField) -> bool {
        match validate_field(field, self.value(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(error) => {
                self.errors.insert(field, error);
                false
            }
        }
    }

    /// Validates every field and enters [`SubmitPhase::Submitting`].
    ///
    /// # Errors
    ///
    /// Returns the failing fields, in form order, when any rule is broken. The
    /// inline errors are updated either way. A form that is already
    /// submitting rejects the call with an empty list.
    pub fn submit(&mut self) -> Result<ContactSubmission, Vec<(ContactField, FieldError)>> {
        if self.is_submitting() {
            return Err(Vec::new());
        }

        let mut failures = Vec::new();
        for field in ContactField::ALL {
            if !self.blur(field) {
                if let Some(error) = self.error(field) {
                    failures.push((field, error));
                }
            }
        }

        if !failures.is_empty() {
            debug!(failures = failures.len(), "contact form rejected");
            return Err(failures);
        }

        self.phase = SubmitPhase::Submitting;
        Ok(self.submission())
    }

    /// Ends a submission and clears the form.
    pub fn complete(&mut self) {
        *self = Self::default();
    }

    fn submission(&self) -> ContactSubmission {
        let optional = |field| {
            let value = self.value(field).trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        ContactSubmission {
            name: self.value(ContactField::Name).trim().to_string(),
            phone: self.value(ContactField::Phone).trim().to_string(),
            email: self.value(ContactField::Email).trim().to_string(),
            service: optional(ContactField::Service),
            budget: optional(ContactField::Budget),
            message: self.value(ContactField::Message).trim().to_string(),
        }
    }
}

/// Builds `https://wa.me/{number}?text={message}`.
#[must_use]
pub fn messaging_link(phone_number: &str, text: &str) -> String {
    let number: String = phone_number.chars().filter(char::is_ascii_digit).collect();
    format!(
        "{MESSAGING_BASE_URL}/{number}?text={}",
        percent_encode(text.trim())
    )
}

/// Percent-encodes UTF-8 text, leaving `A-Z a-z 0-9 - _ . ! ~ * ' ( )` as is.
#[must_use]
pub fn percent_encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(ContactField::Name, "Ana");
        form.edit(ContactField::Phone, "11999998888");
        form.edit(ContactField::Email, "ana@example.com");
        form.edit(ContactField::Message, "  A small rose  ");
        form
    }

    #[test]
    fn phone_is_formatted_while_typing() {
        let mut form = ContactForm::new();
        form.edit(ContactField::Phone, "11999998888");
        assert_eq!(form.value(ContactField::Phone), "(11) 99999-8888");
    }

    #[test]
    fn editing_clears_error_and_blur_sets_it() {
        let mut form = ContactForm::new();
        assert!(!form.blur(ContactField::Email));
        assert_eq!(form.error(ContactField::Email), Some(FieldError::Required));

        form.edit(ContactField::Email, "not-an-email");
        assert_eq!(form.error(ContactField::Email), None);
        assert!(!form.blur(ContactField::Email));
        assert_eq!(form.error(ContactField::Email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn submit_reports_every_failing_field_in_order() {
        let mut form = ContactForm::new();
        form.edit(ContactField::Phone, "123");
        let failures = form.submit().expect_err("empty form");
        assert_eq!(
            failures,
            vec![
                (ContactField::Name, FieldError::Required),
                (ContactField::Phone, FieldError::InvalidPhone),
                (ContactField::Email, FieldError::Required),
                (ContactField::Message, FieldError::Required),
            ]
        );
        assert_eq!(form.phase(), SubmitPhase::Editing);
    }

    #[test]
    fn valid_submit_captures_trimmed_values() {
        let mut form = filled();
        let submission = form.submit().expect("valid form");
        assert!(form.is_submitting());
        assert_eq!(submission.message, "A small rose");
        assert_eq!(submission.service, None);
        assert_eq!(submission.budget, None);
        assert_eq!(submission.phone, "(11) 99999-8888");
    }

    #[test]
    fn second_submit_while_sending_is_rejected() {
        let mut form = filled();
        assert!(form.submit().is_ok());
        assert_eq!(form.submit(), Err(Vec::new()));
    }

    #[test]
    fn complete_resets_form() {
        let mut form = filled();
        form.submit().expect("valid form");
        form.complete();
        assert_eq!(form.phase(), SubmitPhase::Editing);
        assert_eq!(form.value(ContactField::Name), "");
    }

    #[test]
    fn percent_encoding_matches_uri_component_rules() {
        assert_eq!(percent_encode("a b"), "a%20b");
        assert_eq!(percent_encode("*Nome:*"), "*Nome%3A*");
        assert_eq!(percent_encode("(x)!~'-_."), "(x)!~'-_.");
        assert_eq!(percent_encode("é\n"), "%C3%A9%0A");
        assert_eq!(percent_encode("a&b=c?"), "a%26b%3Dc%3F");
    }

    #[test]
    fn messaging_link_uses_digits_of_number() {
        let link = messaging_link("+55 (11) 99999-9999", " Hi there ");
        assert_eq!(link, "https://wa.me/5511999999999?text=Hi%20there");
    }
}
