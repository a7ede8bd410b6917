// SPDX-License-Identifier: MPL-2.0
//! Contact form fields and per-field validation.

use super::{email, phone};
use thiserror::Error;

/// Input fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Service,
    Budget,
    Message,
}

impl ContactField {
    /// Every field, in form order.
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Phone,
        ContactField::Email,
        ContactField::Service,
        ContactField::Budget,
        ContactField::Message,
    ];

    /// Returns `true` if the form cannot be sent while this field is blank.
    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(
            self,
            ContactField::Name | ContactField::Phone | ContactField::Email | ContactField::Message
        )
    }

    /// Returns the i18n key of the field label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ContactField::Name => "contact-field-name",
            ContactField::Phone => "contact-field-phone",
            ContactField::Email => "contact-field-email",
            ContactField::Service => "contact-field-service",
            ContactField::Budget => "contact-field-budget",
            ContactField::Message => "contact-field-message",
        }
    }
}

/// Why a contact field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("this field is required")]
    Required,
    #[error("invalid e-mail address")]
    InvalidEmail,
    #[error("invalid phone number, expected (11) 99999-9999")]
    InvalidPhone,
}

impl FieldError {
    /// Returns the i18n key of the inline error message.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FieldError::Required => "contact-error-required",
            FieldError::InvalidEmail => "contact-error-email",
            FieldError::InvalidPhone => "contact-error-phone",
        }
    }
}

/// Validates one field value. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns the first rule the value breaks.
pub fn validate_field(field: ContactField, value: &str) -> Result<(), FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return if field.is_required() {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    match field {
        ContactField::Email if !email::is_valid(value) => Err(FieldError::InvalidEmail),
        ContactField::Phone if !phone::is_valid(value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}
