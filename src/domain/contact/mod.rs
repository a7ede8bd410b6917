// SPDX-License-Identifier: MPL-2.0
//! Contact form domain rules.

pub mod email;
pub mod field;
pub mod phone;

pub use field::{validate_field, ContactField, FieldError};
