// SPDX-License-Identifier: MPL-2.0
//! Minimal e-mail shape check.

/// Accepts `local@domain.tld`: no whitespace, a single `@`, and a dot in the
/// domain part with text on both sides of it.
#[must_use]
pub fn is_valid(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // The last dot may be followed by more dots in the host ("a.b.c").
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}
