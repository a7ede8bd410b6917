// SPDX-License-Identifier: MPL-2.0
//! Brazilian phone number formatting, `(DD) DDDDD-DDDD`.

/// Reformats free-form input as the user types.
///
/// Only digits are kept. With 11 or more digits the mobile layout
/// `(DD) DDDDD-DDDD` is produced and extra digits are dropped; with 7 to 10
/// digits the landline layout `(DD) DDDD-rest`; with 3 to 6 digits `(DD) rest`;
/// shorter input is returned as bare digits.
#[must_use]
pub fn format(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();

    if len >= 11 {
        format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..11])
    } else if len >= 7 {
        format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..])
    } else if len >= 3 {
        format!("({}) {}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Returns `true` for `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`.
#[must_use]
pub fn is_valid(value: &str) -> bool {
    let Some(rest) = value.strip_prefix('(') else {
        return false;
    };
    let Some((area, rest)) = rest.split_once(") ") else {
        return false;
    };
    let Some((prefix, line)) = rest.split_once('-') else {
        return false;
    };

    all_digits(area, 2..=2) && all_digits(prefix, 4..=5) && all_digits(line, 4..=4)
}

fn all_digits(part: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}
