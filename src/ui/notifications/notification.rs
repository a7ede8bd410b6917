// SPDX-License-Identifier: MPL-2.0
//! A toast message: its kind and the translation key it displays.

use crate::i18n::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one pushed toast, so timers of an evicted toast can be told
/// apart from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Kind of feedback. Drives the accent color and the leading glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Info => palette::GRAY_400,
            Severity::Success => palette::GOLD_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Info => "i",
            Severity::Success => "\u{2713}",
            Severity::Warning | Severity::Error => "!",
        }
    }
}

/// Visitor feedback shown in the toast slot.
///
/// Only the key is stored; the text is looked up when drawn so a locale
/// switch applies to a toast already on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    key: Cow<'static, str>,
}

impl Notification {
    pub fn new(severity: Severity, key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            key: key.into(),
        }
    }

    pub fn info(key: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Severity::Info, key)
    }

    pub fn success(key: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn warning(key: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Severity::Error, key)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.key
    }

    /// Localized text.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        i18n.tr(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_toast_gets_its_own_id() {
        let first = Notification::success("notification-budget-success");
        let second = Notification::success("notification-budget-success");
        assert_ne!(first.id(), second.id());
        assert_eq!(first.message_key(), second.message_key());
    }

    #[test]
    fn kinds_are_told_apart_by_color() {
        let kinds = [
            Severity::Info,
            Severity::Success,
            Severity::Warning,
            Severity::Error,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a:?} and {b:?} share a color");
            }
        }
    }

    #[test]
    fn shorthand_constructors_pick_the_kind() {
        assert_eq!(Notification::info("k").severity(), Severity::Info);
        assert_eq!(Notification::success("k").severity(), Severity::Success);
        assert_eq!(Notification::warning("k").severity(), Severity::Warning);
        assert_eq!(Notification::error("k").severity(), Severity::Error);
    }

    #[test]
    fn owned_keys_are_accepted() {
        let key = String::from("notification-config-load-error");
        let notification = Notification::warning(key);
        let i18n = I18n::default();
        assert!(!notification.text(&i18n).starts_with("MISSING"));
    }
}
