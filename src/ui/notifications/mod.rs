// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for visitor feedback.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` keeping the single visible toast and its timers
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::default();
//! manager.push(Notification::success("notification-budget-success"));
//!
//! // On every scheduler tick
//! manager.tick(Instant::now());
//!
//! // In your view function
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Phase};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
