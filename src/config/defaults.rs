// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for timings, thresholds
//! and defaults used across the application. Constants are organized by
//! category.
//!
//! # Categories
//!
//! - **Portfolio**: Card show/hide transition delays
//! - **Notifications**: Toast enter, auto-dismiss and exit timings
//! - **Contact**: Simulated submission and hand-off delays
//! - **Scroll**: Navbar and back-to-top thresholds, section offsets
//! - **Loading**: Splash screen timings
//! - **Scheduler**: Polling interval of deferred messages

// ==========================================================================
// Portfolio Defaults
// ==========================================================================

/// Delay before a card that passes the filter is faded in (milliseconds).
pub const FILTER_REVEAL_DELAY_MS: u64 = 100;

/// Delay before a filtered-out card leaves the layout (milliseconds).
pub const FILTER_HIDE_DELAY_MS: u64 = 300;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Delay before a new toast slides in (milliseconds).
pub const NOTIFICATION_ENTER_DELAY_MS: u64 = 100;

/// Default time a toast stays visible (milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Minimum configurable toast duration (milliseconds).
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 1000;

/// Maximum configurable toast duration (milliseconds).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 30_000;

/// Length of the toast exit transition (milliseconds).
pub const NOTIFICATION_EXIT_MS: u64 = 300;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Simulated request time of the contact form (milliseconds).
pub const CONTACT_SUBMIT_DELAY_MS: u64 = 2000;

/// Delay between the success toast and the messaging hand-off (milliseconds).
pub const HANDOFF_DELAY_MS: u64 = 1000;

/// Studio number used for the messaging deep link.
pub const DEFAULT_MESSAGING_PHONE: &str = "5511999999999";

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Scroll offset past which the navbar switches to its compact style.
pub const NAVBAR_SCROLLED_THRESHOLD: f32 = 100.0;

/// Scroll offset past which the back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD: f32 = 500.0;

/// Distance below the scroll offset used to pick the active section.
pub const ACTIVE_SECTION_PROBE_OFFSET: f32 = 150.0;

/// Height of the fixed navbar subtracted from section scroll targets.
pub const SCROLL_TARGET_OFFSET: f32 = 70.0;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Time the loading splash stays fully visible (milliseconds).
pub const LOADING_FADE_DELAY_MS: u64 = 3000;

/// Length of the loading splash fade-out (milliseconds).
pub const LOADING_REMOVE_DELAY_MS: u64 = 500;

// ==========================================================================
// Scheduler Defaults
// ==========================================================================

/// Interval at which due deferred messages are collected (milliseconds).
pub const SCHEDULER_TICK_MS: u64 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(FILTER_REVEAL_DELAY_MS < FILTER_HIDE_DELAY_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS >= MIN_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
    assert!(NOTIFICATION_ENTER_DELAY_MS < MIN_NOTIFICATION_DURATION_MS);
    assert!(NAVBAR_SCROLLED_THRESHOLD < BACK_TO_TOP_THRESHOLD);
    assert!(SCHEDULER_TICK_MS <= FILTER_REVEAL_DELAY_MS);
};
