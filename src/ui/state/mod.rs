// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains UI state logic separated from the main App struct.

pub mod scheduler;

pub use scheduler::{Scheduler, TimerId};
