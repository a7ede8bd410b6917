// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`portfolio`]: filter controller owning the filtered list and lightbox
//! - [`lightbox`]: lightbox viewer state machine
//! - [`estimator`]: budget estimation
//! - [`contact`]: contact form and messaging deep link
//! - [`chrome`]: navbar, scroll effects and loading splash
//! - [`port`]: trait definitions implemented by infrastructure
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! Everything here is synchronous. Deferred effects are returned to the
//! caller, which schedules them.

pub mod chrome;
pub mod contact;
pub mod estimator;
pub mod lightbox;
pub mod port;
pub mod portfolio;
