// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! Infrastructure adapters implement these traits; the application layer
//! only sees the trait.
//!
//! # Available Ports
//!
//! - [`handoff`]: passing a messaging deep link to the platform

pub mod handoff;

pub use handoff::LinkOpener;
