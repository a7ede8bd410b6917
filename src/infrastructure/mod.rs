// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, plus loading of the bundled site data.
//!
//! # Available Adapters
//!
//! - [`catalog`]: Portfolio and budget data file (embedded or on disk)
//! - [`handoff`]: Messaging hand-off through the system URL opener
//!   (implements [`LinkOpener`])
//!
//! [`LinkOpener`]: crate::application::port::LinkOpener

pub mod catalog;
pub mod handoff;

pub use catalog::SiteData;
pub use handoff::SystemLinkOpener;
