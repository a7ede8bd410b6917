// SPDX-License-Identifier: MPL-2.0
//! Messaging hand-off port.
//!
//! The contact form ends by giving a deep link to the platform. Adapters
//! decide how: the desktop build spawns the system URL opener, tests record
//! the links.

use crate::error::Result;

/// Opens a URL outside the application. No response is awaited.
pub trait LinkOpener: Send + Sync {
    /// # Errors
    ///
    /// Returns [`Error::Handoff`](crate::error::Error::Handoff) if the link
    /// could not be passed on.
    fn open(&self, url: &str) -> Result<()>;
}
