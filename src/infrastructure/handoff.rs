// SPDX-License-Identifier: MPL-2.0
//! Desktop implementation of the messaging hand-off.

use crate::application::port::LinkOpener;
use crate::error::{Error, Result};
use std::io;
use tracing::{info, warn};

/// Passes links to the platform URL handler through the `open` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        outcome(open::that_detached(url))
    }
}

fn outcome(result: io::Result<()>) -> Result<()> {
    match result {
        Ok(()) => {
            info!("messaging link handed off");
            Ok(())
        }
        Err(err) => {
            warn!(%err, "could not start the URL opener");
            Err(Error::Handoff(err.to_string()))
        }
    }
}
