// SPDX-License-Identifier: MPL-2.0
//! System browser adapter.

use crate::application::port::LinkOpener;

/// Opens links with the platform's default handler (browser, mail client, dialer).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) {
        if url.is_empty() || url == "#" {
            log::debug!("Ignoring empty link");
            return;
        }
        match open::that_detached(url) {
            Ok(()) => log::info!("Opened external link {url}"),
            Err(err) => log::warn!("Failed to open {url}: {err}"),
        }
    }
}
