// SPDX-License-Identifier: MPL-2.0
//! External link port.

/// Hands a URL (`https:`, `mailto:`, `tel:`) to whatever the host uses to open it.
///
/// Opening is fire-and-forget: failures are the adapter's to log.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str);
}
