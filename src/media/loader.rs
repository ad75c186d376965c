// SPDX-License-Identifier: MPL-2.0
//! Asynchronous media byte loading.
//!
//! Remote items (`http`/`https`) are downloaded with a shared `reqwest`
//! client; everything else is read from disk with `tokio::fs`. Decoding is
//! left to the image widget.

use crate::domain::media::{MediaItem, MediaSource};
use crate::error::{Error, Result};
use std::path::Path;
use std::sync::OnceLock;

/// Refuse payloads larger than this (16 MiB).
pub const MAX_MEDIA_BYTES: u64 = 16 * 1024 * 1024;

const USER_AGENT: &str = concat!("Showreel/", env!("CARGO_PKG_VERSION"));

static CLIENT: OnceLock<std::result::Result<reqwest::Client, String>> = OnceLock::new();

fn client() -> Result<&'static reqwest::Client> {
    CLIENT
        .get_or_init(|| {
            reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::limited(10))
                .user_agent(USER_AGENT)
                .build()
                .map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| Error::Fetch(e.clone()))
}

/// Loads the raw bytes behind `item`.
///
/// Returns the item alongside the result so the caller can route the
/// completion message without extra bookkeeping.
pub async fn fetch(item: MediaItem) -> (MediaItem, Result<Vec<u8>>) {
    let result = match item.source() {
        MediaSource::Remote(url) => fetch_remote(&url).await,
        MediaSource::Local(path) => {
            if path.as_os_str().is_empty() {
                Err(Error::Fetch("empty media reference".to_string()))
            } else {
                fetch_local(&path).await
            }
        }
    };

    if let Err(err) = &result {
        log::warn!("Failed to load media {item}: {err}");
    }
    (item, result)
}

async fn fetch_local(path: &Path) -> Result<Vec<u8>> {
    let length = tokio::fs::metadata(path).await?.len();
    if length > MAX_MEDIA_BYTES {
        return Err(Error::Fetch(format!("File too large ({length} bytes)")));
    }
    Ok(tokio::fs::read(path).await?)
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let response = client()?.get(url).send().await?;

    if !response.status().is_success() {
        return Err(Error::Fetch(format!("HTTP status: {}", response.status())));
    }

    if let Some(length) = response.content_length() {
        if length > MAX_MEDIA_BYTES {
            return Err(Error::Fetch(format!(
                "Response too large ({length} bytes)"
            )));
        }
    }

    let bytes = response.bytes().await?;
    if bytes.len() as u64 > MAX_MEDIA_BYTES {
        return Err(Error::Fetch(format!(
            "Response too large ({} bytes)",
            bytes.len()
        )));
    }
    Ok(bytes.to_vec())
}
