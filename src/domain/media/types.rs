// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// What a card's media list contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// Where the bytes behind a [`MediaItem`] live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Remote(String),
    Local(PathBuf),
}

/// Opaque reference to an image or video (URL or file path).
///
/// The navigation logic never inspects the value; only the loader does.
///
/// # Example
///
/// ```
/// use showreel::domain::media::{MediaItem, MediaSource};
///
/// let item = MediaItem::new("https://example.com/still.png");
/// assert!(matches!(item.source(), MediaSource::Remote(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaItem(Arc<str>);

impl MediaItem {
    #[must_use]
    pub fn new(reference: impl AsRef<str>) -> Self {
        Self(Arc::from(reference.as_ref()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies the reference for the loader.
    #[must_use]
    pub fn source(&self) -> MediaSource {
        let raw = self.as_str();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            MediaSource::Remote(raw.to_string())
        } else {
            let path = raw.strip_prefix("file://").unwrap_or(raw);
            MediaSource::Local(PathBuf::from(path))
        }
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MediaItem {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Ordered list of media shown by a gallery.
///
/// Immutable once built; cloning shares the underlying storage so a gallery
/// can hold its own copy of a card's media without duplicating strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaSequence(Arc<[MediaItem]>);

impl MediaSequence {
    #[must_use]
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self(Arc::from(items))
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaItem> {
        self.0.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for MediaSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(MediaItem::new).collect())
    }
}
