// SPDX-License-Identifier: MPL-2.0
//! Media cache for gallery navigation.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used items are evicted first
//! - **Memory-bounded**: Total encoded size limited by a byte budget
//! - **Item-keyed**: Entries indexed by their [`MediaItem`] reference
//! - **Single flight**: An item is requested at most once at a time
//! - **No retry**: Items that failed to load (or were too large to keep)
//!   stay failed for the session

use crate::config::{DEFAULT_MEDIA_CACHE_BYTES, DEFAULT_MEDIA_CACHE_ENTRIES};
use crate::domain::media::MediaItem;
use crate::error::Result;
use iced::widget::image;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Configuration for the media cache.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Maximum total size of cached payloads in bytes.
    pub max_bytes: usize,

    /// Maximum number of cached items.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MEDIA_CACHE_BYTES,
            max_entries: DEFAULT_MEDIA_CACHE_ENTRIES,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    handle: image::Handle,
    size_bytes: usize,
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
    pub failures: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// What the view knows about an item.
#[derive(Debug, Clone)]
pub enum MediaStatus {
    Ready(image::Handle),
    Loading,
    Failed,
    /// Never requested (or evicted).
    Absent,
}

pub struct MediaCache {
    cache: LruCache<MediaItem, CacheEntry>,
    config: CacheConfig,
    current_bytes: usize,
    pending: HashSet<MediaItem>,
    failed: HashSet<MediaItem>,
    stats: CacheStats,
}

impl MediaCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            pending: HashSet::new(),
            failed: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    /// Filters `items` down to those that still need loading and marks them pending.
    ///
    /// Cached, in-flight and failed items are skipped, as are duplicates
    /// within `items`.
    pub fn request<'a>(&mut self, items: impl IntoIterator<Item = &'a MediaItem>) -> Vec<MediaItem> {
        let mut to_fetch = Vec::new();
        for item in items {
            if self.cache.contains(item) {
                self.stats.hits += 1;
                continue;
            }
            if self.pending.contains(item) || self.failed.contains(item) {
                continue;
            }
            self.stats.misses += 1;
            self.pending.insert(item.clone());
            to_fetch.push(item.clone());
        }
        to_fetch
    }

    /// Records the outcome of a fetch started by [`MediaCache::request`].
    pub fn complete(&mut self, item: MediaItem, result: Result<Vec<u8>>) {
        self.pending.remove(&item);
        match result {
            Ok(bytes) => {
                let size = bytes.len();
                if self.insert(item.clone(), bytes) {
                    log::debug!(
                        "Cached media {item} ({} entries, {:.0}% hit rate)",
                        self.cache.len(),
                        self.stats.hit_rate()
                    );
                } else {
                    // Stays failed so it is not requested again
                    log::debug!("Media {item} too large to cache ({size} bytes)");
                    self.stats.failures += 1;
                    self.failed.insert(item);
                }
            }
            Err(_) => {
                self.stats.failures += 1;
                self.failed.insert(item);
            }
        }
    }

    /// Inserts encoded bytes for `item`.
    ///
    /// Returns `false` if the payload is larger than half the byte budget.
    pub fn insert(&mut self, item: MediaItem, bytes: Vec<u8>) -> bool {
        let size_bytes = bytes.len();
        if size_bytes > self.config.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&item) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + size_bytes > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        let entry = CacheEntry {
            handle: image::Handle::from_bytes(bytes),
            size_bytes,
        };
        self.current_bytes += size_bytes;
        if let Some((_, evicted)) = self.cache.push(item, entry) {
            // Entry-count eviction by the LRU itself.
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            self.stats.evictions += 1;
        }
        self.stats.insertions += 1;
        true
    }

    /// Current state of `item`, without touching LRU order.
    #[must_use]
    pub fn status(&self, item: &MediaItem) -> MediaStatus {
        if let Some(entry) = self.cache.peek(item) {
            MediaStatus::Ready(entry.handle.clone())
        } else if self.pending.contains(item) {
            MediaStatus::Loading
        } else if self.failed.contains(item) {
            MediaStatus::Failed
        } else {
            MediaStatus::Absent
        }
    }

    #[must_use]
    pub fn is_pending(&self, item: &MediaItem) -> bool {
        self.pending.contains(item)
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl Default for MediaCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for MediaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCache")
            .field("entries", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("pending", &self.pending.len())
            .field("failed", &self.failed.len())
            .field("stats", &self.stats)
            .finish()
    }
}
