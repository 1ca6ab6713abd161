// SPDX-License-Identifier: MPL-2.0
//! Byte-bounded LRU cache of decoded photos.
//!
//! The lightbox decodes every photo off the UI thread before showing it.
//! Keeping recent decodes around makes re-visiting a photo swap instantly
//! instead of going through another decode round-trip.

use crate::error::Result;
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Default cache size in bytes (64 MB).
pub const DEFAULT_CACHE_BYTES: usize = 64 * 1024 * 1024;

/// Minimum cache size in bytes (8 MB).
pub const MIN_CACHE_BYTES: usize = 8 * 1024 * 1024;

/// Maximum cache size in bytes (256 MB).
pub const MAX_CACHE_BYTES: usize = 256 * 1024 * 1024;

/// Default maximum number of photos to keep.
pub const DEFAULT_MAX_PHOTOS: usize = 16;

/// Configuration for the photo cache.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Maximum total size in bytes.
    pub max_bytes: usize,
    /// Maximum number of photos to keep.
    pub max_photos: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_CACHE_BYTES,
            max_photos: DEFAULT_MAX_PHOTOS,
        }
    }
}

impl CacheConfig {
    /// Creates a configuration with `max_bytes` clamped to the supported
    /// range.
    #[must_use]
    pub fn with_max_bytes(max_bytes: usize) -> Self {
        Self {
            max_bytes: max_bytes.clamp(MIN_CACHE_BYTES, MAX_CACHE_BYTES),
            max_photos: DEFAULT_MAX_PHOTOS,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    image: Arc<ImageData>,
    size_bytes: usize,
}

/// Cache hit/miss counters, mostly useful in tests and debugging.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// LRU cache mapping photo paths to decoded image data.
pub struct PhotoCache {
    cache: LruCache<PathBuf, CacheEntry>,
    config: CacheConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl PhotoCache {
    /// Creates a new cache with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_MAX_PHOTOS` is zero, which would indicate a build
    /// configuration error.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_photos).unwrap_or(
            NonZeroUsize::new(DEFAULT_MAX_PHOTOS).expect("DEFAULT_MAX_PHOTOS must be non-zero"),
        );
        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    /// Inserts a decoded photo.
    ///
    /// Returns `false` if the photo is larger than half the cache and was
    /// not kept.
    pub fn insert(&mut self, path: PathBuf, image: ImageData) -> bool {
        let size_bytes = image.size_bytes();
        if size_bytes > self.config.max_bytes / 2 {
            return false;
        }

        while self.current_bytes + size_bytes > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        if let Some(existing) = self.cache.pop(&path) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        self.current_bytes += size_bytes;
        self.cache.put(
            path,
            CacheEntry {
                image: Arc::new(image),
                size_bytes,
            },
        );
        true
    }

    /// Gets a cached photo, updating LRU order on access.
    pub fn get(&mut self, path: &Path) -> Option<ImageData> {
        if let Some(entry) = self.cache.get(path) {
            self.stats.hits += 1;
            Some((*entry.image).clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Checks for a cached photo without touching LRU order.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
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

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl std::fmt::Debug for PhotoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoCache")
            .field("photo_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("stats", &self.stats)
            .finish()
    }
}

/// Decodes a photo on the blocking pool.
///
/// This is the async task behind the lightbox's preload-then-swap: the swap
/// only happens once this completes, success or failure alike.
pub async fn load_photo(path: PathBuf) -> (PathBuf, Result<ImageData>) {
    let path_clone = path.clone();
    let result = tokio::task::spawn_blocking(move || crate::media::load_image(&path_clone))
        .await
        .unwrap_or_else(|e| Err(crate::error::Error::Io(format!("decode task failed: {e}"))));

    (path, result)
}
