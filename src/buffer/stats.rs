//! Page cache statistics tracking.

use std::fmt;

/// Counters kept by the page cache.
///
/// The cache is a single-writer structure, so these are plain integers.
/// [`PageCache::stats`](crate::buffer::PageCache::stats) hands out a copy
/// that can be printed or compared freely.
///
/// # Example
/// ```
/// use pagetree::{PageCache, PageId};
///
/// let mut cache = PageCache::new(4).unwrap();
/// cache.put(PageId::new(1), vec![0u8; 16]);
/// cache.get(PageId::new(1));
/// cache.get(PageId::new(2));
///
/// let stats = cache.stats();
/// assert_eq!(stats.cache_hits, 1);
/// assert_eq!(stats.cache_misses, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found the page in the cache.
    pub cache_hits: u64,

    /// Lookups for a page that was not cached.
    pub cache_misses: u64,

    /// Entries dropped to make room for a new page.
    pub evictions: u64,

    /// Dirty entries handed to the flush hook.
    pub pages_flushed: u64,
}

impl CacheStats {
    /// Create a stats record with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, misses: {}, evictions: {}, flushed: {}, hit_rate: {:.2}% }}",
            self.cache_hits,
            self.cache_misses,
            self.evictions,
            self.pages_flushed,
            self.hit_rate() * 100.0
        )
    }
}
