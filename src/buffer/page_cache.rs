//! Page Cache - a bounded set of pages with recency-based eviction.
//!
//! The [`PageCache`] provides:
//! - Lookup and replacement of pages by id
//! - Dirty tracking per page
//! - Automatic eviction when full, flushing dirty pages first
//! - Pluggable eviction policies

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::buffer::entry::CacheEntry;
use crate::buffer::replacer::{EvictionPolicy, Replacer};
use crate::buffer::{CacheConfig, CacheStats};
use crate::common::{PageId, Result};

/// Write-back callback invoked with a dirty page's id and bytes.
///
/// The cache does not observe failures: a hook that can fail is
/// responsible for its own retries or reporting.
pub type FlushHook = Box<dyn FnMut(PageId, &[u8]) + Send>;

/// A [`PageCache`] behind a mutex.
///
/// The cache performs no locking itself. Even `get` mutates recency
/// state, so sharing requires an exclusive lock.
pub type SharedPageCache = Arc<Mutex<PageCache>>;

/// Holds a bounded number of pages and evicts under a recency policy.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────────────────┐
/// │                        PageCache                           │
/// │  ┌──────────────────────┐   ┌──────────────────────────┐   │
/// │  │       entries        │   │         replacer         │   │
/// │  │ PageId → CacheEntry  │   │ eviction order (LRU/FIFO)│   │
/// │  │   (data, dirty)      │   │                          │   │
/// │  └──────────────────────┘   └──────────────────────────┘   │
/// │                 │ dirty victim                             │
/// │                 ▼                                          │
/// │          flush_hook(page_id, &data)                        │
/// └────────────────────────────────────────────────────────────┘
/// ```
///
/// Capacity counts entries, so exactly one eviction makes room for one
/// new page.
///
/// # Thread Safety
/// None. The cache is a single-writer structure; see [`SharedPageCache`].
///
/// # Usage
/// ```
/// use pagetree::{PageCache, PageId};
///
/// let mut cache = PageCache::with_flush_hook(2, |page_id, data: &[u8]| {
///     println!("writing back {} ({} bytes)", page_id, data.len());
/// })
/// .unwrap();
///
/// cache.put(PageId::new(1), vec![0u8; 4096]);
/// cache.put(PageId::new(1), vec![1u8; 4096]); // replaced: now dirty
/// cache.put(PageId::new(2), vec![2u8; 4096]);
/// cache.put(PageId::new(3), vec![3u8; 4096]); // evicts page 1, flushing it
///
/// assert!(cache.get(PageId::new(1)).is_none());
/// ```
pub struct PageCache {
    /// Cached pages.
    entries: HashMap<PageId, CacheEntry>,

    /// Eviction policy for selecting victims.
    replacer: Box<dyn Replacer>,

    /// Write-back for dirty pages; `None` drops them silently.
    flush_hook: Option<FlushHook>,

    /// Performance statistics.
    stats: CacheStats,

    /// Capacity and policy (immutable after construction).
    config: CacheConfig,
}

impl PageCache {
    /// Create a cache holding at most `capacity` pages, with no flush hook.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::with_config(CacheConfig::new(capacity)?, None))
    }

    /// Create a cache that hands dirty pages to `hook` before dropping them.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `capacity` is 0
    pub fn with_flush_hook<F>(capacity: usize, hook: F) -> Result<Self>
    where
        F: FnMut(PageId, &[u8]) + Send + 'static,
    {
        Ok(Self::with_config(
            CacheConfig::new(capacity)?,
            Some(Box::new(hook)),
        ))
    }

    /// Create a cache from an already validated config.
    pub fn with_config(config: CacheConfig, flush_hook: Option<FlushHook>) -> Self {
        Self {
            entries: HashMap::with_capacity(config.capacity()),
            replacer: config.policy().build(),
            flush_hook,
            stats: CacheStats::new(),
            config,
        }
    }

    // ========================================================================
    // Public API: Lookup
    // ========================================================================

    /// Return the bytes cached for `page_id`, or `None` on a miss.
    ///
    /// A hit marks the page most recently used. There is no fallback to
    /// disk; loading a missing page is the caller's job.
    pub fn get(&mut self, page_id: PageId) -> Option<&[u8]> {
        match self.entries.get(&page_id) {
            Some(entry) => {
                self.replacer.record_access(page_id);
                self.stats.cache_hits += 1;
                Some(entry.data())
            }
            None => {
                self.stats.cache_misses += 1;
                None
            }
        }
    }

    /// Mutable access to the bytes cached for `page_id`.
    ///
    /// Marks the page dirty and most recently used.
    pub fn get_mut(&mut self, page_id: PageId) -> Option<&mut [u8]> {
        match self.entries.get_mut(&page_id) {
            Some(entry) => {
                self.replacer.record_access(page_id);
                self.stats.cache_hits += 1;
                Some(entry.data_mut())
            }
            None => {
                self.stats.cache_misses += 1;
                None
            }
        }
    }

    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert or replace the page `page_id`.
    ///
    /// A new page is stored clean; if the cache is full, one page is
    /// evicted first. Replacing an existing page marks it dirty. Either
    /// way the page becomes most recently used.
    pub fn put(&mut self, page_id: PageId, data: impl Into<Vec<u8>>) {
        let data = data.into();

        if let Some(entry) = self.entries.get_mut(&page_id) {
            entry.replace(data);
        } else {
            if self.entries.len() >= self.config.capacity() {
                let evicted = self.evict_one();
                debug_assert!(evicted, "cache is full but the replacer has no victim");
            }
            self.entries.insert(page_id, CacheEntry::new(data));
        }

        self.replacer.record_access(page_id);
    }

    // ========================================================================
    // Public API: Flush
    // ========================================================================

    /// Hand every dirty page to the flush hook, in ascending page id order,
    /// and mark it clean. Nothing is evicted.
    pub fn flush_all(&mut self) {
        let mut dirty: Vec<PageId> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_dirty())
            .map(|(&page_id, _)| page_id)
            .collect();
        dirty.sort_unstable();

        for &page_id in &dirty {
            self.flush_page(page_id);
        }

        debug!(flushed = dirty.len(), cached = self.entries.len(), "flushed all dirty pages");
    }

    /// Hand `page_id` to the flush hook if it is cached and dirty, then mark
    /// it clean.
    ///
    /// Returns whether the page was flushed.
    pub fn flush_page(&mut self, page_id: PageId) -> bool {
        match self.entries.get_mut(&page_id) {
            Some(entry) if entry.is_dirty() => {
                Self::write_back(&mut self.flush_hook, &mut self.stats, page_id, entry.data());
                entry.clear_dirty();
                true
            }
            _ => false,
        }
    }

    // ========================================================================
    // Public API: Stats and info
    // ========================================================================

    /// Whether `page_id` is cached. Does not affect recency.
    pub fn contains(&self, page_id: PageId) -> bool {
        self.entries.contains_key(&page_id)
    }

    /// Dirty flag of `page_id`, or `None` if it is not cached.
    pub fn is_dirty(&self, page_id: PageId) -> Option<bool> {
        self.entries.get(&page_id).map(CacheEntry::is_dirty)
    }

    /// Number of cached pages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no page is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of cached pages.
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Eviction policy in use.
    pub fn policy(&self) -> EvictionPolicy {
        self.config.policy()
    }

    /// Get a copy of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Reset all counters to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::new();
    }

    /// Wrap the cache in a mutex so it can be shared between threads.
    pub fn into_shared(self) -> SharedPageCache {
        Arc::new(Mutex::new(self))
    }

    // ========================================================================
    // Internal: Eviction
    // ========================================================================

    /// Evict the replacer's next victim, flushing it first if dirty.
    ///
    /// Victims that are no longer cached are skipped. Returns whether a
    /// page was evicted.
    fn evict_one(&mut self) -> bool {
        while let Some(victim) = self.replacer.evict() {
            let Some(entry) = self.entries.get(&victim) else {
                trace!(page_id = %victim, "skipping stale eviction candidate");
                continue;
            };

            let dirty = entry.is_dirty();
            if dirty {
                Self::write_back(&mut self.flush_hook, &mut self.stats, victim, entry.data());
            }
            self.entries.remove(&victim);
            self.stats.evictions += 1;

            debug!(page_id = %victim, dirty, policy = %self.config.policy(), "evicted page");
            return true;
        }
        false
    }

    fn write_back(
        hook: &mut Option<FlushHook>,
        stats: &mut CacheStats,
        page_id: PageId,
        data: &[u8],
    ) {
        if let Some(hook) = hook.as_mut() {
            hook(page_id, data);
        }
        stats.pages_flushed += 1;
        trace!(%page_id, bytes = data.len(), "flushed dirty page");
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::with_config(CacheConfig::default(), None)
    }
}

impl fmt::Debug for PageCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.config.capacity())
            .field("policy", &self.config.policy())
            .field("has_flush_hook", &self.flush_hook.is_some())
            .field("stats", &self.stats)
            .finish()
    }
}
