//! Construction parameters for the page cache.

use std::num::NonZeroUsize;

use crate::buffer::replacer::EvictionPolicy;
use crate::common::config::DEFAULT_CAPACITY;
use crate::common::{Error, Result};

/// Validated settings for a [`PageCache`](crate::buffer::PageCache).
///
/// A zero capacity is rejected here, so a cache built from a
/// `CacheConfig` can always hold at least one page.
///
/// # Example
/// ```
/// use pagetree::buffer::{CacheConfig, EvictionPolicy};
///
/// let config = CacheConfig::new(64).unwrap().with_policy(EvictionPolicy::Fifo);
/// assert_eq!(config.capacity(), 64);
/// assert!(CacheConfig::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries (not bytes).
    capacity: NonZeroUsize,

    /// Eviction order.
    policy: EvictionPolicy,
}

impl CacheConfig {
    /// Create a config holding at most `capacity` entries, using LRU.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| Error::invalid_config("capacity", "must be greater than zero"))?;

        Ok(Self {
            capacity,
            policy: EvictionPolicy::default(),
        })
    }

    /// Use `policy` to choose eviction victims.
    pub fn with_policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    #[inline]
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN),
            policy: EvictionPolicy::default(),
        }
    }
}
