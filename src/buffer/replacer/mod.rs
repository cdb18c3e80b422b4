//! Eviction policy implementations (replacers).
//!
//! A replacer only tracks page ids in eviction order; the
//! [`PageCache`](crate::buffer::PageCache) owns the data and decides what
//! to do with the victim.
//!
//! Currently implements:
//! - [`LruReplacer`] - Least Recently Used (default)
//! - [`FifoReplacer`] - First-In-First-Out, accesses do not reorder

mod fifo;
mod lru;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;

use std::fmt;

use crate::common::PageId;

/// Tracks page ids and picks eviction victims.
pub trait Replacer: Send {
    /// Record that `page_id` was inserted into or accessed in the cache.
    fn record_access(&mut self, page_id: PageId);

    /// Select the next victim and stop tracking it.
    ///
    /// Returns `None` when no page is tracked.
    fn evict(&mut self) -> Option<PageId>;

    /// Number of page ids currently tracked.
    fn len(&self) -> usize;

    /// Check if no page id is tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which [`Replacer`] a cache is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EvictionPolicy {
    /// Evict the least recently inserted or accessed page.
    #[default]
    Lru,
    /// Evict the earliest inserted page, ignoring later accesses.
    Fifo,
}

impl EvictionPolicy {
    /// Build an empty replacer implementing this policy.
    pub fn build(self) -> Box<dyn Replacer> {
        match self {
            EvictionPolicy::Lru => Box::new(LruReplacer::new()),
            EvictionPolicy::Fifo => Box::new(FifoReplacer::new()),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvictionPolicy::Lru => write!(f, "LRU"),
            EvictionPolicy::Fifo => write!(f, "FIFO"),
        }
    }
}
