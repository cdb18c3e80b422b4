//! Page cache management.
//!
//! The page cache is the in-memory staging layer between a storage engine
//! and its disk I/O. It holds a bounded number of pages, each identified by
//! a [`PageId`](crate::common::PageId).
//!
//! # Components
//! - [`PageCache`] - The main page cache
//! - [`CacheConfig`] - Validated capacity and eviction policy
//! - [`CacheStats`] - Performance statistics
//! - [`replacer`] - Eviction policy implementations

mod cache_config;
mod entry;
mod page_cache;
pub mod replacer;
mod stats;

pub use cache_config::CacheConfig;
pub use page_cache::{FlushHook, PageCache, SharedPageCache};
pub use replacer::{EvictionPolicy, Replacer};
pub use stats::CacheStats;
