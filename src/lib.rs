//! pagetree - the two foundational primitives of an embedded storage engine.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │             Storage / table layer (not in this crate)          │
//! │        composes the index and the cache into row storage        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────┐   ┌───────────────────────────┐  │
//! │  │   Index Layer (index/)    │   │   Page Cache (buffer/)    │  │
//! │  │                           │   │                           │  │
//! │  │  OrderedIndex<K, V>       │   │  PageCache                │  │
//! │  │  B+ tree, ORDER = 4       │   │  PageId → bytes + dirty   │  │
//! │  │  arena nodes + leaf chain │   │  LRU | FIFO replacer      │  │
//! │  │                           │   │  injected flush hook      │  │
//! │  └───────────────────────────┘   └───────────────────────────┘  │
//! │            independent: neither calls the other                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both components are single-writer structures without internal locking.
//! Callers that share an instance between threads serialize access, for
//! example through [`OrderedIndex::into_shared`] or
//! [`PageCache::into_shared`].
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, NodeId, Error, config)
//! - [`index`] - The ordered B+ tree index
//! - [`buffer`] - The page cache and its eviction policies
//!
//! # Quick Start
//! ```
//! use pagetree::{OrderedIndex, PageCache, PageId};
//!
//! let mut index = OrderedIndex::new();
//! index.insert(42u64, PageId::new(7));
//! assert_eq!(index.search(&42), Some(&PageId::new(7)));
//!
//! let mut cache = PageCache::new(16).unwrap();
//! cache.put(PageId::new(7), vec![0u8; 4096]);
//! assert!(cache.get(PageId::new(7)).is_some());
//! ```

pub mod buffer;
pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, MAX_KEYS, ORDER};
pub use common::{Error, NodeId, PageId, Result};

pub use buffer::{CacheConfig, CacheStats, EvictionPolicy, FlushHook, PageCache, SharedPageCache};
pub use index::{OrderedIndex, SharedIndex};
