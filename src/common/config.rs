//! Configuration constants for pagetree.

/// Fan-out constant of the ordered index.
///
/// Every node holds at most `2 * ORDER - 1` keys. A full node is split
/// before an insertion would push it past that bound.
pub const ORDER: usize = 4;

/// Maximum number of keys stored in a single tree node (7 with `ORDER = 4`).
pub const MAX_KEYS: usize = 2 * ORDER - 1;

/// Split point used when a full node is divided.
///
/// Keys below this index stay in the original node. For a leaf the key at
/// this index becomes the sibling's first key and is copied up as the
/// separator; for an internal node it is moved up to the parent.
pub const SPLIT_INDEX: usize = ORDER - 1;

/// Number of entries a [`PageCache`](crate::buffer::PageCache) holds when
/// no capacity is supplied.
///
/// Capacity counts entries, not bytes.
pub const DEFAULT_CAPACITY: usize = 1024;
