//! CacheEntry - a page held by the cache.
//!
//! A [`CacheEntry`] holds the page bytes plus the dirty flag the cache
//! needs for write-back.

/// A page buffered in the cache.
///
/// The page id is the key of the cache's entry map and is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CacheEntry {
    /// The page bytes.
    data: Vec<u8>,

    /// Whether the data has been modified since it was cached or last flushed.
    dirty: bool,
}

impl CacheEntry {
    /// Create a clean entry.
    pub(crate) fn new(data: Vec<u8>) -> Self {
        Self { data, dirty: false }
    }

    #[inline]
    pub(crate) fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the bytes. Marks the entry dirty.
    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        self.dirty = true;
        &mut self.data
    }

    /// Replace the bytes. Marks the entry dirty.
    pub(crate) fn replace(&mut self, data: Vec<u8>) {
        self.data = data;
        self.dirty = true;
    }

    #[inline]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
