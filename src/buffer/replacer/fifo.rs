//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use super::Replacer;
use crate::common::PageId;

/// A simple FIFO eviction policy.
///
/// Evicts pages in the order they were added to the cache. Accessing a
/// page again does not change its position.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Queue of page IDs in insertion order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    in_queue: HashSet<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Replacer for FifoReplacer {
    /// Only adds to the queue if the page is not already tracked.
    fn record_access(&mut self, page_id: PageId) {
        if self.in_queue.insert(page_id) {
            self.queue.push_back(page_id);
        }
    }

    fn evict(&mut self) -> Option<PageId> {
        while let Some(page_id) = self.queue.pop_front() {
            if self.in_queue.remove(&page_id) {
                return Some(page_id);
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.in_queue.len()
    }
}
