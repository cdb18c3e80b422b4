//! LRU (Least Recently Used) replacement policy.

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use super::Replacer;
use crate::common::PageId;

/// Extra stale records tolerated before the queue is compacted.
const COMPACT_SLACK: usize = 64;

/// Least-recently-used eviction order.
///
/// Every access pushes a `(page_id, stamp)` record onto the back of an
/// append-only queue and remembers the stamp as the page's latest. Older
/// records for the same page become stale: eviction pops from the front
/// and skips any record whose stamp is no longer the latest. Touching a
/// page is O(1); eviction is amortized O(1).
///
/// ```text
/// queue (front = oldest):  (1,#1) (2,#2) (3,#3) (2,#4)
///                                  ^^^^^ stale, page 2 was touched again
/// latest:                  {1: #1, 2: #4, 3: #3}
/// evict() -> 1, then 3, then 2
/// ```
///
/// When stale records outnumber live pages by more than
/// [`COMPACT_SLACK`], the queue is rebuilt without them.
#[derive(Debug, Default)]
pub struct LruReplacer {
    /// Access records in stamp order (front = oldest).
    queue: VecDeque<(PageId, u64)>,

    /// Latest stamp of every tracked page.
    latest: HashMap<PageId, u64>,

    /// Monotonic access counter.
    clock: u64,
}

impl LruReplacer {
    /// Create an empty LRU replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued records that no longer name a live access.
    pub fn stale_records(&self) -> usize {
        self.queue.len() - self.latest.len()
    }

    fn is_live(&self, page_id: PageId, stamp: u64) -> bool {
        self.latest.get(&page_id) == Some(&stamp)
    }

    fn maybe_compact(&mut self) {
        if self.stale_records() <= self.latest.len() + COMPACT_SLACK {
            return;
        }
        let before = self.queue.len();
        let latest = &self.latest;
        self.queue
            .retain(|(page_id, stamp)| latest.get(page_id) == Some(stamp));
        debug!(
            dropped = before - self.queue.len(),
            live = self.latest.len(),
            "compacted LRU queue"
        );
    }
}

impl Replacer for LruReplacer {
    fn record_access(&mut self, page_id: PageId) {
        self.clock += 1;
        self.latest.insert(page_id, self.clock);
        self.queue.push_back((page_id, self.clock));
        self.maybe_compact();
    }

    fn evict(&mut self) -> Option<PageId> {
        while let Some((page_id, stamp)) = self.queue.pop_front() {
            if self.is_live(page_id, stamp) {
                self.latest.remove(&page_id);
                return Some(page_id);
            }
            trace!(%page_id, stamp, "skipping stale LRU record");
        }
        None
    }

    fn len(&self) -> usize {
        self.latest.len()
    }
}
