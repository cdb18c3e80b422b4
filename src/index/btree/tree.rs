//! The ordered index - an arena-backed B+ tree.
//!
//! The [`OrderedIndex`] provides:
//! - Ordered insert with eager, pre-insert node splitting
//! - O(log n) point search
//! - A left-to-right leaf chain for ordered scans

use std::borrow::Borrow;
use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::common::config::SPLIT_INDEX;
use crate::common::NodeId;

use super::iter::{Iter, LeafCursor, Range};
use super::node::Node;

/// An [`OrderedIndex`] behind a reader-writer lock.
///
/// The index itself performs no locking. Collaborators that share one
/// instance between threads serialize writers through this wrapper.
pub type SharedIndex<K, V> = Arc<RwLock<OrderedIndex<K, V>>>;

/// An ordered key-value index built on a balanced multi-way tree.
///
/// # Architecture
/// ```text
/// ┌───────────────────────────────────────────────────────────┐
/// │                      OrderedIndex                         │
/// │   root ──▶ nodes: Vec<Node>   (arena, indexed by NodeId)  │
/// │                                                           │
/// │                  [Internal: 4]                            │
/// │                  /           \                            │
/// │         [Leaf: 1 2 3] ──▶ [Leaf: 4 5 6 7 8] ──▶ None      │
/// └───────────────────────────────────────────────────────────┘
/// ```
///
/// Values live only in leaves. Separator keys in internal nodes are copies
/// of the first key of the right-hand leaf, so a key equal to a separator
/// is always found in the right subtree.
///
/// Inserting an existing key overwrites its value in place and returns
/// the previous value.
///
/// # Thread Safety
/// None. The index is a single-writer structure; see [`SharedIndex`].
///
/// # Example
/// ```
/// use pagetree::OrderedIndex;
///
/// let mut index = OrderedIndex::new();
/// for i in 1..=10 {
///     index.insert(i, format!("value-{}", i));
/// }
///
/// assert_eq!(index.search(&8).map(String::as_str), Some("value-8"));
/// assert_eq!(index.search(&11), None);
/// assert_eq!(index.height(), 2);
/// ```
pub struct OrderedIndex<K, V> {
    /// Every node ever created. Nodes are never freed individually.
    nodes: Vec<Node<K, V>>,

    /// Current root; starts as an empty leaf.
    root: NodeId,

    /// Number of distinct keys.
    len: usize,

    /// Number of levels, 1 while the root is a leaf.
    height: usize,
}

impl<K: Ord + Clone, V> OrderedIndex<K, V> {
    /// Create an empty index (a single empty leaf).
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::empty_leaf()],
            root: NodeId::new(0),
            len: 0,
            height: 1,
        }
    }

    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert `value` under `key`.
    ///
    /// Returns the previous value if `key` was already present (it is
    /// overwritten in place), or `None` for a new key.
    ///
    /// Full nodes met on the way down are split before descending, so no
    /// node ever exceeds [`MAX_KEYS`](crate::common::config::MAX_KEYS).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.node(self.root).is_full() {
            self.grow();
        }

        let mut current = self.root;
        loop {
            let (idx, child) = match &mut self.nodes[current.index()] {
                Node::Leaf { keys, values, .. } => {
                    return match keys.binary_search(&key) {
                        Ok(pos) => Some(std::mem::replace(&mut values[pos], value)),
                        Err(pos) => {
                            keys.insert(pos, key);
                            values.insert(pos, value);
                            self.len += 1;
                            None
                        }
                    };
                }
                Node::Internal { keys, children } => {
                    let idx = keys.partition_point(|k| *k <= key);
                    (idx, children[idx])
                }
            };

            if self.node(child).is_full() {
                // The promoted separator now sits at `idx`; resolve again
                // to pick between the two halves.
                self.split_child(current, idx);
                continue;
            }
            current = child;
        }
    }

    // ========================================================================
    // Public API: Lookup
    // ========================================================================

    /// Return the value stored under `key`, or `None` if it is absent.
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.node(self.find_leaf(key)) {
            Node::Leaf { keys, values, .. } => keys
                .binary_search_by(|k| k.borrow().cmp(key))
                .ok()
                .map(|pos| &values[pos]),
            Node::Internal { .. } => unreachable!("descent always ends at a leaf"),
        }
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let leaf = self.find_leaf(key);
        match &mut self.nodes[leaf.index()] {
            Node::Leaf { keys, values, .. } => {
                match keys.binary_search_by(|k| k.borrow().cmp(key)) {
                    Ok(pos) => Some(&mut values[pos]),
                    Err(_) => None,
                }
            }
            Node::Internal { .. } => unreachable!("descent always ends at a leaf"),
        }
    }

    /// Check whether `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    // ========================================================================
    // Public API: Ordered traversal
    // ========================================================================

    /// Iterate over all entries in ascending key order.
    ///
    /// Walks the leaf chain from the leftmost leaf.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let cursor = LeafCursor::new(&self.nodes, Some(self.leftmost_leaf()), 0);
        Iter::new(cursor, self.len)
    }

    /// Iterate over the entries whose keys fall inside `bounds`.
    ///
    /// The start is located by a tree descent; the rest of the scan follows
    /// the leaf chain.
    pub fn range<R>(&self, bounds: R) -> Range<'_, K, V>
    where
        R: RangeBounds<K>,
    {
        let (leaf, pos) = match bounds.start_bound() {
            Bound::Included(start) => {
                let leaf = self.find_leaf(start);
                (leaf, self.node(leaf).keys().partition_point(|k| k < start))
            }
            Bound::Excluded(start) => {
                let leaf = self.find_leaf(start);
                (leaf, self.node(leaf).keys().partition_point(|k| k <= start))
            }
            Bound::Unbounded => (self.leftmost_leaf(), 0),
        };

        let cursor = LeafCursor::new(&self.nodes, Some(leaf), pos);
        Range::new(cursor, bounds.end_bound().cloned())
    }

    /// Iterate over keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterate over values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    // ========================================================================
    // Public API: Info
    // ========================================================================

    /// Number of distinct keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels from root to leaves (1 for a leaf root).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Wrap the index in a lock so it can be shared between threads.
    pub fn into_shared(self) -> SharedIndex<K, V> {
        Arc::new(RwLock::new(self))
    }

    // ========================================================================
    // Internal: Descent
    // ========================================================================

    #[inline]
    fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.index()]
    }

    /// Descend to the leaf whose key range covers `key`.
    ///
    /// At an internal node the child index is the number of separators
    /// `<= key`, so an exact separator match continues to its right.
    fn find_leaf<Q>(&self, key: &Q) -> NodeId
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Node::Internal { keys, children } = self.node(current) {
            let idx = keys.partition_point(|k| k.borrow() <= key);
            current = children[idx];
        }
        current
    }

    fn leftmost_leaf(&self) -> NodeId {
        let mut current = self.root;
        while let Node::Internal { children, .. } = self.node(current) {
            current = children[0];
        }
        current
    }

    // ========================================================================
    // Internal: Splitting
    // ========================================================================

    /// Put a new internal root above the full root and split the old root.
    fn grow(&mut self) {
        let old_root = self.root;
        let new_root = NodeId::new(self.nodes.len());
        self.nodes.push(Node::root_over(old_root));
        self.root = new_root;
        self.split_child(new_root, 0);
        self.height += 1;

        debug!(
            root = %new_root,
            height = self.height,
            nodes = self.nodes.len(),
            "ordered index grew a level"
        );
    }

    /// Split the full child at `parent.children[idx]`.
    ///
    /// Keys from [`SPLIT_INDEX`] onward move to a new right sibling. A leaf
    /// copies its separator up and splices the sibling into the leaf chain;
    /// an internal node moves its separator up together with the children
    /// to its right.
    fn split_child(&mut self, parent: NodeId, idx: usize) {
        let child = match self.node(parent) {
            Node::Internal { children, .. } => children[idx],
            Node::Leaf { .. } => unreachable!("a leaf has no children to split"),
        };
        let sibling_id = NodeId::new(self.nodes.len());

        let (separator, sibling) = match &mut self.nodes[child.index()] {
            Node::Leaf {
                keys,
                values,
                next_leaf,
            } => {
                let right_keys = keys.split_off(SPLIT_INDEX);
                let right_values = values.split_off(SPLIT_INDEX);
                let separator = right_keys[0].clone();
                let sibling = Node::Leaf {
                    keys: right_keys,
                    values: right_values,
                    next_leaf: next_leaf.replace(sibling_id),
                };
                (separator, sibling)
            }
            Node::Internal { keys, children } => {
                let right_keys = keys.split_off(SPLIT_INDEX + 1);
                let right_children = children.split_off(SPLIT_INDEX + 1);
                let separator = keys.remove(SPLIT_INDEX);
                let sibling = Node::Internal {
                    keys: right_keys,
                    children: right_children,
                };
                (separator, sibling)
            }
        };

        let is_leaf = sibling.is_leaf();
        self.nodes.push(sibling);

        match &mut self.nodes[parent.index()] {
            Node::Internal { keys, children } => {
                keys.insert(idx, separator);
                children.insert(idx + 1, sibling_id);
            }
            Node::Leaf { .. } => unreachable!("a leaf has no children to split"),
        }

        trace!(%parent, %child, sibling = %sibling_id, is_leaf, "split node");
    }
}

impl<K: Ord + Clone, V> Default for OrderedIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, V> FromIterator<(K, V)> for OrderedIndex<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<K: Ord + Clone, V> Extend<(K, V)> for OrderedIndex<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Ord + Clone, V> IntoIterator for &'a OrderedIndex<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedIndex<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
