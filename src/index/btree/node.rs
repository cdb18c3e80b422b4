//! Tree nodes stored in the index arena.

use crate::common::config::MAX_KEYS;
use crate::common::NodeId;

/// A node of the ordered index.
///
/// Internal nodes and leaves are distinct variants, so a leaf can never
/// carry child links and an internal node can never carry values.
///
/// # Layout
/// ```text
/// Internal:  keys     [ k0 | k1 | k2 ]
///            children [ c0 | c1 | c2 | c3 ]      children = keys + 1
///
/// Leaf:      keys     [ k0 | k1 | k2 ]
///            values   [ v0 | v1 | v2 ]           values = keys
///            next_leaf ──▶ right sibling leaf (None for the rightmost)
/// ```
///
/// A separator `k_i` divides `c_i` (keys `< k_i`) from `c_{i+1}`
/// (keys `>= k_i`).
#[derive(Debug, Clone)]
pub(crate) enum Node<K, V> {
    Internal {
        keys: Vec<K>,
        children: Vec<NodeId>,
    },
    Leaf {
        keys: Vec<K>,
        values: Vec<V>,
        next_leaf: Option<NodeId>,
    },
}

impl<K, V> Node<K, V> {
    /// An empty leaf with no right sibling.
    pub(crate) fn empty_leaf() -> Self {
        Node::Leaf {
            keys: Vec::with_capacity(MAX_KEYS),
            values: Vec::with_capacity(MAX_KEYS),
            next_leaf: None,
        }
    }

    /// An internal node with a single child and no separators.
    ///
    /// Only valid transiently, while the old root is split under it.
    pub(crate) fn root_over(child: NodeId) -> Self {
        Node::Internal {
            keys: Vec::with_capacity(MAX_KEYS),
            children: vec![child],
        }
    }

    #[inline]
    pub(crate) fn keys(&self) -> &[K] {
        match self {
            Node::Internal { keys, .. } | Node::Leaf { keys, .. } => keys,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// A full node must be split before it receives another key.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.keys().len() >= MAX_KEYS
    }
}
