//! Ordered iterators over the leaf chain.

use std::iter::FusedIterator;
use std::ops::Bound;

use crate::common::NodeId;

use super::node::Node;

/// Position inside the leaf chain.
pub(crate) struct LeafCursor<'a, K, V> {
    nodes: &'a [Node<K, V>],
    leaf: Option<NodeId>,
    pos: usize,
}

impl<'a, K, V> LeafCursor<'a, K, V> {
    pub(crate) fn new(nodes: &'a [Node<K, V>], leaf: Option<NodeId>, pos: usize) -> Self {
        Self { nodes, leaf, pos }
    }

    /// Yield the entry under the cursor and advance, hopping to the next
    /// leaf when the current one is exhausted.
    fn advance(&mut self) -> Option<(&'a K, &'a V)> {
        let nodes = self.nodes;
        loop {
            let id = self.leaf?;
            match &nodes[id.index()] {
                Node::Leaf {
                    keys,
                    values,
                    next_leaf,
                } => {
                    if self.pos < keys.len() {
                        let item = (&keys[self.pos], &values[self.pos]);
                        self.pos += 1;
                        return Some(item);
                    }
                    self.leaf = *next_leaf;
                    self.pos = 0;
                }
                Node::Internal { .. } => unreachable!("leaf chain links only leaves"),
            }
        }
    }

    fn finish(&mut self) {
        self.leaf = None;
    }
}

/// Iterator over every entry of an [`OrderedIndex`](super::OrderedIndex)
/// in ascending key order.
pub struct Iter<'a, K, V> {
    cursor: LeafCursor<'a, K, V>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(cursor: LeafCursor<'a, K, V>, remaining: usize) -> Self {
        Self { cursor, remaining }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.advance()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the entries of an [`OrderedIndex`](super::OrderedIndex)
/// inside a key range.
pub struct Range<'a, K, V> {
    cursor: LeafCursor<'a, K, V>,
    end: Bound<K>,
}

impl<'a, K: Ord, V> Range<'a, K, V> {
    pub(crate) fn new(cursor: LeafCursor<'a, K, V>, end: Bound<K>) -> Self {
        Self { cursor, end }
    }
}

impl<'a, K: Ord, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.cursor.advance()?;
        let in_range = match &self.end {
            Bound::Included(end) => key <= end,
            Bound::Excluded(end) => key < end,
            Bound::Unbounded => true,
        };
        if in_range {
            Some((key, value))
        } else {
            self.cursor.finish();
            None
        }
    }
}

impl<K: Ord, V> FusedIterator for Range<'_, K, V> {}
