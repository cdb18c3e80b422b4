//! B+ tree index implementation.
//!
//! # Components
//! - [`OrderedIndex`] - The tree: insert, search, ordered scans
//! - [`Iter`] / [`Range`] - Iterators that walk the leaf chain
//!
//! Nodes live in an arena owned by the index and refer to each other by
//! [`NodeId`](crate::common::NodeId), including the non-owning
//! `next_leaf` links between neighbouring leaves.

mod iter;
mod node;
mod tree;

pub use iter::{Iter, Range};
pub use tree::{OrderedIndex, SharedIndex};
