//! Index structures.
//!
//! Currently implements:
//! - [`btree`] - An ordered B+ tree index with a linked leaf level

pub mod btree;

pub use btree::{OrderedIndex, SharedIndex};
