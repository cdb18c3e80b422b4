//! Common types and utilities shared across pagetree.
//!
//! This module contains fundamental primitives used by both the index and
//! the page cache:
//! - Configuration constants
//! - Error types
//! - Identifiers (PageId, NodeId)

pub mod config;
pub mod error;
mod node_id;
mod page_id;

pub use error::{Error, Result};
pub use node_id::NodeId;
pub use page_id::PageId;
