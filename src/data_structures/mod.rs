//! Data structures for the Segment Trie crate.
//!
//! This module contains the segment-keyed trie and its node model. The
//! structures here are single-threaded; callers that share them across
//! threads supply their own synchronization.

pub mod segment_trie;

// Re-export common data structures
pub use segment_trie::{Node, SegmentTrie, SegmentTrieConfig};
