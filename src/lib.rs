//! Segment Trie Library
//!
//! An in-memory associative container keyed by delimiter-segmented strings
//! (`"a.b.c"`), organized as a prefix tree over segments. It supports
//! insertion, exact lookup, deletion, existence checks, full enumeration and
//! wildcard queries where `*` matches exactly one segment. It is meant as a
//! building block for hierarchical namespaces such as configuration trees,
//! topic or routing tables, and metric names.
//!
//! The library also carries the pieces the `segtrie` binary is built from:
//! layered configuration, error types and a data-file loader.

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod loader;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::segment_trie::{SegmentTrie, SegmentTrieConfig};

/// Version information for the Segment Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
