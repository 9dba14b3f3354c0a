// Copyright (c) 2025 Segment Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Segment Trie Implementation
//!
//! An in-memory associative container keyed by delimiter-segmented strings
//! such as `"a.b.c"`. The tree is organized over segments rather than
//! characters, so keys sharing a prefix of segments share nodes. Besides the
//! point operations it answers wildcard queries where the `*` token matches
//! exactly one segment.
//!
//! # Example
//!
//! ```
//! use segment_trie::SegmentTrie;
//!
//! let mut trie = SegmentTrie::new(".");
//! trie.put("a.b.c", "x1");
//! trie.put("a.b.m.n.p", "x4");
//! trie.put("a.b.m.s.t", "x5");
//!
//! assert_eq!(trie.get("a.b.c"), Some(&"x1"));
//! assert!(!trie.has("a.b"));
//!
//! let matches = trie.match_pattern("a.*.m.*.*");
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches["a.b.m.n.p"], &"x4");
//! ```
//!
//! # Concurrency
//!
//! The trie performs no internal synchronization. Readers take `&self` and
//! writers take `&mut self`, so sharing one across threads means wrapping it
//! in a lock chosen by the caller, for example `RwLock<SegmentTrie<V>>` when
//! concurrent `get`/`match_pattern` calls are wanted.

mod config;
mod key;
mod matching;
mod node;
mod serialization;

use tracing::{debug, trace};

pub use config::{SegmentTrieConfig, DEFAULT_DELIMITER, DEFAULT_WILDCARD};
pub use node::Node;

use key::segments;
use node::Children;

/// A prefix tree over delimiter-separated key segments.
///
/// The root node always exists and never carries a value. `len` counts the
/// nodes whose value is set, which is not the same as the number of nodes:
/// intermediate segments exist as routing junctions without values.
///
/// # Type Parameters
///
/// * `V` - Type of values stored in the trie.
#[derive(Debug, Clone)]
pub struct SegmentTrie<V> {
    /// The root node of the trie, mutated in place and never replaced
    root: Node<V>,

    /// Configuration options
    config: SegmentTrieConfig,

    /// Number of nodes carrying a value
    len: usize,
}

impl<V> SegmentTrie<V> {
    /// Creates a new empty `SegmentTrie` splitting keys on `delimiter`.
    ///
    /// # Arguments
    ///
    /// * `delimiter` - The string separating key segments.
    pub fn new<S: Into<String>>(delimiter: S) -> Self {
        Self::with_config(SegmentTrieConfig::new().with_delimiter(delimiter))
    }

    /// Creates a new empty `SegmentTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: SegmentTrieConfig) -> Self {
        Self {
            root: Node::new(),
            config,
            len: 0,
        }
    }

    /// Returns the configuration this trie was created with.
    pub fn config(&self) -> &SegmentTrieConfig {
        &self.config
    }

    /// Returns the segment delimiter.
    pub fn delimiter(&self) -> &str {
        &self.config.delimiter
    }

    /// Returns the wildcard token used by pattern queries.
    pub fn wildcard(&self) -> &str {
        &self.config.wildcard
    }

    /// Returns the number of keys with a value. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key has a value.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes below the root, value-bearing or not.
    pub fn node_count(&self) -> usize {
        self.root.count_descendants()
    }

    /// Inserts a value under `key`, replacing any value already stored there.
    ///
    /// Missing segments along the path are created as routing junctions. The
    /// entry count only grows when the final node had no value before.
    ///
    /// # Returns
    ///
    /// The value previously stored under `key`, if any.
    pub fn put<K: AsRef<str>>(&mut self, key: K, value: V) -> Option<V> {
        let mut node = &mut self.root;
        for segment in segments(key.as_ref(), &self.config.delimiter) {
            node = node.children.entry_ref(segment).or_insert_with(Node::new);
        }

        let previous = node.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Retrieves the value stored under `key`.
    ///
    /// Returns `None` when any segment is missing, or when the path exists
    /// only as a routing junction.
    pub fn get<K: AsRef<str>>(&self, key: K) -> Option<&V> {
        self.find(key.as_ref())?.value.as_ref()
    }

    /// Retrieves a mutable reference to the value stored under `key`.
    pub fn get_mut<K: AsRef<str>>(&mut self, key: K) -> Option<&mut V> {
        let mut node = &mut self.root;
        for segment in segments(key.as_ref(), &self.config.delimiter) {
            node = node.children.get_mut(segment)?;
        }
        node.value.as_mut()
    }

    /// Checks if a value is stored under `key`.
    pub fn has<K: AsRef<str>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Removes and returns the value stored under `key`.
    ///
    /// A terminal node without children is detached from its parent. A node
    /// that other keys extend past keeps its place and only loses its value.
    /// Ancestors left without value or children are not pruned.
    pub fn pop<K: AsRef<str>>(&mut self, key: K) -> Option<V> {
        let key = key.as_ref();
        let parts: Vec<&str> = segments(key, &self.config.delimiter).collect();
        let (last, init) = parts.split_last()?;

        let mut parent = &mut self.root;
        for segment in init {
            parent = parent.children.get_mut(*segment)?;
        }

        let child = parent.children.get_mut(*last)?;
        let value = child.value.take();
        if child.is_leaf() {
            parent.children.remove(*last);
            trace!(key = %key, "pruned leaf node");
        }

        if value.is_some() {
            self.len -= 1;
        }
        value
    }

    /// Removes every entry. The root node itself is kept.
    pub fn clear(&mut self) {
        debug!(entries = self.len, "clearing segment trie");
        self.root.children = Children::default();
        self.len = 0;
    }

    /// Walks the path for `key` and returns the node it ends on.
    fn find(&self, key: &str) -> Option<&Node<V>> {
        let mut node = &self.root;
        for segment in segments(key, &self.config.delimiter) {
            node = node.children.get(segment)?;
        }
        Some(node)
    }
}

impl<V> Default for SegmentTrie<V> {
    fn default() -> Self {
        Self::with_config(SegmentTrieConfig::default())
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for SegmentTrie<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for SegmentTrie<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::default();
        trie.extend(iter);
        trie
    }
}
