// Copyright (c) 2025 Segment Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Segment Trie.
//!
//! Each node stands for one path prefix. It may carry a value (an entry
//! terminates here) and owns its children outright, so dropping a node drops
//! the whole subtree below it.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Children of a node, keyed by path segment.
pub type Children<V> = HashMap<String, Node<V>, FnvBuildHasher>;

/// A node in the Segment Trie.
#[derive(Debug, Clone)]
pub struct Node<V> {
    /// Value stored at this node; `None` for a pure routing junction
    pub value: Option<V>,

    /// Map of segments to child nodes
    pub children: Children<V>,
}

impl<V> Node<V> {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            value: None,
            children: Children::default(),
        }
    }

    /// Whether no key extends past this node.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether the node carries neither a value nor children.
    pub fn is_vacant(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Counts the nodes below this one, not including itself.
    pub fn count_descendants(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.count_descendants())
            .sum()
    }
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_vacant() {
        let node: Node<u32> = Node::new();
        assert!(node.is_leaf());
        assert!(node.is_vacant());
        assert_eq!(node.count_descendants(), 0);
    }

    #[test]
    fn test_descendant_count() {
        let mut root: Node<u32> = Node::new();
        let mut a = Node::new();
        a.children.insert("b".to_string(), Node::new());
        a.children.insert("c".to_string(), Node::new());
        root.children.insert("a".to_string(), a);

        assert_eq!(root.count_descendants(), 3);
        assert!(!root.is_leaf());
        // A junction with children is not vacant even without a value
        assert!(!root.is_vacant());
    }

    #[test]
    fn test_zero_value_is_not_vacant() {
        let mut node = Node::new();
        node.value = Some(0u8);
        assert!(!node.is_vacant());
        assert!(node.is_leaf());
    }
}
