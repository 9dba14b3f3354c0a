// Copyright (c) 2025 Segment Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tree walks that gather many entries at once: wildcard pattern queries,
//! reverse matching of stored patterns, and full enumeration.
//!
//! All walks accumulate into a single result map while keeping the segments
//! matched so far on a shared path stack, which is joined with the trie's
//! delimiter whenever a value-bearing node is reached.

use std::collections::HashMap;

use tracing::trace;

use super::key::segments;
use super::node::Node;
use super::SegmentTrie;

/// Delimiter and wildcard tokens threaded through a walk.
#[derive(Debug, Clone, Copy)]
struct Tokens<'c> {
    delimiter: &'c str,
    wildcard: &'c str,
}

impl<V> Node<V> {
    /// Collects entries below this node that match `parts`.
    ///
    /// Literal parts are followed in place; a wildcard part fans out to every
    /// child and the walk continues in each of them with the remaining parts.
    /// A literal last part checks the child's value directly instead of
    /// recursing with no parts left.
    fn collect_matches<'t>(
        &'t self,
        parts: &[&str],
        path: &mut Vec<&'t str>,
        tokens: Tokens<'_>,
        out: &mut HashMap<String, &'t V>,
    ) {
        if parts.is_empty() {
            if let Some(value) = &self.value {
                out.insert(path.join(tokens.delimiter), value);
            }
            return;
        }

        let base = path.len();
        let mut node = self;
        for (i, part) in parts.iter().enumerate() {
            if *part == tokens.wildcard {
                trace!(depth = path.len(), fan_out = node.children.len(), "wildcard fan-out");
                for (segment, child) in &node.children {
                    path.push(segment.as_str());
                    child.collect_matches(&parts[i + 1..], path, tokens, out);
                    path.pop();
                }
                break;
            }

            let Some((segment, child)) = node.children.get_key_value(*part) else {
                break;
            };
            path.push(segment.as_str());

            if i + 1 == parts.len() {
                if let Some(value) = &child.value {
                    out.insert(path.join(tokens.delimiter), value);
                }
                break;
            }
            node = child;
        }
        path.truncate(base);
    }

    /// Collects stored patterns below this node that match the concrete `key_segments`.
    fn collect_patterns<'t>(
        &'t self,
        key_segments: &[&str],
        path: &mut Vec<&'t str>,
        tokens: Tokens<'_>,
        out: &mut HashMap<String, &'t V>,
    ) {
        let Some((first, rest)) = key_segments.split_first() else {
            if let Some(value) = &self.value {
                out.insert(path.join(tokens.delimiter), value);
            }
            return;
        };

        if let Some((segment, child)) = self.children.get_key_value(*first) {
            path.push(segment.as_str());
            child.collect_patterns(rest, path, tokens, out);
            path.pop();
        }

        // A key segment equal to the wildcard was already followed above
        if *first != tokens.wildcard {
            if let Some((segment, child)) = self.children.get_key_value(tokens.wildcard) {
                path.push(segment.as_str());
                child.collect_patterns(rest, path, tokens, out);
                path.pop();
            }
        }
    }

    /// Collects every value-bearing node at or below this one.
    fn collect_all<'t>(
        &'t self,
        path: &mut Vec<&'t str>,
        delimiter: &str,
        out: &mut HashMap<String, &'t V>,
    ) {
        if let Some(value) = &self.value {
            out.insert(path.join(delimiter), value);
        }

        for (segment, child) in &self.children {
            path.push(segment.as_str());
            child.collect_all(path, delimiter, out);
            path.pop();
        }
    }
}

impl<V> SegmentTrie<V> {
    /// Finds all entries whose key matches a wildcard pattern.
    ///
    /// The pattern is split like a key. Each part is either a literal segment
    /// or the wildcard token, which matches exactly one arbitrary segment, so
    /// only keys with as many segments as the pattern can match. Wildcards and
    /// literals may be mixed freely.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern to match, e.g. `"a.*.c"`.
    ///
    /// # Returns
    ///
    /// A map from each matching key to its value. Order is unspecified.
    pub fn match_pattern<P: AsRef<str>>(&self, pattern: P) -> HashMap<String, &V> {
        let parts: Vec<&str> = segments(pattern.as_ref(), &self.config.delimiter).collect();
        let mut path = Vec::with_capacity(parts.len());
        let mut out = HashMap::new();
        self.root
            .collect_matches(&parts, &mut path, self.tokens(), &mut out);
        out
    }

    /// Finds all stored patterns that match a concrete key.
    ///
    /// This is the reverse of [`match_pattern`](Self::match_pattern): keys in
    /// the trie are treated as patterns in which a segment equal to the
    /// wildcard token stands for any one segment, and `key` is tested
    /// against each of them.
    ///
    /// # Returns
    ///
    /// A map from each matching stored pattern to its value.
    pub fn matching_patterns<K: AsRef<str>>(&self, key: K) -> HashMap<String, &V> {
        let key_segments: Vec<&str> = segments(key.as_ref(), &self.config.delimiter).collect();
        let mut path = Vec::with_capacity(key_segments.len());
        let mut out = HashMap::new();
        self.root
            .collect_patterns(&key_segments, &mut path, self.tokens(), &mut out);
        out
    }

    /// Returns every entry in the trie as a flat map from key to value.
    pub fn to_map(&self) -> HashMap<String, &V> {
        let mut path = Vec::new();
        let mut out = HashMap::with_capacity(self.len);
        self.root
            .collect_all(&mut path, &self.config.delimiter, &mut out);
        out
    }

    fn tokens(&self) -> Tokens<'_> {
        Tokens {
            delimiter: &self.config.delimiter,
            wildcard: &self.config.wildcard,
        }
    }
}
