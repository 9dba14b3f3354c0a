// Copyright (c) 2025 Segment Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Serde support: a trie serializes as the flat key-to-value map returned by
//! [`SegmentTrie::to_map`] and deserializes from such a map using the default
//! delimiter.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::SegmentTrie;

impl<V: Serialize> Serialize for SegmentTrie<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.to_map())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for SegmentTrie<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = HashMap::<String, V>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
