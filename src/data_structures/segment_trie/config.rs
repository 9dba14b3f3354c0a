// Copyright (c) 2025 Segment Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Segment Trie.

use serde::{Deserialize, Serialize};

/// Default segment delimiter.
pub const DEFAULT_DELIMITER: &str = ".";

/// Default wildcard token used by pattern queries.
pub const DEFAULT_WILDCARD: &str = "*";

/// Configuration options for the Segment Trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentTrieConfig {
    /// String used to split keys into segments and join them back
    pub delimiter: String,

    /// Pattern token that matches exactly one arbitrary segment
    pub wildcard: String,
}

impl SegmentTrieConfig {
    /// Create a new default configuration (`"."` delimiter, `"*"` wildcard).
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            wildcard: DEFAULT_WILDCARD.to_string(),
        }
    }

    /// Set the segment delimiter.
    pub fn with_delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the wildcard token.
    pub fn with_wildcard<S: Into<String>>(mut self, wildcard: S) -> Self {
        self.wildcard = wildcard.into();
        self
    }
}

impl Default for SegmentTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
