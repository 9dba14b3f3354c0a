//! Data file loader.
//!
//! Reads a flat table of key to value entries from a TOML or JSON file and
//! builds a trie over it. Values are kept as arbitrary JSON-compatible
//! payloads, so one file may mix strings, numbers, arrays and tables.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::data_structures::segment_trie::{SegmentTrie, SegmentTrieConfig};
use crate::error::{SegtrieError, SegtrieResult};

/// Parses `contents` as a flat map in the given format (`"toml"` or `"json"`).
pub fn parse_entries(contents: &str, format: &str) -> SegtrieResult<HashMap<String, Value>> {
    match format {
        "toml" => Ok(toml::from_str(contents)?),
        "json" => Ok(serde_json::from_str(contents)?),
        other => Err(SegtrieError::UnsupportedFormat(other.to_string())),
    }
}

/// Loads a data file into a new trie built with `config`.
///
/// The file format is chosen by extension.
///
/// # Returns
///
/// * `Ok(SegmentTrie)` - The populated trie.
/// * `Err(SegtrieError)` - If the file cannot be read or parsed.
pub fn load_trie<P: AsRef<Path>>(
    path: P,
    config: &SegmentTrieConfig,
) -> SegtrieResult<SegmentTrie<Value>> {
    let path = path.as_ref();
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| SegtrieError::UnsupportedFormat(path.display().to_string()))?;

    debug!(path = %path.display(), format = %format, "reading data file");
    let contents = fs::read_to_string(path)?;
    let entries = parse_entries(&contents, format)?;

    let mut trie = SegmentTrie::with_config(config.clone());
    trie.extend(entries);
    info!(path = %path.display(), entries = trie.len(), "data file loaded");

    Ok(trie)
}
