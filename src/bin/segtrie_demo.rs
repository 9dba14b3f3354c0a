//! Walkthrough of the segment trie API.
//!
//! Stores a handful of dotted keys, looks them up, runs a wildcard query and
//! then uses a second trie as a table of patterns matched against a key.

use std::collections::BTreeMap;

use segment_trie::SegmentTrie;

fn main() -> anyhow::Result<()> {
    let mut trie = SegmentTrie::new(".");
    trie.put("a.b.c", "data1");
    trie.put("a.b.c.d", "data2");
    trie.put("a.b.c.d.e", "data3");
    trie.put("a.b.m.n.p", "data4");
    trie.put("a.b.m.s.t", "data5");

    for key in ["a.b.c", "a.b.c.d", "a.b.c.d.e", "a.b.m.n.p", "a.b.m.s.t"] {
        println!("{key} => {:?}", trie.get(key));
    }

    // Match a wildcard pattern against the stored keys
    let matches: BTreeMap<_, _> = trie.match_pattern("a.*.m.*.*").into_iter().collect();
    println!("{}", serde_json::to_string(&matches)?);

    // Stored keys used as patterns, matched against a concrete key
    let mut patterns = SegmentTrie::new(".");
    patterns.put("a.*.c.*", "data1");
    patterns.put("a.b.c.*", "data2");
    let matched: BTreeMap<_, _> = patterns.matching_patterns("a.b.c.d").into_iter().collect();
    println!("{}", serde_json::to_string(&matched)?);

    Ok(())
}
