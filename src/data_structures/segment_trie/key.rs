// Copyright (c) 2025 Segment Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Key segmentation.
//!
//! Keys are split exactly the way `str::split` splits them, so an empty key
//! yields a single empty segment and repeated delimiters yield empty segments
//! in between. An empty delimiter splits a key into one segment per character.
//! Every key, including the empty one, yields at least one segment.

use std::str::Split;

/// Iterator over the segments of a key.
#[derive(Debug, Clone)]
pub(crate) enum Segments<'a> {
    /// Split on a non-empty delimiter.
    Delimited(Split<'a, &'a str>),

    /// One segment per character, used when the delimiter is empty.
    Chars {
        rest: &'a str,
        pending_empty: bool,
    },
}

/// Splits `key` into segments using `delimiter`.
pub(crate) fn segments<'a>(key: &'a str, delimiter: &'a str) -> Segments<'a> {
    if delimiter.is_empty() {
        Segments::Chars {
            rest: key,
            pending_empty: key.is_empty(),
        }
    } else {
        Segments::Delimited(key.split(delimiter))
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Segments::Delimited(split) => split.next(),
            Segments::Chars {
                rest,
                pending_empty,
            } => {
                if *pending_empty {
                    *pending_empty = false;
                    return Some("");
                }
                let current: &'a str = rest;
                let c = current.chars().next()?;
                let (head, tail) = current.split_at(c.len_utf8());
                *rest = tail;
                Some(head)
            }
        }
    }
}
