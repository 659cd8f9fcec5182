//! Best-effort scanning of previously emitted lookup files.
//!
//! Emitted lookup files are JavaScript object literals, but prior runs, manual
//! edits, or surrounding runtime code are all tolerated: anything in the file
//! matching a `"key": "value"` pair is treated as an entry, with no attempt at
//! structural parsing.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use regex::Regex;

/// Loads the key/text entries of a previously emitted lookup file.
///
/// A missing or unreadable file is not an error; it yields an empty map. A
/// malformed file yields whatever entries its content happens to pattern-match.
pub fn load_existing_translations(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return BTreeMap::new(),
    };

    scan_entries(&content)
}

/// Extracts every `"key": "value"` pair found anywhere in the text.
pub fn scan_entries(content: &str) -> BTreeMap<String, String> {
    let entry_re = Regex::new(r#""([^"]+)":\s*"([^"]+)""#).unwrap();

    entry_re
        .captures_iter(content)
        .map(|captures| (captures[1].to_string(), captures[2].to_string()))
        .collect()
}
