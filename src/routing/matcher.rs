//! Pattern matching logic.
//!
//! # Responsibilities
//! - Compare a pattern against a concrete path segment by segment
//! - Bind `:name` segments to same-named parameters
//!
//! # Design Decisions
//! - Segment counts must agree (no prefix or wildcard matching)
//! - Matching is case-sensitive
//! - An empty path segment never binds a parameter
//! - No regex to guarantee O(n) matching

use std::collections::BTreeMap;

/// Match `path` against `pattern`, returning the bound parameters on success.
///
/// A pattern segment starting with `:` binds the corresponding path segment
/// under the name that follows the colon; any other segment must compare
/// equal. Trailing slashes are ignored on both sides.
pub fn match_pattern(pattern: &str, path: &str) -> Option<BTreeMap<String, String>> {
    let pattern_segments: Vec<&str> = segments(pattern);
    let path_segments: Vec<&str> = segments(path);

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            if path_segment.is_empty() {
                return None;
            }
            params.insert(name.to_string(), (*path_segment).to_string());
        } else if pattern_segment != path_segment {
            return None;
        }
    }

    Some(params)
}

fn segments(path: &str) -> Vec<&str> {
    path.trim_matches('/').split('/').collect()
}
