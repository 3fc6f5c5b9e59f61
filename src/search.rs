//! Searchable-text construction and query matching.
//!
//! Each content item is flattened into a single normalized string covering
//! its id, title, summary, and topic tags; a query matches when its
//! normalized form appears as a substring. Matching is normalization-based
//! only — no fuzzy or typo-tolerant logic. Multi-word queries are one
//! contiguous substring test; callers wanting token-wise AND semantics split
//! the query and call [`matches`] per token.

use crate::normalize::normalize;
use crate::types::{ContentItem, TagRef};

/// Build the normalized searchable string for an item.
///
/// Concatenates `id`, `title`, `summary`, and each tag's `id` and `name`
/// (skipping empty fields) with single spaces, preserving tag order, then
/// normalizes the result. Deterministic for a given item.
pub fn build_search_text(item: &ContentItem) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3 + item.tags.len() * 2);
    parts.push(&item.id);
    parts.push(&item.title);
    parts.push(&item.summary);
    for tag in &item.tags {
        if !tag.id.is_empty() {
            parts.push(&tag.id);
        }
        if !tag.name.is_empty() {
            parts.push(&tag.name);
        }
    }
    normalize(&parts.join(" "))
}

/// Test whether `candidate_text` contains `query` after normalizing both.
///
/// An empty normalized query always matches — wildcard semantics, used by
/// callers to mean "no filter".
pub fn matches(candidate_text: &str, query: &str) -> bool {
    let normalized_query = normalize(query);
    if normalized_query.is_empty() {
        return true;
    }
    normalize(candidate_text).contains(&normalized_query)
}

/// Test a query against a tag's display name.
pub fn tag_matches(tag: &TagRef, query: &str) -> bool {
    matches(&tag.name, query)
}
