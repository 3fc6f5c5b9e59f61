//! Shared data model consumed by every module in the crate.
//!
//! These types mirror the JSON shape of the per-locale posts files
//! (`posts.<locale>.json`) produced by the site's build pipeline, so they
//! deserialize straight out of that file for the audit CLI and straight out
//! of whatever store the application uses at runtime.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A topic a content item is associated with.
///
/// Identity is `id`, which is stable and unique within a locale. `name` is
/// the display label — it is locale-dependent, not guaranteed unique, and
/// must never be used for equality or scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A single article as supplied by the caller.
///
/// This crate never mutates an item and holds no reference to one beyond a
/// single call. Identity is `id`; two items are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Raw markdown source of the article body.
    #[serde(default)]
    pub body: String,
    pub published_at: DateTime<Utc>,
    /// Topic tags in display order. Order is preserved by search-text
    /// construction; scoring de-duplicates by tag id.
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

/// Supported display locales for reading-time phrases.
///
/// Unrecognized tags fall back to English — [`Locale::from_tag`] is total
/// over arbitrary input so callers can pass the active locale straight
/// through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    /// Resolve a two-letter locale tag (e.g. `"en"`, `"tr"`).
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "tr" => Locale::Tr,
            _ => Locale::En,
        }
    }
}
