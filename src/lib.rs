//! # Post Discovery
//!
//! The content-discovery core of a multi-locale article site. The surrounding
//! application owns routing, rendering, and content loading; this crate owns
//! the algorithmic parts: ranking articles by topical relevance, folding
//! free-text queries into a comparable form across alphabets, estimating
//! reading time from markdown, keeping large article bodies cheap to store,
//! and memoizing any of the above with per-entry expiry.
//!
//! # Architecture: Pure Functions Over Plain Data
//!
//! Callers hold a collection of [`types::ContentItem`]s (id, title, summary,
//! markdown body, publish date, topic tags) and call into this crate with
//! plain references. Nothing here performs I/O or calls back into the
//! application; the only mutable state is a [`cache::CacheStore`] instance
//! the caller constructs and owns.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Shared data model: `ContentItem`, `TagRef`, `Locale` |
//! | [`normalize`] | Locale-aware text folding into a canonical comparable form |
//! | [`search`] | Searchable-text construction and normalized substring matching |
//! | [`ranking`] | IDF-weighted related-item scoring and ordering |
//! | [`cache`] | Generic key→value store with per-entry TTL and lazy eviction |
//! | [`payload`] | Compress-or-passthrough codec for large article bodies |
//! | [`reading_time`] | Markdown word extraction and bucketed duration phrases |
//! | [`audit`] | Corpus-wide related-post auditing used by the CLI |
//!
//! # Design Decisions
//!
//! ## IDF Weighting Over Raw Tag Counts
//!
//! Related-post ranking weights each shared topic by its inverse document
//! frequency across the corpus. A catch-all tag like "programming" that sits
//! on half the corpus says almost nothing about two posts being related; a
//! tag shared by three posts says a lot. Counting shared tags without
//! weighting lets the catch-all tags dominate. See [`ranking`].
//!
//! ## Lazy Cache Eviction
//!
//! [`cache::CacheStore`] removes expired entries only when they are touched:
//! a `get` that finds a stale entry deletes it, and every `set` sweeps the
//! whole store before inserting. There are no background timers and no
//! threads; an idle store may hold stale entries in memory until the next
//! operation. See the module docs for the trade-off.
//!
//! ## Compress Only When It Helps
//!
//! [`payload::encode`] refuses to produce an encoded body that is not
//! strictly smaller than the original, and skips compression entirely below
//! a size threshold where the overhead cannot pay for itself. Decoding is
//! best-effort display text: a malformed payload yields an empty string, not
//! an error.

pub mod audit;
pub mod cache;
pub mod normalize;
pub mod payload;
pub mod ranking;
pub mod reading_time;
pub mod search;
pub mod types;
