//! Corpus-wide related-post auditing.
//!
//! The site build emits one `posts.<locale>.json` per locale. These helpers
//! load that file and answer the editorial questions the CLI exposes: which
//! posts end up with no meaningful related posts (so the topic taxonomy
//! needs adjusting), and what the ranker would actually show for every post,
//! with score breakdowns.
//!
//! Scoring runs the same [`crate::ranking`] path the site uses, with tag
//! frequencies counted once over the whole corpus. The per-post passes are
//! independent, so they run in parallel via rayon.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rayon::prelude::*;
use thiserror::Error;

use crate::ranking::{ScoredCandidate, SharedTag, TagFrequency, score_candidates};
use crate::types::ContentItem;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a per-locale posts file (a JSON array of content items).
pub fn load_items(path: &Path) -> Result<Vec<ContentItem>, AuditError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Ids of items whose related set is empty once weak matches are dropped.
///
/// A related post counts as meaningful when it shares at least one tag and
/// scores at or above `min_score`. Returned in corpus order.
pub fn find_unrelated(items: &[ContentItem], min_score: f64) -> Vec<String> {
    let freq = TagFrequency::from_corpus(items);
    items
        .par_iter()
        .filter(|item| {
            !score_candidates(item, items, &freq)
                .iter()
                .any(|scored| scored.score >= min_score)
        })
        .map(|item| item.id.clone())
        .collect()
}

/// One related post as shown in the report, with its score breakdown.
#[derive(Debug, Clone)]
pub struct RelatedLine {
    pub id: String,
    pub score: f64,
    /// Shared tags with their IDF weights, heaviest first.
    pub shared: Vec<SharedTag>,
}

/// The report entry for a single post.
#[derive(Debug, Clone)]
pub struct ItemReport {
    pub id: String,
    pub related: Vec<RelatedLine>,
}

/// Preview the related-posts selection for every item in the corpus.
///
/// Up to `limit` candidates scoring at or above `min_score` are selected in
/// rank order; if fewer clear the bar, the selection is padded with the
/// remaining positive-score candidates so the report still shows what a
/// relaxed threshold would surface.
pub fn build_report(items: &[ContentItem], limit: usize, min_score: f64) -> Vec<ItemReport> {
    let freq = TagFrequency::from_corpus(items);
    items
        .par_iter()
        .map(|item| {
            let scored = score_candidates(item, items, &freq);
            let mut selected: Vec<&ScoredCandidate<'_>> = scored
                .iter()
                .filter(|s| s.score >= min_score)
                .take(limit)
                .collect();
            if selected.len() < limit {
                let chosen: HashSet<&str> =
                    selected.iter().map(|s| s.item.id.as_str()).collect();
                let need = limit - selected.len();
                selected.extend(
                    scored
                        .iter()
                        .filter(|s| s.score > 0.0 && !chosen.contains(s.item.id.as_str()))
                        .take(need),
                );
            }
            ItemReport {
                id: item.id.clone(),
                related: selected
                    .into_iter()
                    .map(|s| RelatedLine {
                        id: s.item.id.clone(),
                        score: s.score,
                        shared: s.shared.clone(),
                    })
                    .collect(),
            }
        })
        .collect()
}
