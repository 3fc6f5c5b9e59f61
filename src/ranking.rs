//! IDF-weighted relevance ranking over tag-id sets.
//!
//! Two posts are related when they share topic tags, but not every shared
//! tag carries the same signal: a catch-all tag that sits on most of the
//! corpus says little, a tag shared by three posts says a lot. Each tag is
//! therefore weighted by its inverse document frequency,
//!
//! ```text
//! idf(tag) = ln((N + 1) / (freq(tag) + 1))
//! ```
//!
//! where `N` is the population size used for frequency counting and
//! `freq(tag)` counts the items referencing the tag. A candidate's score is
//! the sum of weights over exactly the tags it shares with the target.
//!
//! Ordering is score descending, then shared-tag count descending, then
//! publish date descending; ties beyond that keep input order (the sort is
//! stable). Scoring and de-duplication go by tag `id` only — display names
//! are locale-dependent and not unique.
//!
//! [`rank`] does not apply a minimum-score threshold; callers that want to
//! drop weakly related matches filter [`score_candidates`] themselves (the
//! audit tooling does, with its `--min-score` flag).

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::types::ContentItem;

/// Tag document frequencies for a fixed population of items.
///
/// Built once per ranking call (or once per corpus for batch tooling) and
/// consulted for every weight lookup. Tags absent from the population get
/// `freq = 0`, i.e. the maximum weight for that population size.
#[derive(Debug, Clone)]
pub struct TagFrequency {
    counts: HashMap<String, usize>,
    population: usize,
}

impl TagFrequency {
    /// Count tag frequencies across an entire corpus.
    pub fn from_corpus(items: &[ContentItem]) -> Self {
        let mut counts = HashMap::new();
        for item in items {
            count_item_tags(&mut counts, item);
        }
        TagFrequency {
            counts,
            population: items.len(),
        }
    }

    /// Count tag frequencies across `candidates` plus `target`.
    ///
    /// The target is counted once: if it already appears in `candidates`
    /// (by id), it is not added again.
    pub fn build(target: &ContentItem, candidates: &[ContentItem]) -> Self {
        let mut freq = Self::from_corpus(candidates);
        if !candidates.iter().any(|c| c.id == target.id) {
            count_item_tags(&mut freq.counts, target);
            freq.population += 1;
        }
        freq
    }

    /// Inverse-frequency weight for a tag id.
    pub fn idf(&self, tag_id: &str) -> f64 {
        let freq = self.counts.get(tag_id).copied().unwrap_or(0);
        ((self.population as f64 + 1.0) / (freq as f64 + 1.0)).ln()
    }

    /// Number of items the frequencies were counted over.
    pub fn population(&self) -> usize {
        self.population
    }
}

/// Count each distinct non-empty tag id of `item` once.
fn count_item_tags(counts: &mut HashMap<String, usize>, item: &ContentItem) {
    let mut seen = HashSet::new();
    for tag in &item.tags {
        if tag.id.is_empty() || !seen.insert(tag.id.as_str()) {
            continue;
        }
        *counts.entry(tag.id.clone()).or_insert(0) += 1;
    }
}

/// A shared tag and the weight it contributed to a candidate's score.
#[derive(Debug, Clone)]
pub struct SharedTag {
    pub id: String,
    pub weight: f64,
}

/// A candidate item with its relevance score against a target.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub item: &'a ContentItem,
    /// Sum of IDF weights over the shared tag ids.
    pub score: f64,
    /// Number of distinct tag ids shared with the target.
    pub shared_count: usize,
    /// Shared tags with their weights, heaviest first.
    pub shared: Vec<SharedTag>,
}

/// Score every candidate against `target` and return them in rank order.
///
/// Candidates sharing no tags with the target are dropped, as is any
/// candidate with the target's own id. The returned ordering is the full
/// three-key sort described in the module docs; no limit or score threshold
/// is applied here.
pub fn score_candidates<'a>(
    target: &ContentItem,
    candidates: &'a [ContentItem],
    freq: &TagFrequency,
) -> Vec<ScoredCandidate<'a>> {
    let target_tag_ids: HashSet<&str> = target
        .tags
        .iter()
        .filter(|t| !t.id.is_empty())
        .map(|t| t.id.as_str())
        .collect();

    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .filter(|candidate| candidate.id != target.id)
        .filter_map(|candidate| {
            let mut seen = HashSet::new();
            let mut shared = Vec::new();
            let mut score = 0.0;
            for tag in &candidate.tags {
                if tag.id.is_empty() || !seen.insert(tag.id.as_str()) {
                    continue;
                }
                if !target_tag_ids.contains(tag.id.as_str()) {
                    continue;
                }
                let weight = freq.idf(&tag.id);
                score += weight;
                shared.push(SharedTag {
                    id: tag.id.clone(),
                    weight,
                });
            }
            if shared.is_empty() {
                return None;
            }
            shared.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
            Some(ScoredCandidate {
                item: candidate,
                score,
                shared_count: shared.len(),
                shared,
            })
        })
        .collect();

    // Stable sort: remaining ties keep input order.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.shared_count.cmp(&a.shared_count))
            .then_with(|| b.item.published_at.cmp(&a.item.published_at))
    });
    scored
}

/// Return up to `limit` items related to `target`, most relevant first.
///
/// Frequencies are counted over `candidates` plus the target. A target with
/// no tags, an empty candidate list, or a zero limit all yield an empty
/// result. Deterministic and side-effect free.
pub fn rank<'a>(
    target: &ContentItem,
    candidates: &'a [ContentItem],
    limit: usize,
) -> Vec<&'a ContentItem> {
    if limit == 0 || candidates.is_empty() {
        return Vec::new();
    }
    let freq = TagFrequency::build(target, candidates);
    score_candidates(target, candidates, &freq)
        .into_iter()
        .take(limit)
        .map(|scored| scored.item)
        .collect()
}
