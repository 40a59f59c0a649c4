//! Autocomplete ranking of timezone labels.
//!
//! Labels that start with the query (ignoring case) come first, sorted
//! alphabetically. The remaining slots are filled with labels that are
//! similar enough to the query, best match first.

use crate::matcher::SequenceMatcher;
use std::cmp::Ordering;

/// Maximum number of suggestions Discord shows for one autocomplete request.
pub const MAX_SUGGESTIONS: usize = 25;

/// Minimum similarity ratio for a label to be offered as a fuzzy match.
pub const SIMILARITY_CUTOFF: f64 = 0.4;

/// Tunables of the ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankPolicy {
    /// Maximum number of labels returned.
    pub limit: usize,
    /// Minimum similarity ratio for fuzzy matches, inclusive.
    pub cutoff: f64,
}

impl RankPolicy {
    /// Creates a policy with the given limit and cutoff.
    #[must_use]
    pub const fn new(limit: usize, cutoff: f64) -> Self {
        Self { limit, cutoff }
    }
}

impl Default for RankPolicy {
    fn default() -> Self {
        Self::new(MAX_SUGGESTIONS, SIMILARITY_CUTOFF)
    }
}

/// Ranks `labels` against `query` with the default policy.
///
/// `labels` is expected to hold distinct strings.
#[must_use]
pub fn rank_labels<'a>(labels: impl IntoIterator<Item = &'a str>, query: &str) -> Vec<&'a str> {
    rank_labels_with(labels, query, &RankPolicy::default())
}

/// Ranks `labels` against `query`.
///
/// The result is the case-insensitive prefix matches in alphabetical order,
/// followed by fuzzy matches in descending similarity, at most
/// `policy.limit` labels in total. Prefix testing ignores case; similarity
/// is computed on the query as typed.
#[must_use]
pub fn rank_labels_with<'a>(
    labels: impl IntoIterator<Item = &'a str>,
    query: &str,
    policy: &RankPolicy,
) -> Vec<&'a str> {
    let query_lower = query.to_lowercase();
    let (mut ranked, remaining): (Vec<&str>, Vec<&str>) = labels
        .into_iter()
        .partition(|label| label.to_lowercase().starts_with(&query_lower));

    ranked.sort_by_cached_key(|label| (label.to_lowercase(), *label));
    ranked.truncate(policy.limit);

    let fuzzy_slots = policy.limit - ranked.len();
    if fuzzy_slots > 0 {
        ranked.extend(fuzzy_matches(remaining, query, policy.cutoff, fuzzy_slots));
    }

    ranked
}

/// Labels whose similarity to `query` reaches `cutoff`, best first, at most
/// `limit` of them. Equal scores are ordered alphabetically.
fn fuzzy_matches<'a>(
    candidates: Vec<&'a str>,
    query: &str,
    cutoff: f64,
    limit: usize,
) -> Vec<&'a str> {
    let matcher = SequenceMatcher::new(query);

    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .filter(|label| matcher.ratio_upper_bound(label.chars().count()) >= cutoff)
        .filter_map(|label| {
            let score = matcher.ratio(label);
            (score >= cutoff).then_some((score, label))
        })
        .collect();

    scored.sort_by(|(score_a, label_a), (score_b, label_b)| {
        score_b
            .total_cmp(score_a)
            .then_with(|| compare_case_insensitive(label_a, label_b))
    });
    scored.truncate(limit);

    scored.into_iter().map(|(_, label)| label).collect()
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
