//! Vocabulary search with tiered ranking.

use std::collections::HashSet;

use parsilex_core::{canonicalize, expand_keys, KeyMode, ResolvedEntry};

use crate::index::{bucket_key, DualIndex};
use crate::resolver::resolve;

/// Zipf stand-in for entries with no Zipf value, so unranked entries
/// sort after every real one.
const MISSING_ZIPF: f64 = -999.0;

const TIER_EXACT: u8 = 0;
const TIER_PREFIX: u8 = 1;
const TIER_SUBSTRING: u8 = 2;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Hard cap on returned results, keeping interactive callers
    /// responsive no matter how broad the query is.
    pub result_cap: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { result_cap: 250 }
    }
}

/// Search the vocabulary for words matching `query`.
///
/// The query is canonicalized and compared under its fast key variants
/// (itself plus its space/joiner-collapsed forms). Candidates come
/// from the first-character bucket for the exact and prefix tiers; the
/// substring tier scans the vocabulary, since a containing word can
/// start with any letter. Candidates are deduplicated by canonical
/// form, resolved, and dropped when unmatched. Ranking is exact >
/// prefix > substring, then descending Zipf within a tier; ties keep
/// candidate order (stable sort). The result is truncated to
/// `config.result_cap`.
///
/// Each call is independent and idempotent; the index is never
/// mutated, so overlapping concurrent calls are safe.
#[must_use]
pub fn search(index: &DualIndex, query: &str, config: &SearchConfig) -> Vec<ResolvedEntry> {
    let canon = canonicalize(query);
    if canon.is_empty() {
        return Vec::new();
    }
    let variants = expand_keys(&canon, KeyMode::Fast, index.options());

    // The first-character bucket yields the exact/prefix candidates
    // cheaply and puts them ahead in candidate order. The vocabulary
    // pass catches what the bucket cannot see: substring matches and
    // prefix matches whose first letter the alef fold changed.
    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates: Vec<(u8, &str)> = Vec::new();
    for word in index.bucket(bucket_key(&canon)) {
        if let Some(tier) = match_tier(word, &variants) {
            if seen.insert(word.as_str()) {
                candidates.push((tier, word.as_str()));
            }
        }
    }
    for word in index.vocabulary() {
        if seen.contains(word.as_str()) {
            continue;
        }
        if let Some(tier) = match_tier(word, &variants) {
            seen.insert(word.as_str());
            candidates.push((tier, word.as_str()));
        }
    }

    let mut ranked: Vec<(u8, f64, ResolvedEntry)> = Vec::new();
    for (tier, word) in candidates {
        let entry = resolve(index, word, KeyMode::Full);
        if !entry.matched {
            continue;
        }
        let zipf = entry
            .frequency
            .and_then(|f| f.zipf)
            .unwrap_or(MISSING_ZIPF);
        ranked.push((tier, zipf, entry));
    }

    // Vec::sort_by is stable, so equal (tier, zipf) pairs keep their
    // candidate order.
    ranked.sort_by(|a, b| {
        a.0.cmp(&b.0).then(
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });
    ranked.truncate(config.result_cap);
    ranked.into_iter().map(|(_, _, entry)| entry).collect()
}

/// Best match tier of `word` against any query variant.
fn match_tier(word: &str, variants: &[String]) -> Option<u8> {
    let mut best: Option<u8> = None;
    for variant in variants {
        let tier = if word == variant {
            TIER_EXACT
        } else if word.starts_with(variant.as_str()) {
            TIER_PREFIX
        } else if word.contains(variant.as_str()) {
            TIER_SUBSTRING
        } else {
            continue;
        };
        best = Some(best.map_or(tier, |b| b.min(tier)));
        if best == Some(TIER_EXACT) {
            break;
        }
    }
    best
}
