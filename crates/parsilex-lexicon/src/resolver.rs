//! Word resolution against the dual index.

use std::collections::HashSet;

use parsilex_core::{canonicalize, expand_keys, rescue_candidates, KeyMode, ResolvedEntry};

use crate::index::DualIndex;

/// Resolve one raw word.
///
/// Canonicalizes, expands match keys, and scans them in order taking
/// the first frequency hit and the first affect hit independently — a
/// word may have only one of the two. When no key hits the frequency
/// index, the yeh/hamza rescue rewrites are tried against it (and only
/// it). Absence of any hit is `matched == false`, never an error.
#[must_use]
pub fn resolve(index: &DualIndex, raw: &str, mode: KeyMode) -> ResolvedEntry {
    let canon = canonicalize(raw);
    if canon.is_empty() {
        return ResolvedEntry::unmatched(canon);
    }

    let keys = expand_keys(&canon, mode, index.options());
    let mut frequency = None;
    let mut affect = None;
    for key in &keys {
        if frequency.is_none() {
            frequency = index.lookup_frequency(key);
        }
        if affect.is_none() {
            affect = index.lookup_affect(key);
        }
        if frequency.is_some() && affect.is_some() {
            break;
        }
    }

    if frequency.is_none() {
        for candidate in rescue_candidates(&canon) {
            if let Some(record) = index.lookup_frequency(&candidate) {
                tracing::debug!(word = %canon, rewrite = %candidate, "frequency recovered by rescue rule");
                frequency = Some(record);
                break;
            }
        }
    }

    ResolvedEntry {
        matched: frequency.is_some() || affect.is_some(),
        word: canon,
        frequency,
        affect,
    }
}

/// Resolve a word list with the fast key expansion.
///
/// Entries are deduplicated by canonical form keeping the first
/// occurrence; output order matches the deduplicated input order.
/// Empty and whitespace-only lines are dropped. Each entry resolves
/// independently of the others.
#[must_use]
pub fn resolve_batch<I, S>(index: &DualIndex, words: I) -> Vec<ResolvedEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();
    for word in words {
        let canon = canonicalize(word.as_ref());
        if canon.is_empty() || !seen.insert(canon.clone()) {
            continue;
        }
        entries.push(resolve(index, &canon, KeyMode::Fast));
    }
    entries
}
