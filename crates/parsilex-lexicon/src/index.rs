//! The dual match-key index.
//!
//! Two independent mappings — frequency-by-key and affect-by-key —
//! built once from the parsed reference rows and read-only afterwards.
//! Each entry is registered under every key of its full expansion, so
//! a lookup under any spelling variant lands on the same record. The
//! index also carries the search support structures: a first-character
//! bucket map over the vocabulary and the insertion-ordered vocabulary
//! list itself.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use parsilex_core::{expand_keys, AffectRecord, ExpandOptions, FrequencyRecord, KeyMode};

use crate::dataset::{AffectRow, FrequencyRow};

/// Bucket label for a word: its first character. The sentinel covers
/// the theoretical empty-word case so bucketing is total.
pub(crate) fn bucket_key(word: &str) -> char {
    word.chars().next().unwrap_or('#')
}

#[derive(Debug)]
pub struct DualIndex {
    frequency: HashMap<String, FrequencyRecord>,
    affect: HashMap<String, AffectRecord>,
    buckets: HashMap<char, Vec<String>>,
    vocabulary: Vec<String>,
    options: ExpandOptions,
}

impl DualIndex {
    /// Build the index from parsed rows.
    ///
    /// Keys collide when distinct source words expand to the same
    /// spelling; those are presumed near-synonymous variants, and the
    /// first-inserted record wins. Later collisions are dropped
    /// silently — an intentional policy, deterministic for a fixed row
    /// order.
    pub(crate) fn build(
        frequency_rows: &[FrequencyRow],
        affect_rows: &[AffectRow],
        options: ExpandOptions,
    ) -> Self {
        let mut index = Self {
            frequency: HashMap::new(),
            affect: HashMap::new(),
            buckets: HashMap::new(),
            vocabulary: Vec::new(),
            options,
        };
        let mut seen_words: HashSet<String> = HashSet::new();

        for row in frequency_rows {
            index.register_word(&mut seen_words, &row.word);
            for key in expand_keys(&row.word, KeyMode::Full, options) {
                if let Entry::Vacant(slot) = index.frequency.entry(key) {
                    slot.insert(row.record);
                }
            }
        }

        for row in affect_rows {
            index.register_word(&mut seen_words, &row.word);
            for key in expand_keys(&row.word, KeyMode::Full, options) {
                if let Entry::Vacant(slot) = index.affect.entry(key) {
                    slot.insert(row.record);
                }
            }
        }

        index
    }

    fn register_word(&mut self, seen: &mut HashSet<String>, word: &str) {
        if seen.insert(word.to_string()) {
            self.vocabulary.push(word.to_string());
            self.buckets
                .entry(bucket_key(word))
                .or_default()
                .push(word.to_string());
        }
    }

    #[must_use]
    pub fn lookup_frequency(&self, key: &str) -> Option<FrequencyRecord> {
        self.frequency.get(key).copied()
    }

    #[must_use]
    pub fn lookup_affect(&self, key: &str) -> Option<AffectRecord> {
        self.affect.get(key).copied()
    }

    /// Canonical words whose first character matches `bucket`.
    #[must_use]
    pub(crate) fn bucket(&self, bucket: char) -> &[String] {
        self.buckets.get(&bucket).map_or(&[], Vec::as_slice)
    }

    /// All distinct canonical entry words, in dataset order.
    #[must_use]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// The expansion options the index was built with. Query-side key
    /// expansion must use the same options or lookups would miss keys
    /// the build never inserted.
    #[must_use]
    pub fn options(&self) -> ExpandOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use parsilex_core::{canonicalize, AffectSource, ZWNJ};

    use super::*;

    fn frequency_row(word: &str, per_million: f64) -> FrequencyRow {
        FrequencyRow {
            word: canonicalize(word),
            record: FrequencyRecord {
                per_million,
                zipf: None,
            },
        }
    }

    fn affect_row(word: &str, valence: f64) -> AffectRow {
        AffectRow {
            word: canonicalize(word),
            record: AffectRecord {
                valence: Some(valence),
                arousal: None,
                dominance: None,
                concreteness: None,
                source: AffectSource::Human,
            },
        }
    }

    #[test]
    fn entries_are_reachable_under_every_expanded_key() {
        let joined = format!("هدف{ZWNJ}مند");
        let index = DualIndex::build(
            &[frequency_row(&joined, 12.5)],
            &[],
            ExpandOptions::default(),
        );

        assert!(index.lookup_frequency(&joined).is_some());
        assert!(index.lookup_frequency("هدفمند").is_some());
        assert!(index.lookup_frequency(&joined.replace(ZWNJ, " ")).is_none());
        // The space form resolves through query-side expansion instead.
    }

    #[test]
    fn first_writer_wins_on_key_collision() {
        // Both words expand to the collapsed key "هدفمند".
        let joined = format!("هدف{ZWNJ}مند");
        let index = DualIndex::build(
            &[frequency_row(&joined, 12.5), frequency_row("هدفمند", 99.0)],
            &[],
            ExpandOptions::default(),
        );

        let record = index
            .lookup_frequency("هدفمند")
            .expect("expected collided key present");
        assert_eq!(record.per_million, 12.5);
    }

    #[test]
    fn frequency_and_affect_maps_are_independent() {
        let index = DualIndex::build(
            &[frequency_row("کتاب", 120.0)],
            &[affect_row("خانه", 6.0)],
            ExpandOptions::default(),
        );

        assert!(index.lookup_frequency("کتاب").is_some());
        assert!(index.lookup_affect("کتاب").is_none());
        assert!(index.lookup_frequency("خانه").is_none());
        assert!(index.lookup_affect("خانه").is_some());
    }

    #[test]
    fn vocabulary_deduplicates_across_datasets_in_order() {
        let index = DualIndex::build(
            &[frequency_row("کتاب", 120.0), frequency_row("خانه", 88.0)],
            &[affect_row("کتاب", 6.0), affect_row("دل", 7.0)],
            ExpandOptions::default(),
        );

        assert_eq!(index.vocabulary(), ["کتاب", "خانه", "دل"]);
    }

    #[test]
    fn buckets_group_by_first_character() {
        let index = DualIndex::build(
            &[
                frequency_row("دل", 50.0),
                frequency_row("دلتنگ", 5.0),
                frequency_row("کتاب", 120.0),
            ],
            &[],
            ExpandOptions::default(),
        );

        assert_eq!(index.bucket('د'), ["دل", "دلتنگ"]);
        assert_eq!(index.bucket('ک'), ["کتاب"]);
        assert!(index.bucket('م').is_empty());
    }

    #[test]
    fn alef_fold_option_controls_folded_keys() {
        let folded = DualIndex::build(
            &[frequency_row("آباد", 3.0)],
            &[],
            ExpandOptions { alef_fold: true },
        );
        let unfolded = DualIndex::build(
            &[frequency_row("آباد", 3.0)],
            &[],
            ExpandOptions { alef_fold: false },
        );

        assert!(folded.lookup_frequency("اباد").is_some());
        assert!(unfolded.lookup_frequency("اباد").is_none());
    }
}
