//! Record types shared across the workspace.

use serde::Serialize;

/// Lexical frequency statistics for one entry.
///
/// Immutable once loaded; owned by the index, copied into results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyRecord {
    /// Occurrences per million tokens.
    pub per_million: f64,
    /// Standardized logarithmic frequency; not every dataset carries it.
    pub zipf: Option<f64>,
}

/// Where an affect rating came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AffectSource {
    /// Collected from human raters.
    Human,
    /// Predicted by a model rather than rated; flagged in the dataset
    /// by a sentinel value and read from its own column set.
    Extrapolated,
}

/// Valence/arousal/dominance ratings plus concreteness for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffectRecord {
    pub valence: Option<f64>,
    pub arousal: Option<f64>,
    pub dominance: Option<f64>,
    pub concreteness: Option<f64>,
    pub source: AffectSource,
}

/// Everything known about one queried word.
///
/// Constructed fresh per query and never persisted. Absence of data is
/// `matched == false`, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedEntry {
    /// The canonical form of the queried word.
    pub word: String,
    pub frequency: Option<FrequencyRecord>,
    pub affect: Option<AffectRecord>,
    pub matched: bool,
}

impl ResolvedEntry {
    /// An entry for a word the datasets know nothing about.
    #[must_use]
    pub fn unmatched(word: String) -> Self {
        Self {
            word,
            frequency: None,
            affect: None,
            matched: false,
        }
    }
}
