//! Persian lexical statistics: dataset loading, indexing, resolution,
//! and search.
//!
//! A [`Lexicon`] is built once from two reference datasets — a word
//! frequency table and an affect (valence/arousal/dominance/
//! concreteness) table — and is immutable afterwards. Queries resolve
//! a raw spelling to its records despite orthographic variation, or
//! search the vocabulary with tiered ranking. A `Lexicon` only exists
//! after a successful load, so "queried before loaded" is not a state
//! callers can reach.

pub mod dataset;
pub mod error;
pub mod index;
pub mod resolver;
pub mod search;

pub use dataset::{DataSource, LoadStats};
pub use error::LexiconError;
pub use index::DualIndex;
pub use search::SearchConfig;

use parsilex_core::{ExpandOptions, KeyMode, ResolvedEntry};

/// The loaded reference data and everything needed to query it.
#[derive(Debug)]
pub struct Lexicon {
    index: DualIndex,
    stats: LoadStats,
}

impl Lexicon {
    /// Load both reference datasets and build the dual index with
    /// default expansion options.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or parse failure from either dataset;
    /// on any error no `Lexicon` exists and queries are impossible.
    pub async fn load(
        frequency_source: &DataSource,
        affect_source: &DataSource,
    ) -> Result<Self, LexiconError> {
        Self::load_with_options(frequency_source, affect_source, ExpandOptions::default()).await
    }

    /// Like [`Lexicon::load`], with explicit expansion options.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Lexicon::load`].
    pub async fn load_with_options(
        frequency_source: &DataSource,
        affect_source: &DataSource,
        options: ExpandOptions,
    ) -> Result<Self, LexiconError> {
        let (frequency_rows, affect_rows, stats) =
            dataset::load_rows(frequency_source, affect_source).await?;
        let index = DualIndex::build(&frequency_rows, &affect_rows, options);
        Ok(Self { index, stats })
    }

    /// Resolve a single word with the full (highest-recall) expansion.
    #[must_use]
    pub fn resolve(&self, word: &str) -> ResolvedEntry {
        resolver::resolve(&self.index, word, KeyMode::Full)
    }

    /// Resolve a word list with the fast expansion, deduplicated and
    /// in input order.
    #[must_use]
    pub fn resolve_batch<I, S>(&self, words: I) -> Vec<ResolvedEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        resolver::resolve_batch(&self.index, words)
    }

    /// Search the vocabulary with tiered ranking.
    #[must_use]
    pub fn search(&self, query: &str, config: &SearchConfig) -> Vec<ResolvedEntry> {
        search::search(&self.index, query, config)
    }

    /// Row and skip counts from the load.
    #[must_use]
    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// The underlying index, for callers composing their own queries.
    #[must_use]
    pub fn index(&self) -> &DualIndex {
        &self.index
    }
}
