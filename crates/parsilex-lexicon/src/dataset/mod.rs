//! Reference dataset loading.
//!
//! The two datasets (frequency and affect) are fetched concurrently —
//! they populate disjoint indices — and parsed eagerly into typed rows.
//! A failure in either fetch or in header validation fails the whole
//! load; the caller must not run queries against a partial index.

pub(crate) mod affect;
pub(crate) mod frequency;
pub(crate) mod table;

use std::fmt;
use std::path::PathBuf;

pub(crate) use affect::AffectRow;
pub(crate) use frequency::FrequencyRow;

use crate::error::LexiconError;

/// Where a reference dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl From<&str> for DataSource {
    /// An `http://`/`https://` prefix selects a URL source; anything
    /// else is a filesystem path.
    fn from(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Row and skip counts from one completed load.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadStats {
    pub frequency_rows: usize,
    pub frequency_skipped: usize,
    pub affect_rows: usize,
    pub affect_skipped: usize,
}

async fn fetch(source: &DataSource) -> Result<String, LexiconError> {
    match source {
        DataSource::Url(url) => Ok(reqwest::get(url)
            .await?
            .error_for_status()?
            .text()
            .await?),
        DataSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LexiconError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
        }
    }
}

/// Fetch and parse both datasets.
///
/// # Errors
///
/// Propagates the first fetch or parse failure from either dataset as
/// the single aggregate load error.
pub(crate) async fn load_rows(
    frequency_source: &DataSource,
    affect_source: &DataSource,
) -> Result<(Vec<FrequencyRow>, Vec<AffectRow>, LoadStats), LexiconError> {
    let (frequency_text, affect_text) =
        tokio::try_join!(fetch(frequency_source), fetch(affect_source))?;

    let (frequency_rows, frequency_skipped) = frequency::parse_frequency(&frequency_text)?;
    let (affect_rows, affect_skipped) = affect::parse_affect(&affect_text)?;

    let stats = LoadStats {
        frequency_rows: frequency_rows.len(),
        frequency_skipped,
        affect_rows: affect_rows.len(),
        affect_skipped,
    };

    if stats.frequency_skipped > 0 || stats.affect_skipped > 0 {
        tracing::warn!(
            frequency_skipped = stats.frequency_skipped,
            affect_skipped = stats.affect_skipped,
            "skipped malformed reference rows"
        );
    }
    tracing::info!(
        frequency = %frequency_source,
        affect = %affect_source,
        frequency_rows = stats.frequency_rows,
        affect_rows = stats.affect_rows,
        "reference datasets loaded"
    );

    Ok((frequency_rows, affect_rows, stats))
}
