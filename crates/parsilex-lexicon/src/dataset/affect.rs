//! Affect table row extraction.

use parsilex_core::{canonicalize, AffectRecord, AffectSource};

use crate::dataset::table::{field, parse_float, parse_records, ColumnMap};
use crate::error::LexiconError;

/// Case-sensitive dataset-label sentinel marking model-extrapolated
/// rows; for those rows only the `ebw_*` columns are meaningful.
const EXTRAPOLATED_SENTINEL: &str = "XXX";

const WORD_ALIASES: &[&str] = &["word", "token"];
const DATASET_ALIASES: &[&str] = &["dataset", "source"];

/// Primary (human-rated) and extrapolated column aliases for the four
/// measures, in valence/arousal/dominance/concreteness order.
const MEASURES: &[(&[&str], &[&str])] = &[
    (&["valence"], &["ebw_valence"]),
    (&["arousal"], &["ebw_arousal"]),
    (&["dominance"], &["ebw_dominance"]),
    (&["concreteness"], &["ebw_concreteness"]),
];

/// One typed affect entry, word already canonicalized.
#[derive(Debug, Clone)]
pub(crate) struct AffectRow {
    pub(crate) word: String,
    pub(crate) record: AffectRecord,
}

/// Parse the affect dataset into typed rows.
///
/// The table is RFC4180 CSV. Rows labelled with the `XXX` sentinel
/// read the four measures from the extrapolated (`ebw_*`) columns and
/// are marked [`AffectSource::Extrapolated`]; any stray values in
/// their human columns are ignored. Column selection is per row; the
/// values themselves are never transformed. Rows with an empty word or
/// with no usable measure at all are skipped and counted.
///
/// # Errors
///
/// Returns [`LexiconError::EmptyDataset`] for an empty payload and
/// [`LexiconError::MissingColumn`] when the header lacks `word`,
/// `dataset`, or any of the four primary measures.
pub(crate) fn parse_affect(text: &str) -> Result<(Vec<AffectRow>, usize), LexiconError> {
    const DATASET: &str = "affect";

    let records = parse_records(text, ',');
    let Some(header) = records.first() else {
        return Err(LexiconError::EmptyDataset { dataset: DATASET });
    };

    let columns = ColumnMap::new(header);
    let word_col = columns
        .find(WORD_ALIASES)
        .ok_or(LexiconError::MissingColumn {
            dataset: DATASET,
            column: "word",
        })?;
    let dataset_col = columns
        .find(DATASET_ALIASES)
        .ok_or(LexiconError::MissingColumn {
            dataset: DATASET,
            column: "dataset",
        })?;

    let mut human_cols = [0_usize; 4];
    let mut extrapolated_cols = [None; 4];
    for (i, (primary, extrapolated)) in MEASURES.iter().enumerate() {
        human_cols[i] = columns
            .find(primary)
            .ok_or(LexiconError::MissingColumn {
                dataset: DATASET,
                column: primary[0],
            })?;
        extrapolated_cols[i] = columns.find(extrapolated);
    }

    let mut rows = Vec::with_capacity(records.len().saturating_sub(1));
    let mut skipped = 0_usize;

    for (line, record) in records.iter().enumerate().skip(1) {
        let word = canonicalize(field(record, word_col));
        if word.is_empty() {
            skipped += 1;
            tracing::debug!(line, "skipping affect row with empty word");
            continue;
        }

        let extrapolated = field(record, dataset_col) == EXTRAPOLATED_SENTINEL;
        let mut values = [None; 4];
        for (i, value) in values.iter_mut().enumerate() {
            let col = if extrapolated {
                extrapolated_cols[i]
            } else {
                Some(human_cols[i])
            };
            *value = col.and_then(|col| parse_float(field(record, col)));
        }

        if values.iter().all(Option::is_none) {
            skipped += 1;
            tracing::debug!(line, word = %word, "skipping affect row with no usable measures");
            continue;
        }

        rows.push(AffectRow {
            word,
            record: AffectRecord {
                valence: values[0],
                arousal: values[1],
                dominance: values[2],
                concreteness: values[3],
                source: if extrapolated {
                    AffectSource::Extrapolated
                } else {
                    AffectSource::Human
                },
            },
        });
    }

    Ok((rows, skipped))
}
