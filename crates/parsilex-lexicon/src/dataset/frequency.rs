//! Frequency table row extraction.

use parsilex_core::{canonicalize, FrequencyRecord};

use crate::dataset::table::{field, parse_float, parse_records, sniff_delimiter, ColumnMap};
use crate::error::LexiconError;

const WORD_ALIASES: &[&str] = &["word", "token"];
const PER_MILLION_ALIASES: &[&str] = &["per_million", "permillion", "fpm", "frequency_per_million"];
const ZIPF_ALIASES: &[&str] = &["zipf", "zipf_value"];

/// One typed frequency entry, word already canonicalized.
#[derive(Debug, Clone)]
pub(crate) struct FrequencyRow {
    pub(crate) word: String,
    pub(crate) record: FrequencyRecord,
}

/// Parse the frequency dataset into typed rows.
///
/// Accepts tab- or comma-separated input. A header row is matched by
/// case-insensitive column aliases; a headerless file whose second
/// column is numeric is read positionally as `word`, `per_million`,
/// `zipf` (published frequency lists often ship without headers).
/// Malformed rows are skipped and counted, never fatal.
///
/// # Errors
///
/// Returns [`LexiconError::EmptyDataset`] for an empty payload and
/// [`LexiconError::MissingColumn`] when a header row lacks `word` or
/// `per_million`.
pub(crate) fn parse_frequency(text: &str) -> Result<(Vec<FrequencyRow>, usize), LexiconError> {
    const DATASET: &str = "frequency";

    let delimiter = sniff_delimiter(text);
    let records = parse_records(text, delimiter);
    let Some(first) = records.first() else {
        return Err(LexiconError::EmptyDataset { dataset: DATASET });
    };

    let headerless = first.len() >= 2 && parse_float(field(first, 1)).is_some();
    let (word_col, per_million_col, zipf_col, data_start) = if headerless {
        (0, 1, Some(2), 0)
    } else {
        let columns = ColumnMap::new(first);
        let word_col = columns
            .find(WORD_ALIASES)
            .ok_or(LexiconError::MissingColumn {
                dataset: DATASET,
                column: "word",
            })?;
        let per_million_col =
            columns
                .find(PER_MILLION_ALIASES)
                .ok_or(LexiconError::MissingColumn {
                    dataset: DATASET,
                    column: "per_million",
                })?;
        (word_col, per_million_col, columns.find(ZIPF_ALIASES), 1)
    };

    let mut rows = Vec::with_capacity(records.len().saturating_sub(data_start));
    let mut skipped = 0_usize;

    for (line, record) in records.iter().enumerate().skip(data_start) {
        let word = canonicalize(field(record, word_col));
        let per_million = parse_float(field(record, per_million_col));

        let (word, per_million) = match (word.is_empty(), per_million) {
            (false, Some(per_million)) => (word, per_million),
            _ => {
                skipped += 1;
                tracing::debug!(line, "skipping malformed frequency row");
                continue;
            }
        };

        let zipf = zipf_col.and_then(|col| parse_float(field(record, col)));
        rows.push(FrequencyRow {
            word,
            record: FrequencyRecord { per_million, zipf },
        });
    }

    Ok((rows, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_separated_with_header() {
        let text = "word\tper_million\tzipf\nکتاب\t120.5\t5.08\nخانه\t88.1\t\n";
        let (rows, skipped) = parse_frequency(text).expect("expected parsed rows");

        assert_eq!(skipped, 0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].word, "کتاب");
        assert_eq!(rows[0].record.per_million, 120.5);
        assert_eq!(rows[0].record.zipf, Some(5.08));
        assert_eq!(rows[1].record.zipf, None);
    }

    #[test]
    fn header_aliases_are_case_insensitive() {
        let text = "Word,FPM,Zipf_Value\nکتاب,120.5,5.08\n";
        let (rows, _) = parse_frequency(text).expect("expected parsed rows");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.per_million, 120.5);
        assert_eq!(rows[0].record.zipf, Some(5.08));
    }

    #[test]
    fn headerless_numeric_second_column_is_positional() {
        let text = "کتاب\t120.5\t5.08\nخانه\t88.1\n";
        let (rows, skipped) = parse_frequency(text).expect("expected parsed rows");

        assert_eq!(skipped, 0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].word, "کتاب");
        assert_eq!(rows[1].record.zipf, None);
    }

    #[test]
    fn words_are_canonicalized_on_load() {
        let text = "word\tper_million\nكتاب\t12.0\n";
        let (rows, _) = parse_frequency(text).expect("expected parsed rows");

        assert_eq!(rows[0].word, "کتاب");
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let text = "word\tper_million\n\t12.0\nکتاب\tabc\nخانه\t88.1\n";
        let (rows, skipped) = parse_frequency(text).expect("expected parsed rows");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].word, "خانه");
        assert_eq!(skipped, 2);
    }

    #[test]
    fn missing_word_column_is_fatal() {
        let text = "term\tper_million\nکتاب\t12.0\n";
        let err = parse_frequency(text).expect_err("expected missing column error");

        assert!(matches!(
            err,
            LexiconError::MissingColumn {
                dataset: "frequency",
                column: "word"
            }
        ));
    }

    #[test]
    fn missing_per_million_column_is_fatal() {
        let text = "word\tcount\nکتاب\t12\n";
        let err = parse_frequency(text).expect_err("expected missing column error");

        assert!(matches!(
            err,
            LexiconError::MissingColumn {
                dataset: "frequency",
                column: "per_million"
            }
        ));
    }

    #[test]
    fn empty_payload_is_fatal() {
        let err = parse_frequency("").expect_err("expected empty dataset error");
        assert!(matches!(
            err,
            LexiconError::EmptyDataset {
                dataset: "frequency"
            }
        ));
    }
}
