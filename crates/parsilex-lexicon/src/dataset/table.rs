//! Delimited-table parsing.
//!
//! The reference datasets arrive as tab-separated frequency lists and
//! RFC4180-quoted CSV affect tables. One explicit state machine parses
//! both: quoting is harmless for tab-separated input, and field values
//! never need it. Nothing here knows about column meanings; that lives
//! with the per-dataset row extractors.

use std::collections::HashMap;

/// Pick the field delimiter from the first line: a tab anywhere in it
/// means tab-separated, otherwise comma-separated.
pub(crate) fn sniff_delimiter(text: &str) -> char {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.contains('\t') {
        '\t'
    } else {
        ','
    }
}

/// Split `text` into records of fields.
///
/// Implements RFC4180 quoting: a field starting with `"` runs until
/// the closing quote, `""` inside it is a literal quote, and delimiters
/// and line breaks inside it are field content. Carriage returns are
/// dropped everywhere, matching the datasets' mixed line endings.
/// Blank lines produce no record.
pub(crate) fn parse_records(text: &str, delimiter: char) -> Vec<Vec<String>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\r' => {}
                _ => field.push(c),
            }
        } else {
            match c {
                '"' if field.is_empty() => in_quotes = true,
                '\r' => {}
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    flush_record(&mut records, &mut record);
                }
                c if c == delimiter => record.push(std::mem::take(&mut field)),
                c => field.push(c),
            }
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        flush_record(&mut records, &mut record);
    }

    records
}

fn flush_record(records: &mut Vec<Vec<String>>, record: &mut Vec<String>) {
    let finished = std::mem::take(record);
    let is_blank_line = finished.len() == 1 && finished[0].is_empty();
    if !is_blank_line {
        records.push(finished);
    }
}

/// Case-insensitive header-name to column-index mapping.
pub(crate) struct ColumnMap {
    indices: HashMap<String, usize>,
}

impl ColumnMap {
    pub(crate) fn new(header: &[String]) -> Self {
        let indices = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_lowercase(), i))
            .collect();
        Self { indices }
    }

    /// Index of the first alias present in the header, if any.
    pub(crate) fn find(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| self.indices.get(*alias).copied())
    }
}

/// Fetch a field by column index; out-of-range fields read as empty.
pub(crate) fn field<'a>(record: &'a [String], index: usize) -> &'a str {
    record.get(index).map_or("", |f| f.trim())
}

/// Parse a finite float, treating empty and malformed fields as absent.
pub(crate) fn parse_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
