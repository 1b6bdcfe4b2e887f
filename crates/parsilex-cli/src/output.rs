//! Plain-text and CSV rendering of resolved entries.

use parsilex_core::{AffectSource, ResolvedEntry};

/// Print one entry in a human-readable block.
pub(crate) fn print_entry(entry: &ResolvedEntry) {
    if !entry.matched {
        println!("{}\tno match", entry.word);
        return;
    }
    println!("{}", entry.word);
    if let Some(frequency) = &entry.frequency {
        println!("  per million  {:.3}", frequency.per_million);
        println!("  zipf         {}", fmt_opt(frequency.zipf));
    }
    if let Some(affect) = &entry.affect {
        println!("  valence      {}", fmt_opt(affect.valence));
        println!("  arousal      {}", fmt_opt(affect.arousal));
        println!("  dominance    {}", fmt_opt(affect.dominance));
        println!("  concreteness {}", fmt_opt(affect.concreteness));
        println!("  source       {}", source_label(affect.source));
    }
}

/// Print entries one per line: word, per-million, zipf.
pub(crate) fn print_entries(entries: &[ResolvedEntry]) {
    for entry in entries {
        if entry.matched {
            let (per_million, zipf) = entry
                .frequency
                .map_or((String::from("—"), String::from("—")), |f| {
                    (format!("{:.3}", f.per_million), fmt_opt(f.zipf))
                });
            println!("{}\t{per_million}\t{zipf}", entry.word);
        } else {
            println!("{}\tno match", entry.word);
        }
    }
}

/// Render entries as CSV with a header row. Missing values are empty
/// fields; fields containing delimiters or quotes are quoted.
pub(crate) fn to_csv(entries: &[ResolvedEntry]) -> String {
    let mut csv = String::from(
        "word,matched,per_million,zipf,valence,arousal,dominance,concreteness,affect_source\n",
    );
    for entry in entries {
        let (per_million, zipf) = entry
            .frequency
            .map_or((String::new(), String::new()), |f| {
                (f.per_million.to_string(), csv_opt(f.zipf))
            });
        let (valence, arousal, dominance, concreteness, source) = entry.affect.map_or(
            (
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ),
            |a| {
                (
                    csv_opt(a.valence),
                    csv_opt(a.arousal),
                    csv_opt(a.dominance),
                    csv_opt(a.concreteness),
                    source_label(a.source).to_string(),
                )
            },
        );
        csv.push_str(&format!(
            "{},{},{per_million},{zipf},{valence},{arousal},{dominance},{concreteness},{source}\n",
            csv_escape(&entry.word),
            entry.matched,
        ));
    }
    csv
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("—"), |v| format!("{v:.3}"))
}

fn csv_opt(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn source_label(source: AffectSource) -> &'static str {
    match source {
        AffectSource::Human => "human",
        AffectSource::Extrapolated => "extrapolated",
    }
}
