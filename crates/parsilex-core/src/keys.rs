//! Match-key expansion.
//!
//! A canonical form still leaves real spelling variation unresolved:
//! compounds written with a space, a ZWNJ, or nothing at all, and the
//! madda alef (`آ`) versus plain alef (`ا`). Rather than normalizing
//! these away (which would destroy information), every word is indexed
//! and looked up under a small set of derived match keys that absorb
//! the variation in both directions.

use crate::normalize::ZWNJ;

/// How exhaustively to expand match keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// The full cross product of space/joiner rewrites and the alef
    /// fold — up to ten keys. Used when indexing and for single-word
    /// lookups, where recall matters most.
    Full,
    /// Identity, no-spaces, and no-joiners only (plus the alef fold
    /// when enabled). A cheaper expansion for bulk analysis; trades a
    /// little recall for speed, by design.
    Fast,
}

/// Tunable expansion behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Also derive keys with `آ` folded to `ا`.
    ///
    /// This fold recovers common sloppy spellings but can merge
    /// unrelated words that differ only in the madda (a known
    /// false-positive risk). Enabled by default to match the reference
    /// datasets' recall; disable for precision-sensitive batch work.
    pub alef_fold: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self { alef_fold: true }
    }
}

/// Expand a canonical form into its match keys.
///
/// The result is deduplicated, preserves derivation order, and always
/// starts with the input itself. Every key is itself a valid canonical
/// form: the rewrites only remove spaces/joiners or fold `آ`, none of
/// which a canonical form forbids. Empty input yields no keys.
#[must_use]
pub fn expand_keys(word: &str, mode: KeyMode, options: ExpandOptions) -> Vec<String> {
    if word.is_empty() {
        return Vec::new();
    }

    let mut keys: Vec<String> = Vec::new();
    let mut push = |key: String| {
        if !keys.iter().any(|k| *k == key) {
            keys.push(key);
        }
    };

    let base: Vec<String> = match mode {
        KeyMode::Full => vec![
            word.to_string(),
            remove_spaces(word),
            remove_joiners(word),
            remove_spaces_and_joiners(word),
            spaces_to_joiners(word),
        ],
        KeyMode::Fast => vec![
            word.to_string(),
            remove_spaces(word),
            remove_joiners(word),
        ],
    };

    for key in &base {
        push(key.clone());
    }
    if options.alef_fold {
        for key in &base {
            push(fold_madda_alef(key));
        }
    }

    keys
}

fn remove_spaces(word: &str) -> String {
    word.chars().filter(|c| *c != ' ').collect()
}

fn remove_joiners(word: &str) -> String {
    word.chars().filter(|c| *c != ZWNJ).collect()
}

fn remove_spaces_and_joiners(word: &str) -> String {
    word.chars().filter(|c| *c != ' ' && *c != ZWNJ).collect()
}

fn spaces_to_joiners(word: &str) -> String {
    word.chars().map(|c| if c == ' ' { ZWNJ } else { c }).collect()
}

fn fold_madda_alef(word: &str) -> String {
    word.chars().map(|c| if c == 'آ' { 'ا' } else { c }).collect()
}
