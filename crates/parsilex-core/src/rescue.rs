//! Last-resort yeh/hamza rescue rules.
//!
//! The canonicalizer deliberately never touches the hamza-bearing Yeh
//! (`ئ`): blanket substitution with plain Yeh (`ی`) would merge far too
//! many unrelated words. But the two letters do get confused in a
//! narrow, well-defined set of positions. These four rules rewrite
//! exactly those positions, one character at a time, and are tried only
//! after normal key lookup against the frequency index has failed.
//!
//! All positions are character indices, not byte offsets.

const YEH: char = 'ی';
const HAMZA_YEH: char = 'ئ';

/// Rule 1: `یی` somewhere past the first character becomes `ئی`.
#[must_use]
pub fn yeh_seq_to_hamza(word: &str) -> Option<String> {
    replace_in_pair(word, YEH, HAMZA_YEH)
}

/// Rule 2: a single `ی`, neither first nor last, becomes `ئ`.
#[must_use]
pub fn single_medial_yeh_to_hamza(word: &str) -> Option<String> {
    replace_single_medial(word, YEH, HAMZA_YEH)
}

/// Rule 3: a single `ئ`, neither first nor last, becomes `ی`.
#[must_use]
pub fn single_medial_hamza_to_yeh(word: &str) -> Option<String> {
    replace_single_medial(word, HAMZA_YEH, YEH)
}

/// Rule 4: `ئی` somewhere past the first character becomes `یی`.
#[must_use]
pub fn hamza_seq_to_yeh(word: &str) -> Option<String> {
    replace_in_pair(word, HAMZA_YEH, YEH)
}

/// Apply the four rules in order, yielding each applicable rewrite.
///
/// Callers try each candidate against the frequency index in turn;
/// the first hit wins. Rules 3 and 4 can coincide, so the output is
/// deduplicated while preserving rule order.
#[must_use]
pub fn rescue_candidates(word: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    for rewrite in [
        yeh_seq_to_hamza(word),
        single_medial_yeh_to_hamza(word),
        single_medial_hamza_to_yeh(word),
        hamza_seq_to_yeh(word),
    ]
    .into_iter()
    .flatten()
    {
        if !candidates.contains(&rewrite) {
            candidates.push(rewrite);
        }
    }
    candidates
}

/// Replace `from` with `to` in the first `from` + `ی` pair found at a
/// character position greater than zero.
fn replace_in_pair(word: &str, from: char, to: char) -> Option<String> {
    let chars: Vec<char> = word.chars().collect();
    let i = chars.windows(2).position(|w| w == [from, YEH])?;
    if i == 0 {
        return None;
    }
    let mut out = chars;
    out[i] = to;
    Some(out.into_iter().collect())
}

/// Replace `from` with `to` when `from` occurs exactly once and that
/// occurrence is medial.
fn replace_single_medial(word: &str, from: char, to: char) -> Option<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut positions = chars.iter().enumerate().filter(|(_, c)| **c == from);
    let (i, _) = positions.next()?;
    if positions.next().is_some() {
        return None;
    }
    if i == 0 || i + 1 == chars.len() {
        return None;
    }
    let mut out = chars;
    out[i] = to;
    Some(out.into_iter().collect())
}
