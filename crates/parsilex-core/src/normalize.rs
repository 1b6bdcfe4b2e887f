//! Persian text canonicalization.
//!
//! Persian admits many orthographically distinct but lexically identical
//! spellings: Arabic letterforms pasted from Arabic keyboards, optional
//! diacritics, and several invisible joiner code points. `canonicalize`
//! maps all of them onto a single canonical spelling so that downstream
//! indices and lookups agree on one key space.

/// The canonical zero-width non-joiner used inside Persian compounds.
pub const ZWNJ: char = '\u{200C}';

/// Tashkeel and Quranic annotation marks. These carry no lexical
/// distinction in the reference datasets.
fn is_arabic_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{06D6}'..='\u{06ED}')
}

/// Canonicalize raw Persian text.
///
/// Steps, in order (later steps assume earlier ones ran):
///
/// 1. Non-breaking space becomes an ordinary space.
/// 2. Whitespace runs collapse to one space; leading/trailing trimmed.
/// 3. Arabic Yeh (`ي`) and Kaf (`ك`) become their Persian forms.
/// 4. Heh-with-hamza (`ۀ`) and teh marbuta (`ة`) become plain heh.
/// 5. Hamza-on-waw (`ؤ`) becomes waw; hamza/wasla alef variants
///    (`أ`, `إ`, `ٱ`) become plain alef.
/// 6. Arabic diacritic marks are stripped.
/// 7. Joiner variants (ZWJ, word joiner) become the canonical [`ZWNJ`].
///
/// The hamza-bearing Yeh (`ئ`) is never rewritten here; the narrow
/// yeh/hamza ambiguity is handled by the rescue rules instead. The
/// madda alef (`آ`) is likewise left alone so that folding it stays a
/// per-lookup choice (see [`crate::keys::ExpandOptions`]).
///
/// Empty input yields an empty string. The function is idempotent:
/// `canonicalize(canonicalize(x)) == canonicalize(x)`.
#[must_use]
pub fn canonicalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let collapsed: String = raw
        .replace('\u{00A0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let mut mapped = String::with_capacity(collapsed.len());
    for c in collapsed.chars() {
        match c {
            'ي' => mapped.push('ی'),
            'ك' => mapped.push('ک'),
            'ۀ' | 'ة' => mapped.push('ه'),
            'ؤ' => mapped.push('و'),
            'أ' | 'إ' | 'ٱ' => mapped.push('ا'),
            '\u{200D}' | '\u{2060}' => mapped.push(ZWNJ),
            c if is_arabic_diacritic(c) => {}
            c => mapped.push(c),
        }
    }

    // Stripping a diacritic-only token can leave an orphan double space
    // behind; collapse once more so the result is always a fixed point.
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}
