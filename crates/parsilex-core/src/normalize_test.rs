use super::*;

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(canonicalize(""), "");
    assert_eq!(canonicalize("   "), "");
    assert_eq!(canonicalize("\u{00A0}\u{00A0}"), "");
}

#[test]
fn whitespace_collapses_and_trims() {
    assert_eq!(canonicalize("  هدف   مند  "), "هدف مند");
    assert_eq!(canonicalize("هدف\u{00A0}مند"), "هدف مند");
    assert_eq!(canonicalize("هدف\t\nمند"), "هدف مند");
}

#[test]
fn arabic_letterforms_become_persian() {
    assert_eq!(canonicalize("يك"), "یک");
    assert_eq!(canonicalize("كتاب"), "کتاب");
}

#[test]
fn heh_variants_become_plain_heh() {
    assert_eq!(canonicalize("خانۀ"), "خانه");
    assert_eq!(canonicalize("مدرسة"), "مدرسه");
}

#[test]
fn hamza_waw_and_alef_variants_normalize() {
    assert_eq!(canonicalize("مؤمن"), "مومن");
    assert_eq!(canonicalize("أب"), "اب");
    assert_eq!(canonicalize("إب"), "اب");
    assert_eq!(canonicalize("ٱب"), "اب");
}

#[test]
fn madda_alef_is_preserved() {
    // Folding آ is a per-lookup choice, not a canonicalization step.
    assert_eq!(canonicalize("آباد"), "آباد");
}

#[test]
fn hamza_yeh_is_never_rewritten() {
    assert_eq!(canonicalize("بئی"), "بئی");
    assert_eq!(canonicalize("مسئله"), "مسئله");
}

#[test]
fn diacritics_are_stripped() {
    // fathatan, kasra, shadda
    assert_eq!(canonicalize("کتاباً"), "کتابا");
    assert_eq!(canonicalize("کِتاب"), "کتاب");
    assert_eq!(canonicalize("مدرّس"), "مدرس");
    // superscript alef and a Quranic annotation mark
    assert_eq!(canonicalize("رحم\u{0670}ن"), "رحمن");
    assert_eq!(canonicalize("با\u{06D6}ب"), "باب");
}

#[test]
fn joiner_variants_fold_to_zwnj() {
    assert_eq!(canonicalize("هدف\u{200D}مند"), format!("هدف{ZWNJ}مند"));
    assert_eq!(canonicalize("هدف\u{2060}مند"), format!("هدف{ZWNJ}مند"));
    assert_eq!(canonicalize("هدف\u{200C}مند"), format!("هدف{ZWNJ}مند"));
}

#[test]
fn diacritic_only_token_leaves_no_double_space() {
    assert_eq!(canonicalize("ا \u{064B} ب"), "ا ب");
}

#[test]
fn canonicalize_is_idempotent() {
    let samples = [
        "",
        "   ",
        "كتاب",
        "يك روز",
        "خانۀ  بزرگ",
        "مؤمن",
        "أصل",
        "کتاباً",
        "هدف\u{200D}مند",
        "هدف\u{00A0}مند",
        "ا \u{064B} ب",
        "آب و هوا",
        "مسئله",
    ];
    for raw in samples {
        let once = canonicalize(raw);
        assert_eq!(canonicalize(&once), once, "not a fixed point for {raw:?}");
    }
}
