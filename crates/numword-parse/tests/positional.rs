//! End-to-end coverage for the positional (French, English) path.

use numword_parse::{NumeralErrorKind, alpha2digit, text2num};

#[test]
fn text2num_french_integers() {
    assert_eq!(text2num("neuf", "fr", false).unwrap(), 9);
    assert_eq!(text2num("quatre-vingt-quinze", "fr", false).unwrap(), 95);
    assert_eq!(text2num("quatre-vingt-dix-huit", "fr", false).unwrap(), 98);
    assert_eq!(text2num("soixante et onze", "fr", false).unwrap(), 71);
    assert_eq!(text2num("huit cent quarante-deux", "fr", false).unwrap(), 842);
    assert_eq!(
        text2num("mille neuf cent quatre-vingt-dix-neuf", "fr", false).unwrap(),
        1_999
    );
    assert_eq!(
        text2num(
            "cinquante-trois milliards deux cent quarante-trois mille sept cent vingt-quatre",
            "fr",
            false
        )
        .unwrap(),
        53_000_243_724
    );
}

#[test]
fn text2num_belgian_and_swiss_tens() {
    assert_eq!(text2num("septante cinq", "fr", false).unwrap(), 75);
    assert_eq!(text2num("nonante-huit", "fr", false).unwrap(), 98);
    assert_eq!(text2num("huitante-trois", "fr", false).unwrap(), 83);
}

#[test]
fn text2num_english_integers() {
    assert_eq!(text2num("one hundred and five", "en", false).unwrap(), 105);
    assert_eq!(
        text2num("nineteen hundred eighty-four", "en", false).unwrap(),
        1_984
    );
    assert_eq!(
        text2num(
            "fifty-three billion two hundred forty-three thousand seven hundred twenty-four",
            "en",
            false
        )
        .unwrap(),
        53_000_243_724
    );
}

#[test]
fn text2num_relaxed_mode() {
    assert!(text2num("quatre vingt dix-neuf", "fr", false).is_err());
    assert_eq!(text2num("quatre vingt dix-neuf", "fr", true).unwrap(), 99);
    assert_eq!(text2num("quatre vingt", "fr", true).unwrap(), 80);
    assert_eq!(text2num("quatre vingts", "fr", true).unwrap(), 80);
    assert!(text2num("quatre vingts", "fr", false).is_err());
}

#[test]
fn text2num_rejects_illegal_phrases() {
    for (phrase, lang) in [
        ("zéro huit", "fr"),
        ("deux deux", "fr"),
        ("vingt et deux", "fr"),
        ("mille mille", "fr"),
        ("vingt cent", "fr"),
        ("twenty ten", "en"),
        ("cows", "en"),
    ] {
        let err = text2num(phrase, lang, false).unwrap_err();
        assert_eq!(err.kind, NumeralErrorKind::InvalidLiteral, "{phrase}");
    }
}

#[test]
fn text2num_unsupported_language() {
    let err = text2num("uno", "es", false).unwrap_err();
    assert_eq!(err.kind, NumeralErrorKind::UnsupportedLanguage);
}

#[test]
fn alpha2digit_french_sentences() {
    assert_eq!(
        alpha2digit(
            "Vingt-cinq vaches, douze poulets et cent vingt-cinq kg de pommes de terre.",
            "fr",
            false,
            true
        )
        .unwrap(),
        "25 vaches, 12 poulets et 125 kg de pommes de terre."
    );
    assert_eq!(
        alpha2digit("Quatre-vingt-quinze. Quatre-vingt-dix-huit.", "fr", false, true).unwrap(),
        "95. 98."
    );
}

#[test]
fn alpha2digit_relaxed_changes_segmentation() {
    assert_eq!(
        alpha2digit("quatre vingt dix-neuf", "fr", false, true).unwrap(),
        "4 20 19"
    );
    assert_eq!(
        alpha2digit("quatre vingt dix-neuf", "fr", true, true).unwrap(),
        "99"
    );
}

#[test]
fn alpha2digit_english_sentences() {
    assert_eq!(
        alpha2digit("There are twenty-five cows and twelve chickens.", "en", false, true).unwrap(),
        "There are 25 cows and 12 chickens."
    );
    assert_eq!(
        alpha2digit("it was minus twenty degrees outside", "en", false, true).unwrap(),
        "it was -20 degrees outside"
    );
}

#[test]
fn alpha2digit_standalone_zeros() {
    assert_eq!(
        alpha2digit("zéro zéro sept", "fr", false, true).unwrap(),
        "0 0 7"
    );
}

#[test]
fn sign_folding_treats_zero_like_any_number() {
    assert_eq!(alpha2digit("moins zéro", "fr", false, true).unwrap(), "-0");
    assert_eq!(
        alpha2digit("moins zéro", "fr", false, false).unwrap(),
        "moins 0"
    );
}

#[test]
fn alpha2digit_is_idempotent() {
    // Digits are unknown words to the grammar, so a second pass leaves a
    // substituted sentence untouched.
    let once = alpha2digit(
        "Vingt-cinq vaches, douze poulets et cent vingt-cinq kg de pommes de terre.",
        "fr",
        false,
        true,
    )
    .unwrap();
    assert_eq!(alpha2digit(&once, "fr", false, true).unwrap(), once);

    let once = alpha2digit("it was minus twenty degrees outside", "en", false, true).unwrap();
    assert_eq!(alpha2digit(&once, "en", false, true).unwrap(), once);
}

#[test]
fn alpha2digit_adjacent_numbers_stay_separate() {
    assert_eq!(alpha2digit("un deux trois", "fr", false, true).unwrap(), "1 2 3");
}
