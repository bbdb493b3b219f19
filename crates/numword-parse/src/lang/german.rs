//! German numeral tables. Below one million a German numeral is a single
//! orthographic word, so the grammar carries the morpheme list the compound
//! splitter matches against. "eins" is standalone-only: inside a compound
//! the unit is always "ein" ("einhundert", "einundzwanzig"), so it is kept
//! out of the morpheme list on purpose.

use super::{LanguageGrammar, NumeralStyle};

pub(super) fn grammar() -> LanguageGrammar {
    LanguageGrammar::new("de", NumeralStyle::Compounding)
        .units(&[
            ("ein", 1),
            ("eins", 1),
            ("eine", 1),
            ("zwei", 2),
            ("drei", 3),
            ("vier", 4),
            ("fünf", 5),
            ("sechs", 6),
            ("sieben", 7),
            ("acht", 8),
            ("neun", 9),
        ])
        .teens(&[
            ("zehn", 10),
            ("elf", 11),
            ("zwölf", 12),
            ("dreizehn", 13),
            ("vierzehn", 14),
            ("fünfzehn", 15),
            ("sechzehn", 16),
            ("siebzehn", 17),
            ("achtzehn", 18),
            ("neunzehn", 19),
        ])
        .tens(&[
            ("zwanzig", 20),
            ("dreißig", 30),
            ("dreissig", 30),
            ("vierzig", 40),
            ("fünfzig", 50),
            ("sechzig", 60),
            ("siebzig", 70),
            ("achtzig", 80),
            ("neunzig", 90),
        ])
        .multipliers(&[
            ("hundert", 100),
            ("tausend", 1_000),
            ("million", 1_000_000),
            ("millionen", 1_000_000),
            ("milliarde", 1_000_000_000),
            ("milliarden", 1_000_000_000),
            ("billion", 1_000_000_000_000),
            ("billionen", 1_000_000_000_000),
        ])
        .zero(&["null"])
        .signs(&[("plus", "+"), ("minus", "-")])
        .and("und", &[])
        .compound_morphemes(&[
            "ein", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun", "zehn",
            "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn",
            "achtzehn", "neunzehn", "zwanzig", "dreißig", "dreissig", "vierzig", "fünfzig",
            "sechzig", "siebzig", "achtzig", "neunzig", "hundert", "tausend", "million",
            "millionen", "milliarde", "milliarden", "billion", "billionen", "und", "null",
        ])
}
