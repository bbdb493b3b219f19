//! English numeral tables. "and" may stand before any sub-hundred word
//! ("one hundred and five", "two thousand and twenty"). Hyphen-fused
//! compounds ("twenty-three") are handled by the hyphen splitter, not
//! listed here.

use super::{LanguageGrammar, NumeralStyle};

pub(super) fn grammar() -> LanguageGrammar {
    LanguageGrammar::new("en", NumeralStyle::Positional)
        .units(&[
            ("one", 1),
            ("two", 2),
            ("three", 3),
            ("four", 4),
            ("five", 5),
            ("six", 6),
            ("seven", 7),
            ("eight", 8),
            ("nine", 9),
        ])
        .teens(&[
            ("ten", 10),
            ("eleven", 11),
            ("twelve", 12),
            ("thirteen", 13),
            ("fourteen", 14),
            ("fifteen", 15),
            ("sixteen", 16),
            ("seventeen", 17),
            ("eighteen", 18),
            ("nineteen", 19),
        ])
        .tens(&[
            ("twenty", 20),
            ("thirty", 30),
            ("forty", 40),
            ("fifty", 50),
            ("sixty", 60),
            ("seventy", 70),
            ("eighty", 80),
            ("ninety", 90),
        ])
        .multipliers(&[
            ("hundred", 100),
            ("thousand", 1_000),
            ("million", 1_000_000),
            ("billion", 1_000_000_000),
            ("trillion", 1_000_000_000_000),
        ])
        .zero(&["zero"])
        .signs(&[("plus", "+"), ("minus", "-")])
        .and_before_any_number("and")
}
