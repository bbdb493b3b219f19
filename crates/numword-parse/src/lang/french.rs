//! French numeral tables, including the vigesimal forms and the Belgian and
//! Swiss tens. "et" only ever stands before "un"/"une"/"onze" ("vingt et
//! un", "soixante et onze"); the composites set covers the 70s and 90s
//! built from "soixante"/"quatre-vingt" plus a teen.

use super::{LanguageGrammar, NumeralStyle};

pub(super) fn grammar() -> LanguageGrammar {
    LanguageGrammar::new("fr", NumeralStyle::Positional)
        .units(&[
            ("un", 1),
            ("une", 1),
            ("deux", 2),
            ("trois", 3),
            ("quatre", 4),
            ("cinq", 5),
            ("six", 6),
            ("sept", 7),
            ("huit", 8),
            ("neuf", 9),
        ])
        .teens(&[
            ("dix", 10),
            ("onze", 11),
            ("douze", 12),
            ("treize", 13),
            ("quatorze", 14),
            ("quinze", 15),
            ("seize", 16),
            ("dix-sept", 17),
            ("dix-huit", 18),
            ("dix-neuf", 19),
        ])
        .tens(&[
            ("vingt", 20),
            ("trente", 30),
            ("quarante", 40),
            ("cinquante", 50),
            ("soixante", 60),
            ("soixante-dix", 70),
            ("septante", 70),
            ("quatre-vingt", 80),
            ("quatre-vingts", 80),
            ("huitante", 80),
            ("octante", 80),
            ("quatre-vingt-dix", 90),
            ("nonante", 90),
        ])
        .multipliers(&[
            ("cent", 100),
            ("cents", 100),
            ("mille", 1_000),
            ("million", 1_000_000),
            ("millions", 1_000_000),
            ("milliard", 1_000_000_000),
            ("milliards", 1_000_000_000),
            ("billion", 1_000_000_000_000),
            ("billions", 1_000_000_000_000),
        ])
        .zero(&["zéro", "zero"])
        .signs(&[("plus", "+"), ("moins", "-")])
        .and("et", &["un", "une", "onze"])
        .composites(&[70, 71, 72, 73, 74, 75, 76, 77, 78, 79, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99])
        .relaxed_pairs(&[("quatre", "vingt", 80), ("quatre", "vingts", 80)])
}
