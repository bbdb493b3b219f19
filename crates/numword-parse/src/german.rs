//! Whole-phrase parser for compounding languages.
//!
//! German spells numerals below one million as a single orthographic word
//! ("dreiundfünfzigtausend"), so the positional word-stream approach does
//! not apply. Each whitespace token of the phrase is decomposed into its
//! morpheme sequence by the grammar's compound splitter, all sequences are
//! concatenated, and the flat morpheme stream is folded left to right with
//! a small adjacency automaton. Any undecomposable token or illegal
//! adjacency fails the whole phrase.

use numword_common::NumeralError;

use crate::lang::{LanguageGrammar, WordClass};

/// What the previous morpheme was; adjacency legality depends only on
/// this and the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Start,
    Zero,
    Unit,
    /// A unit followed by the connector, awaiting its ten
    /// ("drei" + "und" in "dreiundfünfzig").
    UnitAnd,
    Teen,
    Ten,
    Hundred,
    Multiplier,
}

pub struct CompoundValueParser {
    grammar: &'static LanguageGrammar,
}

impl CompoundValueParser {
    pub fn new(grammar: &'static LanguageGrammar) -> Self {
        Self { grammar }
    }

    /// Parse a lowercased phrase wholly made of numeral words.
    pub fn parse(&self, phrase: &str) -> Result<u64, NumeralError> {
        let mut fold = Fold::new();
        let mut any = false;
        for token in phrase.split_whitespace() {
            let Some(morphemes) = self.grammar.split_compound(token) else {
                return Err(NumeralError::invalid_literal(phrase));
            };
            any = true;
            for morpheme in &morphemes {
                if !fold.step(self.grammar, morpheme) {
                    return Err(NumeralError::invalid_literal(phrase));
                }
            }
        }
        if !any {
            return Err(NumeralError::invalid_literal(phrase));
        }
        fold.finish()
            .ok_or_else(|| NumeralError::invalid_literal(phrase))
    }
}

/// Accumulator mirroring the positional parser's total/group split, plus
/// the adjacency state.
struct Fold {
    total: u64,
    group: u64,
    mult_floor: u64,
    hundreds_set: bool,
    last: Last,
}

impl Fold {
    fn new() -> Self {
        Self {
            total: 0,
            group: 0,
            mult_floor: u64::MAX,
            hundreds_set: false,
            last: Last::Start,
        }
    }

    fn step(&mut self, grammar: &LanguageGrammar, morpheme: &str) -> bool {
        // Zero is terminal: nothing may follow "null".
        if self.last == Last::Zero {
            return false;
        }
        match grammar.classify(morpheme) {
            WordClass::Zero => {
                if self.last != Last::Start {
                    return false;
                }
                self.last = Last::Zero;
                true
            }
            WordClass::Unit(v) => {
                // Units come before their ten ("dreiundfünfzig"), so a
                // unit is only legal opening a fresh sub-hundred slot.
                if !matches!(self.last, Last::Start | Last::Hundred | Last::Multiplier) {
                    return false;
                }
                self.group += v;
                self.last = Last::Unit;
                true
            }
            WordClass::Teen(v) => {
                if !matches!(self.last, Last::Start | Last::Hundred | Last::Multiplier) {
                    return false;
                }
                self.group += v;
                self.last = Last::Teen;
                true
            }
            WordClass::Ten(v) => {
                if !matches!(
                    self.last,
                    Last::Start | Last::Hundred | Last::Multiplier | Last::UnitAnd
                ) {
                    return false;
                }
                self.group += v;
                self.last = Last::Ten;
                true
            }
            WordClass::And => {
                if self.last != Last::Unit {
                    return false;
                }
                self.last = Last::UnitAnd;
                true
            }
            WordClass::Multiplier(m) => {
                if self.last == Last::UnitAnd {
                    return false;
                }
                if m == 100 {
                    // "neunzehnhundert" (the century form) is legal,
                    // "sechzighundert" and a repeated hundred are not.
                    if self.hundreds_set || self.group > 19 {
                        return false;
                    }
                    self.group = self.group.max(1) * 100;
                    self.hundreds_set = true;
                    self.last = Last::Hundred;
                } else {
                    if m >= self.mult_floor {
                        return false;
                    }
                    self.total += self.group.max(1) * m;
                    self.group = 0;
                    self.hundreds_set = false;
                    self.mult_floor = m;
                    self.last = Last::Multiplier;
                }
                true
            }
            WordClass::Sign | WordClass::Unknown => false,
        }
    }

    fn finish(&self) -> Option<u64> {
        match self.last {
            // Empty phrase, or a dangling connector ("dreiund").
            Last::Start | Last::UnitAnd => None,
            Last::Zero => Some(0),
            _ => Some(self.total + self.group),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::grammar_for;

    fn parse(phrase: &str) -> Result<u64, NumeralError> {
        CompoundValueParser::new(grammar_for("de").unwrap()).parse(phrase)
    }

    #[test]
    fn compound_values() {
        assert_eq!(parse("dreiundfünfzig").unwrap(), 53);
        assert_eq!(parse("einhundertfünfzehn").unwrap(), 115);
        assert_eq!(parse("hundertfünfzehn").unwrap(), 115);
        assert_eq!(parse("fünfundsiebzigtausend").unwrap(), 75_000);
        assert_eq!(parse("neunzehnhundertdreiundsiebzig").unwrap(), 1_973);
        assert_eq!(parse("eintausendneunhundertzwanzig").unwrap(), 1_920);
    }

    #[test]
    fn magnitude_words_stand_alone() {
        assert_eq!(
            parse("dreiundfünfzig milliarden zweihundertdreiundvierzigtausendsiebenhundertvierundzwanzig")
                .unwrap(),
            53_000_243_724
        );
        assert_eq!(
            parse("einundfünfzig millionen fünfhundertachtundsiebzigtausenddreihundertzwei")
                .unwrap(),
            51_578_302
        );
        assert_eq!(parse("eine million").unwrap(), 1_000_000);
    }

    #[test]
    fn zero_is_only_legal_alone() {
        assert_eq!(parse("null").unwrap(), 0);
        assert!(parse("null acht").is_err());
        assert!(parse("fünf null").is_err());
        assert!(parse("fünfzignullzwei").is_err());
    }

    #[test]
    fn illegal_compounds_are_rejected() {
        assert!(parse("tausendtausendzweihundert").is_err());
        assert!(parse("sechzigfünfzehn").is_err());
        assert!(parse("sechzighundert").is_err());
        assert!(parse("zwanzigdrei").is_err());
        assert!(parse("dreiund").is_err());
        assert!(parse("und").is_err());
        assert!(parse("kühe").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn standalone_unit_spellings() {
        assert_eq!(parse("eins").unwrap(), 1);
        assert_eq!(parse("ein").unwrap(), 1);
        // "eins" never appears inside a compound.
        assert!(parse("einsundzwanzig").is_err());
        assert_eq!(parse("einundzwanzig").unwrap(), 21);
    }
}
