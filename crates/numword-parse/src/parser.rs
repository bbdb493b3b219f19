//! Incremental value parser for positional (whitespace/hyphen delimited)
//! numeral streams.
//!
//! The parser consumes one lowercased word at a time with one token of
//! lookahead and either folds it into the accumulated value or rejects it,
//! leaving its state untouched on rejection. A rejected word is the
//! caller's signal that the current numeral run has ended.
//!
//! The accumulator is split in two: `total` holds completed magnitude
//! groups (everything already multiplied by thousand or above) and `group`
//! holds the sub-magnitude amount still being assembled. Magnitude words
//! must strictly decrease across the phrase ("mille" after "million", never
//! the reverse), which `mult_floor` enforces.

use crate::lang::{LanguageGrammar, WordClass};

#[derive(Clone)]
pub struct WordStreamParser {
    grammar: &'static LanguageGrammar,
    relaxed: bool,
    total: u64,
    group: u64,
    mult_floor: u64,
    hundreds_set: bool,
    last_word: String,
    started: bool,
}

impl WordStreamParser {
    pub fn new(grammar: &'static LanguageGrammar, relaxed: bool) -> Self {
        Self {
            grammar,
            relaxed,
            total: 0,
            group: 0,
            mult_floor: u64::MAX,
            hundreds_set: false,
            last_word: String::new(),
            started: false,
        }
    }

    /// Value accumulated so far.
    pub fn value(&self) -> u64 {
        self.total + self.group
    }

    /// Whether at least one numeral word has been consumed.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Feed one lowercased word; `ahead` is the next word when there is
    /// one. Returns whether the word was legally consumed.
    pub fn push(&mut self, word: &str, ahead: Option<&str>) -> bool {
        let class = self.grammar.classify(word);
        if class == WordClass::Unknown {
            // A relaxed-pair ten may be a word with no table entry of its
            // own ("vingts" only exists inside "quatre-vingts"), so the
            // disjoint spelling arrives here unclassified.
            if self.push_relaxed_ten(word) {
                self.started = true;
                self.last_word.clear();
                self.last_word.push_str(word);
                return true;
            }
            return self.push_hyphenated(word, ahead);
        }
        let accepted = match class {
            WordClass::Unit(v) => self.push_unit(v),
            WordClass::Teen(v) => self.push_teen(v),
            WordClass::Ten(v) => self.push_ten(v, word),
            WordClass::Multiplier(m) => self.push_multiplier(m),
            // The connector is only legal mid-number and only before the
            // words the grammar lists for it ("vingt et un", "hundred and
            // five"); it leaves the value untouched.
            WordClass::And => self.started && ahead.is_some_and(|a| self.grammar.and_accepts(a)),
            // Zero never composes; the driver handles it on its own.
            WordClass::Zero | WordClass::Sign | WordClass::Unknown => false,
        };
        if accepted {
            self.started = true;
            self.last_word.clear();
            self.last_word.push_str(word);
        }
        accepted
    }

    /// A unit follows a clean tens slot: "vingt deux" but not "deux deux",
    /// and never a teen ("quinze deux").
    fn push_unit(&mut self, v: u64) -> bool {
        if self.group % 10 != 0 || (10..=19).contains(&(self.group % 100)) {
            return false;
        }
        self.group += v;
        true
    }

    /// A teen starts a fresh sub-hundred slot, or extends a ten when the
    /// grammar lists the sum as a composite ("soixante quinze" = 75).
    fn push_teen(&mut self, v: u64) -> bool {
        if self.group % 100 == 0 {
            self.group += v;
            return true;
        }
        let tens = self.group % 100;
        if tens % 10 == 0 && self.grammar.composite_allowed(tens + v) {
            self.group += v;
            return true;
        }
        false
    }

    /// A ten starts a fresh sub-hundred slot, or combines with a pending
    /// unit in relaxed mode.
    fn push_ten(&mut self, v: u64, word: &str) -> bool {
        if self.group % 100 == 0 {
            self.group += v;
            return true;
        }
        self.push_relaxed_ten(word)
    }

    /// In relaxed mode a pending unit may combine multiplicatively with
    /// the word after it when the grammar lists the pair ("quatre vingt"
    /// and "quatre vingts" both mean 80).
    fn push_relaxed_ten(&mut self, word: &str) -> bool {
        if !self.relaxed {
            return false;
        }
        let unit = self.group % 100;
        if !(1..=9).contains(&unit) {
            return false;
        }
        let Some(combined) = self.grammar.relaxed_compound(&self.last_word, word) else {
            return false;
        };
        self.group = self.group - unit + combined;
        true
    }

    fn push_multiplier(&mut self, m: u64) -> bool {
        if m == 100 {
            // "dix-neuf cent" (the century form) is legal, "vingt cent"
            // and a second hundred in the same group are not.
            if self.hundreds_set || self.group > 19 {
                return false;
            }
            self.group = self.group.max(1) * 100;
            self.hundreds_set = true;
            return true;
        }
        if m >= self.mult_floor {
            return false;
        }
        self.total += self.group.max(1) * m;
        self.group = 0;
        self.hundreds_set = false;
        self.mult_floor = m;
        true
    }

    /// An unknown token may still be a hyphen-fused spelling
    /// ("quatre-vingt-dix-neuf", "twenty-three"): split it into known
    /// words and feed them through; all parts must be consumed or the
    /// state is rolled back.
    fn push_hyphenated(&mut self, word: &str, ahead: Option<&str>) -> bool {
        let Some(parts) = self.grammar.split_hyphenated(word) else {
            return false;
        };
        let snapshot = self.clone();
        for (i, part) in parts.iter().enumerate() {
            let next = parts.get(i + 1).copied().or(ahead);
            if !self.push(part, next) {
                *self = snapshot;
                return false;
            }
        }
        true
    }
}
