//! Per-language numeral grammars.
//!
//! A [`LanguageGrammar`] is an immutable bundle of word tables: digit words,
//! teens, tens, magnitude multipliers, sign words, the zero set, and the
//! composition side data a parser needs (connector word, legal ten+teen
//! composites, relaxed spellings, compound morphemes). Grammars are built
//! once at startup, registered by language code, and shared read-only, so
//! concurrent callers never need synchronization.
//!
//! Adding a language means registering a new grammar entry here; the parser
//! to use is selected by the grammar's [`NumeralStyle`] tag, never by
//! inspecting types at runtime.

use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::{SmallVec, smallvec};

mod english;
mod french;
mod german;

/// How a language assembles numerals from words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumeralStyle {
    /// Whitespace/hyphen-delimited numeral words (French, English).
    Positional,
    /// Agglutinative compounds spelled as a single orthographic word (German).
    Compounding,
}

/// Classification of one lowercased word against a grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordClass {
    /// A digit word, 1..=9.
    Unit(u64),
    /// A teen word, 10..=19.
    Teen(u64),
    /// A multiple of ten, 20..=90.
    Ten(u64),
    /// A magnitude word: 100, 1_000, 1_000_000, ...
    Multiplier(u64),
    /// A zero word.
    Zero,
    /// A sign word ("plus", "minus", "moins").
    Sign,
    /// The connector word ("et", "and", "und").
    And,
    /// Not a numeral word in this grammar.
    Unknown,
}

/// Immutable word tables for one language.
///
/// All keys are stored lowercase; callers lowercase input before lookup.
pub struct LanguageGrammar {
    code: &'static str,
    style: NumeralStyle,
    units: FxHashMap<&'static str, u64>,
    teens: FxHashMap<&'static str, u64>,
    tens: FxHashMap<&'static str, u64>,
    multipliers: FxHashMap<&'static str, u64>,
    zero: FxHashSet<&'static str>,
    signs: FxHashMap<&'static str, &'static str>,
    and_word: Option<&'static str>,
    and_followers: FxHashSet<&'static str>,
    composites: FxHashSet<u64>,
    relaxed_pairs: FxHashMap<&'static str, (&'static str, u64)>,
    /// Morphemes legal inside a written compound, longest first. Empty for
    /// positional languages.
    compound_morphemes: Vec<&'static str>,
    /// Every word any parser may consume, used by the hyphen and compound
    /// splitters to resolve a candidate back to its table key.
    all_words: FxHashSet<&'static str>,
}

impl LanguageGrammar {
    fn new(code: &'static str, style: NumeralStyle) -> Self {
        Self {
            code,
            style,
            units: FxHashMap::default(),
            teens: FxHashMap::default(),
            tens: FxHashMap::default(),
            multipliers: FxHashMap::default(),
            zero: FxHashSet::default(),
            signs: FxHashMap::default(),
            and_word: None,
            and_followers: FxHashSet::default(),
            composites: FxHashSet::default(),
            relaxed_pairs: FxHashMap::default(),
            compound_morphemes: Vec::new(),
            all_words: FxHashSet::default(),
        }
    }

    fn units(mut self, entries: &[(&'static str, u64)]) -> Self {
        for &(w, v) in entries {
            debug_assert!((1..=9).contains(&v));
            self.units.insert(w, v);
            self.all_words.insert(w);
        }
        self
    }

    fn teens(mut self, entries: &[(&'static str, u64)]) -> Self {
        for &(w, v) in entries {
            debug_assert!((10..=19).contains(&v));
            self.teens.insert(w, v);
            self.all_words.insert(w);
        }
        self
    }

    fn tens(mut self, entries: &[(&'static str, u64)]) -> Self {
        for &(w, v) in entries {
            debug_assert!(v >= 20 && v <= 90);
            self.tens.insert(w, v);
            self.all_words.insert(w);
        }
        self
    }

    fn multipliers(mut self, entries: &[(&'static str, u64)]) -> Self {
        for &(w, v) in entries {
            debug_assert!(v >= 100);
            self.multipliers.insert(w, v);
            self.all_words.insert(w);
        }
        self
    }

    fn zero(mut self, words: &[&'static str]) -> Self {
        for &w in words {
            self.zero.insert(w);
        }
        self
    }

    fn signs(mut self, entries: &[(&'static str, &'static str)]) -> Self {
        for &(w, sym) in entries {
            self.signs.insert(w, sym);
        }
        self
    }

    /// Register the connector word and the set of words it may precede.
    fn and(mut self, word: &'static str, followers: &[&'static str]) -> Self {
        self.and_word = Some(word);
        self.all_words.insert(word);
        for &w in followers {
            self.and_followers.insert(w);
        }
        self
    }

    /// Register the connector word and let it precede any sub-hundred word.
    fn and_before_any_number(mut self, word: &'static str) -> Self {
        self.and_word = Some(word);
        self.all_words.insert(word);
        for &w in self
            .units
            .keys()
            .chain(self.teens.keys())
            .chain(self.tens.keys())
        {
            self.and_followers.insert(w);
        }
        self
    }

    /// Legal ten+teen sums ("soixante quinze" = 75).
    fn composites(mut self, sums: &[u64]) -> Self {
        for &s in sums {
            self.composites.insert(s);
        }
        self
    }

    /// Disjoint spellings accepted in relaxed mode only
    /// ("quatre vingt" = "quatre-vingt").
    fn relaxed_pairs(mut self, entries: &[(&'static str, &'static str, u64)]) -> Self {
        for &(unit, ten, v) in entries {
            self.relaxed_pairs.insert(ten, (unit, v));
        }
        self
    }

    /// Morphemes legal inside a written compound. Sorted longest first so
    /// the splitter's greedy match is deterministic ("achtzehn" beats
    /// "acht" + "zehn").
    fn compound_morphemes(mut self, morphemes: &[&'static str]) -> Self {
        self.compound_morphemes = morphemes.to_vec();
        self.compound_morphemes
            .sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        self
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn style(&self) -> NumeralStyle {
        self.style
    }

    /// Classify one lowercased word.
    pub fn classify(&self, word: &str) -> WordClass {
        if let Some(&v) = self.units.get(word) {
            return WordClass::Unit(v);
        }
        if let Some(&v) = self.teens.get(word) {
            return WordClass::Teen(v);
        }
        if let Some(&v) = self.tens.get(word) {
            return WordClass::Ten(v);
        }
        if let Some(&v) = self.multipliers.get(word) {
            return WordClass::Multiplier(v);
        }
        if self.zero.contains(word) {
            return WordClass::Zero;
        }
        if self.signs.contains_key(word) {
            return WordClass::Sign;
        }
        if self.and_word == Some(word) {
            return WordClass::And;
        }
        WordClass::Unknown
    }

    pub fn is_zero(&self, word: &str) -> bool {
        self.zero.contains(word)
    }

    /// Printed symbol for a sign word, if the word is one.
    pub fn sign_symbol(&self, word: &str) -> Option<&'static str> {
        self.signs.get(word).copied()
    }

    /// Whether the connector word may stand right before `ahead`.
    pub fn and_accepts(&self, ahead: &str) -> bool {
        self.and_followers.contains(ahead)
    }

    /// Whether `sum` is a legal ten+teen composite ("soixante" + "quinze").
    pub fn composite_allowed(&self, sum: u64) -> bool {
        self.composites.contains(&sum)
    }

    /// Relaxed-mode value for a disjoint `unit ten` pair, if accepted.
    pub fn relaxed_compound(&self, unit_word: &str, ten_word: &str) -> Option<u64> {
        match self.relaxed_pairs.get(ten_word) {
            Some(&(unit, value)) if unit == unit_word => Some(value),
            _ => None,
        }
    }

    /// Whether `word` is any numeral or connector word of this grammar.
    pub fn is_known(&self, word: &str) -> bool {
        self.all_words.contains(word)
    }

    /// Resolve a lowercased word back to its interned table key.
    fn known_static(&self, word: &str) -> Option<&'static str> {
        self.all_words
            .get(word)
            .copied()
            .or_else(|| self.zero.get(word).copied())
    }

    /// Decompose a hyphen-fused token ("quatre-vingt-dix-neuf") into known
    /// words, longest match first over hyphen boundaries. Returns `None`
    /// when no full decomposition exists.
    pub fn split_hyphenated(&self, word: &str) -> Option<SmallVec<[&'static str; 4]>> {
        if !word.contains('-') {
            return None;
        }
        let parts: Vec<&str> = word.split('-').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        let mut out = SmallVec::new();
        let mut i = 0;
        while i < parts.len() {
            let mut j = parts.len();
            loop {
                let candidate = parts[i..j].join("-");
                if let Some(known) = self.known_static(&candidate) {
                    out.push(known);
                    i = j;
                    break;
                }
                j -= 1;
                if j == i {
                    return None;
                }
            }
        }
        Some(out)
    }

    /// Decompose one orthographic compound ("dreiundfünfzig") into its
    /// morpheme sequence, greedy longest match at each position. A token
    /// that is itself a table word ("millionen", "null") is returned as a
    /// single morpheme. Returns `None` when no full decomposition exists.
    pub fn split_compound(&self, token: &str) -> Option<SmallVec<[&'static str; 8]>> {
        if let Some(known) = self.known_static(token) {
            return Some(smallvec![known]);
        }
        if self.compound_morphemes.is_empty() {
            return None;
        }
        let mut out = SmallVec::new();
        let mut rest = token;
        while !rest.is_empty() {
            let hit = self
                .compound_morphemes
                .iter()
                .find(|m| rest.starts_with(**m))?;
            out.push(*hit);
            rest = &rest[hit.len()..];
        }
        Some(out)
    }
}

static REGISTRY: Lazy<FxHashMap<&'static str, LanguageGrammar>> = Lazy::new(|| {
    let mut registry = FxHashMap::default();
    for grammar in [french::grammar(), english::grammar(), german::grammar()] {
        registry.insert(grammar.code, grammar);
    }
    registry
});

/// Look up the grammar registered for a language code ("fr", "en", "de").
pub fn grammar_for(code: &str) -> Option<&'static LanguageGrammar> {
    REGISTRY.get(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_knows_all_languages() {
        for code in ["fr", "en", "de"] {
            let grammar = grammar_for(code).expect(code);
            assert_eq!(grammar.code(), code);
        }
        assert!(grammar_for("xx").is_none());
        assert!(grammar_for("FR").is_none());
    }

    #[test]
    fn classification_is_table_driven() {
        let fr = grammar_for("fr").unwrap();
        assert_eq!(fr.classify("deux"), WordClass::Unit(2));
        assert_eq!(fr.classify("quinze"), WordClass::Teen(15));
        assert_eq!(fr.classify("quatre-vingt"), WordClass::Ten(80));
        assert_eq!(fr.classify("mille"), WordClass::Multiplier(1_000));
        assert_eq!(fr.classify("moins"), WordClass::Sign);
        assert_eq!(fr.classify("et"), WordClass::And);
        assert_eq!(fr.classify("fromage"), WordClass::Unknown);
    }

    #[test]
    fn hyphen_split_prefers_longest_table_words() {
        let fr = grammar_for("fr").unwrap();
        let parts = fr.split_hyphenated("quatre-vingt-dix-neuf").unwrap();
        assert_eq!(parts.as_slice(), ["quatre-vingt-dix", "neuf"]);
        let parts = fr.split_hyphenated("vingt-et-un").unwrap();
        assert_eq!(parts.as_slice(), ["vingt", "et", "un"]);
        assert!(fr.split_hyphenated("quatre-fromages").is_none());
    }

    #[test]
    fn compound_split_is_greedy_longest_first() {
        let de = grammar_for("de").unwrap();
        let parts = de.split_compound("dreiundfünfzig").unwrap();
        assert_eq!(parts.as_slice(), ["drei", "und", "fünfzig"]);
        // "achtzehn" must win over "acht" + "zehn".
        let parts = de.split_compound("achtzehnhundert").unwrap();
        assert_eq!(parts.as_slice(), ["achtzehn", "hundert"]);
        let parts = de
            .split_compound("zweihundertdreiundvierzigtausendsiebenhundertvierundzwanzig")
            .unwrap();
        assert_eq!(
            parts.as_slice(),
            [
                "zwei", "hundert", "drei", "und", "vierzig", "tausend", "sieben", "hundert",
                "vier", "und", "zwanzig"
            ]
        );
        assert!(de.split_compound("dreiundkühe").is_none());
    }

    #[test]
    fn compound_split_accepts_whole_table_words() {
        let de = grammar_for("de").unwrap();
        assert_eq!(de.split_compound("eins").unwrap().as_slice(), ["eins"]);
        assert_eq!(
            de.split_compound("millionen").unwrap().as_slice(),
            ["millionen"]
        );
        assert_eq!(de.split_compound("null").unwrap().as_slice(), ["null"]);
    }
}
