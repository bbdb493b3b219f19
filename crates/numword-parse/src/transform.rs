//! Phrase conversion and in-text substitution.
//!
//! [`text2num`] converts one phrase that is wholly made of numeral words
//! and fails hard on anything else. [`alpha2digit`] scans free text,
//! replaces every maximal numeral run with its digit form and passes
//! everything else through untouched; the only error it can report is an
//! unknown language code.

use numword_common::NumeralError;

use crate::german::CompoundValueParser;
use crate::lang::{LanguageGrammar, NumeralStyle, grammar_for};
use crate::parser::WordStreamParser;
use crate::segment::{look_ahead, split_segments};

/// Parse a phrase wholly made of numeral words into its integer value.
///
/// The zero word is only legal on its own: leading zero words are
/// stripped, and if any numeral words remain after stripping the phrase
/// is rejected ("zéro huit" never silently becomes 8).
pub fn text2num(text: &str, lang: &str, relaxed: bool) -> Result<u64, NumeralError> {
    let grammar = grammar_for(lang).ok_or_else(|| NumeralError::unsupported_language(lang))?;
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.is_empty() {
        return Ok(0);
    }
    match grammar.style() {
        NumeralStyle::Compounding => CompoundValueParser::new(grammar).parse(&lowered),
        NumeralStyle::Positional => {
            let stripped = words.iter().take_while(|w| grammar.is_zero(w)).count();
            let rest = &words[stripped..];
            if rest.is_empty() {
                return Ok(0);
            }
            if stripped > 0 {
                return Err(NumeralError::invalid_literal(text));
            }
            let mut parser = WordStreamParser::new(grammar, relaxed);
            for (word, ahead) in look_ahead(rest) {
                if !parser.push(word, ahead.copied()) {
                    return Err(NumeralError::invalid_literal(text));
                }
            }
            Ok(parser.value())
        }
    }
}

/// Replace every maximal run of numeral words in `text` with its digit
/// form, preserving punctuation, casing of untouched words, and word
/// order. With `signed`, a sign word directly before a substituted number
/// is folded into it as a "+"/"-" prefix.
pub fn alpha2digit(
    text: &str,
    lang: &str,
    relaxed: bool,
    signed: bool,
) -> Result<String, NumeralError> {
    let grammar = grammar_for(lang).ok_or_else(|| NumeralError::unsupported_language(lang))?;
    let mut out = String::with_capacity(text.len());
    for (segment, sep) in split_segments(text) {
        let tokens = match grammar.style() {
            NumeralStyle::Compounding => substitute_compounding(grammar, segment),
            NumeralStyle::Positional => substitute_positional(grammar, segment, relaxed),
        };
        out.push_str(&join_tokens(grammar, &tokens, signed));
        out.push_str(sep);
    }
    Ok(out)
}

/// One output token: either a substituted number or a word passed through
/// with its original casing.
struct OutToken {
    text: String,
    is_num: bool,
}

impl OutToken {
    fn num(value: u64) -> Self {
        Self {
            text: value.to_string(),
            is_num: true,
        }
    }

    fn literal(word: &str) -> Self {
        Self {
            text: word.to_owned(),
            is_num: false,
        }
    }
}

/// Greedy accumulation with a one-token backtrack: when a word ends the
/// current run, the run's value is flushed and the word gets a second
/// chance on a fresh parser before passing through as a literal.
fn substitute_positional(
    grammar: &'static LanguageGrammar,
    segment: &str,
    relaxed: bool,
) -> Vec<OutToken> {
    let words: Vec<&str> = segment.split_whitespace().collect();
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let mut out = Vec::with_capacity(words.len());
    let mut parser = WordStreamParser::new(grammar, relaxed);
    for (i, word) in words.iter().enumerate() {
        let lw = lowered[i].as_str();
        let ahead = lowered.get(i + 1).map(|s| s.as_str());
        if grammar.is_zero(lw) {
            if parser.started() {
                out.push(OutToken::num(parser.value()));
                parser = WordStreamParser::new(grammar, relaxed);
            }
            out.push(OutToken::num(0));
            continue;
        }
        if parser.push(lw, ahead) {
            continue;
        }
        if parser.started() {
            out.push(OutToken::num(parser.value()));
            parser = WordStreamParser::new(grammar, relaxed);
            if parser.push(lw, ahead) {
                continue;
            }
        }
        out.push(OutToken::literal(word));
    }
    if parser.started() {
        out.push(OutToken::num(parser.value()));
    }
    out
}

/// Grow a candidate phrase token by token and re-parse it whole each
/// time; on failure flush the last successful value (when there is one)
/// and give the failing token a fresh start, otherwise pass it through.
fn substitute_compounding(grammar: &'static LanguageGrammar, segment: &str) -> Vec<OutToken> {
    let words: Vec<&str> = segment.split_whitespace().collect();
    let parser = CompoundValueParser::new(grammar);
    let mut out = Vec::with_capacity(words.len());
    let mut sentence = String::new();
    let mut last_value: Option<u64> = None;
    let mut i = 0;
    while i < words.len() {
        let lw = words[i].to_lowercase();
        let candidate = if sentence.is_empty() {
            lw
        } else {
            format!("{sentence} {lw}")
        };
        match parser.parse(&candidate) {
            Ok(value) => {
                sentence = candidate;
                last_value = Some(value);
                i += 1;
            }
            Err(_) => {
                if let Some(value) = last_value.take() {
                    // Flush and retry this token against a fresh phrase.
                    out.push(OutToken::num(value));
                    sentence.clear();
                } else {
                    out.push(OutToken::literal(words[i]));
                    i += 1;
                }
            }
        }
    }
    if let Some(value) = last_value {
        out.push(OutToken::num(value));
    }
    out
}

/// Join tokens with single spaces, folding a sign word into the number
/// right after it ("minus fünfzehn" prints as "-15").
fn join_tokens(grammar: &LanguageGrammar, tokens: &[OutToken], signed: bool) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if !out.is_empty() {
            out.push(' ');
        }
        if signed && !token.is_num {
            if let Some(sym) = grammar.sign_symbol(&token.text.to_lowercase()) {
                if let Some(next) = tokens.get(i + 1) {
                    if next.is_num {
                        out.push_str(sym);
                        out.push_str(&next.text);
                        i += 2;
                        continue;
                    }
                }
            }
        }
        out.push_str(&token.text);
        i += 1;
    }
    out
}
