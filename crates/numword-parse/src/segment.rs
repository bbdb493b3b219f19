//! Punctuation-preserving segmentation and token lookahead.
//!
//! Substitution never crosses punctuation, so the driver first cuts the
//! input into (segment, separator) pairs. Separators are kept verbatim and
//! reattached after substitution, which makes reassembly lossless for the
//! non-numeral parts of the text.

use once_cell::sync::Lazy;
use regex::Regex;

/// A separator is a run of sentence punctuation plus the whitespace
/// hugging it.
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[.,;()…\[\]:!?]+\s*").unwrap());

/// Split `text` into (segment, separator) pairs whose in-order
/// concatenation reproduces `text` exactly. The final separator is the
/// empty string when the text does not end in punctuation.
pub fn split_segments(text: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in SEPARATORS.find_iter(text) {
        out.push((&text[last..m.start()], m.as_str()));
        last = m.end();
    }
    out.push((&text[last..], ""));
    out
}

/// Iterate `items` with one token of lookahead, ending with `(last, None)`.
pub fn look_ahead<T>(items: &[T]) -> impl Iterator<Item = (&T, Option<&T>)> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (item, items.get(i + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_reassemble_exactly() {
        let text = "vingt-cinq vaches, douze poulets; et cent vingt-cinq kg de pommes…";
        let pairs = split_segments(text);
        let rebuilt: String = pairs.iter().map(|(seg, sep)| format!("{seg}{sep}")).collect();
        assert_eq!(rebuilt, text);
        assert_eq!(pairs.last().unwrap().1, "");
    }

    #[test]
    fn separators_carry_surrounding_whitespace() {
        let pairs = split_segments("eins, zwei");
        assert_eq!(pairs, vec![("eins", ", "), ("zwei", "")]);
    }

    #[test]
    fn unpunctuated_text_is_one_segment() {
        let pairs = split_segments("twenty head of cattle");
        assert_eq!(pairs, vec![("twenty head of cattle", "")]);
    }

    #[test]
    fn look_ahead_yields_terminal_none() {
        let items = ["a", "b", "c"];
        let got: Vec<_> = look_ahead(&items).collect();
        assert_eq!(got, vec![(&"a", Some(&"b")), (&"b", Some(&"c")), (&"c", None)]);
        assert!(look_ahead::<&str>(&[]).next().is_none());
    }
}
