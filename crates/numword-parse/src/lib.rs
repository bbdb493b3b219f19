//! Spelled-out numeral parsing and in-text digit substitution.
//!
//! The crate converts cardinal numbers written in words into digits, for
//! decimal-positional languages (French, English) and compounding ones
//! (German). [`text2num`] parses one whole numeral phrase; [`alpha2digit`]
//! rewrites arbitrary text, substituting every maximal numeral run and
//! leaving everything else untouched.
//!
//! ```
//! use numword_parse::{alpha2digit, text2num};
//!
//! assert_eq!(text2num("fifty-three thousand", "en", false).unwrap(), 53_000);
//! assert_eq!(
//!     alpha2digit("Es sind dreiundzwanzig Kühe im Stall.", "de", false, true).unwrap(),
//!     "Es sind 23 Kühe im Stall."
//! );
//! ```

pub mod german;
pub mod lang;
pub mod parser;
pub mod segment;
pub mod transform;

pub use numword_common::{NumeralError, NumeralErrorKind};

pub use german::CompoundValueParser;
pub use lang::{LanguageGrammar, NumeralStyle, WordClass, grammar_for};
pub use parser::WordStreamParser;
pub use segment::{look_ahead, split_segments};
pub use transform::{alpha2digit, text2num};
