//! Meta crate that re-exports the primary numword building blocks with
//! sensible defaults. Downstream users can depend on this crate and opt
//! into specific layers via feature flags while keeping access to the
//! underlying crates when deeper integration is required.

#[cfg(feature = "common")]
pub use numword_common as common;

#[cfg(feature = "parse")]
pub use numword_parse as parse;

#[cfg(feature = "common")]
pub use numword_common::{NumeralError, NumeralErrorKind};

#[cfg(feature = "parse")]
pub use numword_parse::{
    CompoundValueParser, LanguageGrammar, NumeralStyle, WordClass, WordStreamParser, alpha2digit,
    grammar_for, text2num,
};

#[cfg(feature = "parse")]
pub mod doc_examples;
