//! Error taxonomy shared by the numeral parsers and the substitution driver.
//!
//! - **`NumeralErrorKind`** : the canonical failure classes
//! - **`NumeralError`**     : kind + optional human explanation
//!
//! Whole-phrase conversion (`text2num` and the value parsers) surfaces these
//! as hard errors. The text driver (`alpha2digit`) treats a failed numeral
//! parse as an expected local condition and falls back to literal text, so
//! the only error it ever returns is `UnsupportedLanguage`.

use std::{error::Error, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All recognised failure classes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumeralErrorKind {
    /// A phrase offered as a whole numeral violates the composition rules
    /// of its language (illegal digit adjacency, magnitude repetition or
    /// ordering, misplaced zero, undecomposable compound).
    InvalidLiteral,
    /// The requested language code has no registered grammar.
    UnsupportedLanguage,
}

impl fmt::Display for NumeralErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidLiteral => "invalid numeral literal",
            Self::UnsupportedLanguage => "unsupported language",
        })
    }
}

/// The single error struct the public API passes around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumeralError {
    pub kind: NumeralErrorKind,
    pub message: Option<String>,
}

impl From<NumeralErrorKind> for NumeralError {
    fn from(kind: NumeralErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }
}

impl NumeralError {
    /// Basic constructor (no message).
    pub fn new(kind: NumeralErrorKind) -> Self {
        kind.into()
    }

    /// Attach a human-readable explanation.
    pub fn with_message<S: Into<String>>(mut self, msg: S) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// An `InvalidLiteral` error quoting the offending phrase.
    pub fn invalid_literal(literal: &str) -> Self {
        Self::new(NumeralErrorKind::InvalidLiteral)
            .with_message(format!("invalid literal for numeral conversion: {literal:?}"))
    }

    /// An `UnsupportedLanguage` error naming the unknown code.
    pub fn unsupported_language(code: &str) -> Self {
        Self::new(NumeralErrorKind::UnsupportedLanguage)
            .with_message(format!("no grammar registered for language {code:?}"))
    }
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(ref msg) = self.message {
            write!(f, ": {msg}")?;
        }
        Ok(())
    }
}

impl Error for NumeralError {}

impl From<NumeralError> for String {
    fn from(error: NumeralError) -> Self {
        format!("{error}")
    }
}
