use crate::NumeralError;

/// Replace every spelled-out number in `text` with digits, using strict
/// parsing and sign folding.
///
/// This helper is intended for documentation examples to avoid repetitive
/// flag arguments.
///
/// # Example
///
/// ```rust
/// # use numword::doc_examples::normalize;
/// let text = normalize("Vingt-cinq vaches et douze poulets", "fr")?;
/// assert_eq!(text, "25 vaches et 12 poulets");
/// # Ok::<(), numword::NumeralError>(())
/// ```
pub fn normalize(text: &str, lang: &str) -> Result<String, NumeralError> {
    crate::alpha2digit(text, lang, false, true)
}
