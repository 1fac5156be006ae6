//! English spelling of decimal digits.

use thiserror::Error;

use crate::digits::digits_of;
use crate::intersperse::intersperse;

/// English names of the decimal digits, indexed by digit value.
const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Errors from digit-word mapping and number spelling.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum WordsError {
    /// A digit value outside the range [0, 9] has no English name.
    #[error("digit {0} is outside the range 0-9")]
    InvalidDigit(u8),

    /// The converter only spells non-negative numbers.
    #[error("cannot spell negative number {0}")]
    NegativeInput(i64),
}

/// Returns the English name of a single decimal digit.
///
/// # Errors
///
/// Returns [`WordsError::InvalidDigit`] when `digit` is not in [0, 9].
pub fn digit_word(digit: u8) -> Result<&'static str, WordsError> {
    DIGIT_WORDS
        .get(usize::from(digit))
        .copied()
        .ok_or(WordsError::InvalidDigit(digit))
}

/// Spells a number as its `"-"`-joined decimal digit words, most significant
/// digit first.
///
/// # Example
///
/// ```
/// use decimus_words::number_to_words;
///
/// assert_eq!(number_to_words(1234256).unwrap(), "one-two-three-four-two-five-six");
/// assert_eq!(number_to_words(0).unwrap(), "zero");
/// ```
///
/// # Errors
///
/// Returns [`WordsError::NegativeInput`] when `n` is negative. Division and
/// modulo on a negative dividend would produce remainders outside the digit
/// range, so the sign is rejected up front instead.
pub fn number_to_words(n: i64) -> Result<String, WordsError> {
    if n < 0 {
        return Err(WordsError::NegativeInput(n));
    }
    let words = digits_of(n.unsigned_abs())
        .into_iter()
        .map(digit_word)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(intersperse("-", words).collect())
}
