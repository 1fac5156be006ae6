//! # decimus-words
//!
//! Decimal digit decomposition and English digit-word spelling.
//!
//! This crate provides:
//! - [`digits_of`]: most-significant-first decimal digits of a `u64`
//! - [`digit_word`] / [`number_to_words`]: digit names and `"-"`-joined
//!   spellings such as `"one-two-three"`
//! - [`Intersperse`]: a lazy separator-insertion iterator adaptor
//!
//! Negative input to the converter is rejected with an explicit error value
//! rather than an out-of-range digit panic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digits;
pub mod intersperse;
pub mod words;

#[cfg(test)]
mod proptests;

pub use digits::{digits_of, DigitBuf};
pub use intersperse::{intersperse, Intersperse};
pub use words::{digit_word, number_to_words, WordsError};
