//! # Decimus
//!
//! Lazy numerical approximation streams and digit-word spelling.
//!
//! ## Features
//!
//! - **Lazy Streams**: infinite approximation sequences as plain iterators,
//!   produced strictly on demand
//! - **Convergence Extraction**: absolute and relative tolerance scans with
//!   explicit no-convergence errors
//! - **Newton-Raphson Roots**: square root estimation to any tolerance
//! - **Richardson Acceleration**: single-order and iterated error
//!   elimination for derivative estimates
//! - **Digit Spelling**: negative-safe conversion of integers to
//!   `"-"`-joined English digit words
//!
//! ## Quick Start
//!
//! ```rust
//! use decimus::prelude::*;
//!
//! let root: f64 = sqrt_estimate(1.0, Tolerance::Absolute(1e-6), 2.0).unwrap();
//! assert!((root - 1.4142).abs() < 1e-3);
//!
//! assert_eq!(number_to_words(42).unwrap(), "four-two");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use decimus_approx as approx;
pub use decimus_words as words;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use decimus_approx::{
        converge, differentiate, differentiate_accelerated, iterate, relative, sqrt_estimate,
        within, NoConvergence, Tolerance,
    };
    pub use decimus_words::{digit_word, digits_of, intersperse, number_to_words, WordsError};
}
