//! Convergence extraction from approximation sequences.

use num_traits::Float;
use thiserror::Error;

/// How two successive approximations are compared against a threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance<T> {
    /// Accept the pair (a, b) when |a − b| ≤ eps.
    Absolute(T),
    /// Accept the pair (a, b) when |a/b − 1| ≤ eps.
    Relative(T),
}

impl<T: Float> Tolerance<T> {
    /// Returns true if the pair of successive terms meets the threshold.
    ///
    /// In relative mode a zero `current` makes the ratio non-finite, which
    /// simply fails the comparison and lets the scan continue.
    pub fn accepts(&self, previous: T, current: T) -> bool {
        match *self {
            Tolerance::Absolute(eps) => (previous - current).abs() <= eps,
            Tolerance::Relative(eps) => (previous / current - T::one()).abs() <= eps,
        }
    }
}

/// A finite sequence ran out before two successive terms met the tolerance.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("sequence exhausted after {terms} terms without converging")]
pub struct NoConvergence {
    /// Number of terms consumed before the sequence ended.
    pub terms: usize,
}

/// Scans successive pairs of `sequence` and returns the first term whose
/// distance from its predecessor meets `tolerance`.
///
/// Consumption is strictly forward: each element is read at most once, and
/// nothing beyond the accepted term is ever requested from the sequence.
/// On an infinite sequence the scan runs until a pair is accepted.
///
/// # Errors
///
/// Returns [`NoConvergence`] if the sequence ends before any pair is
/// accepted. Empty and single-element input always take this path; the
/// error reports how many terms were seen.
pub fn converge<T, I>(tolerance: Tolerance<T>, sequence: I) -> Result<T, NoConvergence>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    let mut terms = sequence.into_iter();
    let mut previous = match terms.next() {
        Some(first) => first,
        None => return Err(NoConvergence { terms: 0 }),
    };

    let mut consumed = 1;
    for current in terms {
        consumed += 1;
        if tolerance.accepts(previous, current) {
            return Ok(current);
        }
        previous = current;
    }

    Err(NoConvergence { terms: consumed })
}

/// Extracts the first term within absolute distance `eps` of its predecessor.
///
/// # Errors
///
/// Returns [`NoConvergence`] if the sequence ends first; see [`converge`].
pub fn within<T, I>(eps: T, sequence: I) -> Result<T, NoConvergence>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    converge(Tolerance::Absolute(eps), sequence)
}

/// Extracts the first term within relative distance `eps` of its predecessor.
///
/// # Errors
///
/// Returns [`NoConvergence`] if the sequence ends first; see [`converge`].
pub fn relative<T, I>(eps: T, sequence: I) -> Result<T, NoConvergence>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    converge(Tolerance::Relative(eps), sequence)
}
