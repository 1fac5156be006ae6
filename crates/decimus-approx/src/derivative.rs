//! Forward-difference derivative estimation with Richardson acceleration.
//!
//! The base sequence evaluates (f(x+h) − f(x))/h over halving step sizes
//! h₀, h₀/2, h₀/4, ... Its error expands in powers of h, so combining the
//! consecutive pair (a, b) as (b·2ⁿ − a)/(2ⁿ − 1) cancels the order-n error
//! term. Iterating the elimination with order 1, 2, 3, ... and keeping each
//! stage's first term forms a diagonal that converges far faster than the
//! raw differences.

use num_traits::Float;

use crate::converge::{converge, NoConvergence, Tolerance};
use crate::iterate::iterate;

/// Forward-difference approximations of f′(x) over step sizes
/// h₀, h₀/2, h₀/4, ...
pub fn difference_quotients<T, F>(f: F, x: T, h0: T) -> impl Iterator<Item = T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let two = T::one() + T::one();
    iterate(h0, move |h| h / two).map(move |h| (f(x + h) - f(x)) / h)
}

/// Richardson elimination of the order-n error term.
///
/// Each output term combines the consecutive input pair (a, b) as
/// (b·2ⁿ − a)/(2ⁿ − 1), which cancels an error dominated by c·hⁿ when the
/// input halves its step between terms. An input of length m yields m − 1
/// terms.
pub struct Eliminate<I: Iterator> {
    inner: I,
    order: i32,
    previous: Option<I::Item>,
}

impl<I: Iterator> Eliminate<I> {
    fn new(order: i32, inner: I) -> Self {
        Self {
            inner,
            order,
            previous: None,
        }
    }
}

impl<T, I> Iterator for Eliminate<I>
where
    T: Float,
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let previous = match self.previous {
            Some(term) => term,
            None => self.inner.next()?,
        };
        let current = self.inner.next()?;
        self.previous = Some(current);

        let two = T::one() + T::one();
        let weight = two.powi(self.order);
        Some((current * weight - previous) / (weight - T::one()))
    }
}

/// Applies one Richardson elimination of the given error order to a
/// sequence of approximations with halving step sizes.
pub fn eliminate_error<T, I>(order: i32, sequence: I) -> Eliminate<I::IntoIter>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    Eliminate::new(order, sequence.into_iter())
}

/// Iterated Richardson elimination.
///
/// The k-th yielded term is the head of the sequence obtained from the
/// input by k successive eliminations of order 1, 2, ..., k. Consumed heads
/// are re-chained in front of the stream, so each input term is computed at
/// most once.
pub struct SuperAccelerate<T> {
    current: Box<dyn Iterator<Item = T>>,
    order: i32,
}

/// Builds the iterated-elimination diagonal over `sequence`.
pub fn super_accelerate<T, I>(sequence: I) -> SuperAccelerate<T>
where
    T: Float + 'static,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
{
    SuperAccelerate {
        current: Box::new(sequence.into_iter()),
        order: 0,
    }
}

impl<T: Float + 'static> Iterator for SuperAccelerate<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let head = self.current.next()?;
        self.order += 1;

        // The next stage eliminates over the full current stage, head
        // included, so the head is chained back in front of the remainder.
        let rest = std::mem::replace(&mut self.current, Box::new(std::iter::empty()));
        self.current = Box::new(Eliminate::new(
            self.order,
            std::iter::once(head).chain(rest),
        ));

        Some(head)
    }
}

/// Estimates f′(x) from the raw forward differences.
///
/// # Errors
///
/// The difference stream is infinite, so the scan never reports exhaustion;
/// the `Result` is the convergence extractor's interface.
pub fn differentiate<T, F>(tolerance: Tolerance<T>, h0: T, f: F, x: T) -> Result<T, NoConvergence>
where
    T: Float,
    F: Fn(T) -> T,
{
    converge(tolerance, difference_quotients(f, x, h0))
}

/// Estimates f′(x) through the iterated-elimination diagonal, which meets
/// the same tolerance after far fewer difference evaluations.
///
/// # Errors
///
/// See [`differentiate`].
pub fn differentiate_accelerated<T, F>(
    tolerance: Tolerance<T>,
    h0: T,
    f: F,
    x: T,
) -> Result<T, NoConvergence>
where
    T: Float + 'static,
    F: Fn(T) -> T + 'static,
{
    converge(tolerance, super_accelerate(difference_quotients(f, x, h0)))
}
