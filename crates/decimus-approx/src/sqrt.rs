//! Newton-Raphson square root estimation.

use num_traits::Float;

use crate::converge::{converge, NoConvergence, Tolerance};
use crate::iterate::{iterate, Iterate};

/// Successive Newton-Raphson estimates of √n from `seed`: x ↦ (x + n/x)/2.
///
/// The target is assumed positive; a non-positive `n` or a zero seed is not
/// checked and yields a stream that never converges.
pub fn sqrt_stream<T: Float>(n: T, seed: T) -> Iterate<T, impl FnMut(T) -> T> {
    let two = T::one() + T::one();
    iterate(seed, move |x| (x + n / x) / two)
}

/// Estimates √n from `seed`, stopping once two successive Newton iterates
/// meet `tolerance`.
///
/// # Errors
///
/// The Newton stream is infinite, so the scan never reports exhaustion; the
/// `Result` is the convergence extractor's interface. A non-positive target
/// makes the call loop rather than fail.
pub fn sqrt_estimate<T: Float>(seed: T, tolerance: Tolerance<T>, n: T) -> Result<T, NoConvergence> {
    converge(tolerance, sqrt_stream(n, seed))
}
