//! # decimus-approx
//!
//! Lazy approximation streams over ordinary Rust iterators.
//!
//! This crate provides:
//! - [`iterate`]: the infinite stream a, f(a), f(f(a)), ...
//! - [`within`] / [`relative`] / [`converge`]: extraction of the first term
//!   whose distance from its predecessor meets a tolerance
//! - [`sqrt_estimate`]: Newton-Raphson square roots
//! - [`differentiate`] / [`differentiate_accelerated`]: forward-difference
//!   derivatives, optionally pushed through iterated Richardson elimination
//!
//! Sequences are plain iterators: terms are produced on demand, one update
//! application per `next()` call, and nothing is computed ahead of what the
//! consumer requests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod converge;
pub mod derivative;
pub mod iterate;
pub mod sqrt;

#[cfg(test)]
mod proptests;

pub use converge::{converge, relative, within, NoConvergence, Tolerance};
pub use derivative::{
    difference_quotients, differentiate, differentiate_accelerated, eliminate_error,
    super_accelerate, Eliminate, SuperAccelerate,
};
pub use iterate::{iterate, Iterate};
pub use sqrt::{sqrt_estimate, sqrt_stream};
