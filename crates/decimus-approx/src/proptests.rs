//! Property-based tests for the approximation streams.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{iterate, relative, sqrt_estimate, within, NoConvergence, Tolerance};

    // Strategy for square root targets spanning several orders of magnitude
    fn sqrt_target() -> impl Strategy<Value = f64> {
        0.01f64..1.0e6
    }

    proptest! {
        #[test]
        fn sqrt_estimate_matches_float_sqrt(n in sqrt_target()) {
            let estimate = sqrt_estimate(1.0, Tolerance::Absolute(1e-9), n).unwrap();
            prop_assert!((estimate - n.sqrt()).abs() <= 1e-6);
        }

        #[test]
        fn sqrt_estimate_relative_mode(n in sqrt_target()) {
            let estimate = sqrt_estimate(1.0, Tolerance::Relative(1e-9), n).unwrap();
            prop_assert!((estimate / n.sqrt() - 1.0).abs() <= 1e-6);
        }

        #[test]
        fn sqrt_is_seed_independent(n in sqrt_target(), seed in 0.5f64..100.0) {
            let from_one = sqrt_estimate(1.0, Tolerance::Absolute(1e-10), n).unwrap();
            let from_seed = sqrt_estimate(seed, Tolerance::Absolute(1e-10), n).unwrap();
            prop_assert!((from_one - from_seed).abs() <= 1e-6);
        }

        #[test]
        fn converge_returns_an_element_or_counts_the_input(
            terms in proptest::collection::vec(-1.0e3f64..1.0e3, 0..32),
            eps in 1.0e-6f64..1.0,
        ) {
            match within(eps, terms.clone()) {
                Ok(value) => prop_assert!(terms.contains(&value)),
                Err(err) => prop_assert_eq!(err.terms, terms.len()),
            }
        }

        #[test]
        fn single_term_never_converges(term in -1.0e6f64..1.0e6, eps in 1.0e-6f64..1.0) {
            prop_assert_eq!(within(eps, [term]), Err(NoConvergence { terms: 1 }));
            prop_assert_eq!(relative(eps, [term]), Err(NoConvergence { terms: 1 }));
        }

        #[test]
        fn iterate_prefix_is_reproducible(seed in -100.0f64..100.0, len in 1usize..24) {
            let first: Vec<f64> = iterate(seed, |x| x / 2.0 + 1.0).take(len).collect();
            let second: Vec<f64> = iterate(seed, |x| x / 2.0 + 1.0).take(len).collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn constant_sequences_converge_immediately(value in -1.0e6f64..1.0e6, eps in 1.0e-6f64..1.0) {
            prop_assert_eq!(within(eps, iterate(value, |x| x).take(16)), Ok(value));
        }
    }
}
