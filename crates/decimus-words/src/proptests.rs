//! Property-based tests for digit decomposition and spelling.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{digit_word, digits_of, intersperse, number_to_words, WordsError};

    // Strategy for short element vectors
    fn small_vec() -> impl Strategy<Value = Vec<i32>> {
        proptest::collection::vec(-1000i32..1000, 0..64)
    }

    proptest! {
        #[test]
        fn digits_fold_back_to_the_number(n in any::<u64>()) {
            let folded = digits_of(n)
                .into_iter()
                .fold(0u64, |acc, d| acc * 10 + u64::from(d));
            prop_assert_eq!(folded, n);
        }

        #[test]
        fn digits_are_never_empty(n in any::<u64>()) {
            prop_assert!(!digits_of(n).is_empty());
        }

        #[test]
        fn digit_count_matches_decimal_width(n in any::<u64>()) {
            prop_assert_eq!(digits_of(n).len(), n.to_string().len());
        }

        #[test]
        fn every_produced_digit_has_a_word(n in any::<u64>()) {
            for digit in digits_of(n) {
                prop_assert!(digit_word(digit).is_ok());
            }
        }

        #[test]
        fn intersperse_length_and_order(xs in small_vec(), sep in 2000i32..3000) {
            let out: Vec<i32> = intersperse(sep, xs.clone()).collect();

            let expected_len = if xs.is_empty() { 0 } else { 2 * xs.len() - 1 };
            prop_assert_eq!(out.len(), expected_len);

            // Original items sit at even indices in original order,
            // separators at every odd index.
            for (i, item) in out.iter().enumerate() {
                if i % 2 == 0 {
                    prop_assert_eq!(*item, xs[i / 2]);
                } else {
                    prop_assert_eq!(*item, sep);
                }
            }
        }

        #[test]
        fn spelling_splits_back_into_digit_words(n in 0i64..) {
            let spelled = number_to_words(n).unwrap();
            let digits = digits_of(n.unsigned_abs());
            let words: Vec<&str> = spelled.split('-').collect();

            prop_assert_eq!(words.len(), digits.len());
            for (word, digit) in words.iter().zip(digits) {
                prop_assert_eq!(*word, digit_word(digit).unwrap());
            }
        }

        #[test]
        fn negative_numbers_are_rejected(n in i64::MIN..0) {
            prop_assert_eq!(number_to_words(n), Err(WordsError::NegativeInput(n)));
        }
    }
}
