//! Decimal digit decomposition.

use smallvec::SmallVec;

/// Digit buffer sized for the longest decimal expansion of a `u64` (20
/// digits), so decomposition never heap-allocates.
pub type DigitBuf = SmallVec<[u8; 20]>;

/// Decomposes a non-negative integer into its decimal digits, most
/// significant first.
///
/// Repeatedly divides by 10 and collects the remainders. The decomposition
/// of 0 is `[0]`, never the empty sequence.
///
/// # Example
///
/// ```
/// use decimus_words::digits_of;
///
/// assert_eq!(digits_of(1234256).as_slice(), &[1, 2, 3, 4, 2, 5, 6]);
/// assert_eq!(digits_of(0).as_slice(), &[0]);
/// ```
pub fn digits_of(n: u64) -> DigitBuf {
    let mut digits = DigitBuf::new();
    let mut rest = n;
    loop {
        digits.push((rest % 10) as u8);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}
