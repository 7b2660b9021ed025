//! Luhn (mod-10) checksum over card digits.
//!
//! Every network this crate recognizes uses the same check: double every
//! second digit counting from the rightmost, fold doubled values above 9
//! back into a single digit, sum everything, and require the total to be
//! divisible by 10.

/// Doubled-digit results with the above-9 fold applied.
/// Index is the digit, value is `d * 2` or `d * 2 - 9`.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns true if the digit sequence passes the Luhn check.
///
/// Empty input fails: there is no checksum to satisfy.
///
/// # Example
///
/// ```
/// use creditcard::luhn;
///
/// assert!(luhn::validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// assert!(!luhn::validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && checksum(digits) % 10 == 0
}

/// Computes the raw Luhn sum (not reduced modulo 10).
///
/// Positions count from the rightmost digit; odd positions are doubled.
#[inline]
pub fn checksum(digits: &[u8]) -> u32 {
    let mut sum: u32 = 0;

    for (pos, &digit) in digits.iter().rev().enumerate() {
        if pos % 2 == 1 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
    }

    sum
}

/// Computes the trailing check digit for a partial number.
///
/// Appending the returned digit makes the sequence pass [`validate`].
/// Used to construct valid numbers in tests.
///
/// # Example
///
/// ```
/// use creditcard::luhn;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(luhn::check_digit(&partial), 1);
/// ```
#[inline]
pub fn check_digit(digits: &[u8]) -> u8 {
    // With the check digit appended, every existing digit shifts one
    // position left: position i from the right becomes i + 1.
    let mut sum: u32 = 0;

    for (pos, &digit) in digits.iter().rev().enumerate() {
        if pos % 2 == 0 {
            sum += DOUBLE_TABLE[digit as usize] as u32;
        } else {
            sum += digit as u32;
        }
    }

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_test_numbers() {
        // Visa
        assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        // MasterCard
        assert!(validate(&[5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4]));
        // Amex
        assert!(validate(&[3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5]));
        // Discover
        assert!(validate(&[6, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 7]));
        // Diners Club
        assert!(validate(&[3, 0, 5, 6, 9, 3, 0, 9, 0, 2, 5, 9, 0, 4]));
    }

    #[test]
    fn test_rejects_altered_digits() {
        assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
        assert!(!validate(&[5, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
        assert!(!validate(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_empty_fails() {
        assert!(!validate(&[]));
    }

    #[test]
    fn test_single_digit() {
        // A lone zero sums to zero, which is divisible by 10
        assert!(validate(&[0]));
        assert!(!validate(&[1]));
        assert!(!validate(&[9]));
    }

    #[test]
    fn test_check_digit_completes_number() {
        let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
        assert_eq!(check_digit(&partial), 1);

        let partial = [5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(check_digit(&partial), 4);

        let partial = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
        assert_eq!(check_digit(&partial), 5);
    }

    #[test]
    fn test_double_table() {
        for d in 0u8..10 {
            let doubled = d * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[d as usize], expected);
        }
    }
}
