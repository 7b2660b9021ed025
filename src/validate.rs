//! Acceptance checks for proposed card numbers.
//!
//! A number is accepted when its prefix classifies to a recognized
//! network, its digit count matches that network's length exactly, and
//! the Luhn checksum holds. Length is checked before the checksum; a
//! number of the wrong length is rejected without computing it.

use crate::card::{ValidatedCard, MAX_CARD_DIGITS};
use crate::classify::classify_digits;
use crate::error::ValidationError;
use crate::luhn;
use crate::CardNetwork;

/// Validates a proposed card number, reporting why it was rejected.
///
/// Non-digit characters (spaces, dashes) are stripped before checking;
/// the permissive filter means separators never cause rejection.
///
/// # Example
///
/// ```
/// use creditcard::{validate, CardNetwork};
///
/// let card = validate("4111 1111 1111 1111").unwrap();
/// assert_eq!(card.network(), CardNetwork::Visa);
/// assert_eq!(card.last_group(), "1111");
///
/// assert!(validate("4111 1111 1111 1112").is_err());
/// ```
pub fn validate(input: &str) -> Result<ValidatedCard, ValidationError> {
    let mut digits = [0u8; MAX_CARD_DIGITS];
    let mut count = 0usize;

    for c in input.chars() {
        if c.is_ascii_digit() {
            if count == MAX_CARD_DIGITS {
                return Err(ValidationError::TooLong {
                    length: count + 1,
                    maximum: MAX_CARD_DIGITS,
                });
            }
            digits[count] = (c as u8) - b'0';
            count += 1;
        }
    }

    if count == 0 {
        return Err(ValidationError::NoDigits);
    }

    let network = classify_digits(&digits[..count]);
    if network == CardNetwork::Invalid {
        return Err(ValidationError::UnknownNetwork);
    }

    if count != network.raw_length() {
        return Err(ValidationError::WrongLength {
            network,
            length: count,
            expected: network.raw_length(),
        });
    }

    if !luhn::validate(&digits[..count]) {
        return Err(ValidationError::ChecksumFailed);
    }

    Ok(ValidatedCard::new(network, digits, count as u8))
}

/// Returns true if the proposed number is acceptable.
///
/// The boolean face of [`validate`]: strips non-digits, requires an exact
/// network length match, then the Luhn check. Unrecognized networks are
/// always false. Never panics, on any input.
///
/// # Example
///
/// ```
/// use creditcard::is_valid;
///
/// assert!(is_valid("4111111111111111"));
/// assert!(!is_valid("4111111111111112"));
/// assert!(!is_valid(""));
/// ```
#[inline]
pub fn is_valid(proposed_number: &str) -> bool {
    validate(proposed_number).is_ok()
}

/// Returns true if the digits pass the Luhn check alone.
///
/// Ignores network and length rules; useful for giving early checksum
/// feedback while a number is still being typed.
#[inline]
pub fn passes_luhn(input: &str) -> bool {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect();

    luhn::validate(&digits)
}
