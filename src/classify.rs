//! Network classification from the leading digits of a card number.
//!
//! Classification only needs the first few digits, so input may be a
//! partial number typed so far. Rules are checked in a fixed priority
//! order (Visa, MasterCard, Amex, Discover, Diners Club); the first match
//! wins. The prefixes are disjoint, but the fixed order keeps the result
//! deterministic regardless.

use crate::CardNetwork;

/// Number of leading digits needed before classification is reliable.
///
/// Below this, a result may still be returned when the prefix rule is
/// already decidable (a leading `4` is Visa after one digit), but callers
/// formatting live input should treat it as provisional: Discover's
/// `6011` rule cannot fire until the fourth digit arrives.
pub const MIN_PREFIX_DIGITS: usize = 4;

/// Classifies a proposed card number by its digit prefix.
///
/// Non-digit characters (spaces, dashes from earlier formatting) are
/// ignored. Unrecognized prefixes, and prefixes still too short to match
/// any rule, classify as [`CardNetwork::Invalid`].
///
/// # Example
///
/// ```
/// use creditcard::{classify, CardNetwork};
///
/// assert_eq!(classify("4111 1111 1111 1111"), CardNetwork::Visa);
/// assert_eq!(classify("3782 822463 10005"), CardNetwork::Amex);
/// assert_eq!(classify("9999"), CardNetwork::Invalid);
/// ```
#[inline]
pub fn classify(proposed_number: &str) -> CardNetwork {
    let mut prefix = [0u8; MIN_PREFIX_DIGITS];
    let mut count = 0;

    for c in proposed_number.chars() {
        if c.is_ascii_digit() {
            prefix[count] = (c as u8) - b'0';
            count += 1;
            if count == MIN_PREFIX_DIGITS {
                break;
            }
        }
    }

    classify_digits(&prefix[..count])
}

/// Classifies a pre-parsed sequence of digit values (0-9).
///
/// Only the leading digits are inspected; passing a full card number is
/// fine.
#[inline]
pub fn classify_digits(digits: &[u8]) -> CardNetwork {
    match digits {
        // Visa: 4
        [4, ..] => CardNetwork::Visa,

        // MasterCard: 51-55
        [5, 1..=5, ..] => CardNetwork::MasterCard,

        // Amex: 34 or 37
        [3, 4, ..] | [3, 7, ..] => CardNetwork::Amex,

        // Discover: 6011 or 65
        [6, 0, 1, 1, ..] => CardNetwork::Discover,
        [6, 5, ..] => CardNetwork::Discover,

        // Diners Club: 300-305, 36, or 38
        [3, 0, 0..=5, ..] => CardNetwork::DinersClub,
        [3, 6, ..] | [3, 8, ..] => CardNetwork::DinersClub,

        _ => CardNetwork::Invalid,
    }
}
