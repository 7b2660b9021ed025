//! CCV (card verification) code rules.
//!
//! Amex prints a 4-digit code on the card front; every other network uses
//! 3 digits on the back. The expected count lives on
//! [`CardNetwork::ccv_length`]; this module validates entered codes
//! against it.

use crate::CardNetwork;
use std::fmt;

/// A CCV code that matched its network's length rule.
///
/// Holds at most four digits; they are zeroed on drop and never shown by
/// `Debug` or `Display`.
#[derive(Clone)]
pub struct ValidatedCcv {
    digits: [u8; 4],
    length: u8,
}

impl ValidatedCcv {
    /// The code as a digit string, preserving leading zeros.
    pub fn as_str(&self) -> String {
        self.digits[..self.length as usize]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Number of digits (3, or 4 for Amex).
    #[inline]
    pub const fn length(&self) -> usize {
        self.length as usize
    }
}

impl fmt::Debug for ValidatedCcv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCcv")
            .field("value", &"***")
            .field("length", &self.length)
            .finish()
    }
}

impl fmt::Display for ValidatedCcv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "*".repeat(self.length as usize))
    }
}

impl Drop for ValidatedCcv {
    fn drop(&mut self) {
        self.digits = [0; 4];
    }
}

/// Why a CCV was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CcvError {
    /// The input was empty.
    Empty,
    /// A non-digit character appeared in the code.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its position in the input (0-indexed).
        position: usize,
    },
    /// The digit count does not match the network's rule.
    WrongLength {
        /// The network the code was checked against.
        network: CardNetwork,
        /// Digits actually provided.
        length: usize,
        /// The network's expected count.
        expected: usize,
    },
}

impl fmt::Display for CcvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "CCV is empty"),
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "invalid character '{}' at position {}",
                character.escape_default(),
                position
            ),
            Self::WrongLength {
                network,
                length,
                expected,
            } => {
                if network.is_recognized() {
                    write!(
                        f,
                        "{} cards use a {} digit CCV, got {}",
                        network.name(),
                        expected,
                        length
                    )
                } else {
                    write!(f, "CCV must be {} digits, got {}", expected, length)
                }
            }
        }
    }
}

impl std::error::Error for CcvError {}

/// Validates a CCV against a network's length rule.
///
/// Unlike card-number parsing this is strict: a CCV field holds nothing
/// but the code, so any non-digit is rejected rather than stripped.
///
/// # Example
///
/// ```
/// use creditcard::ccv::validate_ccv;
/// use creditcard::CardNetwork;
///
/// assert!(validate_ccv("123", CardNetwork::Visa).is_ok());
/// assert!(validate_ccv("1234", CardNetwork::Amex).is_ok());
/// assert!(validate_ccv("123", CardNetwork::Amex).is_err());
/// ```
pub fn validate_ccv(input: &str, network: CardNetwork) -> Result<ValidatedCcv, CcvError> {
    if input.is_empty() {
        return Err(CcvError::Empty);
    }

    let expected = network.ccv_length();
    let mut digits = [0u8; 4];
    let mut count = 0usize;

    for (position, c) in input.chars().enumerate() {
        if !c.is_ascii_digit() {
            return Err(CcvError::InvalidCharacter {
                character: c,
                position,
            });
        }
        if count == expected {
            return Err(CcvError::WrongLength {
                network,
                length: input.chars().count(),
                expected,
            });
        }
        digits[count] = (c as u8) - b'0';
        count += 1;
    }

    if count != expected {
        return Err(CcvError::WrongLength {
            network,
            length: count,
            expected,
        });
    }

    Ok(ValidatedCcv {
        digits,
        length: count as u8,
    })
}

/// Boolean convenience around [`validate_ccv`].
#[inline]
pub fn is_valid_ccv(input: &str, network: CardNetwork) -> bool {
    validate_ccv(input, network).is_ok()
}
