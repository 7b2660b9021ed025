//! Rejection reasons for the rich validation path.
//!
//! The boolean [`crate::is_valid`] and the formatting functions never
//! surface these; they exist for callers that want to tell a user *why*
//! a number was rejected.

use crate::CardNetwork;
use std::fmt;

/// Why a proposed card number was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input contained no digits at all.
    NoDigits,

    /// More digits than any recognized network uses.
    TooLong {
        /// Digits seen before giving up.
        length: usize,
        /// The largest raw length any network accepts (16).
        maximum: usize,
    },

    /// The digit prefix matched no recognized network.
    UnknownNetwork,

    /// The digit count does not match the classified network's length.
    WrongLength {
        /// The network the prefix classified as.
        network: CardNetwork,
        /// Digits actually provided.
        length: usize,
        /// The network's required digit count.
        expected: usize,
    },

    /// The Luhn checksum did not hold; usually a typo in the number.
    ChecksumFailed,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDigits => write!(f, "card number contains no digits"),

            Self::TooLong { length, maximum } => write!(
                f,
                "card number too long: got {} digits, maximum is {}",
                length, maximum
            ),

            Self::UnknownNetwork => {
                write!(f, "unrecognized card network - check the leading digits")
            }

            Self::WrongLength {
                network,
                length,
                expected,
            } => write!(
                f,
                "{} numbers have {} digits, got {}",
                network.name(),
                expected,
                length
            ),

            Self::ChecksumFailed => {
                write!(f, "checksum failed - please verify the card number")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
