//! # creditcard
//!
//! Payment card network classification, Luhn validation, and display
//! formatting. Given a raw digit string (typically a text field's
//! contents), the crate decides which network the number belongs to,
//! whether it is acceptable, and how to render it.
//!
//! Recognized networks: Visa, MasterCard, Amex, Discover, and Diners
//! Club. Anything else classifies as [`CardNetwork::Invalid`].
//!
//! ## Quick start
//!
//! ```rust
//! use creditcard::{classify, is_valid, formatted_string, obscured_card, CardNetwork};
//!
//! // Classification works from the leading digits
//! assert_eq!(classify("4111111111111111"), CardNetwork::Visa);
//!
//! // Acceptance: network length plus Luhn checksum
//! assert!(is_valid("4111 1111 1111 1111"));
//! assert!(!is_valid("4111 1111 1111 1112"));
//!
//! // Live formatting for in-progress entry
//! assert_eq!(formatted_string("411111111"), "4111 1111 1");
//!
//! // Obscured display for stored cards
//! assert_eq!(obscured_card("4111111111111234"), "Visa •••• •••• •••• 1234");
//! ```
//!
//! ## Network metadata
//!
//! Per-network rules live on [`CardNetwork`]:
//!
//! ```rust
//! use creditcard::CardNetwork;
//!
//! assert_eq!(CardNetwork::Amex.raw_length(), 15);
//! assert_eq!(CardNetwork::Amex.group_sizes(), &[4, 6, 5]);
//! assert_eq!(CardNetwork::Amex.formatted_length(), 17);
//! assert_eq!(CardNetwork::Amex.ccv_length(), 4);
//! ```
//!
//! ## Rich validation
//!
//! [`validate`] reports why a number was rejected and returns a
//! [`ValidatedCard`] whose digits are zeroed on drop and whose `Debug`
//! and `Display` output never expose the full number:
//!
//! ```rust
//! use creditcard::{validate, CardNetwork, ValidationError};
//!
//! let card = validate("3782 822463 10005").unwrap();
//! assert_eq!(card.network(), CardNetwork::Amex);
//! assert_eq!(card.last_group(), "10005");
//!
//! let err = validate("3782 822463 1000").unwrap_err();
//! assert_eq!(
//!     err,
//!     ValidationError::WrongLength {
//!         network: CardNetwork::Amex,
//!         length: 14,
//!         expected: 15,
//!     }
//! );
//! ```
//!
//! ## Supported networks
//!
//! | Network | Prefix | Length | Grouping | CCV |
//! |---------|--------|--------|----------|-----|
//! | Visa | 4 | 16 | 4-4-4-4 | 3 |
//! | MasterCard | 51-55 | 16 | 4-4-4-4 | 3 |
//! | Amex | 34, 37 | 15 | 4-6-5 | 4 |
//! | Discover | 6011, 65 | 16 | 4-4-4-4 | 3 |
//! | Diners Club | 300-305, 36, 38 | 14 | 4-6-4 | 3 |
//!
//! ## Concurrency
//!
//! Every operation is a pure function over its input and the static
//! metadata tables; there is no shared mutable state, so any number of
//! threads may call anything concurrently.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod ccv;
pub mod classify;
pub mod error;
pub mod format;
pub mod luhn;
pub mod network;
pub mod validate;

// Re-export the main surface at the crate root
pub use card::{ValidatedCard, MAX_CARD_DIGITS};
pub use classify::{classify, MIN_PREFIX_DIGITS};
pub use error::ValidationError;
pub use format::{formatted_string, obscured_card, strip_formatting};
pub use network::CardNetwork;
pub use validate::{is_valid, passes_luhn, validate};
