//! The validated card record returned by the rich validation path.

use std::fmt;
use zeroize::Zeroize;

use crate::CardNetwork;

/// Maximum digits any recognized network uses (Visa, MasterCard, Discover).
pub const MAX_CARD_DIGITS: usize = 16;

/// A card number that passed classification, length, and checksum checks.
///
/// The digits live in a fixed-size array that is zeroed when the value is
/// dropped, so a full card number does not linger in freed memory.
/// `Debug` and `Display` never show the full number; use
/// [`number`](Self::number) only where the raw digits are genuinely
/// required.
#[derive(Clone)]
pub struct ValidatedCard {
    network: CardNetwork,
    digits: [u8; MAX_CARD_DIGITS],
    digit_count: u8,
}

impl ValidatedCard {
    /// Internal constructor; use [`crate::validate`] to build one.
    #[inline]
    pub(crate) fn new(
        network: CardNetwork,
        digits: [u8; MAX_CARD_DIGITS],
        digit_count: u8,
    ) -> Self {
        Self {
            network,
            digits,
            digit_count,
        }
    }

    /// The network the number classified as.
    #[inline]
    pub const fn network(&self) -> CardNetwork {
        self.network
    }

    /// Number of digits in the card number.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// The final display group of the number (4 digits for Visa-style
    /// grouping, 5 for Amex), the part left visible in obscured display.
    pub fn last_group(&self) -> String {
        let groups = self.network.group_sizes();
        let last = groups[groups.len() - 1];
        let len = self.length();
        let start = len.saturating_sub(last);
        self.digits[start..len]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// The full card number as a digit string.
    ///
    /// This exposes the raw number; never log it. Use
    /// [`obscured`](Self::obscured) for display.
    pub fn number(&self) -> String {
        self.digits[..self.length()]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Obscured display form, e.g. `"Visa •••• •••• •••• 1234"`.
    pub fn obscured(&self) -> String {
        let mut number = self.number();
        let obscured = crate::format::obscure_for_network(self.network, &number);
        // the temporary holds raw digits, wipe it as well
        number.zeroize();
        obscured
    }
}

impl fmt::Debug for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCard")
            .field("network", &self.network)
            .field("number", &self.obscured())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.obscured())
    }
}

impl Drop for ValidatedCard {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}
