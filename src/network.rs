//! Card network identification and per-network display metadata.
//!
//! Every rule that varies by network — raw digit count, digit grouping,
//! display name, CCV length — lives in the `const fn` tables on
//! [`CardNetwork`]. The classifier, validator, and formatter all consult
//! these accessors rather than carrying their own constants.

use std::fmt;

/// The payment networks this crate recognizes.
///
/// `Invalid` is a first-class variant rather than an `Option`: an
/// unrecognized prefix is an expected outcome of classification (the user
/// simply hasn't typed enough digits yet, or typed a card we don't
/// support), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardNetwork {
    /// Visa - prefix 4, 16 digits
    Visa,
    /// MasterCard - prefix 51-55, 16 digits
    MasterCard,
    /// American Express - prefix 34 or 37, 15 digits
    Amex,
    /// Discover - prefix 6011 or 65, 16 digits
    Discover,
    /// Diners Club - prefix 300-305, 36, or 38, 14 digits
    DinersClub,
    /// Unrecognized prefix or not enough digits to decide
    Invalid,
}

impl CardNetwork {
    /// Canonical display label for the network.
    ///
    /// `Invalid` has no label and returns the empty string.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::Amex => "Amex",
            Self::Discover => "Discover",
            Self::DinersClub => "Diner's Club",
            Self::Invalid => "",
        }
    }

    /// Number of digits in a complete card number, 0 for `Invalid`.
    #[inline]
    pub const fn raw_length(&self) -> usize {
        match self {
            Self::Visa | Self::MasterCard | Self::Discover => 16,
            Self::Amex => 15,
            Self::DinersClub => 14,
            Self::Invalid => 0,
        }
    }

    /// Digit grouping used for formatted display.
    ///
    /// For every recognized network the sizes sum to [`raw_length`].
    /// `Invalid` falls back to the common 4-4-4-4 layout so live
    /// formatting still produces something sensible while the prefix is
    /// ambiguous.
    ///
    /// [`raw_length`]: Self::raw_length
    #[inline]
    pub const fn group_sizes(&self) -> &'static [usize] {
        match self {
            Self::Amex => &[4, 6, 5],
            Self::DinersClub => &[4, 6, 4],
            _ => &[4, 4, 4, 4],
        }
    }

    /// Length of the fully formatted number: raw digits plus one space
    /// between each pair of groups. 0 for `Invalid`.
    #[inline]
    pub const fn formatted_length(&self) -> usize {
        match self {
            Self::Invalid => 0,
            _ => self.raw_length() + self.group_sizes().len() - 1,
        }
    }

    /// Length of the formatted number up to (but not including) the final
    /// group and its leading space.
    ///
    /// In an obscured display only the last group is editable; this is how
    /// many characters precede it. 0 for `Invalid`.
    #[inline]
    pub const fn formatted_length_till_last_group(&self) -> usize {
        match self {
            Self::Invalid => 0,
            _ => {
                let groups = self.group_sizes();
                self.formatted_length() - groups[groups.len() - 1] - 1
            }
        }
    }

    /// Expected CCV digit count: 4 for Amex, 3 for everything else.
    #[inline]
    pub const fn ccv_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// True for every variant except `Invalid`.
    #[inline]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// All recognized networks, in classification priority order.
    pub const RECOGNIZED: [CardNetwork; 5] = [
        Self::Visa,
        Self::MasterCard,
        Self::Amex,
        Self::Discover,
        Self::DinersClub,
    ];
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
