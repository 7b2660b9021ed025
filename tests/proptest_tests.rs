//! Property-based tests for invariants that should hold on all inputs.

use proptest::prelude::*;

use creditcard::{
    classify, formatted_string, is_valid, luhn, obscured_card, passes_luhn, strip_formatting,
    validate, CardNetwork,
};

// =============================================================================
// STRATEGIES
// =============================================================================

/// A digit string of the given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// A digit string with a length anywhere in the range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

/// Arbitrary strings, including non-digit garbage.
fn any_input() -> impl Strategy<Value = String> {
    proptest::string::string_regex(".{0,40}").unwrap()
}

/// A complete, checksum-valid number for one of the recognized networks.
fn valid_card() -> impl Strategy<Value = (CardNetwork, String)> {
    prop_oneof![
        Just((CardNetwork::Visa, "4")),
        Just((CardNetwork::MasterCard, "55")),
        Just((CardNetwork::Amex, "34")),
        Just((CardNetwork::Discover, "6011")),
        Just((CardNetwork::DinersClub, "36")),
    ]
    .prop_flat_map(|(network, prefix)| {
        let body_len = network.raw_length() - prefix.len() - 1;
        digit_string(body_len).prop_map(move |body| {
            let mut digits: Vec<u8> = prefix
                .bytes()
                .chain(body.bytes())
                .map(|b| b - b'0')
                .collect();
            digits.push(luhn::check_digit(&digits));
            let number: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
            (network, number)
        })
    })
}

// =============================================================================
// TOTALITY: NOTHING PANICS
// =============================================================================

proptest! {
    #[test]
    fn no_operation_panics_on_arbitrary_input(input in any_input()) {
        let _ = classify(&input);
        let _ = is_valid(&input);
        let _ = passes_luhn(&input);
        let _ = formatted_string(&input);
        let _ = obscured_card(&input);
        let _ = validate(&input);
    }
}

// =============================================================================
// LUHN PROPERTIES
// =============================================================================

proptest! {
    /// Appending the check digit always yields a passing sequence.
    #[test]
    fn check_digit_completes_any_sequence(prefix in digit_string_range(1..=18)) {
        let mut digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
        digits.push(luhn::check_digit(&digits));
        prop_assert!(luhn::validate(&digits));
    }

    /// Constructed cards for every network pass full validation.
    #[test]
    fn constructed_cards_are_valid((network, number) in valid_card()) {
        prop_assert!(is_valid(&number), "{number}");
        prop_assert_eq!(classify(&number), network);
        let card = validate(&number).unwrap();
        prop_assert_eq!(card.network(), network);
        prop_assert_eq!(card.length(), network.raw_length());
    }

    /// Changing any single digit of a valid card breaks acceptance.
    #[test]
    fn single_digit_change_invalidates(
        (_, number) in valid_card(),
        pos_seed in any::<prop::sample::Index>(),
        delta in 1u8..=9,
    ) {
        let pos = pos_seed.index(number.len());
        let mut digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        digits[pos] = (digits[pos] + delta) % 10;
        let altered: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
        prop_assert!(!is_valid(&altered), "altering {number} at {pos} went undetected");
    }
}

// =============================================================================
// FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Stripping the formatted string yields the input digits truncated
    /// to the group pattern.
    #[test]
    fn format_round_trip(input in any_input()) {
        let digits = strip_formatting(&input);
        let network = classify(&digits);
        let limit: usize = network.group_sizes().iter().sum();
        let expected = &digits[..digits.len().min(limit)];
        prop_assert_eq!(strip_formatting(&formatted_string(&input)), expected);
    }

    /// Formatting is idempotent: re-formatting formatted output is a no-op.
    #[test]
    fn format_idempotent(input in digit_string_range(0..=20)) {
        let once = formatted_string(&input);
        prop_assert_eq!(formatted_string(&once), once.clone());
    }

    /// Groups in the formatted output never exceed the network pattern.
    #[test]
    fn format_group_sizes_respect_pattern(input in digit_string_range(1..=16)) {
        let network = classify(&input);
        let sizes = network.group_sizes();
        let formatted = formatted_string(&input);
        for (group, &max) in formatted.split(' ').zip(sizes.iter()) {
            prop_assert!(group.len() <= max, "group {group} exceeds {max} in {formatted}");
            prop_assert!(group.chars().all(|c| c.is_ascii_digit()));
        }
    }

    /// The obscured display never leaks digits outside the final group.
    #[test]
    fn obscured_shows_only_last_group((network, number) in valid_card()) {
        let obscured = obscured_card(&number);
        let last = *network.group_sizes().last().unwrap();
        let shown: String = obscured.chars().filter(char::is_ascii_digit).collect();
        prop_assert_eq!(shown.as_str(), &number[number.len() - last..]);
        prop_assert!(obscured.starts_with(network.name()));
    }

    /// A fully formatted number has exactly the advertised length, and
    /// the advertised prefix length lands just before the last group.
    #[test]
    fn formatted_lengths_are_consistent((network, number) in valid_card()) {
        let formatted = formatted_string(&number);
        prop_assert_eq!(formatted.chars().count(), network.formatted_length());

        let till_last = network.formatted_length_till_last_group();
        // The character at the boundary is the separator before the last group
        prop_assert_eq!(formatted.as_bytes()[till_last], b' ');
        let last = *network.group_sizes().last().unwrap();
        prop_assert_eq!(formatted.len() - (till_last + 1), last);
    }
}

// =============================================================================
// CLASSIFICATION PROPERTIES
// =============================================================================

proptest! {
    /// Classification only depends on the digit prefix: appending digits
    /// to an already-classified number never changes the network.
    #[test]
    fn classification_is_prefix_stable(
        (network, number) in valid_card(),
        suffix in digit_string_range(0..=6),
    ) {
        let extended = format!("{number}{suffix}");
        prop_assert_eq!(classify(&extended), network);
    }

    /// Separators never affect classification.
    #[test]
    fn classification_ignores_separators((network, number) in valid_card()) {
        let spaced = formatted_string(&number);
        prop_assert_eq!(classify(&spaced), network);
    }
}
