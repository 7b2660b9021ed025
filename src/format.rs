//! Display formatting: grouped digits and obscured card strings.
//!
//! Formatting is driven entirely by the classified network's
//! [`group_sizes`](crate::CardNetwork::group_sizes) pattern. Partial
//! input produces a partial grouped string, which is what a text field
//! wants while the user is still typing; digits beyond the pattern are
//! dropped.

use crate::classify::classify;
use crate::CardNetwork;

/// Placeholder character for obscured digit groups.
const BULLET: char = '\u{2022}';

/// Strips everything but ASCII digits from previously formatted input.
///
/// # Example
///
/// ```
/// use creditcard::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats an entered number with a single space between digit groups.
///
/// The input is stripped of non-digits and re-classified, so feeding a
/// previously formatted string back in is fine. Grouping follows the
/// network's pattern (4-6-5 for Amex, 4-6-4 for Diners Club, 4-4-4-4
/// otherwise, including unrecognized prefixes); digits beyond the
/// pattern are truncated.
///
/// # Example
///
/// ```
/// use creditcard::formatted_string;
///
/// assert_eq!(formatted_string("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(formatted_string("340000000000009"), "3400 000000 00009");
/// // Partial input formats as far as it goes
/// assert_eq!(formatted_string("41111"), "4111 1");
/// ```
pub fn formatted_string(entered_number: &str) -> String {
    let digits = strip_formatting(entered_number);
    let network = classify(&digits);
    group_digits(&digits, network.group_sizes())
}

/// Produces the obscured display form of a card number.
///
/// Every group except the last is replaced by a run of bullets matching
/// that group's digit count, and the network's display name leads the
/// string: `"Visa •••• •••• •••• 1234"`. If the input holds fewer digits
/// than a complete last group, the whole available suffix is shown.
/// Unrecognized networks get no name prefix and the generic grouping.
///
/// # Example
///
/// ```
/// use creditcard::obscured_card;
///
/// assert_eq!(obscured_card("4111111111111234"), "Visa •••• •••• •••• 1234");
/// assert_eq!(obscured_card("340000000000009"), "Amex •••• •••••• 00009");
/// ```
pub fn obscured_card(card_number: &str) -> String {
    let digits = strip_formatting(card_number);
    let network = classify(&digits);
    obscure_for_network(network, &digits)
}

/// Obscures `digits` using an already-known network classification.
pub(crate) fn obscure_for_network(network: CardNetwork, digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let groups = network.group_sizes();
    let last = groups[groups.len() - 1];

    let mut result = String::with_capacity(
        network.name().len() + 1 + network.formatted_length().max(digits.len()),
    );

    if network.is_recognized() {
        result.push_str(network.name());
        result.push(' ');
    }

    for &size in &groups[..groups.len() - 1] {
        for _ in 0..size {
            result.push(BULLET);
        }
        result.push(' ');
    }

    let shown = if digits.len() >= last {
        &digits[digits.len() - last..]
    } else {
        digits
    };
    result.push_str(shown);

    result
}

/// Walks the group pattern over `digits`, inserting a space between
/// groups and stopping when either runs out.
fn group_digits(digits: &str, groups: &[usize]) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let mut result = String::with_capacity(digits.len() + groups.len());
    let mut rest = digits;

    for (i, &size) in groups.iter().enumerate() {
        if rest.is_empty() {
            break;
        }
        if i > 0 {
            result.push(' ');
        }
        let take = size.min(rest.len());
        result.push_str(&rest[..take]);
        rest = &rest[take..];
    }

    result
}
