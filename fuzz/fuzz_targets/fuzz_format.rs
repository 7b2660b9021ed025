//! Formatting must never panic and must stay within the group pattern.

#![no_main]

use creditcard::{classify, formatted_string, obscured_card, strip_formatting};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let formatted = formatted_string(data);
    let _ = obscured_card(data);

    // Reformatting formatted output is a no-op
    assert_eq!(formatted_string(&formatted), formatted);

    // Output digits are a prefix of the input digits
    let digits = strip_formatting(data);
    let output_digits = strip_formatting(&formatted);
    assert!(digits.starts_with(&output_digits));

    // Never longer than the fully formatted number for the network
    let network = classify(data);
    if network.is_recognized() {
        assert!(formatted.chars().count() <= network.formatted_length());
    }
});
