//! Validation must never panic on arbitrary input.

#![no_main]

use creditcard::{is_valid, passes_luhn, validate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = validate(data);
    let _ = is_valid(data);
    let _ = passes_luhn(data);

    // A successful validation must agree with the boolean check
    if let Ok(card) = validate(data) {
        assert!(is_valid(data));
        assert_eq!(card.length(), card.network().raw_length());
    }
});
