//! Classification must never panic and must be separator-insensitive.

#![no_main]

use creditcard::{classify, strip_formatting};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let network = classify(data);

    // Stripping separators first must not change the answer
    assert_eq!(classify(&strip_formatting(data)), network);
});
