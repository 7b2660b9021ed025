//! CCV validation must never panic on arbitrary input.

#![no_main]

use creditcard::ccv::{is_valid_ccv, validate_ccv};
use creditcard::CardNetwork;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for network in [
        CardNetwork::Visa,
        CardNetwork::MasterCard,
        CardNetwork::Amex,
        CardNetwork::Discover,
        CardNetwork::DinersClub,
        CardNetwork::Invalid,
    ] {
        let result = validate_ccv(data, network);
        assert_eq!(result.is_ok(), is_valid_ccv(data, network));

        if let Ok(ccv) = result {
            assert_eq!(ccv.length(), network.ccv_length());
        }
    }
});
