#![cfg(feature = "patterns")]

use fluent_regex::patterns::{ipv4_address, IPV4_ADDRESS};
use pretty_assertions::assert_eq;

#[test]
fn valid_addresses_capture_every_octet() {
    for address in [
        "0.0.0.0",
        "10.0.0.1",
        "127.0.0.0",
        "255.255.255.0",
        "255.255.255.255",
    ] {
        let caps = IPV4_ADDRESS
            .captures(address)
            .unwrap_or_else(|| panic!("`{address}` did not match"));
        assert_eq!(caps.len(), 5);

        let octets: Vec<_> = (1..=4).map(|i| caps.get(i).unwrap().as_str()).collect();
        assert_eq!(octets.join("."), address);
    }
}

#[test]
fn invalid_addresses_do_not_match() {
    for text in ["0.0.0", "255.255.255.256", "elephant"] {
        assert!(!IPV4_ADDRESS.is_match(text), "`{text}` matched");
    }
}

#[test]
fn address_inside_text() {
    let caps = IPV4_ADDRESS.captures("ping 8.8.4.4 now").unwrap();
    assert_eq!(&caps[0], "8.8.4.4");
    assert_eq!(&caps[3], "4");
}

#[test]
fn builds_the_same_pattern_every_time() {
    assert_eq!(ipv4_address().unwrap().as_str(), IPV4_ADDRESS.as_str());
}
