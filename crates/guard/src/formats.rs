//! Format predicates
//!
//! Pure `&str -> bool` recognizers behind the string format checks. They
//! are public so callers can reuse them with
//! [`Contract::satisfy`](crate::levels::Contract::satisfy) or outside any
//! chain.

use std::net::IpAddr;
use std::sync::LazyLock;

use base64::Engine;
use regex::Regex;
use uuid::Uuid;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// `local@domain.tld`, with at least one dot in the domain.
pub fn is_email(input: &str) -> bool {
    input.len() <= 254 && EMAIL_REGEX.is_match(input)
}

/// An absolute URL with a scheme, as accepted by the WHATWG parser.
pub fn is_url(input: &str) -> bool {
    url::Url::parse(input).is_ok()
}

/// An IPv4 or IPv6 address.
pub fn is_ip_address(input: &str) -> bool {
    input.parse::<IpAddr>().is_ok()
}

/// A UUID in any of the textual forms `uuid` accepts (hyphenated, simple,
/// braced, urn).
pub fn is_guid(input: &str) -> bool {
    Uuid::parse_str(input).is_ok()
}

/// Padded standard-alphabet base64. The empty string is not accepted.
pub fn is_base64(input: &str) -> bool {
    !input.is_empty() && base64::engine::general_purpose::STANDARD.decode(input).is_ok()
}

/// An even number of hex digits, either case. The empty string is not
/// accepted.
pub fn is_hex(input: &str) -> bool {
    !input.is_empty() && hex::decode(input).is_ok()
}

/// A card number: 12 to 19 digits (spaces and dashes ignored) passing the
/// Luhn checksum.
pub fn is_credit_card_number(input: &str) -> bool {
    let mut digits = Vec::with_capacity(19);
    for c in input.chars() {
        match c {
            ' ' | '-' => {}
            '0'..='9' => digits.push(c as u8 - b'0'),
            _ => return false,
        }
    }
    (12..=19).contains(&digits.len()) && passes_luhn(&digits)
}

fn passes_luhn(digits: &[u8]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("first.last+tag@mail.example.org", true)]
    #[case("no-at-sign.example.com", false)]
    #[case("ada@localhost", false)]
    #[case("ada@@example.com", false)]
    #[case("", false)]
    fn test_email(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_email(input), expected);
    }

    #[rstest]
    #[case("https://nebula.dev/flows?id=1", true)]
    #[case("postgres://user@db:5432/app", true)]
    #[case("nebula.dev", false)]
    #[case("", false)]
    fn test_url(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_url(input), expected);
    }

    #[test]
    fn test_ip_address() {
        assert!(is_ip_address("10.0.0.1"));
        assert!(is_ip_address("::1"));
        assert!(!is_ip_address("256.0.0.1"));
        assert!(!is_ip_address("localhost"));
    }

    #[test]
    fn test_guid() {
        assert!(is_guid("67e55044-10b1-426f-9247-bb680e5fe0c8"));
        assert!(is_guid("67e5504410b1426f9247bb680e5fe0c8"));
        assert!(!is_guid("67e55044-10b1-426f-9247"));
    }

    #[test]
    fn test_base64() {
        assert!(is_base64("bmVidWxh"));
        assert!(is_base64("bmVidWw="));
        assert!(!is_base64("bmVidWw"));
        assert!(!is_base64("not base64!"));
        assert!(!is_base64(""));
    }

    #[test]
    fn test_hex() {
        assert!(is_hex("deadBEEF"));
        assert!(!is_hex("abc"));
        assert!(!is_hex("zz"));
        assert!(!is_hex(""));
    }

    #[rstest]
    #[case("4111 1111 1111 1111", true)]
    #[case("5500-0000-0000-0004", true)]
    #[case("4111 1111 1111 1112", false)]
    #[case("4111", false)]
    #[case("4111 1111 1111 111a", false)]
    fn test_credit_card_number(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_credit_card_number(input), expected);
    }
}
