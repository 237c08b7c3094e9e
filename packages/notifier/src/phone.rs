//! Phone number canonicalization for the gateway.
//!
//! The gateway wants a bare digit string with the country calling code in
//! front (`252612345678`). Upstream stores numbers however users typed them:
//! `0612-345-678`, `+252 61 234 5678`, `612345678`, ...

use crate::error::{NotifyError, Result};

/// Somalia country calling code.
const COUNTRY_CODE: &str = "252";

/// Leading digit of domestic mobile numbers.
const MOBILE_PREFIX: char = '6';

/// Canonicalize a raw contact number into the gateway's format.
///
/// Strips non-digits, then prefixes the country code according to the shape
/// of what is left. Idempotent: an already-canonical number passes through
/// unchanged.
///
/// This is a best-effort heuristic for domestic numbers, not validation:
/// apart from rejecting an empty input it never fails, and international
/// numbers without the `252` prefix come out wrong rather than rejected.
pub fn normalize_phone(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(NotifyError::InvalidPhone {
            reason: "phone number is required".to_string(),
        });
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    // 9-digit domestic mobile number, e.g. 612345678
    if digits.len() == 9 && digits.starts_with(MOBILE_PREFIX) {
        return Ok(format!("{COUNTRY_CODE}{digits}"));
    }

    // Trunk-prefixed number, e.g. 0612345678
    if let Some(rest) = digits.strip_prefix('0') {
        return Ok(format!("{COUNTRY_CODE}{rest}"));
    }

    if digits.starts_with(COUNTRY_CODE) {
        return Ok(digits);
    }

    Ok(format!("{COUNTRY_CODE}{digits}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domestic_mobile_gets_country_code() {
        assert_eq!(normalize_phone("612345678").unwrap(), "252612345678");
    }

    #[test]
    fn test_leading_zero_is_replaced() {
        assert_eq!(normalize_phone("0612345678").unwrap(), "252612345678");
    }

    #[test]
    fn test_already_prefixed_passes_through() {
        assert_eq!(normalize_phone("252612345678").unwrap(), "252612345678");
    }

    #[test]
    fn test_non_digits_are_stripped() {
        assert_eq!(normalize_phone("+252 61 234-5678").unwrap(), "252612345678");
        assert_eq!(normalize_phone("(061) 234 5678").unwrap(), "252612345678");
    }

    #[test]
    fn test_unrecognized_shape_still_gets_country_code() {
        assert_eq!(normalize_phone("12345").unwrap(), "25212345");
    }

    #[test]
    fn test_empty_is_rejected() {
        let err = normalize_phone("").unwrap_err();
        assert!(matches!(err, NotifyError::InvalidPhone { .. }));
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "612345678",
            "0612345678",
            "252612345678",
            "+252 61 234 5678",
            "12345",
        ] {
            let once = normalize_phone(raw).unwrap();
            let twice = normalize_phone(&once).unwrap();
            assert_eq!(once, twice, "normalize({raw}) not idempotent");
        }
    }
}
