//! Phone number format check
//!
//! The check is advisory: callers warn on a malformed number but still store it.

/// Check whether a string looks like a phone number
///
/// A valid number is non-empty and made of ASCII digits, optionally preceded by
/// a single `+`. A `+` anywhere but the first position, or any other character,
/// makes the number invalid.
pub fn is_valid_phone_number(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    let digits = number.strip_prefix('+').unwrap_or(number);
    digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_digits_are_valid() {
        assert!(is_valid_phone_number("123456"));
        assert!(is_valid_phone_number("0"));
    }

    #[test]
    fn test_leading_plus_is_valid() {
        assert!(is_valid_phone_number("+123456"));
    }

    #[test]
    fn test_lone_plus_is_valid() {
        assert!(is_valid_phone_number("+"));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn test_internal_plus_is_invalid() {
        assert!(!is_valid_phone_number("12+34"));
        assert!(!is_valid_phone_number("++1234"));
    }

    #[test]
    fn test_non_digit_is_invalid() {
        assert!(!is_valid_phone_number("12a34"));
        assert!(!is_valid_phone_number("123 456"));
        assert!(!is_valid_phone_number("١٢٣"));
    }
}
