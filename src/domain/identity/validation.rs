//! Format checks for the demonstration login form.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// ASCII digits only; `\d` would also match other Unicode digits.
static OTP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("otp pattern is valid"));

/// Loose shape check: something, `@`, something, `.`, something.
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Exactly six ASCII digits.
pub fn validate_otp(otp: &str) -> bool {
    OTP_PATTERN.is_match(otp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_minimal_address() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("jane.doe+council@example.org"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email(""));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a@@b.co"));
    }

    #[test]
    fn otp_accepts_six_digits() {
        assert!(validate_otp("123456"));
        assert!(validate_otp("000000"));
    }

    #[test]
    fn otp_rejects_wrong_length_or_non_digits() {
        assert!(!validate_otp("12345"));
        assert!(!validate_otp("1234567"));
        assert!(!validate_otp("12a456"));
        assert!(!validate_otp(" 123456"));
        assert!(!validate_otp("١٢٣٤٥٦"));
        assert!(!validate_otp(""));
    }
}
