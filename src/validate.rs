// src/validate.rs

//! Field validators shared by the HTTP handlers and the booking wizard,
//! so every surface applies the same strictness.

use regex::Regex;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z\s'-]+$").unwrap());
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?\d{10,15}$").unwrap());
static CARD_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{13,19}$").unwrap());
static CARD_EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0[1-9]|1[0-2])/?\d{2}$").unwrap());
static CVV_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{3,4}$").unwrap());

/// ASCII letters plus space/apostrophe/hyphen, at least two characters,
/// first character alphabetic.
pub fn is_name(s: &str) -> bool {
    NAME_RE.is_match(s.trim())
}

/// `local@domain.tld` with a TLD of at least two characters.
pub fn is_email(s: &str) -> bool {
    EMAIL_RE.is_match(s.trim())
}

/// Optional leading `+`, then 10-15 digits.
pub fn is_phone(s: &str) -> bool {
    PHONE_RE.is_match(s.trim())
}

/// 13-19 digits after stripping whitespace. No Luhn check; the gateway
/// token is what actually gets charged.
pub fn is_card_number(s: &str) -> bool {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    CARD_NUMBER_RE.is_match(&digits)
}

/// `MM/YY`, month 01-12, slash optional.
pub fn is_card_expiry(s: &str) -> bool {
    CARD_EXPIRY_RE.is_match(s.trim())
}

pub fn is_cvv(s: &str) -> bool {
    CVV_RE.is_match(s.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_leading_letter_and_two_chars() {
        assert!(is_name("Asha Rao"));
        assert!(is_name("O'Neill"));
        assert!(is_name("Jean-Luc"));
        assert!(!is_name("A"));
        assert!(!is_name("1sha"));
        assert!(!is_name(""));
    }

    #[test]
    fn email_shape() {
        assert!(is_email("guest@example.com"));
        assert!(is_email("GUEST@EXAMPLE.IN"));
        assert!(!is_email("guest@example.c"));
        assert!(!is_email("guest example.com"));
        assert!(!is_email("guest@"));
    }

    #[test]
    fn phone_accepts_e164_and_rejects_short_or_alpha() {
        assert!(is_phone("+919876543210"));
        assert!(is_phone("9876543210"));
        assert!(!is_phone("12345"));
        assert!(!is_phone("abcdefghij"));
        assert!(!is_phone("+1234567890123456"));
    }

    #[test]
    fn card_number_strips_whitespace() {
        assert!(is_card_number("4111 1111 1111 1111"));
        assert!(is_card_number("4111111111111"));
        assert!(!is_card_number("4111 1111"));
        assert!(!is_card_number("4111-1111-1111-1111"));
    }

    #[test]
    fn card_expiry_month_bounds() {
        assert!(is_card_expiry("01/27"));
        assert!(is_card_expiry("12/30"));
        assert!(is_card_expiry("0927"));
        assert!(!is_card_expiry("13/27"));
        assert!(!is_card_expiry("00/27"));
        assert!(!is_card_expiry("1/27"));
    }

    #[test]
    fn cvv_three_or_four_digits() {
        assert!(is_cvv("123"));
        assert!(is_cvv("1234"));
        assert!(!is_cvv("12"));
        assert!(!is_cvv("12345"));
        assert!(!is_cvv("12a"));
    }
}
