//! Phone number utilities
//!
//! Format validation lives at the HTTP boundary; the core treats phone
//! numbers as opaque keys.

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static E164_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid E.164
pub fn is_valid_phone(phone: &str) -> bool {
    E164_REGEX.is_match(&normalize_phone(phone))
}

/// Mask a phone number for logging (e.g., +15****7890)
pub fn mask_phone(phone: &str) -> String {
    let normalized = normalize_phone(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+1 (415) 555-2671"), "+14155552671");
        assert_eq!(normalize_phone("415 555 2671"), "4155552671");
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+14155552671"));
        assert!(is_valid_phone("+442071838750"));
        assert!(is_valid_phone("+86 138 1234 5678"));
        assert!(!is_valid_phone("14155552671")); // Missing +
        assert!(!is_valid_phone("+0123456789")); // Invalid country code
        assert!(!is_valid_phone("+1")); // Too short
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+14155552671"), "+14****2671");
        assert_eq!(mask_phone("+1555"), "****");
    }
}
