//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::types::{Finding, FindingKind};

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Finding::deficiency(FindingKind::TooShort));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        let result = length_section(&secret("Short1!"));
        assert_eq!(result, Some(Finding::deficiency(FindingKind::TooShort)));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section(&secret("12345678")), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 7 chars, 14 bytes
        assert!(length_section(&secret("ééééééé")).is_some());
    }

    #[test]
    fn test_length_section_empty() {
        assert!(length_section(&secret("")).is_some());
    }
}
