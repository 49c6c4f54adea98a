//! Digit section - requires at least one ASCII digit.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::charset::{has_class, CharClass};
use crate::types::{Finding, FindingKind};

pub fn digit_section(password: &SecretString) -> SectionResult {
    if has_class(password.expose_secret(), CharClass::Digit) {
        return None;
    }
    Some(Finding::deficiency(FindingKind::MissingDigit))
}
