//! Special character section - requires one of `!@#$%^&*`.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::charset::{has_class, CharClass};
use crate::types::{Finding, FindingKind};

pub fn special_section(password: &SecretString) -> SectionResult {
    if has_class(password.expose_secret(), CharClass::Special) {
        return None;
    }
    Some(Finding::deficiency(FindingKind::MissingSpecial))
}
