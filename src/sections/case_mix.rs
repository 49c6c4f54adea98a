//! Case mixing section - requires both uppercase and lowercase letters.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::charset::{has_class, CharClass};
use crate::types::{Finding, FindingKind};

pub fn case_mix_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    if has_class(pwd, CharClass::Uppercase) && has_class(pwd, CharClass::Lowercase) {
        return None;
    }
    Some(Finding::deficiency(FindingKind::MissingCaseMix))
}
