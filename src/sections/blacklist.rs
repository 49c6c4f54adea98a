//! Blacklist section - vetoes passwords from the common password list.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::blacklist::Blacklist;
use crate::types::{Finding, FindingKind};

/// Checks if the password is in `blacklist`.
///
/// A `Some` result zeroes the score regardless of the other sections.
pub fn blacklist_section(password: &SecretString, blacklist: &Blacklist) -> SectionResult {
    if blacklist.contains(password.expose_secret()) {
        return Some(Finding::deficiency(FindingKind::TooCommon));
    }
    None
}
