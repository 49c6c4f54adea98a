//! Password evaluation sections
//!
//! Each section checks one composition rule. A passing section earns one
//! point; a failing one yields a deficiency finding.

mod blacklist;
mod case_mix;
mod digit;
mod length;
mod special;

pub use blacklist::blacklist_section;
pub use case_mix::case_mix_section;
pub use digit::digit_section;
pub use length::{length_section, MIN_LENGTH};
pub use special::special_section;

use crate::types::Finding;

/// Result type for section evaluation functions.
/// - `Some(finding)` - Section failed with a deficiency
/// - `None` - Section passed
pub type SectionResult = Option<Finding>;
