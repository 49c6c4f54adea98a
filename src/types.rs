//! Data model shared by the evaluator and the generator.

use std::fmt;

use crate::charset::CharClass;
use crate::error::PolicyError;
use crate::sections::MIN_LENGTH;

/// Highest score a password can reach (one point per passing rule).
pub const MAX_SCORE: u8 = 4;

/// Composition policy for a generated password.
///
/// Lowercase letters are always part of the pool; the flags add the
/// optional classes on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_digits: true,
            include_special: true,
        }
    }
}

impl PasswordPolicy {
    /// Creates a policy of `length` characters with every class enabled.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidLength`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self, PolicyError> {
        let policy = Self {
            length,
            ..Self::default()
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn with_uppercase(mut self, enabled: bool) -> Self {
        self.include_uppercase = enabled;
        self
    }

    pub fn with_digits(mut self, enabled: bool) -> Self {
        self.include_digits = enabled;
        self
    }

    pub fn with_special(mut self, enabled: bool) -> Self {
        self.include_special = enabled;
        self
    }

    /// Checks the length contract. Needed for policies built by struct literal.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.length < 1 {
            return Err(PolicyError::InvalidLength(self.length));
        }
        Ok(())
    }

    /// Enabled classes in pool order, lowercase first.
    pub fn enabled_classes(&self) -> Vec<CharClass> {
        let mut classes = vec![CharClass::Lowercase];
        if self.include_uppercase {
            classes.push(CharClass::Uppercase);
        }
        if self.include_digits {
            classes.push(CharClass::Digit);
        }
        if self.include_special {
            classes.push(CharClass::Special);
        }
        classes
    }
}

/// Three-level classification derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Weak,
    Moderate,
    Strong,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            4.. => Verdict::Strong,
            3 => Verdict::Moderate,
            _ => Verdict::Weak,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Weak => "Weak",
            Verdict::Moderate => "Moderate",
            Verdict::Strong => "Strong",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Deficiency,
    Confirmation,
}

/// What a finding is about. Callers can match on this instead of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FindingKind {
    TooShort,
    MissingCaseMix,
    MissingDigit,
    MissingSpecial,
    TooCommon,
    Verdict(Verdict),
}

/// A single feedback line produced by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub polarity: Polarity,
    pub kind: FindingKind,
}

impl Finding {
    pub(crate) fn deficiency(kind: FindingKind) -> Self {
        Self {
            polarity: Polarity::Deficiency,
            kind,
        }
    }

    pub(crate) fn verdict(verdict: Verdict) -> Self {
        let polarity = match verdict {
            Verdict::Strong => Polarity::Confirmation,
            Verdict::Moderate | Verdict::Weak => Polarity::Deficiency,
        };
        Self {
            polarity,
            kind: FindingKind::Verdict(verdict),
        }
    }

    pub fn is_verdict(&self) -> bool {
        matches!(self.kind, FindingKind::Verdict(_))
    }

    /// English feedback text.
    pub fn message(&self) -> String {
        match self.kind {
            FindingKind::TooShort => {
                format!("Password should be at least {} characters long", MIN_LENGTH)
            }
            FindingKind::MissingCaseMix => {
                "Include both uppercase and lowercase letters".to_string()
            }
            FindingKind::MissingDigit => "Add at least one number (0-9)".to_string(),
            FindingKind::MissingSpecial => format!(
                "Include at least one special character ({})",
                crate::charset::SPECIAL
            ),
            FindingKind::TooCommon => "Password is too common and easily guessable".to_string(),
            FindingKind::Verdict(Verdict::Strong) => "Strong password".to_string(),
            FindingKind::Verdict(Verdict::Moderate) => {
                "Moderate password - consider adding more security features".to_string()
            }
            FindingKind::Verdict(Verdict::Weak) => {
                "Weak password - improve it using the suggestions above".to_string()
            }
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Outcome of one evaluation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub score: u8,
    /// Rule deficiencies in rule order, then exactly one verdict finding.
    pub findings: Vec<Finding>,
    pub verdict: Verdict,
}

impl EvaluationResult {
    /// Findings produced by the rules, without the trailing verdict.
    pub fn rule_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_verdict())
    }

    /// Findings tagged [`Polarity::Deficiency`], including a `Weak` or
    /// `Moderate` verdict.
    pub fn deficiencies(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.polarity == Polarity::Deficiency)
    }

    pub fn has(&self, kind: FindingKind) -> bool {
        self.findings.iter().any(|f| f.kind == kind)
    }

    pub fn is_blacklisted(&self) -> bool {
        self.has(FindingKind::TooCommon)
    }

    /// Score as a fraction of [`MAX_SCORE`], for strength meters.
    pub fn progress(&self) -> f32 {
        f32::from(self.score) / f32::from(MAX_SCORE)
    }
}
