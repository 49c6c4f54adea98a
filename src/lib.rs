//! Password quality library
//!
//! Scores passwords against a fixed set of composition rules and
//! generates random passwords from a character-class policy.
//!
//! # Rules
//!
//! One point each for: at least 8 characters, mixed case, an ASCII digit,
//! and one of `!@#$%^&*`. A password found in the blacklist scores 0 no
//! matter what. Score 4 is `Strong`, 3 is `Moderate`, anything lower `Weak`.
//!
//! # Features
//!
//! - `async` (default): Enables [`evaluate_tx`] for channel-based evaluation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Extra blacklist file merged by [`init_blacklist`]
//!   (default: `./assets/blacklist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_quality::{evaluate, generate, PasswordPolicy, Verdict};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate(&password);
//! assert_eq!(evaluation.verdict, Verdict::Strong);
//!
//! let policy = PasswordPolicy::new(16)?.with_special(false);
//! let generated = generate(&policy)?;
//! println!("{}", generated.expose_secret());
//! # Ok::<(), pwd_quality::PolicyError>(())
//! ```

// Internal modules
mod blacklist;
mod charset;
mod error;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use blacklist::{
    get_blacklist_path, global_blacklist, init_blacklist, init_blacklist_from_path,
    is_blacklisted, Blacklist, BUILTIN_COMMON_PASSWORDS,
};
pub use charset::{CharClass, DIGITS, LOWERCASE, SPECIAL, UPPERCASE};
pub use error::{BlacklistError, PolicyError};
pub use evaluator::{evaluate, evaluate_with};
pub use generator::{
    character_pool, generate, generate_strict, generate_strict_with, generate_with,
    satisfies_policy, RandomSource,
};
pub use sections::MIN_LENGTH;
pub use types::{
    EvaluationResult, Finding, FindingKind, PasswordPolicy, Polarity, Verdict, MAX_SCORE,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
