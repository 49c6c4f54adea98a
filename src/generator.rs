//! Password generator - random draws from a policy-driven character pool.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretString};

use crate::charset::has_class;
use crate::error::PolicyError;
use crate::types::PasswordPolicy;

/// Randomness capability required by the generator.
///
/// Only cryptographically secure generators qualify; tests use a seeded
/// ChaCha generator, production uses [`OsRng`].
pub trait RandomSource: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng + ?Sized> RandomSource for T {}

/// Characters eligible for `policy`: lowercase, then uppercase, digits and
/// specials as enabled.
pub fn character_pool(policy: &PasswordPolicy) -> Vec<char> {
    policy
        .enabled_classes()
        .into_iter()
        .flat_map(|class| class.alphabet().chars())
        .collect()
}

/// Generates a password with the operating system CSPRNG.
///
/// Each character is drawn independently, so an enabled class may be
/// missing from a short result. Use [`generate_strict`] when every class
/// must appear.
///
/// # Errors
///
/// Returns [`PolicyError::InvalidLength`] if `policy.length` is zero.
pub fn generate(policy: &PasswordPolicy) -> Result<SecretString, PolicyError> {
    generate_with(policy, &mut OsRng)
}

/// Same as [`generate`] with a caller-supplied random source.
pub fn generate_with<R>(policy: &PasswordPolicy, rng: &mut R) -> Result<SecretString, PolicyError>
where
    R: RandomSource + ?Sized,
{
    policy.validate()?;

    let pool = character_pool(policy);
    let dist = Uniform::from(0..pool.len());
    let password: String = (0..policy.length)
        .map(|_| pool[dist.sample(&mut *rng)])
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "generated password: length {}, pool size {}",
        policy.length,
        pool.len()
    );

    Ok(SecretString::new(password.into()))
}

/// True if `candidate` contains every class `policy` enables.
pub fn satisfies_policy(policy: &PasswordPolicy, candidate: &str) -> bool {
    policy
        .enabled_classes()
        .into_iter()
        .all(|class| has_class(candidate, class))
}

/// Generates a password containing every enabled class, redrawing at most
/// `max_attempts` times.
///
/// # Errors
///
/// - [`PolicyError::InvalidLength`] if `policy.length` is zero
/// - [`PolicyError::Unsatisfiable`] if the length is below the number of
///   enabled classes
/// - [`PolicyError::RetriesExhausted`] if no draw complied
pub fn generate_strict(
    policy: &PasswordPolicy,
    max_attempts: u32,
) -> Result<SecretString, PolicyError> {
    generate_strict_with(policy, max_attempts, &mut OsRng)
}

pub fn generate_strict_with<R>(
    policy: &PasswordPolicy,
    max_attempts: u32,
    rng: &mut R,
) -> Result<SecretString, PolicyError>
where
    R: RandomSource + ?Sized,
{
    policy.validate()?;

    let required = policy.enabled_classes().len();
    if policy.length < required {
        return Err(PolicyError::Unsatisfiable {
            length: policy.length,
            required,
        });
    }

    for _attempt in 1..=max_attempts {
        let candidate = generate_with(policy, rng)?;
        if satisfies_policy(policy, candidate.expose_secret()) {
            return Ok(candidate);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("attempt {} missed a required class, redrawing", _attempt);
    }

    #[cfg(feature = "tracing")]
    tracing::warn!("no compliant password after {} attempts", max_attempts);

    Err(PolicyError::RetriesExhausted(max_attempts))
}
