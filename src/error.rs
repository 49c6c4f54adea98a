//! Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Raised when a generation request violates the policy contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid policy: length must be at least 1, got {0}")]
    InvalidLength(usize),
    #[error("Invalid policy: length {length} cannot hold {required} required character classes")]
    Unsatisfiable { length: usize, required: usize },
    #[error("No compliant password after {0} attempts")]
    RetriesExhausted(u32),
}

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
    #[error("Blacklist already in use with built-in entries; init must run before the first lookup")]
    AlreadyInitialized,
}
