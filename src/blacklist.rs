//! Blacklist management module
//!
//! Holds the set of known-weak passwords used by the veto rule. The
//! process-wide set is built once and never mutated afterwards.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::BlacklistError;

/// Passwords rejected even when no extra list is configured.
pub const BUILTIN_COMMON_PASSWORDS: [&str; 7] = [
    "password",
    "123456",
    "qwerty",
    "admin",
    "letmein",
    "welcome",
    "password123",
];

const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";
const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

static GLOBAL_BLACKLIST: BlacklistCell = BlacklistCell::new();

/// Case-insensitive set of common passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Blacklist {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_COMMON_PASSWORDS)
    }

    /// Builds a blacklist from arbitrary entries, normalized to lowercase.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads a blacklist file, one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        Ok(Self::from_entries(content.lines()))
    }

    /// Adds the entries of a blacklist file to this one.
    pub fn extend_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, BlacklistError> {
        let extra = Self::from_path(path)?;
        self.entries.extend(extra.entries);
        Ok(self.entries.len())
    }

    /// Exact match after lowercasing `password`.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns the path of the optional extra blacklist file.
///
/// Priority:
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Loads the process-wide blacklist: the built-in entries plus the file
/// named by `PWD_BLACKLIST_PATH`.
///
/// Call once at startup. Skipping it leaves the built-in list in effect.
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_BLACKLIST_PATH", "/etc/myapp/blacklist.txt"); }
/// pwd_quality::init_blacklist()?;
/// ```
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    init_blacklist_from_path(get_blacklist_path())
}

/// Same as [`init_blacklist`] with an explicit file path.
///
/// # Errors
///
/// - Any [`Blacklist::from_path`] error on the first init
/// - [`BlacklistError::AlreadyInitialized`] if the built-in list was already
///   fixed by an earlier lookup
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    GLOBAL_BLACKLIST.init_from_path(path)
}

/// Process-wide blacklist, falling back to the built-in list.
pub fn global_blacklist() -> &'static Blacklist {
    GLOBAL_BLACKLIST.get()
}

#[derive(Debug)]
struct Installed {
    blacklist: Blacklist,
    from_init: bool,
}

/// Write-once slot for a blacklist.
///
/// Filled either by an explicit init (built-in entries plus a file) or by
/// the first lookup (built-in entries only). Never changes afterwards.
#[derive(Debug)]
pub(crate) struct BlacklistCell {
    slot: OnceLock<Installed>,
}

impl BlacklistCell {
    pub(crate) const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    pub(crate) fn get(&self) -> &Blacklist {
        &self
            .slot
            .get_or_init(|| Installed {
                blacklist: Blacklist::builtin(),
                from_init: false,
            })
            .blacklist
    }

    /// A repeated init returns the loaded size without reading `path`.
    pub(crate) fn init_from_path<P: AsRef<Path>>(&self, path: P) -> Result<usize, BlacklistError> {
        if let Some(installed) = self.slot.get() {
            return Self::already_installed(installed);
        }

        let mut blacklist = Blacklist::builtin();
        let count = blacklist.extend_from_path(path.as_ref())?;

        let installed = Installed {
            blacklist,
            from_init: true,
        };
        if self.slot.set(installed).is_err() {
            // Lost a race against another init or a first lookup.
            return self
                .slot
                .get()
                .map_or(Err(BlacklistError::AlreadyInitialized), Self::already_installed);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist initialized: {} passwords from {:?}", count, path.as_ref());

        Ok(count)
    }

    fn already_installed(installed: &Installed) -> Result<usize, BlacklistError> {
        if installed.from_init {
            return Ok(installed.blacklist.len());
        }
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: built-in list already in use");
        Err(BlacklistError::AlreadyInitialized)
    }
}

/// Checks `password` against the process-wide blacklist (case-insensitive).
pub fn is_blacklisted(password: &str) -> bool {
    global_blacklist().contains(password)
}
