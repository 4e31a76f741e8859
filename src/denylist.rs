//! Deny-list management module
//!
//! A small built-in set of known-weak passwords is always active; an
//! optional newline-delimited file can extend it at startup.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Always-active deny list. Matching is case-insensitive and exact.
const BUILTIN_DENYLIST: [&str; 5] = ["password", "123456", "qwerty", "letmein", "welcome"];

static EXTRA_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Deny-list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read deny-list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Deny-list file is empty")]
    EmptyFile,
}

/// Returns the deny-list file path.
///
/// Priority:
/// 1. Environment variable `PWD_DENYLIST_PATH`
/// 2. Default path `./assets/denylist.txt`
pub fn get_denylist_path() -> PathBuf {
    std::env::var("PWD_DENYLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/denylist.txt"))
}

/// Loads additional deny-listed passwords from an external file.
///
/// The loaded entries extend the built-in set; they never replace it, so the
/// fixed common passwords stay deny-listed regardless of file contents.
/// Calling this is optional: the built-in set works without initialization.
///
/// # Environment Variable
///
/// Set `PWD_DENYLIST_PATH` to specify a custom deny-list file location.
/// If not set, defaults to `./assets/denylist.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_denylist() -> Result<usize, DenylistError> {
    let path = get_denylist_path();
    init_denylist_from_path(&path)
}

/// Loads additional deny-listed passwords from a specific file path.
///
/// Use this when you need to pass the path directly instead of relying on
/// environment variables. Idempotent: once a file has been loaded, later
/// calls return the loaded count without re-reading.
pub fn init_denylist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, DenylistError> {
    {
        let guard = EXTRA_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Deny-list initialization FAILED: FileNotFound {}", path.display());
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Deny-list initialization FAILED: Empty file {}", path.display());
        return Err(DenylistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = EXTRA_PASSWORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Deny-list extended: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a clone of the file-loaded extension set.
///
/// Returns `None` if no file has been loaded. The built-in set is not
/// included; it is always active independently of this.
pub fn get_denylist() -> Option<HashSet<String>> {
    let guard = EXTRA_PASSWORDS.read().unwrap();
    guard.clone()
}

/// Checks if a password is deny-listed (case-insensitive exact match).
///
/// Checks the built-in set first, then the file-loaded extension if any.
pub fn is_denylisted(password: &str) -> bool {
    let lowered = password.to_lowercase();

    if BUILTIN_DENYLIST.contains(&lowered.as_str()) {
        return true;
    }

    let guard = EXTRA_PASSWORDS.read().unwrap();
    guard
        .as_ref()
        .map(|set| set.contains(&lowered))
        .unwrap_or(false)
}

/// Resets the file-loaded extension for testing purposes.
#[cfg(test)]
pub fn reset_denylist_for_testing() {
    let mut guard = EXTRA_PASSWORDS.write().unwrap();
    *guard = None;
}
