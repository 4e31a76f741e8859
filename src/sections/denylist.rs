//! Deny-list section - caps the score for known-weak passwords.

use crate::denylist::is_denylisted;
use secrecy::{ExposeSecret, SecretString};

/// Score ceiling applied to deny-listed passwords.
const CLAMP: u8 = 2;

/// Returns the score cap for deny-listed passwords, applied after the other
/// contributions are summed.
///
/// # Returns
/// - `Some(cap)` if the password is deny-listed
/// - `None` if the password is not deny-listed
pub fn denylist_clamp(password: &SecretString) -> Option<u8> {
    if is_denylisted(password.expose_secret()) {
        return Some(CLAMP);
    }
    None
}
