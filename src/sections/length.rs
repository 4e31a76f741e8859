//! Length section - cumulative points for password length.

use secrecy::{ExposeSecret, SecretString};

const THRESHOLDS: [usize; 3] = [8, 12, 16];

/// Scores password length: +1 point per threshold reached (8, 12, 16
/// characters). Cumulative, so a 16-character password earns all three.
pub fn length_points(password: &SecretString) -> u8 {
    let len = password.expose_secret().chars().count();
    THRESHOLDS.iter().filter(|&&t| len >= t).count() as u8
}
