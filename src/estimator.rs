//! Heuristic strength estimator - fast local scoring for live feedback.

use secrecy::SecretString;

use crate::sections::{denylist_clamp, length_points, variety_points};
use crate::types::StrengthEstimate;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use std::time::Duration;

/// Keystroke debounce window for the live-feedback variant.
#[cfg(feature = "async")]
const DEBOUNCE: Duration = Duration::from_millis(300);

/// Estimates password strength locally, without any network round trip.
///
/// Sums the length contribution (up to 3) and the character variety
/// contribution (up to 4), then applies the deny-list clamp. Deterministic
/// and side-effect free; any input produces a valid estimate, the empty
/// string included (callers rendering live feedback should suppress display
/// for empty input instead of showing its zero score).
///
/// This is an approximation for instant feedback only. The authoritative
/// score comes from the remote scoring service, which uses a wider scale.
pub fn estimate(password: &SecretString) -> StrengthEstimate {
    let mut score = length_points(password) + variety_points(password);

    if let Some(cap) = denylist_clamp(password) {
        score = score.min(cap);
    }

    StrengthEstimate::new(score)
}

/// Debounced estimator for live typing feedback.
///
/// Waits out the debounce window, then computes and sends the estimate via
/// the channel. Cancelling the token during the window suppresses the send;
/// the caller cancels the previous keystroke's token when a new keystroke
/// arrives, so only the latest input gets rendered.
#[cfg(feature = "async")]
pub async fn estimate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthEstimate>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("estimate superseded before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let result = estimate(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength estimate: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Strength;
    use serial_test::serial;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn assert_estimate(pwd: &str, score: u8, strength: Strength) {
        let e = estimate(&secret(pwd));
        assert_eq!(e.score.value(), score, "score for {:?}", pwd);
        assert_eq!(e.strength(), strength, "strength for {:?}", pwd);
    }

    #[test]
    #[serial]
    fn test_short_single_class_passwords_score_low() {
        crate::denylist::reset_denylist_for_testing();

        // Length 0-7 with nothing in any character class: score 0
        for pwd in ["", "   ", "ééé"] {
            assert_estimate(pwd, 0, Strength::VeryWeak);
        }
        // Length 1-7, one class: no length points, one variety point
        for pwd in ["a", "zz", "abc", "abcdefg"] {
            assert_estimate(pwd, 1, Strength::VeryWeak);
        }
    }

    #[test]
    #[serial]
    fn test_length_threshold_reached() {
        crate::denylist::reset_denylist_for_testing();

        // +1 length (>= 8), +1 lowercase
        assert_estimate("abcdefgh", 2, Strength::Weak);
    }

    #[test]
    #[serial]
    fn test_all_classes_mid_length() {
        crate::denylist::reset_denylist_for_testing();

        // +1 length (>= 8, < 12), +4 classes
        assert_estimate("Abcdefgh1!", 5, Strength::Fair);
    }

    #[test]
    #[serial]
    fn test_denylist_superstring_not_clamped() {
        crate::denylist::reset_denylist_for_testing();

        // Contains "password" but is not an exact match: +2 length (>= 12),
        // +4 classes
        assert_estimate("Password123!", 6, Strength::Good);
    }

    #[test]
    #[serial]
    fn test_denylisted_exact_match() {
        crate::denylist::reset_denylist_for_testing();

        // Raw score already 2 (+1 length, +1 lowercase); clamp changes nothing
        assert_estimate("password", 2, Strength::Weak);
    }

    #[test]
    #[serial]
    fn test_denylist_match_is_case_insensitive() {
        crate::denylist::reset_denylist_for_testing();

        // Raw: no length points, +1 uppercase; min(1, 2) = 1
        assert_estimate("QWERTY", 1, Strength::VeryWeak);
    }

    #[test]
    #[serial]
    fn test_clamp_breaks_monotonicity() {
        crate::denylist::reset_denylist_for_testing();

        // A longer deny-listed string can score below a shorter clean one:
        // "letmein" clamps at raw 1, while the shorter "aB1!" earns 4.
        let denied = estimate(&secret("letmein"));
        let clean = estimate(&secret("aB1!"));
        assert!(denied.score < clean.score);
        assert_eq!(clean.strength(), Strength::Fair);
        assert_eq!(denied.strength(), Strength::VeryWeak);
    }

    #[test]
    #[serial]
    fn test_maximum_attainable_score() {
        crate::denylist::reset_denylist_for_testing();

        // 16+ characters, all four classes: 3 + 4 = 7, one short of Excellent
        let e = estimate(&secret("Abcdefghijklmn1!"));
        assert_eq!(e.score.value(), 7);
        assert_eq!(e.strength(), Strength::Good);
    }

    #[test]
    #[serial]
    fn test_estimate_is_idempotent() {
        crate::denylist::reset_denylist_for_testing();

        let pwd = secret("MyPass123!");
        let first = estimate(&pwd);
        let second = estimate(&pwd);
        assert_eq!(first, second);
    }
}
