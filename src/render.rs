//! Render-state derivation for the checker UI.
//!
//! The UI holds no mutable state of its own: each input change or phase
//! transition derives a fresh [`RenderState`] from the current password and
//! check phase, keeping the estimator testable apart from any rendering.

use secrecy::SecretString;

use crate::estimator::estimate;

/// Phase of the authoritative check.
///
/// Only one check is in flight at a time from the UI's perspective; the
/// disabled button during `Checking` is the soft guard, nothing structural
/// prevents overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckPhase {
    Idle,
    Checking,
}

/// Everything the UI needs to draw the checker controls and the live meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    /// Whether the results panel is shown. Hidden while the input is empty.
    pub results_visible: bool,
    pub button_label: &'static str,
    pub button_enabled: bool,
    /// Meter fill, 0-100.
    pub meter_percent: u8,
    pub strength_label: Option<&'static str>,
    pub strength_color: Option<&'static str>,
}

/// Derives the render state for the current input and check phase.
///
/// Empty input suppresses the results panel without running the estimator;
/// otherwise the live heuristic fills the meter at 10% per score point.
pub fn render_state(password: &SecretString, phase: CheckPhase) -> RenderState {
    use secrecy::ExposeSecret;

    let (button_label, button_enabled) = match phase {
        CheckPhase::Idle => ("Check Password", true),
        CheckPhase::Checking => ("Checking...", false),
    };

    if password.expose_secret().is_empty() {
        return RenderState {
            results_visible: false,
            button_label,
            button_enabled,
            meter_percent: 0,
            strength_label: None,
            strength_color: None,
        };
    }

    let result = estimate(password);
    let strength = result.strength();

    RenderState {
        results_visible: true,
        button_label,
        button_enabled,
        meter_percent: (result.score.value() * 10).min(100),
        strength_label: Some(strength.label()),
        strength_color: Some(strength.color()),
    }
}

/// Security tips shown alongside an authoritative score.
///
/// Tiered on the remote service's 0-10 scale.
pub fn security_tips(score: f64) -> &'static [&'static str] {
    if score < 4.0 {
        &[
            "Use a longer password (12+ characters)",
            "Mix uppercase and lowercase letters",
            "Include numbers and special characters",
            "Avoid dictionary words and common patterns",
        ]
    } else if score < 7.0 {
        &[
            "Consider adding more special characters",
            "Make it longer for better security",
            "Avoid using personal information",
        ]
    } else {
        &[
            "Great password! Consider using a password manager",
            "Enable two-factor authentication where possible",
            "Use unique passwords for each account",
        ]
    }
}
