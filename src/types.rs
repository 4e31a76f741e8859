//! Core value objects: score, severity tier, and the estimate produced by
//! the heuristic evaluator.

use std::fmt;

/// A heuristic password score.
///
/// The local heuristic sums a length contribution (up to 3) and a character
/// variety contribution (up to 4), then applies the deny-list clamp, so the
/// attainable range is 0 to [`PasswordScore::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Maximum score the local heuristic can produce.
    pub const MAX: u8 = 7;

    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity tier derived from a score.
///
/// The thresholds match the remote scoring service's 0-10 scale, which is why
/// `Excellent` (score >= 8) is unreachable from the local heuristic's maximum
/// of 7. That asymmetry is deliberate: the tiers are shared with the remote
/// scale and must not be rescaled to make the top tier locally attainable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Excellent,
}

impl Strength {
    /// Maps a score to its tier. Evaluated high to low, first match wins.
    pub fn from_score(score: u8) -> Self {
        match score {
            8.. => Strength::Excellent,
            6..=7 => Strength::Good,
            4..=5 => Strength::Fair,
            2..=3 => Strength::Weak,
            _ => Strength::VeryWeak,
        }
    }

    /// Human-readable tier label.
    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Excellent => "Excellent",
        }
    }

    /// Color token associated with the tier in the strength meter.
    pub fn color(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "#F44336",
            Strength::Weak => "#FF9800",
            Strength::Fair => "#FFC107",
            Strength::Good => "#8BC34A",
            Strength::Excellent => "#4CAF50",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one heuristic evaluation.
///
/// Immutable once produced; every keystroke yields a fresh estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthEstimate {
    pub score: PasswordScore,
}

impl StrengthEstimate {
    pub fn new(score: u8) -> Self {
        Self {
            score: PasswordScore::new(score),
        }
    }

    /// Severity tier for this estimate.
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score.value())
    }
}
