//! Character variety section - one point per character class present.

use secrecy::{ExposeSecret, SecretString};

/// Symbols recognized as a character class of their own. Matches none of the
/// alphanumeric classes; characters outside all four classes count toward
/// length only.
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Scores character variety: +1 for each of lowercase, uppercase, digit, and
/// symbol present (max 4). Classes are ASCII.
pub fn variety_points(password: &SecretString) -> u8 {
    let pwd = password.expose_secret();
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(|c| SYMBOLS.contains(c));

    [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|&&b| b)
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_single_class() {
        assert_eq!(variety_points(&secret("abc")), 1);
        assert_eq!(variety_points(&secret("ABC")), 1);
        assert_eq!(variety_points(&secret("123")), 1);
        assert_eq!(variety_points(&secret("!@#")), 1);
    }

    #[test]
    fn test_variety_all_classes() {
        assert_eq!(variety_points(&secret("aA1!")), 4);
    }

    #[test]
    fn test_variety_empty() {
        assert_eq!(variety_points(&secret("")), 0);
    }

    #[test]
    fn test_symbol_set_is_fixed() {
        // Every symbol in the fixed set counts
        for sym in SYMBOLS.chars() {
            assert_eq!(variety_points(&secret(&sym.to_string())), 1, "symbol {:?}", sym);
        }
        // Space and non-ASCII are outside every class
        assert_eq!(variety_points(&secret(" ")), 0);
        assert_eq!(variety_points(&secret("é€")), 0);
    }
}
