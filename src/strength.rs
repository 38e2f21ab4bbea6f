// src/strength.rs
use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::models::GenerationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => StrengthLevel::Weak,
            30..=49 => StrengthLevel::Fair,
            50..=69 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::Weak => write!(f, "weak"),
            StrengthLevel::Fair => write!(f, "fair"),
            StrengthLevel::Strong => write!(f, "strong"),
            StrengthLevel::VeryStrong => write!(f, "very strong"),
        }
    }
}

// Analyze password strength
pub fn analyze_password_strength(password: &str) -> u8 {
    let length = password.chars().count();

    // Length contribution (up to 40 points)
    let mut score = length.min(40) as u8;

    // Character variety (10 points each)
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 10;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 10;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 10;
    }

    // Heavy repetition
    if password.chars().collect::<HashSet<_>>().len() < length / 2 {
        score = score.saturating_sub(10);
    }

    score.min(100)
}

/// Bits of entropy of a password drawn uniformly under `config`.
///
/// Boundary patching slightly lowers the real figure; this is the upper bound.
pub fn estimate_entropy_bits(config: &GenerationConfig) -> f64 {
    let alphabet = config.enabled_classes.alphabet().len();
    if alphabet == 0 {
        return 0.0;
    }
    config.length as f64 * (alphabet as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{CharacterClass, ClassSet};

    #[test]
    fn test_strength_scores() {
        assert_eq!(analyze_password_strength(""), 0);
        assert_eq!(analyze_password_strength("abcdefgh"), 18);
        assert_eq!(analyze_password_strength("aB3$efgh"), 48);
        // 6 chars, one distinct: 6 + 10 - 10
        assert_eq!(analyze_password_strength("aaaaaa"), 6);
    }

    #[test]
    fn test_strength_never_underflows() {
        assert_eq!(analyze_password_strength("ééééé"), 0);
    }

    #[test]
    fn test_levels() {
        assert_eq!(StrengthLevel::from_score(10), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(48), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(56), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(80), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_entropy() {
        let config = GenerationConfig::new(8, ClassSet::empty().with(CharacterClass::Digit), false);
        let bits = estimate_entropy_bits(&config);
        assert!((bits - 8.0 * 10f64.log2()).abs() < 1e-9);

        let config = GenerationConfig::new(10, ClassSet::empty(), false);
        assert_eq!(estimate_entropy_bits(&config), 0.0);
    }
}
