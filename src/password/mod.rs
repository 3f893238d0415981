//! Rule-based password strength scoring.
//!
//! A password earns one point per character class present (uppercase,
//! lowercase, digit, ASCII punctuation) plus one point per full eight
//! characters once it meets the minimum length. Each missing rule yields a
//! [`Feedback`] item. Lengths are counted in characters, not bytes; digits
//! are ASCII `0-9` only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length requirements for [`check_strength_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Shorter passwords get [`Feedback::TooShort`] and no length points.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

/// A rule the password failed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Feedback {
    TooShort { min_length: usize },
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::TooShort { min_length } => write!(
                f,
                "Password is too short (minimum {min_length} characters)"
            ),
            Feedback::MissingUppercase => f.write_str("Add uppercase letters"),
            Feedback::MissingLowercase => f.write_str("Add lowercase letters"),
            Feedback::MissingDigit => f.write_str("Add numbers"),
            Feedback::MissingSpecial => f.write_str("Add special characters (!@#$%^&*etc.)"),
        }
    }
}

/// Coarse strength bucket derived from the score.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            0 | 1 => StrengthLevel::VeryWeak,
            2 => StrengthLevel::Weak,
            3 => StrengthLevel::Moderate,
            4 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of [`check_strength`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub score: u32,
    pub level: StrengthLevel,
    /// Failed rules, in the order they were checked.
    pub feedback: Vec<Feedback>,
}

impl StrengthReport {
    /// True when every rule passed.
    pub fn is_strong(&self) -> bool {
        self.feedback.is_empty()
    }

    fn has(&self, item: Feedback) -> bool {
        self.feedback.contains(&item)
    }
}

/// Score `password` against the default [`PasswordPolicy`].
pub fn check_strength(password: &str) -> StrengthReport {
    check_strength_with(password, &PasswordPolicy::default())
}

pub fn check_strength_with(password: &str, policy: &PasswordPolicy) -> StrengthReport {
    let mut score = 0u32;
    let mut feedback = Vec::new();

    let length = password.chars().count();
    if length < policy.min_length {
        feedback.push(Feedback::TooShort {
            min_length: policy.min_length,
        });
    } else {
        score = score.saturating_add(u32::try_from(length / 8).unwrap_or(u32::MAX));
    }

    let rules: [(fn(&char) -> bool, Feedback); 4] = [
        (|c| c.is_uppercase(), Feedback::MissingUppercase),
        (|c| c.is_lowercase(), Feedback::MissingLowercase),
        (char::is_ascii_digit, Feedback::MissingDigit),
        (char::is_ascii_punctuation, Feedback::MissingSpecial),
    ];
    for (matches, missing) in rules {
        if password.chars().any(|c| matches(&c)) {
            score = score.saturating_add(1);
        } else {
            feedback.push(missing);
        }
    }

    StrengthReport {
        score,
        level: StrengthLevel::from_score(score),
        feedback,
    }
}

/// Human-readable suggestions for `password`.
///
/// Lists every failed rule and, when a mechanical fix changes the password,
/// an example: first character uppercased if uppercase is missing, `1`
/// appended if a digit is missing, `!` appended if punctuation is missing.
pub fn suggest_improvements(password: &str) -> Vec<String> {
    suggest_improvements_with(password, &PasswordPolicy::default())
}

/// [`suggest_improvements`] scored against an explicit policy.
pub fn suggest_improvements_with(password: &str, policy: &PasswordPolicy) -> Vec<String> {
    let report = check_strength_with(password, policy);
    if report.is_strong() {
        return vec!["Your password is already strong!".to_string()];
    }

    let mut suggestions: Vec<String> = report.feedback.iter().map(ToString::to_string).collect();

    let mut improved = String::with_capacity(password.len() + 2);
    let mut chars = password.chars();
    if report.has(Feedback::MissingUppercase) {
        if let Some(first) = chars.next() {
            improved.extend(first.to_uppercase());
        }
    }
    improved.extend(chars);
    if report.has(Feedback::MissingDigit) {
        improved.push('1');
    }
    if report.has(Feedback::MissingSpecial) {
        improved.push('!');
    }

    if improved != password {
        suggestions.push(format!("Example of improved password: {improved}"));
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_fails_everything() {
        let report = check_strength("");
        assert_eq!(report.score, 0);
        assert_eq!(report.level, StrengthLevel::VeryWeak);
        assert_eq!(report.feedback.len(), 5);
    }

    #[test]
    fn all_classes_and_length() {
        let report = check_strength("Abcdef1!");
        assert_eq!(report.score, 5);
        assert_eq!(report.level, StrengthLevel::VeryStrong);
        assert!(report.is_strong());
    }

    #[test]
    fn long_passwords_earn_extra_points() {
        let report = check_strength("abcdefghijklmnop");
        // 16 chars -> 2 length points, plus lowercase
        assert_eq!(report.score, 3);
        assert_eq!(report.level, StrengthLevel::Moderate);
        assert_eq!(
            report.feedback,
            vec![
                Feedback::MissingUppercase,
                Feedback::MissingDigit,
                Feedback::MissingSpecial
            ]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 7 two-byte characters are still too short
        let report = check_strength("ééééééé");
        assert!(report.feedback.contains(&Feedback::TooShort { min_length: 8 }));
    }

    #[test]
    fn custom_policy() {
        let policy = PasswordPolicy { min_length: 4 };
        let report = check_strength_with("Ab1!", &policy);
        assert!(report.is_strong());
        assert_eq!(report.score, 4);
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(StrengthLevel::from_score(1), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(2), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(4), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(9), StrengthLevel::VeryStrong);
        assert_eq!(StrengthLevel::Moderate.to_string(), "Moderate");
    }

    #[test]
    fn suggestions_include_example() {
        assert_eq!(
            suggest_improvements("password"),
            vec![
                "Add uppercase letters".to_string(),
                "Add numbers".to_string(),
                "Add special characters (!@#$%^&*etc.)".to_string(),
                "Example of improved password: Password1!".to_string(),
            ]
        );
    }

    #[test]
    fn no_example_when_nothing_mechanical_applies() {
        // only the length rule fails, and padding is not attempted
        assert_eq!(
            suggest_improvements("Ab1!"),
            vec!["Password is too short (minimum 8 characters)".to_string()]
        );
    }

    #[test]
    fn only_ascii_digits_count() {
        let report = check_strength("Abcdefg½Ⅻ!");
        assert!(report.feedback.contains(&Feedback::MissingDigit));
        assert!(!check_strength("Abcdefg7!").feedback.contains(&Feedback::MissingDigit));
    }

    #[test]
    fn suggestions_follow_the_policy() {
        let policy = PasswordPolicy { min_length: 12 };
        assert_eq!(
            suggest_improvements_with("Abcdef1!", &policy),
            vec!["Password is too short (minimum 12 characters)".to_string()]
        );
        assert_eq!(
            suggest_improvements("Abcdef1!"),
            vec!["Your password is already strong!".to_string()]
        );
    }

    #[test]
    fn strong_password_message() {
        assert_eq!(
            suggest_improvements("Str0ng!Passw0rd"),
            vec!["Your password is already strong!".to_string()]
        );
    }
}
