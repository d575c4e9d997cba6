//! Structural password strength heuristic.
//!
//! The score is the number of passing [`Checks`] plus one bonus point at 12
//! characters and another at 16. The bonuses overlap the two long-length
//! checks; both count, so the score tops out at [`MAX_SCORE`].

use std::fmt;

use super::charset::CharClass;

/// Highest score still rated weak.
pub const WEAK_MAX: u32 = 4;
/// Highest score still rated medium.
pub const MEDIUM_MAX: u32 = 9;
pub const MAX_SCORE: u32 = 10;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;
const VERY_LONG_LENGTH: usize = 16;
const REPEAT_RUN: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checks {
    pub min_length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub number: bool,
    pub symbol: bool,
    pub no_triple_repeat: bool,
    pub long_length: bool,
    pub very_long_length: bool,
}

impl Checks {
    pub fn evaluate(password: &str) -> Self {
        // Scalar values, not UTF-16 units: a browser counts "😀" as 2 and
        // scores "😀😀😀😀" as 8 long with no triple repeat. Here it is 4
        // characters with a run.
        let length = password.chars().count();
        let has = |class: CharClass| password.chars().any(|c| class.matches(c));

        Self {
            min_length: length >= MIN_LENGTH,
            lowercase: has(CharClass::Lowercase),
            uppercase: has(CharClass::Uppercase),
            number: has(CharClass::Number),
            symbol: has(CharClass::Symbol),
            no_triple_repeat: !has_repeat_run(password),
            long_length: length >= LONG_LENGTH,
            very_long_length: length >= VERY_LONG_LENGTH,
        }
    }

    /// Number of checks that hold.
    pub fn passed(&self) -> u32 {
        self.list().iter().filter(|(_, ok)| *ok).count() as u32
    }

    /// Every check with a short description, for display.
    pub fn list(&self) -> [(&'static str, bool); 8] {
        [
            ("at least 8 characters", self.min_length),
            ("a lowercase letter", self.lowercase),
            ("an uppercase letter", self.uppercase),
            ("a number", self.number),
            ("a symbol", self.symbol),
            ("no character repeated 3+ times in a row", self.no_triple_repeat),
            ("at least 12 characters", self.long_length),
            ("at least 16 characters", self.very_long_length),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Label for a non-empty password with this score.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=WEAK_MAX => StrengthLabel::Weak,
            s if s <= MEDIUM_MAX => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StrengthLabel::None => "Generate a password",
            StrengthLabel::Weak => "Weak Password",
            StrengthLabel::Medium => "Medium Password",
            StrengthLabel::Strong => "Strong Password",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrengthLabel::None => "None",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u32,
    pub label: StrengthLabel,
    pub checks: Checks,
}

/// Score a password. Pure; the same input always gives the same report.
pub fn classify(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport::default();
    }

    let checks = Checks::evaluate(password);
    let length = password.chars().count();

    let mut score = checks.passed();
    if length >= LONG_LENGTH {
        score += 1;
    }
    if length >= VERY_LONG_LENGTH {
        score += 1;
    }

    StrengthReport {
        score,
        label: StrengthLabel::from_score(score),
        checks,
    }
}

/// Any character repeated three or more times in a row. Line terminators
/// never take part in a run. Characters outside the BMP compare whole, not
/// as surrogate halves.
fn has_repeat_run(password: &str) -> bool {
    let mut prev = None;
    let mut run = 0;

    for c in password.chars() {
        if is_line_terminator(c) {
            prev = None;
            run = 0;
        } else if prev == Some(c) {
            run += 1;
            if run >= REPEAT_RUN {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_none() {
        let report = classify("");
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::None);
        assert_eq!(report.checks, Checks::default());
    }

    #[test]
    fn four_repeated_letters() {
        let report = classify("aaaa");
        assert_eq!(report.score, 1);
        assert_eq!(report.label, StrengthLabel::Weak);
        assert!(report.checks.lowercase);
        assert!(!report.checks.no_triple_repeat);
    }

    #[test]
    fn twelve_chars_all_classes() {
        let report = classify("Password123!");
        assert_eq!(report.checks.passed(), 7);
        assert!(!report.checks.very_long_length);
        assert_eq!(report.score, 8);
        assert_eq!(report.label, StrengthLabel::Medium);
    }

    #[test]
    fn long_mixed_is_strong() {
        let report = classify("Sup3rStr0ngP@ssw0rd!!");
        assert_eq!(report.checks.passed(), 8);
        assert_eq!(report.score, MAX_SCORE);
        assert_eq!(report.label, StrengthLabel::Strong);
    }

    #[test]
    fn label_thresholds() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(5), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(9), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(10), StrengthLabel::Strong);
    }

    #[test]
    fn repeat_runs() {
        assert!(!has_repeat_run("aabbaa"));
        assert!(has_repeat_run("xx111yy"));
        assert!(has_repeat_run("!!!!"));
        assert!(!has_repeat_run("a\na\na"));
        assert!(!has_repeat_run("\n\n\n"));
    }

    #[test]
    fn symbol_check_uses_pool_symbols() {
        assert!(Checks::evaluate("abc?").symbol);
        assert!(!Checks::evaluate("abc-").symbol);
        assert!(!Checks::evaluate("abc~").symbol);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 8 two-byte characters
        let report = classify("éééééééé");
        assert!(report.checks.min_length);
        assert!(!report.checks.lowercase);
    }

    #[test]
    fn astral_characters_count_once() {
        let report = classify("😀😀😀😀");
        assert!(!report.checks.min_length);
        assert!(!report.checks.no_triple_repeat);
        assert_eq!(report.score, 0);
        assert_eq!(report.label, StrengthLabel::Weak);

        let report = classify("😀😁😀😁😀😁😀😁😀");
        assert!(report.checks.min_length);
        assert!(!report.checks.long_length);
    }

    #[test]
    fn label_text() {
        assert_eq!(StrengthLabel::Medium.to_string(), "Medium");
        assert_eq!(StrengthLabel::None.description(), "Generate a password");
    }
}
