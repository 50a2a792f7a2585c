use std::ops::RangeInclusive;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::{QuizError, QuizResult},
    models::MathFactType,
};

/// Parameters for one quiz run.
///
/// `math_fact_type` is kept as the raw tag so an unknown value reaches the
/// generator and fails there with [`QuizError::InvalidMathFactType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    pub math_fact_type: String,
    pub practice_number: i64,
    pub min_number: i64,
    pub max_number: i64,
    pub number_of_questions: usize,
    pub timed_quiz: bool,
    pub time_in_minutes: u32,
    pub time_in_seconds: u32,
    /// Seed for the shuffle; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        QuizSettings {
            math_fact_type: MathFactType::Addition.label().to_string(),
            practice_number: 1,
            min_number: 0,
            max_number: 100,
            number_of_questions: 20,
            timed_quiz: false,
            time_in_minutes: 1,
            time_in_seconds: 0,
            rng_seed: None,
        }
    }
}

impl QuizSettings {
    /// Default settings for the given fact type.
    pub fn new(math_fact_type: MathFactType) -> Self {
        QuizSettings {
            math_fact_type: math_fact_type.label().to_string(),
            ..QuizSettings::default()
        }
    }

    /// Countdown length in seconds.
    pub fn time_limit_secs(&self) -> u32 {
        self.time_in_minutes.saturating_mul(60).saturating_add(self.time_in_seconds)
    }

    /// Normalise raw form input the way the settings screen does, then
    /// reject an inverted range or a timed quiz with no time.
    pub fn from_form(form: &SettingsForm) -> QuizResult<Self> {
        let math_fact_type = match form.math_fact_type.as_deref().map(str::trim) {
            Some(tag) if !tag.is_empty() => tag.to_string(),
            _ => MathFactType::Addition.label().to_string(),
        };

        let settings = QuizSettings {
            math_fact_type,
            practice_number: abs_or(&form.practice_number, 1, true, PRACTICE_RANGE),
            min_number: abs_or(&form.min_number, 0, false, MIN_RANGE),
            max_number: abs_or(&form.max_number, 1, true, MAX_RANGE),
            number_of_questions: parse_int(&form.number_of_questions)
                .filter(|n| *n > 0)
                .map(|n| n.clamp(*QUESTIONS_RANGE.start(), *QUESTIONS_RANGE.end()))
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(1),
            timed_quiz: form.timed_quiz,
            time_in_minutes: to_u32(abs_or(&form.time_in_minutes, 0, false, MINUTES_RANGE)),
            time_in_seconds: to_u32(abs_or(&form.time_in_seconds, 0, false, SECONDS_RANGE)),
            rng_seed: None,
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> QuizResult<()> {
        if self.min_number > self.max_number {
            warn!("rejecting range {}..{}", self.min_number, self.max_number);
            return Err(QuizError::MinGreaterThanMax {
                min: self.min_number,
                max: self.max_number,
            });
        }
        if self.timed_quiz && self.time_limit_secs() == 0 {
            warn!("rejecting timed quiz with no time");
            return Err(QuizError::InvalidTime);
        }
        Ok(())
    }
}

/// Raw values as submitted by a settings form. Every numeric field is text
/// and may be blank or garbage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsForm {
    pub math_fact_type: Option<String>,
    pub practice_number: String,
    pub min_number: String,
    pub max_number: String,
    pub number_of_questions: String,
    pub timed_quiz: bool,
    pub time_in_minutes: String,
    pub time_in_seconds: String,
}

// Input bounds of the settings screen.
const PRACTICE_RANGE: RangeInclusive<i64> = 1..=100;
const MIN_RANGE: RangeInclusive<i64> = 0..=100;
const MAX_RANGE: RangeInclusive<i64> = 1..=100;
const QUESTIONS_RANGE: RangeInclusive<i64> = 1..=100;
const MINUTES_RANGE: RangeInclusive<i64> = 0..=60;
const SECONDS_RANGE: RangeInclusive<i64> = 0..=59;

/// Leading-integer parse: "12abc" → 12, "6.0" → 6, "abc" → None.
///
/// Digit runs too long for `i64` saturate instead of failing.
pub(crate) fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let n = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * n)
}

fn to_u32(n: i64) -> u32 {
    u32::try_from(n).unwrap_or(0)
}

/// Absolute value of the parsed field clamped to `bounds`, or `fallback`
/// when it does not parse (or is zero and `zero_is_missing`).
fn abs_or(raw: &str, fallback: i64, zero_is_missing: bool, bounds: RangeInclusive<i64>) -> i64 {
    match parse_int(raw).map(i64::abs) {
        Some(0) if zero_is_missing => fallback,
        Some(n) => n.clamp(*bounds.start(), *bounds.end()),
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(min: &str, max: &str) -> SettingsForm {
        SettingsForm {
            math_fact_type: Some("subtraction".into()),
            practice_number: "3".into(),
            min_number: min.into(),
            max_number: max.into(),
            number_of_questions: "10".into(),
            ..SettingsForm::default()
        }
    }

    #[test]
    fn defaults_match_initial_screen() {
        let s = QuizSettings::default();
        assert_eq!(s.math_fact_type, "addition");
        assert_eq!((s.practice_number, s.min_number, s.max_number), (1, 0, 100));
        assert_eq!(s.number_of_questions, 20);
        assert!(!s.timed_quiz);
        assert_eq!(s.time_limit_secs(), 60);
    }

    #[test]
    fn blank_form_falls_back_to_defaults() {
        let s = QuizSettings::from_form(&SettingsForm::default()).unwrap();
        assert_eq!(s.math_fact_type, "addition");
        assert_eq!(s.practice_number, 1);
        assert_eq!(s.min_number, 0);
        assert_eq!(s.max_number, 1);
        assert_eq!(s.number_of_questions, 1);
    }

    #[test]
    fn negative_numbers_are_made_positive() {
        let mut f = form("-2", "-8");
        f.practice_number = "-4".into();
        let s = QuizSettings::from_form(&f).unwrap();
        assert_eq!((s.practice_number, s.min_number, s.max_number), (4, 2, 8));
    }

    #[test]
    fn non_positive_question_count_becomes_one() {
        let mut f = form("0", "5");
        f.number_of_questions = "-3".into();
        assert_eq!(QuizSettings::from_form(&f).unwrap().number_of_questions, 1);
    }

    #[test]
    fn leading_digits_are_kept() {
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("  7 "), Some(7));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("6.0"), Some(6));
        assert_eq!(parse_int("99999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn huge_timer_values_are_clamped() {
        let mut f = form("0", "5");
        f.timed_quiz = true;
        f.time_in_minutes = "100000000".into();
        f.time_in_seconds = "4294967296".into();
        let s = QuizSettings::from_form(&f).unwrap();
        assert_eq!((s.time_in_minutes, s.time_in_seconds), (60, 59));
        assert_eq!(s.time_limit_secs(), 60 * 60 + 59);

        f.time_in_minutes = "4294967296".into();
        f.time_in_seconds = "".into();
        assert_eq!(QuizSettings::from_form(&f).unwrap().time_limit_secs(), 3600);
    }

    #[test]
    fn time_limit_saturates() {
        let s = QuizSettings {
            timed_quiz: true,
            time_in_minutes: u32::MAX,
            time_in_seconds: u32::MAX,
            ..QuizSettings::default()
        };
        assert_eq!(s.time_limit_secs(), u32::MAX);
    }

    #[test]
    fn numbers_are_clamped_to_form_bounds() {
        let mut f = form("250", "9223372036854775807");
        f.practice_number = "9223372036854775807".into();
        f.number_of_questions = "1000000000000".into();
        let s = QuizSettings::from_form(&f).unwrap();
        assert_eq!(s.practice_number, 100);
        assert_eq!((s.min_number, s.max_number), (100, 100));
        assert_eq!(s.number_of_questions, 100);

        let mut f = form("0", "1");
        f.practice_number = "1".into();
        f.number_of_questions = "100".into();
        let s = QuizSettings::from_form(&f).unwrap();
        assert_eq!((s.practice_number, s.min_number, s.max_number), (1, 0, 1));
        assert_eq!(s.number_of_questions, 100);
    }

    #[test]
    fn clamped_extremes_generate_without_overflow() {
        let mut f = form("1", "5");
        f.math_fact_type = Some("multiplication".into());
        f.practice_number = "9223372036854775807".into();
        let s = QuizSettings::from_form(&f).unwrap();
        let qs = crate::quiz_engine::questions_generator(&s).unwrap();
        assert!(qs.iter().all(|q| q.left_operand == 100));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = QuizSettings::from_form(&form("9", "3")).unwrap_err();
        assert_eq!(err, QuizError::MinGreaterThanMax { min: 9, max: 3 });
    }

    #[test]
    fn timed_quiz_needs_time() {
        let mut f = form("0", "5");
        f.timed_quiz = true;
        assert_eq!(QuizSettings::from_form(&f).unwrap_err(), QuizError::InvalidTime);

        f.time_in_seconds = "30".into();
        let s = QuizSettings::from_form(&f).unwrap();
        assert_eq!(s.time_limit_secs(), 30);
    }

    #[test]
    fn unknown_fact_type_passes_through() {
        let mut f = form("0", "5");
        f.math_fact_type = Some("modulo".into());
        assert_eq!(QuizSettings::from_form(&f).unwrap().math_fact_type, "modulo");
    }
}
