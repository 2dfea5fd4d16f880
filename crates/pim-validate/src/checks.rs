//! Evaluation of individual constraints against value payloads.
//!
//! Blank values only fail `NotBlank`; every other constraint accepts them.

use std::sync::LazyLock;

use chrono::NaiveDate;
use pim_model::{Constraint, ValueData, Violation};
use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("Invalid email regex")
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)https?://[^\s/$.?#][^\s]*$").expect("Invalid URL regex")
});

/// Date format accepted for text-encoded dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check a single constraint. `pattern` resolves compiled regexes for
/// [`Constraint::Regex`].
pub fn check(
    constraint: &Constraint,
    path: &str,
    value: &ValueData,
    pattern: &dyn Fn(&str) -> Option<Regex>,
) -> Option<Violation> {
    if let Constraint::NotBlank = constraint {
        return value
            .is_blank()
            .then(|| violation(path, value, "This value should not be blank."));
    }
    if value.is_blank() {
        return None;
    }

    match constraint {
        Constraint::NotBlank => None,
        Constraint::Length { max } => {
            let text = value.as_text()?;
            (text.chars().count() > *max as usize).then(|| {
                violation(
                    path,
                    value,
                    format!("This value is too long. It should have {max} characters or less."),
                )
            })
        }
        Constraint::Numeric => number(value)
            .is_none()
            .then(|| violation(path, value, "This value should be a valid number.")),
        Constraint::NotDecimal => {
            let number = number(value)?;
            (number.fract() != 0.0)
                .then(|| violation(path, value, "This value should not be a decimal."))
        }
        Constraint::Range { min, max } => {
            let Some(number) = number(value) else {
                return Some(violation(path, value, "This value should be a valid number."));
            };
            if let Some(min) = min
                && number < *min
            {
                return Some(violation(
                    path,
                    value,
                    format!("This value should be {min} or more."),
                ));
            }
            if let Some(max) = max
                && number > *max
            {
                return Some(violation(
                    path,
                    value,
                    format!("This value should be {max} or less."),
                ));
            }
            None
        }
        Constraint::Date => date(value)
            .is_none()
            .then(|| violation(path, value, "This value is not a valid date.")),
        Constraint::DateRange { min, max } => {
            let Some(date) = date(value) else {
                return Some(violation(path, value, "This value is not a valid date."));
            };
            if let Some(min) = min
                && date < *min
            {
                return Some(violation(
                    path,
                    value,
                    format!("This date should be {} or after.", min.format(DATE_FORMAT)),
                ));
            }
            if let Some(max) = max
                && date > *max
            {
                return Some(violation(
                    path,
                    value,
                    format!("This date should be {} or before.", max.format(DATE_FORMAT)),
                ));
            }
            None
        }
        Constraint::Boolean => (!matches!(value, ValueData::Boolean(_)))
            .then(|| violation(path, value, "This value should be a boolean.")),
        Constraint::Email => fails_pattern(value, &EMAIL_REGEX)
            .then(|| violation(path, value, "This value is not a valid email address.")),
        Constraint::Url => fails_pattern(value, &URL_REGEX)
            .then(|| violation(path, value, "This value is not a valid URL.")),
        Constraint::Regex { pattern: source } => {
            let invalid = match pattern(source) {
                Some(regex) => fails_pattern(value, &regex),
                None => true,
            };
            invalid.then(|| violation(path, value, "This value is not valid."))
        }
        Constraint::Choice { choices, multiple } => {
            let selected: Vec<&str> = match value {
                ValueData::Options(options) => options.iter().map(String::as_str).collect(),
                ValueData::Text(text) => text.split(',').map(str::trim).collect(),
                _ => return Some(violation(path, value, choice_message(*multiple))),
            };
            if !multiple && selected.len() > 1 {
                return Some(violation(path, value, choice_message(false)));
            }
            let unknown = selected
                .iter()
                .any(|code| !choices.iter().any(|choice| choice == code));
            unknown.then(|| violation(path, value, choice_message(*multiple)))
        }
    }
}

/// Returns true when the value is text that does NOT match `regex`.
fn fails_pattern(value: &ValueData, regex: &Regex) -> bool {
    match value {
        ValueData::Text(text) => !regex.is_match(text),
        _ => true,
    }
}

fn number(value: &ValueData) -> Option<f64> {
    match value {
        ValueData::Number(number) => Some(*number),
        ValueData::Text(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|number| number.is_finite())
}

fn date(value: &ValueData) -> Option<NaiveDate> {
    match value {
        ValueData::Date(date) => Some(*date),
        ValueData::Text(text) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok(),
        _ => None,
    }
}

fn choice_message(multiple: bool) -> &'static str {
    if multiple {
        "One or more of the given values is invalid."
    } else {
        "The value you selected is not a valid choice."
    }
}

fn violation(path: &str, value: &ValueData, message: impl Into<String>) -> Violation {
    Violation::new(path, message).with_invalid_value(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(constraint: &Constraint, value: ValueData) -> Option<String> {
        check(constraint, "field", &value, &|source| Regex::new(source).ok()).map(|v| v.message)
    }

    #[test]
    fn blank_values_only_fail_not_blank() {
        assert_eq!(
            run(&Constraint::NotBlank, ValueData::Null).as_deref(),
            Some("This value should not be blank.")
        );
        assert_eq!(run(&Constraint::Numeric, ValueData::Null), None);
        assert_eq!(run(&Constraint::Email, "".into()), None);
    }

    #[test]
    fn length_counts_characters() {
        let limit = Constraint::Length { max: 3 };
        assert_eq!(run(&limit, "été".into()), None);
        assert!(run(&limit, "abcd".into()).is_some());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = Constraint::Range {
            min: Some(0.0),
            max: Some(10.0),
        };
        assert_eq!(run(&range, ValueData::Number(10.0)), None);
        assert_eq!(
            run(&range, ValueData::Number(-1.0)).as_deref(),
            Some("This value should be 0 or more.")
        );
        assert_eq!(
            run(&range, "abc".into()).as_deref(),
            Some("This value should be a valid number.")
        );
    }

    #[test]
    fn numeric_accepts_numeric_text() {
        assert_eq!(run(&Constraint::Numeric, "12.5".into()), None);
        assert!(run(&Constraint::Numeric, "twelve".into()).is_some());
        assert!(run(&Constraint::NotDecimal, ValueData::Number(1.5)).is_some());
        assert_eq!(run(&Constraint::NotDecimal, ValueData::Number(2.0)), None);
    }

    #[test]
    fn non_finite_numbers_are_not_numbers() {
        for value in [
            ValueData::from("NaN"),
            ValueData::from("inf"),
            ValueData::Number(f64::NAN),
            ValueData::Number(f64::NEG_INFINITY),
        ] {
            assert_eq!(
                run(&Constraint::Numeric, value.clone()).as_deref(),
                Some("This value should be a valid number.")
            );
            let range = Constraint::Range {
                min: Some(0.0),
                max: Some(100.0),
            };
            assert_eq!(
                run(&range, value).as_deref(),
                Some("This value should be a valid number.")
            );
        }
    }

    #[test]
    fn dates() {
        assert_eq!(run(&Constraint::Date, "2024-02-29".into()), None);
        assert!(run(&Constraint::Date, "2023-02-29".into()).is_some());
        let range = Constraint::DateRange {
            min: NaiveDate::from_ymd_opt(2024, 1, 1),
            max: None,
        };
        assert_eq!(
            run(&range, "2023-12-31".into()).as_deref(),
            Some("This date should be 2024-01-01 or after.")
        );
    }

    #[test]
    fn patterns() {
        assert_eq!(run(&Constraint::Email, "a@example.com".into()), None);
        assert!(run(&Constraint::Email, "not-an-email".into()).is_some());
        assert_eq!(run(&Constraint::Url, "https://example.com/p".into()), None);
        assert!(run(&Constraint::Url, "example.com".into()).is_some());
        let regex = Constraint::Regex {
            pattern: "^[A-Z]{3}$".to_string(),
        };
        assert_eq!(run(&regex, "ABC".into()), None);
        assert!(run(&regex, "abc".into()).is_some());
    }

    #[test]
    fn choices() {
        let single = Constraint::Choice {
            choices: vec!["red".into(), "blue".into()],
            multiple: false,
        };
        assert_eq!(run(&single, "red".into()), None);
        assert!(run(&single, "red,blue".into()).is_some());
        assert!(run(&single, "green".into()).is_some());

        let multi = Constraint::Choice {
            choices: vec!["red".into(), "blue".into()],
            multiple: true,
        };
        assert_eq!(
            run(&multi, ValueData::Options(vec!["red".into(), "blue".into()])),
            None
        );
        assert_eq!(
            run(&multi, ValueData::Options(vec!["pink".into()])).as_deref(),
            Some("One or more of the given values is invalid.")
        );
    }

    #[test]
    fn violation_carries_invalid_value() {
        let violation = check(&Constraint::Numeric, "weight", &"heavy".into(), &|_| None)
            .expect("violation");
        assert_eq!(violation.property_path, "weight");
        assert_eq!(violation.invalid_value.as_deref(), Some("heavy"));
    }
}
