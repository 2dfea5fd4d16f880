use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A single validation rule applied to a value payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// Value must not be null or blank.
    NotBlank,
    /// Text must not exceed `max` characters.
    Length { max: u32 },
    /// Number must be within the inclusive bounds.
    Range { min: Option<f64>, max: Option<f64> },
    /// Date must be within the inclusive bounds.
    DateRange {
        min: Option<NaiveDate>,
        max: Option<NaiveDate>,
    },
    /// Value must be a number.
    Numeric,
    /// Number must have no fractional part.
    NotDecimal,
    /// Value must be a date.
    Date,
    /// Value must be a boolean.
    Boolean,
    /// Text must be an email address.
    Email,
    /// Text must be an absolute http(s) URL.
    Url,
    /// Text must match the pattern.
    Regex { pattern: String },
    /// Every selected option must be one of `choices`.
    Choice { choices: Vec<String>, multiple: bool },
}

impl Constraint {
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::NotBlank => "NotBlank",
            Constraint::Length { .. } => "Length",
            Constraint::Range { .. } => "Range",
            Constraint::DateRange { .. } => "DateRange",
            Constraint::Numeric => "Numeric",
            Constraint::NotDecimal => "NotDecimal",
            Constraint::Date => "Date",
            Constraint::Boolean => "Boolean",
            Constraint::Email => "Email",
            Constraint::Url => "Url",
            Constraint::Regex { .. } => "Regex",
            Constraint::Choice { .. } => "Choice",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable, shareable constraint list for one attribute.
pub type ConstraintSet = Arc<[Constraint]>;

/// An empty constraint set.
pub fn empty_constraints() -> ConstraintSet {
    Arc::from(Vec::new())
}
