use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data payload carried by a product value or a plain property.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueData {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    Date(NaiveDate),
    Text(String),
    Options(Vec<String>),
}

impl ValueData {
    /// Returns true for `Null`, empty text, and empty option lists.
    pub fn is_blank(&self) -> bool {
        match self {
            ValueData::Null => true,
            ValueData::Text(text) => text.trim().is_empty(),
            ValueData::Options(options) => options.is_empty(),
            _ => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ValueData::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ValueData::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueData::Null => Ok(()),
            ValueData::Boolean(value) => write!(f, "{}", if *value { 1 } else { 0 }),
            ValueData::Number(value) => write!(f, "{}", value),
            ValueData::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            ValueData::Text(value) => write!(f, "{}", value),
            ValueData::Options(values) => write!(f, "{}", values.join(",")),
        }
    }
}

impl From<&str> for ValueData {
    fn from(value: &str) -> Self {
        ValueData::Text(value.to_string())
    }
}

impl From<String> for ValueData {
    fn from(value: String) -> Self {
        ValueData::Text(value)
    }
}

impl From<f64> for ValueData {
    fn from(value: f64) -> Self {
        ValueData::Number(value)
    }
}

impl From<bool> for ValueData {
    fn from(value: bool) -> Self {
        ValueData::Boolean(value)
    }
}

/// One attribute value of a product, qualified by locale and scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductValue {
    pub attribute: String,
    pub locale: Option<String>,
    pub scope: Option<String>,
    pub data: ValueData,
}

impl ProductValue {
    pub fn new(attribute: impl Into<String>, data: ValueData) -> Self {
        Self {
            attribute: attribute.into(),
            locale: None,
            scope: None,
            data,
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn data(&self) -> &ValueData {
        &self.data
    }

    /// Returns true if this value matches the given code, locale and scope.
    pub fn matches(&self, attribute: &str, locale: Option<&str>, scope: Option<&str>) -> bool {
        self.attribute == attribute
            && self.locale.as_deref() == locale
            && self.scope.as_deref() == scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values() {
        assert!(ValueData::Null.is_blank());
        assert!(ValueData::from("  ").is_blank());
        assert!(ValueData::Options(vec![]).is_blank());
        assert!(!ValueData::Boolean(false).is_blank());
        assert!(!ValueData::Number(0.0).is_blank());
    }

    #[test]
    fn display_renders_raw_cell_text() {
        assert_eq!(ValueData::Boolean(true).to_string(), "1");
        assert_eq!(ValueData::Number(12.5).to_string(), "12.5");
        assert_eq!(
            ValueData::Options(vec!["red".into(), "blue".into()]).to_string(),
            "red,blue"
        );
        assert_eq!(ValueData::Null.to_string(), "");
    }

    #[test]
    fn value_matching_is_exact_on_qualifiers() {
        let value = ProductValue::new("name", "Shirt".into())
            .with_locale("en_US")
            .with_scope("ecommerce");
        assert!(value.matches("name", Some("en_US"), Some("ecommerce")));
        assert!(!value.matches("name", Some("fr_FR"), Some("ecommerce")));
        assert!(!value.matches("name", None, None));
    }
}
