//! Generic value and property validation.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use pim_model::{
    Constraint, ImportError, ImportRecord, PRODUCT_KIND, Result, ValueData, ViolationList,
};
use regex::Regex;
use tracing::warn;

use crate::checks;

/// Pattern accepted for entity codes (families, categories, groups).
pub const CODE_PATTERN: &str = r"^[a-zA-Z0-9_]+$";

/// Pattern accepted for comma-separated code lists.
pub const CODE_LIST_PATTERN: &str = r"^[a-zA-Z0-9_]+(,[a-zA-Z0-9_]+)*$";

/// Validates payloads against constraint lists and record properties against
/// their declared constraints.
pub trait Validator {
    /// Check `value` against every constraint, in order.
    fn validate_value(&self, value: &ValueData, constraints: &[Constraint]) -> ViolationList;

    /// Check the record property at `path` against its declared constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if constraints are declared for `path` but the record
    /// does not expose it.
    fn validate_property(&self, record: &dyn ImportRecord, path: &str) -> Result<ViolationList>;
}

/// Default [`Validator`] evaluating the built-in constraint vocabulary.
///
/// Property constraints are declared per record kind and property path.
#[derive(Default)]
pub struct ConstraintValidator {
    properties: HashMap<(String, String), Vec<Constraint>>,
    patterns: Mutex<HashMap<String, Option<Regex>>>,
}

impl ConstraintValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator with the standard product property constraints.
    pub fn for_products() -> Self {
        let code = Constraint::Regex {
            pattern: CODE_PATTERN.to_string(),
        };
        let codes = Constraint::Regex {
            pattern: CODE_LIST_PATTERN.to_string(),
        };
        Self::new()
            .with_property_constraints(PRODUCT_KIND, "enabled", vec![Constraint::Boolean])
            .with_property_constraints(PRODUCT_KIND, "family", vec![code])
            .with_property_constraints(PRODUCT_KIND, "categories", vec![codes.clone()])
            .with_property_constraints(PRODUCT_KIND, "groups", vec![codes])
    }

    /// Declare constraints for a property of a record kind, replacing any
    /// previous declaration.
    pub fn add_property_constraints(
        &mut self,
        kind: impl Into<String>,
        path: impl Into<String>,
        constraints: Vec<Constraint>,
    ) {
        self.properties
            .insert((kind.into(), path.into()), constraints);
    }

    #[must_use]
    pub fn with_property_constraints(
        mut self,
        kind: impl Into<String>,
        path: impl Into<String>,
        constraints: Vec<Constraint>,
    ) -> Self {
        self.add_property_constraints(kind, path, constraints);
        self
    }

    fn check_all(
        &self,
        path: &str,
        value: &ValueData,
        constraints: &[Constraint],
    ) -> ViolationList {
        let pattern = |source: &str| self.pattern(source);
        constraints
            .iter()
            .filter_map(|constraint| checks::check(constraint, path, value, &pattern))
            .collect()
    }

    fn pattern(&self, source: &str) -> Option<Regex> {
        let mut patterns = self
            .patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        patterns
            .entry(source.to_string())
            .or_insert_with(|| match Regex::new(source) {
                Ok(regex) => Some(regex),
                Err(error) => {
                    warn!(pattern = source, %error, "invalid validation pattern");
                    None
                }
            })
            .clone()
    }
}

impl Validator for ConstraintValidator {
    fn validate_value(&self, value: &ValueData, constraints: &[Constraint]) -> ViolationList {
        self.check_all("", value, constraints)
    }

    fn validate_property(&self, record: &dyn ImportRecord, path: &str) -> Result<ViolationList> {
        let key = (record.kind().to_string(), path.to_string());
        let Some(constraints) = self.properties.get(&key) else {
            return Ok(ViolationList::new());
        };
        let value = record
            .property(path)
            .ok_or_else(|| ImportError::UnknownProperty {
                kind: record.kind().to_string(),
                path: path.to_string(),
            })?;
        Ok(self.check_all(path, value, constraints))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pim_model::{Entity, Product};

    #[test]
    fn values_are_checked_in_constraint_order() {
        let validator = ConstraintValidator::new();
        let violations = validator.validate_value(
            &"1.5x".into(),
            &[Constraint::Numeric, Constraint::Length { max: 2 }],
        );
        assert_eq!(
            violations.messages(),
            vec![
                "This value should be a valid number.",
                "This value is too long. It should have 2 characters or less.",
            ]
        );
    }

    #[test]
    fn undeclared_property_has_no_violations() {
        let validator = ConstraintValidator::for_products();
        let product = Product::new();
        let violations = validator
            .validate_property(&product, "unknown")
            .expect("validate");
        assert!(violations.is_empty());
    }

    #[test]
    fn declared_property_missing_on_record_fails() {
        let validator = ConstraintValidator::for_products();
        let product = Product::new();
        let error = validator
            .validate_property(&product, "family")
            .expect_err("missing property");
        assert!(matches!(error, ImportError::UnknownProperty { .. }));
    }

    #[test]
    fn property_constraints_are_scoped_by_kind() {
        let validator = ConstraintValidator::new().with_property_constraints(
            "family",
            "code",
            vec![Constraint::NotBlank],
        );
        let family = Entity::new("family").with_property("code", ValueData::Null);
        let category = Entity::new("category").with_property("code", ValueData::Null);

        assert_eq!(
            validator
                .validate_property(&family, "code")
                .expect("validate")
                .len(),
            1
        );
        assert!(
            validator
                .validate_property(&category, "code")
                .expect("validate")
                .is_empty()
        );
    }

    #[test]
    fn product_codes_use_code_pattern() {
        let validator = ConstraintValidator::for_products();
        let product = Product::new().with_property("family", "t-shirts".into());
        let violations = validator
            .validate_property(&product, "family")
            .expect("validate");
        assert_eq!(violations.messages(), vec!["This value is not valid."]);

        let product = Product::new().with_property("categories", "men,summer_2024".into());
        assert!(
            validator
                .validate_property(&product, "categories")
                .expect("validate")
                .is_empty()
        );
    }
}
