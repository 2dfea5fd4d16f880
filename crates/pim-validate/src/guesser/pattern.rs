use pim_model::{Attribute, AttributeType, Constraint, ImportError, Result, ValidationRule};
use regex::Regex;

use super::ConstraintGuesser;

/// Email, URL and regular-expression rules on text attributes.
pub struct PatternGuesser;

impl ConstraintGuesser for PatternGuesser {
    fn supports(&self, attribute: &Attribute) -> bool {
        matches!(
            attribute.attribute_type,
            AttributeType::Identifier | AttributeType::Text
        ) && attribute.validation_rule.is_some()
    }

    fn guess(&self, attribute: &Attribute) -> Result<Vec<Constraint>> {
        let Some(rule) = attribute.validation_rule else {
            return Ok(vec![]);
        };
        let constraint = match rule {
            ValidationRule::Email => Constraint::Email,
            ValidationRule::Url => Constraint::Url,
            ValidationRule::Regexp => {
                let pattern = attribute
                    .validation_regexp
                    .as_deref()
                    .map(str::trim)
                    .filter(|pattern| !pattern.is_empty())
                    .ok_or_else(|| ImportError::Guess {
                        attribute: attribute.code.clone(),
                        message: "regexp rule without a pattern".to_string(),
                    })?;
                Regex::new(pattern).map_err(|e| ImportError::Guess {
                    attribute: attribute.code.clone(),
                    message: e.to_string(),
                })?;
                Constraint::Regex {
                    pattern: pattern.to_string(),
                }
            }
        };
        Ok(vec![constraint])
    }
}
