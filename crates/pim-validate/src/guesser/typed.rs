use pim_model::{Attribute, AttributeType, Constraint, Result};

use super::ConstraintGuesser;

/// Type checks for date and boolean attributes.
pub struct TypeGuesser;

impl ConstraintGuesser for TypeGuesser {
    fn supports(&self, attribute: &Attribute) -> bool {
        matches!(
            attribute.attribute_type,
            AttributeType::Date | AttributeType::Boolean
        )
    }

    fn guess(&self, attribute: &Attribute) -> Result<Vec<Constraint>> {
        Ok(match attribute.attribute_type {
            AttributeType::Date => vec![Constraint::Date],
            AttributeType::Boolean => vec![Constraint::Boolean],
            _ => vec![],
        })
    }
}
