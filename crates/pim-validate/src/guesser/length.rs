use pim_model::{Attribute, AttributeType, Constraint, Result};

use super::ConstraintGuesser;

/// Maximum length applied to identifier and text values without an explicit limit.
pub const DEFAULT_MAX_CHARACTERS: u32 = 255;

/// Maximum length for text-like attributes.
pub struct LengthGuesser;

impl ConstraintGuesser for LengthGuesser {
    fn supports(&self, attribute: &Attribute) -> bool {
        match attribute.attribute_type {
            AttributeType::Identifier | AttributeType::Text => true,
            AttributeType::Textarea => attribute.max_characters.is_some(),
            _ => false,
        }
    }

    fn guess(&self, attribute: &Attribute) -> Result<Vec<Constraint>> {
        let max = attribute.max_characters.or(match attribute.attribute_type {
            AttributeType::Identifier | AttributeType::Text => Some(DEFAULT_MAX_CHARACTERS),
            _ => None,
        });
        Ok(max.map(|max| Constraint::Length { max }).into_iter().collect())
    }
}
