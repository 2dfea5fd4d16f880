use pim_model::{Attribute, AttributeType, Constraint, Result};

use super::ConstraintGuesser;

/// Select attributes only accept their declared option codes.
pub struct ChoiceGuesser;

impl ConstraintGuesser for ChoiceGuesser {
    fn supports(&self, attribute: &Attribute) -> bool {
        attribute.attribute_type.is_select() && !attribute.options.is_empty()
    }

    fn guess(&self, attribute: &Attribute) -> Result<Vec<Constraint>> {
        Ok(vec![Constraint::Choice {
            choices: attribute.options.clone(),
            multiple: attribute.attribute_type == AttributeType::MultiSelect,
        }])
    }
}
