use pim_model::{Attribute, Constraint, Result};

use super::ConstraintGuesser;

/// Required attributes and the identifier must carry a value.
pub struct NotBlankGuesser;

impl ConstraintGuesser for NotBlankGuesser {
    fn supports(&self, attribute: &Attribute) -> bool {
        attribute.required || attribute.is_identifier()
    }

    fn guess(&self, _attribute: &Attribute) -> Result<Vec<Constraint>> {
        Ok(vec![Constraint::NotBlank])
    }
}
