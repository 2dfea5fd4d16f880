use pim_model::{Attribute, Constraint, Result};

use super::ConstraintGuesser;

/// Number, metric and price values must be numeric, optionally whole.
pub struct NumericGuesser;

impl ConstraintGuesser for NumericGuesser {
    fn supports(&self, attribute: &Attribute) -> bool {
        attribute.attribute_type.is_numeric()
    }

    fn guess(&self, attribute: &Attribute) -> Result<Vec<Constraint>> {
        let mut constraints = vec![Constraint::Numeric];
        if !attribute.decimals_allowed {
            constraints.push(Constraint::NotDecimal);
        }
        Ok(constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pim_model::AttributeType;

    #[test]
    fn whole_numbers_add_not_decimal() {
        let mut price = Attribute::new("price", AttributeType::Price);
        price.decimals_allowed = false;
        price.negative_allowed = false;
        assert_eq!(
            NumericGuesser.guess(&price).expect("guess"),
            vec![Constraint::Numeric, Constraint::NotDecimal]
        );
    }
}
