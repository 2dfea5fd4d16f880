use pim_model::{Attribute, AttributeType, Constraint, ImportError, Result};

use super::ConstraintGuesser;

/// Bounds declared on number and date attributes. A number attribute that
/// disallows negative values gets a floor of zero merged into its bounds.
pub struct RangeGuesser;

impl ConstraintGuesser for RangeGuesser {
    fn supports(&self, attribute: &Attribute) -> bool {
        if attribute.attribute_type.is_numeric() {
            return attribute.number_min.is_some()
                || attribute.number_max.is_some()
                || !attribute.negative_allowed;
        }
        attribute.attribute_type == AttributeType::Date
            && (attribute.date_min.is_some() || attribute.date_max.is_some())
    }

    fn guess(&self, attribute: &Attribute) -> Result<Vec<Constraint>> {
        if attribute.attribute_type == AttributeType::Date {
            if let (Some(min), Some(max)) = (attribute.date_min, attribute.date_max)
                && min > max
            {
                return Err(inverted_bounds(attribute, &min, &max));
            }
            return Ok(vec![Constraint::DateRange {
                min: attribute.date_min,
                max: attribute.date_max,
            }]);
        }

        let min = if attribute.negative_allowed {
            attribute.number_min
        } else {
            Some(attribute.number_min.map_or(0.0, |min| min.max(0.0)))
        };
        if let (Some(min), Some(max)) = (min, attribute.number_max)
            && min > max
        {
            return Err(inverted_bounds(attribute, &min, &max));
        }
        Ok(vec![Constraint::Range {
            min,
            max: attribute.number_max,
        }])
    }
}

fn inverted_bounds(
    attribute: &Attribute,
    min: &dyn std::fmt::Display,
    max: &dyn std::fmt::Display,
) -> ImportError {
    ImportError::Guess {
        attribute: attribute.code.clone(),
        message: format!("minimum {min} is greater than maximum {max}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn date_bounds_become_date_range() {
        let mut release = Attribute::new("release_date", AttributeType::Date);
        release.date_min = NaiveDate::from_ymd_opt(2020, 1, 1);
        assert!(RangeGuesser.supports(&release));
        assert_eq!(
            RangeGuesser.guess(&release).expect("guess"),
            vec![Constraint::DateRange {
                min: NaiveDate::from_ymd_opt(2020, 1, 1),
                max: None
            }]
        );
    }

    #[test]
    fn inverted_number_bounds_fail() {
        let mut weight = Attribute::new("weight", AttributeType::Metric);
        weight.number_min = Some(10.0);
        weight.number_max = Some(1.0);
        let error = RangeGuesser.guess(&weight).expect_err("inverted bounds");
        assert!(error.to_string().contains("weight"));
    }

    #[test]
    fn negative_disallowed_merges_zero_floor() {
        let mut weight = Attribute::new("weight", AttributeType::Number);
        weight.negative_allowed = false;
        assert!(RangeGuesser.supports(&weight));
        assert_eq!(
            RangeGuesser.guess(&weight).expect("guess"),
            vec![Constraint::Range {
                min: Some(0.0),
                max: None
            }]
        );

        weight.number_min = Some(-5.0);
        weight.number_max = Some(100.0);
        assert_eq!(
            RangeGuesser.guess(&weight).expect("guess"),
            vec![Constraint::Range {
                min: Some(0.0),
                max: Some(100.0)
            }]
        );

        weight.number_min = Some(2.5);
        assert_eq!(
            RangeGuesser.guess(&weight).expect("guess"),
            vec![Constraint::Range {
                min: Some(2.5),
                max: Some(100.0)
            }]
        );
    }

    #[test]
    fn text_attributes_have_no_range() {
        let mut name = Attribute::new("name", AttributeType::Text);
        name.number_min = Some(1.0);
        assert!(!RangeGuesser.supports(&name));
    }
}
