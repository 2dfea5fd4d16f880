//! Grid filters expressed as configuration.
//!
//! A filter is a static [`ChoiceTable`] plugged into the generic choice
//! filter; the boolean filter is the yes (1) / no (0) table.

pub mod boolean;
pub mod choice;
pub mod error;
pub mod translator;

pub use boolean::{
    BOOLEAN_CHOICES, BOOLEAN_FILTER, BooleanChoice, LABEL_NO, LABEL_YES, boolean_filter_options,
};
pub use choice::{
    CHOICE_FILTER, Choice, ChoiceFilter, ChoiceFilterOptions, ChoiceTable, FieldOptions,
};
pub use error::{FilterError, Result};
pub use translator::{Catalog, Translator};

#[cfg(test)]
mod tests {
    use super::*;
    use pim_model::ValueData;

    #[test]
    fn boolean_options_translate_labels() {
        let catalog = Catalog::new()
            .with(boolean::LABEL_YES, "Yes")
            .with(boolean::LABEL_NO, "No");
        let options = boolean_filter_options(&catalog);

        assert_eq!(options.name, "pim_type_boolean_filter");
        assert_eq!(options.parent, CHOICE_FILTER);
        assert_eq!(
            options.field_options.choices,
            vec![(1, "Yes".to_string()), (0, "No".to_string())]
        );
    }

    #[test]
    fn untranslated_labels_fall_back_to_keys() {
        let options = boolean_filter_options(&Catalog::new());
        assert_eq!(
            options.field_options.choices[0].1,
            "oro.filter.form.label_type_yes"
        );
    }

    #[test]
    fn boolean_filter_matches_payloads() {
        let yes = BooleanChoice::Yes.filter();
        assert!(yes.matches(&ValueData::Boolean(true)));
        assert!(yes.matches(&ValueData::from("1")));
        assert!(!yes.matches(&ValueData::Boolean(false)));
        assert!(!yes.matches(&ValueData::Null));

        let no = BooleanChoice::No.filter();
        assert!(no.matches(&ValueData::Boolean(false)));
        assert_eq!(no.selected(), 0);
    }

    #[test]
    fn parse_choices() {
        assert_eq!("Yes".parse::<BooleanChoice>(), Ok(BooleanChoice::Yes));
        assert_eq!("0".parse::<BooleanChoice>(), Ok(BooleanChoice::No));
        assert!("maybe".parse::<BooleanChoice>().is_err());
    }

    #[test]
    fn selecting_unknown_value_fails() {
        assert_eq!(
            BOOLEAN_CHOICES.select(2).map(|filter| filter.selected()),
            Err(FilterError::UnknownChoice {
                filter: BOOLEAN_FILTER.to_string(),
                value: "2".to_string(),
            })
        );
    }

    #[test]
    fn options_serialize_for_widgets() {
        let json = serde_json::to_value(boolean_filter_options(&Catalog::new())).expect("json");
        assert_eq!(json["parent"], "oro_type_choice_filter");
        assert_eq!(json["field_options"]["choices"][1][0], 0);
    }
}
