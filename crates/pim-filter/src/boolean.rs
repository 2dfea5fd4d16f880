//! Yes/no filter for boolean attributes.

use std::str::FromStr;

use crate::choice::{Choice, ChoiceFilter, ChoiceFilterOptions, ChoiceTable};
use crate::error::FilterError;
use crate::translator::Translator;

pub const BOOLEAN_FILTER: &str = "pim_type_boolean_filter";

pub const LABEL_YES: &str = "oro.filter.form.label_type_yes";
pub const LABEL_NO: &str = "oro.filter.form.label_type_no";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanChoice {
    Yes = 1,
    No = 0,
}

pub const BOOLEAN_CHOICES: ChoiceTable = ChoiceTable {
    name: BOOLEAN_FILTER,
    choices: &[
        Choice {
            value: BooleanChoice::Yes as i64,
            label_key: LABEL_YES,
        },
        Choice {
            value: BooleanChoice::No as i64,
            label_key: LABEL_NO,
        },
    ],
};

impl BooleanChoice {
    pub fn value(self) -> i64 {
        self as i64
    }

    /// Filter selecting this choice.
    pub fn filter(self) -> ChoiceFilter {
        ChoiceFilter::from(self)
    }
}

impl From<BooleanChoice> for ChoiceFilter {
    fn from(choice: BooleanChoice) -> Self {
        ChoiceFilter::preselected(BOOLEAN_CHOICES, choice.value())
    }
}

impl FromStr for BooleanChoice {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "1" | "true" => Ok(BooleanChoice::Yes),
            "no" | "0" | "false" => Ok(BooleanChoice::No),
            _ => Err(FilterError::UnknownChoice {
                filter: BOOLEAN_FILTER.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Widget options for the boolean filter.
pub fn boolean_filter_options(translator: &dyn Translator) -> ChoiceFilterOptions {
    BOOLEAN_CHOICES.options(translator)
}
