//! Generic choice filter driven by a static choice table.

use pim_model::ValueData;
use serde::Serialize;

use crate::error::{FilterError, Result};
use crate::translator::Translator;

/// Name of the generic choice filter every choice table plugs into.
pub const CHOICE_FILTER: &str = "oro_type_choice_filter";

/// One entry of a choice table: submitted value and translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: i64,
    pub label_key: &'static str,
}

/// Static description of a choice filter.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceTable {
    pub name: &'static str,
    pub choices: &'static [Choice],
}

/// Options handed to the generic choice filter widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceFilterOptions {
    pub name: String,
    pub parent: String,
    pub field_options: FieldOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOptions {
    /// Submitted value and translated label, in table order.
    pub choices: Vec<(i64, String)>,
}

impl ChoiceTable {
    /// Build widget options, translating every label.
    pub fn options(&self, translator: &dyn Translator) -> ChoiceFilterOptions {
        ChoiceFilterOptions {
            name: self.name.to_string(),
            parent: CHOICE_FILTER.to_string(),
            field_options: FieldOptions {
                choices: self
                    .choices
                    .iter()
                    .map(|choice| (choice.value, translator.trans(choice.label_key)))
                    .collect(),
            },
        }
    }

    /// Filter selecting `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not in the table.
    pub fn select(&self, value: i64) -> Result<ChoiceFilter> {
        if self.choices.iter().any(|choice| choice.value == value) {
            Ok(ChoiceFilter::preselected(*self, value))
        } else {
            Err(FilterError::UnknownChoice {
                filter: self.name.to_string(),
                value: value.to_string(),
            })
        }
    }
}

/// A choice table with one selected value.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceFilter {
    table: ChoiceTable,
    selected: i64,
}

impl ChoiceFilter {
    /// Caller guarantees `selected` belongs to `table`.
    pub(crate) const fn preselected(table: ChoiceTable, selected: i64) -> Self {
        Self { table, selected }
    }

    pub fn name(&self) -> &'static str {
        self.table.name
    }

    pub fn selected(&self) -> i64 {
        self.selected
    }

    /// Returns true if `value` renders as the selected choice.
    pub fn matches(&self, value: &ValueData) -> bool {
        let rendered = value.to_string();
        rendered.trim() == self.selected.to_string()
    }
}
