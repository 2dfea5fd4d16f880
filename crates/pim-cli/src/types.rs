use pim_filter::ChoiceFilterOptions;
use pim_model::ErrorsByLabel;
use serde::Serialize;

/// Errors of one product row, keyed by column label.
#[derive(Debug, Clone, Serialize)]
pub struct RowReport {
    /// 1-based position among the data rows.
    pub row: usize,
    pub identifier: Option<String>,
    pub errors: ErrorsByLabel,
}

impl RowReport {
    pub fn message_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Number of product rows read.
    pub products: usize,
    /// Rows with at least one error, in file order.
    pub invalid: Vec<RowReport>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.invalid.is_empty()
    }

    pub fn message_count(&self) -> usize {
        self.invalid.iter().map(RowReport::message_count).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub attribute: String,
    pub options: ChoiceFilterOptions,
    pub selected: i64,
    pub products: usize,
    /// Identifiers of matching products, in file order.
    pub matches: Vec<String>,
}
