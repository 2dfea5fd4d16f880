//! Identifier consistency across the rows of one import.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use pim_model::{ImportError, RawRow, Result, ValueData};
use tracing::trace;

/// Checks that a record's identifier is consistent with what was already
/// imported.
pub trait IdentifierChecker {
    /// # Errors
    ///
    /// Returns an error if the identifier conflicts with a previous row.
    fn check(&self, kind: &str, identifier: Option<&ValueData>, data: &RawRow) -> Result<()>;
}

/// Remembers the raw row of every identifier per record kind.
///
/// A repeated identifier is accepted when its raw row is identical to the
/// first occurrence and rejected otherwise. Rows without an identifier are
/// not tracked.
#[derive(Debug, Default)]
pub struct UniqueIdentifierChecker {
    seen: Mutex<HashMap<(String, String), RawRow>>,
}

impl UniqueIdentifierChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct identifiers recorded.
    pub fn len(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IdentifierChecker for UniqueIdentifierChecker {
    fn check(&self, kind: &str, identifier: Option<&ValueData>, data: &RawRow) -> Result<()> {
        let Some(identifier) = identifier.filter(|value| !value.is_blank()) else {
            return Ok(());
        };
        let identifier = identifier.to_string();
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        let key = (kind.to_string(), identifier);
        match seen.get(&key) {
            Some(previous) if previous == data => {
                trace!(kind, identifier = %key.1, "identical row repeated");
                Ok(())
            }
            Some(_) => Err(ImportError::DuplicateIdentifier {
                kind: key.0,
                identifier: key.1,
            }),
            None => {
                seen.insert(key, data.clone());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn conflicting_rows_are_rejected() {
        let checker = UniqueIdentifierChecker::new();
        let sku = ValueData::from("ABC123");
        checker
            .check("product", Some(&sku), &row(&[("sku", "ABC123"), ("name", "A")]))
            .expect("first row");
        let error = checker
            .check("product", Some(&sku), &row(&[("sku", "ABC123"), ("name", "B")]))
            .expect_err("conflict");
        assert!(matches!(error, ImportError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn identical_rows_are_accepted() {
        let checker = UniqueIdentifierChecker::new();
        let sku = ValueData::from("ABC123");
        let data = row(&[("sku", "ABC123")]);
        checker.check("product", Some(&sku), &data).expect("first");
        checker.check("product", Some(&sku), &data).expect("repeat");
        assert_eq!(checker.len(), 1);
    }

    #[test]
    fn identifiers_are_scoped_by_kind() {
        let checker = UniqueIdentifierChecker::new();
        let code = ValueData::from("shirts");
        checker
            .check("family", Some(&code), &row(&[("code", "shirts")]))
            .expect("family");
        checker
            .check("category", Some(&code), &row(&[("code", "shirts"), ("parent", "")]))
            .expect("category");
    }

    #[test]
    fn missing_identifier_is_ignored() {
        let checker = UniqueIdentifierChecker::new();
        checker
            .check("product", None, &row(&[("name", "A")]))
            .expect("no identifier");
        checker
            .check("product", Some(&ValueData::Null), &row(&[("name", "B")]))
            .expect("blank identifier");
        assert!(checker.is_empty());
    }
}
