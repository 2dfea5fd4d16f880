use std::sync::Arc;

use crate::attribute::Attribute;

/// Describes how one import column maps onto a record.
///
/// A column either targets a plain property (`property_path`) or an attribute
/// value qualified by `locale` and `scope`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    /// Header label, used as the key of the error report.
    pub label: String,
    /// Attribute code or property name.
    pub name: String,
    pub property_path: Option<String>,
    pub attribute: Option<Arc<Attribute>>,
    pub locale: Option<String>,
    pub scope: Option<String>,
}

impl ColumnInfo {
    /// Column targeting a plain property.
    pub fn property(label: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            label: label.into(),
            name: path.clone(),
            property_path: Some(path),
            attribute: None,
            locale: None,
            scope: None,
        }
    }

    /// Column targeting an unqualified attribute value.
    pub fn attribute(label: impl Into<String>, attribute: Arc<Attribute>) -> Self {
        Self {
            label: label.into(),
            name: attribute.code.clone(),
            property_path: None,
            attribute: Some(attribute),
            locale: None,
            scope: None,
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Returns true if this column carries the identifying attribute.
    pub fn is_identifier(&self) -> bool {
        self.attribute
            .as_ref()
            .is_some_and(|attribute| attribute.is_identifier())
    }
}
