use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::{ProductValue, ValueData};

/// Raw cells of one imported row, keyed by header in file order.
pub type RawRow = IndexMap<String, String>;

/// An entity being imported.
pub trait ImportRecord {
    /// Kind of record (e.g. "product"), used to scope identifier checks.
    fn kind(&self) -> &str;

    /// Plain property by path.
    fn property(&self, path: &str) -> Option<&ValueData>;

    /// Attribute value by code, locale and scope.
    fn value(&self, attribute: &str, locale: Option<&str>, scope: Option<&str>)
    -> Option<&ProductValue>;
}

/// Kind reported by [`Product`].
pub const PRODUCT_KIND: &str = "product";

/// A product: plain properties plus qualified attribute values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub properties: BTreeMap<String, ValueData>,
    pub values: Vec<ProductValue>,
}

impl Product {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_property(&mut self, path: impl Into<String>, data: ValueData) {
        self.properties.insert(path.into(), data);
    }

    /// Add a value, replacing any value with the same code, locale and scope.
    pub fn set_value(&mut self, value: ProductValue) {
        let existing = self.values.iter_mut().find(|current| {
            current.matches(
                &value.attribute,
                value.locale.as_deref(),
                value.scope.as_deref(),
            )
        });
        match existing {
            Some(current) => *current = value,
            None => self.values.push(value),
        }
    }

    #[must_use]
    pub fn with_property(mut self, path: impl Into<String>, data: ValueData) -> Self {
        self.set_property(path, data);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: ProductValue) -> Self {
        self.set_value(value);
        self
    }
}

impl ImportRecord for Product {
    fn kind(&self) -> &str {
        PRODUCT_KIND
    }

    fn property(&self, path: &str) -> Option<&ValueData> {
        self.properties.get(path)
    }

    fn value(
        &self,
        attribute: &str,
        locale: Option<&str>,
        scope: Option<&str>,
    ) -> Option<&ProductValue> {
        self.values
            .iter()
            .find(|value| value.matches(attribute, locale, scope))
    }
}

/// A non-product entity (family, category, ...) made of plain properties only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: String,
    pub properties: BTreeMap<String, ValueData>,
}

impl Entity {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, path: impl Into<String>, data: ValueData) -> Self {
        self.properties.insert(path.into(), data);
        self
    }
}

impl ImportRecord for Entity {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn property(&self, path: &str) -> Option<&ValueData> {
        self.properties.get(path)
    }

    fn value(&self, _: &str, _: Option<&str>, _: Option<&str>) -> Option<&ProductValue> {
        None
    }
}
