use std::collections::HashMap;

/// Resolves translation keys to labels.
pub trait Translator {
    fn trans(&self, key: &str) -> String;
}

/// Map-backed catalog; unknown keys translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.messages.insert(key.into(), label.into());
        self
    }
}

impl Translator for Catalog {
    fn trans(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
