use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attribute type tag.
///
/// Drives both identifier detection during import and which constraints a
/// guesser derives for the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// The product's unique identifying attribute (SKU).
    Identifier,
    Text,
    Textarea,
    Number,
    Boolean,
    Date,
    SimpleSelect,
    MultiSelect,
    Metric,
    Price,
}

impl AttributeType {
    /// Returns true for the identifying attribute type.
    pub fn is_identifier(&self) -> bool {
        matches!(self, AttributeType::Identifier)
    }

    /// Returns true if values of this type are numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            AttributeType::Number | AttributeType::Metric | AttributeType::Price
        )
    }

    /// Returns true if values of this type are picked from attribute options.
    pub fn is_select(&self) -> bool {
        matches!(self, AttributeType::SimpleSelect | AttributeType::MultiSelect)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Identifier => "identifier",
            AttributeType::Text => "text",
            AttributeType::Textarea => "textarea",
            AttributeType::Number => "number",
            AttributeType::Boolean => "boolean",
            AttributeType::Date => "date",
            AttributeType::SimpleSelect => "simpleselect",
            AttributeType::MultiSelect => "multiselect",
            AttributeType::Metric => "metric",
            AttributeType::Price => "price",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttributeType {
    type Err = String;

    /// Accepts both the short tag (`text`) and the catalog form
    /// (`pim_catalog_text`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let tag = normalized
            .strip_prefix("pim_catalog_")
            .unwrap_or(&normalized);
        match tag {
            "identifier" => Ok(AttributeType::Identifier),
            "text" => Ok(AttributeType::Text),
            "textarea" => Ok(AttributeType::Textarea),
            "number" => Ok(AttributeType::Number),
            "boolean" => Ok(AttributeType::Boolean),
            "date" => Ok(AttributeType::Date),
            "simpleselect" => Ok(AttributeType::SimpleSelect),
            "multiselect" => Ok(AttributeType::MultiSelect),
            "metric" => Ok(AttributeType::Metric),
            "price" | "price_collection" => Ok(AttributeType::Price),
            _ => Err(format!("Unknown attribute type: {}", s)),
        }
    }
}

/// Format rule applied to text values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationRule {
    Email,
    Url,
    Regexp,
}

impl FromStr for ValidationRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(ValidationRule::Email),
            "url" => Ok(ValidationRule::Url),
            "regexp" => Ok(ValidationRule::Regexp),
            _ => Err(format!("Unknown validation rule: {}", s)),
        }
    }
}

/// A typed field definition applicable to products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub code: String,
    pub attribute_type: AttributeType,
    pub label: Option<String>,
    #[serde(default)]
    pub localizable: bool,
    #[serde(default)]
    pub scopable: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub unique: bool,
    pub max_characters: Option<u32>,
    pub validation_rule: Option<ValidationRule>,
    pub validation_regexp: Option<String>,
    pub number_min: Option<f64>,
    pub number_max: Option<f64>,
    #[serde(default = "default_true")]
    pub decimals_allowed: bool,
    #[serde(default = "default_true")]
    pub negative_allowed: bool,
    pub date_min: Option<NaiveDate>,
    pub date_max: Option<NaiveDate>,
    #[serde(default)]
    pub options: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Attribute {
    /// Create an attribute with the given code and type and no extra rules.
    pub fn new(code: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            code: code.into(),
            attribute_type,
            label: None,
            localizable: false,
            scopable: false,
            required: false,
            unique: attribute_type.is_identifier(),
            max_characters: None,
            validation_rule: None,
            validation_regexp: None,
            number_min: None,
            number_max: None,
            decimals_allowed: true,
            negative_allowed: true,
            date_min: None,
            date_max: None,
            options: Vec::new(),
        }
    }

    pub fn is_identifier(&self) -> bool {
        self.attribute_type.is_identifier()
    }

    /// Display label, falling back to the code.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.code)
    }
}
