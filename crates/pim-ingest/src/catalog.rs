//! Attribute catalog loaded from an attribute definition CSV.
//!
//! Expected columns: `code` and `type` are required; `label`, `localizable`,
//! `scopable`, `required`, `unique`, `max_characters`, `validation_rule`,
//! `validation_regexp`, `number_min`, `number_max`, `decimals_allowed`,
//! `negative_allowed`, `date_min`, `date_max` and `options` (comma-separated
//! option codes) are optional.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use pim_model::{Attribute, AttributeType, ValidationRule};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Attributes indexed by code.
#[derive(Debug, Clone, Default)]
pub struct AttributeCatalog {
    attributes: BTreeMap<String, Arc<Attribute>>,
}

impl AttributeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, replacing any attribute with the same code.
    pub fn insert(&mut self, attribute: Attribute) {
        self.attributes
            .insert(attribute.code.clone(), Arc::new(attribute));
    }

    pub fn get(&self, code: &str) -> Option<&Arc<Attribute>> {
        self.attributes.get(code)
    }

    /// The identifier attribute, if the catalog defines one.
    pub fn identifier(&self) -> Option<&Arc<Attribute>> {
        self.attributes
            .values()
            .find(|attribute| attribute.is_identifier())
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Attribute>> {
        self.attributes.values()
    }
}

impl FromIterator<Attribute> for AttributeCatalog {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for attribute in iter {
            catalog.insert(attribute);
        }
        catalog
    }
}

/// Load an attribute catalog from a CSV file.
pub fn load_attributes(path: &Path) -> Result<AttributeCatalog> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    parse_attributes(file, path)
}

/// Parse an attribute catalog from CSV content; `path` is used in errors.
pub fn parse_attributes<R: Read>(reader: R, path: &Path) -> Result<AttributeCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .clone();

    let idx_code = required_index(&headers, "code", path)?;
    let idx_type = required_index(&headers, "type", path)?;
    let columns = OptionalColumns::new(&headers);

    let mut catalog = AttributeCatalog::new();
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::csv(path, &e))?;
        let Some(code) = get_string(&row, Some(idx_code)) else {
            continue;
        };
        let type_name = get_string(&row, Some(idx_type)).unwrap_or_default();
        let attribute_type = AttributeType::from_str(&type_name)
            .map_err(|_| invalid("type", &type_name, path))?;

        let mut attribute = Attribute::new(code.clone(), attribute_type);
        attribute.label = get_string(&row, columns.label);
        attribute.localizable = parse_flag(&row, columns.localizable, "localizable", path)?
            .unwrap_or(false);
        attribute.scopable =
            parse_flag(&row, columns.scopable, "scopable", path)?.unwrap_or(false);
        attribute.required =
            parse_flag(&row, columns.required, "required", path)?.unwrap_or(false);
        if let Some(unique) = parse_flag(&row, columns.unique, "unique", path)? {
            attribute.unique = unique;
        }
        attribute.max_characters = parse_value(&row, columns.max_characters, "max_characters", path)?;
        attribute.validation_rule =
            parse_value::<ValidationRule>(&row, columns.validation_rule, "validation_rule", path)?;
        attribute.validation_regexp = get_string(&row, columns.validation_regexp);
        attribute.number_min = parse_value(&row, columns.number_min, "number_min", path)?;
        attribute.number_max = parse_value(&row, columns.number_max, "number_max", path)?;
        attribute.decimals_allowed =
            parse_flag(&row, columns.decimals_allowed, "decimals_allowed", path)?.unwrap_or(true);
        attribute.negative_allowed =
            parse_flag(&row, columns.negative_allowed, "negative_allowed", path)?.unwrap_or(true);
        attribute.date_min = parse_date(&row, columns.date_min, "date_min", path)?;
        attribute.date_max = parse_date(&row, columns.date_max, "date_max", path)?;
        attribute.options = get_string(&row, columns.options)
            .map(|options| {
                options
                    .split(',')
                    .map(str::trim)
                    .filter(|option| !option.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        if catalog.get(&code).is_some() {
            return Err(IngestError::DuplicateAttribute {
                code,
                path: path.to_path_buf(),
            });
        }
        catalog.insert(attribute);
    }

    debug!(path = %path.display(), attributes = catalog.len(), "loaded attribute catalog");
    Ok(catalog)
}

struct OptionalColumns {
    label: Option<usize>,
    localizable: Option<usize>,
    scopable: Option<usize>,
    required: Option<usize>,
    unique: Option<usize>,
    max_characters: Option<usize>,
    validation_rule: Option<usize>,
    validation_regexp: Option<usize>,
    number_min: Option<usize>,
    number_max: Option<usize>,
    decimals_allowed: Option<usize>,
    negative_allowed: Option<usize>,
    date_min: Option<usize>,
    date_max: Option<usize>,
    options: Option<usize>,
}

impl OptionalColumns {
    fn new(headers: &csv::StringRecord) -> Self {
        Self {
            label: header_index(headers, "label"),
            localizable: header_index(headers, "localizable"),
            scopable: header_index(headers, "scopable"),
            required: header_index(headers, "required"),
            unique: header_index(headers, "unique"),
            max_characters: header_index(headers, "max_characters"),
            validation_rule: header_index(headers, "validation_rule"),
            validation_regexp: header_index(headers, "validation_regexp"),
            number_min: header_index(headers, "number_min"),
            number_max: header_index(headers, "number_max"),
            decimals_allowed: header_index(headers, "decimals_allowed"),
            negative_allowed: header_index(headers, "negative_allowed"),
            date_min: header_index(headers, "date_min"),
            date_max: header_index(headers, "date_max"),
            options: header_index(headers, "options"),
        }
    }
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.eq_ignore_ascii_case(name))
}

fn required_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    header_index(headers, name).ok_or_else(|| IngestError::MissingColumn {
        column: name.to_string(),
        path: path.to_path_buf(),
    })
}

fn get_string(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

fn parse_flag(
    row: &csv::StringRecord,
    idx: Option<usize>,
    field: &str,
    path: &Path,
) -> Result<Option<bool>> {
    let Some(value) = get_string(row, idx) else {
        return Ok(None);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" => Ok(Some(true)),
        "0" | "no" | "false" => Ok(Some(false)),
        _ => Err(invalid(field, &value, path)),
    }
}

fn parse_value<T: FromStr>(
    row: &csv::StringRecord,
    idx: Option<usize>,
    field: &str,
    path: &Path,
) -> Result<Option<T>> {
    get_string(row, idx)
        .map(|value| value.parse::<T>().map_err(|_| invalid(field, &value, path)))
        .transpose()
}

fn parse_date(
    row: &csv::StringRecord,
    idx: Option<usize>,
    field: &str,
    path: &Path,
) -> Result<Option<NaiveDate>> {
    get_string(row, idx)
        .map(|value| {
            NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| invalid(field, &value, path))
        })
        .transpose()
}

fn invalid(field: &str, value: &str, path: &Path) -> IngestError {
    IngestError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        path: path.to_path_buf(),
    }
}
