//! Records built from raw rows.
//!
//! Cells are converted according to the attribute type. A cell that does not
//! parse is kept as text so the validator reports it.

use chrono::NaiveDate;
use pim_model::{AttributeType, ColumnInfo, Product, ProductValue, RawRow, ValueData};

/// Build a product from one raw row.
pub fn build_product(columns: &[ColumnInfo], row: &RawRow) -> Product {
    let mut product = Product::new();
    for column in columns {
        let cell = row.get(&column.label).map(String::as_str).unwrap_or_default();
        match (&column.attribute, &column.property_path) {
            (Some(attribute), _) => {
                let mut value =
                    ProductValue::new(attribute.code.clone(), convert(attribute.attribute_type, cell));
                value.locale = column.locale.clone();
                value.scope = column.scope.clone();
                product.set_value(value);
            }
            (None, Some(path)) => product.set_property(path.clone(), property(path, cell)),
            (None, None) => {}
        }
    }
    product
}

/// Convert a cell for an attribute of type `attribute_type`.
pub fn convert(attribute_type: AttributeType, cell: &str) -> ValueData {
    let cell = cell.trim();
    if cell.is_empty() {
        return ValueData::Null;
    }
    match attribute_type {
        AttributeType::Number | AttributeType::Metric | AttributeType::Price => cell
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
            .map_or_else(|| text(cell), ValueData::Number),
        AttributeType::Boolean => parse_bool(cell)
            .map(ValueData::Boolean)
            .unwrap_or_else(|| text(cell)),
        AttributeType::Date => NaiveDate::parse_from_str(cell, "%Y-%m-%d")
            .map(ValueData::Date)
            .unwrap_or_else(|_| text(cell)),
        AttributeType::MultiSelect => ValueData::Options(
            cell.split(',')
                .map(str::trim)
                .filter(|option| !option.is_empty())
                .map(String::from)
                .collect(),
        ),
        _ => text(cell),
    }
}

fn property(path: &str, cell: &str) -> ValueData {
    let cell = cell.trim();
    if path == "enabled" {
        // Products are enabled unless the file says otherwise.
        if cell.is_empty() {
            return ValueData::Boolean(true);
        }
        return parse_bool(cell)
            .map(ValueData::Boolean)
            .unwrap_or_else(|| text(cell));
    }
    if cell.is_empty() {
        ValueData::Null
    } else {
        text(cell)
    }
}

fn parse_bool(cell: &str) -> Option<bool> {
    match cell.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn text(cell: &str) -> ValueData {
    ValueData::Text(cell.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pim_model::{Attribute, ImportRecord};
    use std::sync::Arc;

    #[test]
    fn converts_by_attribute_type() {
        assert_eq!(convert(AttributeType::Number, "12.5"), ValueData::Number(12.5));
        assert_eq!(convert(AttributeType::Number, "12kg"), ValueData::from("12kg"));
        assert_eq!(convert(AttributeType::Number, "NaN"), ValueData::from("NaN"));
        assert_eq!(convert(AttributeType::Price, "-inf"), ValueData::from("-inf"));
        assert_eq!(convert(AttributeType::Boolean, "Yes"), ValueData::Boolean(true));
        assert_eq!(
            convert(AttributeType::Date, "2024-03-01"),
            ValueData::Date(NaiveDate::from_ymd_opt(2024, 3, 1).expect("date"))
        );
        assert_eq!(
            convert(AttributeType::MultiSelect, "red, blue,"),
            ValueData::Options(vec!["red".to_string(), "blue".to_string()])
        );
        assert_eq!(convert(AttributeType::Text, "  "), ValueData::Null);
    }

    #[test]
    fn builds_values_and_properties() {
        let mut name = Attribute::new("name", AttributeType::Text);
        name.localizable = true;
        let columns = vec![
            ColumnInfo::attribute("sku", Arc::new(Attribute::new("sku", AttributeType::Identifier))),
            ColumnInfo::attribute("name-en_US", Arc::new(name)).with_locale("en_US"),
            ColumnInfo::property("family", "family"),
            ColumnInfo::property("enabled", "enabled"),
        ];
        let row: RawRow = [("sku", "ABC123"), ("name-en_US", "Shirt"), ("family", "")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let product = build_product(&columns, &row);

        assert_eq!(
            product.value("name", Some("en_US"), None).map(|v| v.data()),
            Some(&ValueData::from("Shirt"))
        );
        assert_eq!(product.property("family"), Some(&ValueData::Null));
        assert_eq!(product.property("enabled"), Some(&ValueData::Boolean(true)));
    }
}
