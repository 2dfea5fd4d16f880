//! Column descriptors from product file headers.
//!
//! Property columns use their property name as header. Attribute columns use
//! `code[-locale][-scope]`: a locale part is present exactly when the
//! attribute is localizable, a scope part exactly when it is scopable.

use std::collections::HashSet;

use pim_model::ColumnInfo;

use crate::catalog::AttributeCatalog;
use crate::error::{IngestError, Result};

/// Headers mapped to plain product properties.
pub const PROPERTY_COLUMNS: &[&str] = &["family", "enabled", "categories", "groups"];

/// Separator between attribute code, locale and scope in a header.
pub const QUALIFIER_SEPARATOR: char = '-';

/// Build column descriptors for every header, in header order.
pub fn parse_columns(headers: &[String], catalog: &AttributeCatalog) -> Result<Vec<ColumnInfo>> {
    let mut seen = HashSet::new();
    headers
        .iter()
        .map(|header| {
            if !seen.insert(header.as_str()) {
                return Err(IngestError::DuplicateColumn {
                    header: header.clone(),
                });
            }
            parse_column(header, catalog)
        })
        .collect()
}

/// Build the descriptor of one header.
pub fn parse_column(header: &str, catalog: &AttributeCatalog) -> Result<ColumnInfo> {
    if let Some(property) = PROPERTY_COLUMNS
        .iter()
        .find(|property| header.eq_ignore_ascii_case(property))
    {
        return Ok(ColumnInfo::property(header, *property));
    }

    let mut parts = header.split(QUALIFIER_SEPARATOR);
    let code = parts.next().unwrap_or_default();
    let Some(attribute) = catalog.get(code) else {
        return Err(IngestError::UnknownColumn {
            header: header.to_string(),
        });
    };

    let mut column = ColumnInfo::attribute(header, attribute.clone());
    if attribute.localizable {
        let locale = parts
            .next()
            .filter(|locale| !locale.is_empty())
            .ok_or_else(|| invalid(header, "localizable attribute requires a locale"))?;
        column = column.with_locale(locale);
    }
    if attribute.scopable {
        let scope = parts
            .next()
            .filter(|scope| !scope.is_empty())
            .ok_or_else(|| invalid(header, "scopable attribute requires a scope"))?;
        column = column.with_scope(scope);
    }
    if parts.next().is_some() {
        return Err(invalid(header, "too many qualifiers for attribute"));
    }
    Ok(column)
}

fn invalid(header: &str, reason: &str) -> IngestError {
    IngestError::InvalidColumn {
        header: header.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pim_model::{Attribute, AttributeType};

    fn catalog() -> AttributeCatalog {
        let mut name = Attribute::new("name", AttributeType::Text);
        name.localizable = true;
        let mut description = Attribute::new("description", AttributeType::Textarea);
        description.localizable = true;
        description.scopable = true;
        let mut price = Attribute::new("price", AttributeType::Price);
        price.scopable = true;
        [
            Attribute::new("sku", AttributeType::Identifier),
            name,
            description,
            price,
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn qualifiers_follow_attribute_flags() {
        let catalog = catalog();

        let sku = parse_column("sku", &catalog).expect("sku");
        assert!(sku.is_identifier());
        assert_eq!((sku.locale.as_deref(), sku.scope.as_deref()), (None, None));

        let name = parse_column("name-en_US", &catalog).expect("name");
        assert_eq!(name.locale.as_deref(), Some("en_US"));

        let description = parse_column("description-fr_FR-mobile", &catalog).expect("desc");
        assert_eq!(description.locale.as_deref(), Some("fr_FR"));
        assert_eq!(description.scope.as_deref(), Some("mobile"));

        let price = parse_column("price-ecommerce", &catalog).expect("price");
        assert_eq!(price.scope.as_deref(), Some("ecommerce"));
        assert_eq!(price.locale, None);
        assert_eq!(price.label, "price-ecommerce");
    }

    #[test]
    fn property_columns() {
        let column = parse_column("family", &catalog()).expect("family");
        assert_eq!(column.property_path.as_deref(), Some("family"));
        assert!(column.attribute.is_none());
    }

    #[test]
    fn qualifier_mismatch_fails() {
        let catalog = catalog();
        assert!(matches!(
            parse_column("name", &catalog),
            Err(IngestError::InvalidColumn { .. })
        ));
        assert!(matches!(
            parse_column("sku-en_US", &catalog),
            Err(IngestError::InvalidColumn { .. })
        ));
        assert!(matches!(
            parse_column("weight", &catalog),
            Err(IngestError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn duplicate_headers_fail() {
        let headers = vec!["sku".to_string(), "sku".to_string()];
        assert!(matches!(
            parse_columns(&headers, &catalog()),
            Err(IngestError::DuplicateColumn { .. })
        ));
    }
}
