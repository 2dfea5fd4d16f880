use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use pim_filter::{Catalog, LABEL_NO, LABEL_YES, boolean_filter_options};
use pim_ingest::{AttributeCatalog, ProductFile, build_product, load_attributes, parse_columns, read_products};
use pim_model::{AttributeType, ColumnInfo, ErrorsByLabel, ImportError, RawRow};
use pim_validate::{ImportValidator, ProductImportValidator};

use crate::cli::{FilterArgs, ValidateArgs};
use crate::types::{FilterReport, RowReport, ValidationReport};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let span = info_span!("validate", products = %args.products.display());
    let _guard = span.enter();

    let (catalog, file) = load(&args.attributes, &args.products)?;
    let columns = parse_columns(&file.headers, &catalog).context("parse product file header")?;
    let validator = ProductImportValidator::with_defaults();

    let mut report = ValidationReport {
        products: file.len(),
        ..ValidationReport::default()
    };
    for (index, raw) in file.rows.iter().enumerate() {
        let row = index + 1;
        let product = build_product(&columns, raw);
        let errors = match validator.validate(&product, &columns, raw, ErrorsByLabel::new()) {
            Ok(errors) => errors,
            Err(error @ ImportError::DuplicateIdentifier { .. }) => {
                let label = identifier_label(&columns).unwrap_or_default().to_string();
                ErrorsByLabel::from([(label, vec![error.to_string()])])
            }
            Err(error) => return Err(error).with_context(|| format!("validate row {row}")),
        };
        if errors.is_empty() {
            continue;
        }
        warn!(row, columns = errors.len(), "product row has errors");
        report.invalid.push(RowReport {
            row,
            identifier: identifier(&columns, raw),
            errors,
        });
    }

    info!(
        products = report.products,
        invalid = report.invalid.len(),
        "validation complete"
    );
    Ok(report)
}

pub fn run_filter(args: &FilterArgs) -> Result<FilterReport> {
    let span = info_span!("filter", attribute = %args.attribute);
    let _guard = span.enter();

    let (catalog, file) = load(&args.attributes, &args.products)?;
    let Some(attribute) = catalog.get(&args.attribute) else {
        bail!("unknown attribute: {}", args.attribute);
    };
    if attribute.attribute_type != AttributeType::Boolean {
        bail!(
            "attribute {} is {}, expected a boolean attribute",
            attribute.code,
            attribute.attribute_type
        );
    }
    let columns = parse_columns(&file.headers, &catalog).context("parse product file header")?;
    let filter = args.choice.filter();

    let mut matches = Vec::new();
    for raw in &file.rows {
        let product = build_product(&columns, raw);
        let selected = product
            .values
            .iter()
            .filter(|value| value.attribute == attribute.code)
            .any(|value| filter.matches(value.data()));
        if selected {
            matches.push(identifier(&columns, raw).unwrap_or_default());
        }
    }

    info!(products = file.len(), matches = matches.len(), "filter complete");
    Ok(FilterReport {
        attribute: attribute.code.clone(),
        options: boolean_filter_options(&labels()),
        selected: filter.selected(),
        products: file.len(),
        matches,
    })
}

fn load(
    attributes: &std::path::Path,
    products: &std::path::Path,
) -> Result<(AttributeCatalog, ProductFile)> {
    let catalog = load_attributes(attributes)
        .with_context(|| format!("load attributes from {}", attributes.display()))?;
    let file = read_products(products)
        .with_context(|| format!("read products from {}", products.display()))?;
    Ok((catalog, file))
}

fn labels() -> Catalog {
    Catalog::new().with(LABEL_YES, "Yes").with(LABEL_NO, "No")
}

fn identifier_label(columns: &[ColumnInfo]) -> Option<&str> {
    columns
        .iter()
        .find(|column| column.is_identifier())
        .map(|column| column.label.as_str())
}

fn identifier(columns: &[ColumnInfo], raw: &RawRow) -> Option<String> {
    identifier_label(columns)
        .and_then(|label| raw.get(label))
        .filter(|value| !value.is_empty())
        .cloned()
}
