//! End-to-end ingestion of attribute and product files.

use std::fs;
use std::path::{Path, PathBuf};

use pim_ingest::{IngestError, build_product, load_attributes, parse_columns, read_products};
use pim_model::ErrorsByLabel;
use pim_validate::{ImportValidator, ProductImportValidator};
use tempfile::TempDir;

const ATTRIBUTES: &str = "\
code,type,localizable,scopable,required,max_characters,negative_allowed,options
sku,pim_catalog_identifier,,,,,,
name,pim_catalog_text,1,,,10,,
weight,pim_catalog_number,,,,,0,
color,pim_catalog_simpleselect,,,,,,\"red,blue\"
";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn validate(attributes: &Path, products: &Path) -> Vec<ErrorsByLabel> {
    let catalog = load_attributes(attributes).expect("attributes");
    let file = read_products(products).expect("products");
    let columns = parse_columns(&file.headers, &catalog).expect("columns");
    let validator = ProductImportValidator::with_defaults();
    file.rows
        .iter()
        .map(|row| {
            let product = build_product(&columns, row);
            validator
                .validate(&product, &columns, row, ErrorsByLabel::new())
                .expect("validate")
        })
        .collect()
}

#[test]
fn clean_rows_have_no_errors() {
    let dir = TempDir::new().expect("tempdir");
    let attributes = write(&dir, "attributes.csv", ATTRIBUTES);
    let products = write(
        &dir,
        "products.csv",
        "sku,name-en_US,weight,color,family,enabled\n\
         ABC123,Shirt,1.5,red,shirts,1\n\
         DEF456,Pants,,blue,pants,\n",
    );

    let errors = validate(&attributes, &products);

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(ErrorsByLabel::is_empty));
}

#[test]
fn violations_are_reported_per_column() {
    let dir = TempDir::new().expect("tempdir");
    let attributes = write(&dir, "attributes.csv", ATTRIBUTES);
    let products = write(
        &dir,
        "products.csv",
        "sku,name-en_US,weight,color,family,enabled\n\
         ,A very long shirt name,-2,green,bad family,maybe\n",
    );

    let errors = validate(&attributes, &products);
    let row = &errors[0];

    assert_eq!(row["sku"], vec!["This value should not be blank."]);
    assert_eq!(
        row["name-en_US"],
        vec!["This value is too long. It should have 10 characters or less."]
    );
    assert_eq!(row["weight"], vec!["This value should be 0 or more."]);
    assert_eq!(
        row["color"],
        vec!["The value you selected is not a valid choice."]
    );
    assert_eq!(row["family"], vec!["This value is not valid."]);
    assert_eq!(row["enabled"], vec!["This value should be a boolean."]);
}

#[test]
fn conflicting_duplicate_identifier_fails() {
    let dir = TempDir::new().expect("tempdir");
    let attributes = write(&dir, "attributes.csv", ATTRIBUTES);
    let products = write(
        &dir,
        "products.csv",
        "sku,name-en_US\nABC123,Shirt\nABC123,Other\n",
    );

    let catalog = load_attributes(&attributes).expect("attributes");
    let file = read_products(&products).expect("products");
    let columns = parse_columns(&file.headers, &catalog).expect("columns");
    let validator = ProductImportValidator::with_defaults();

    let first = build_product(&columns, &file.rows[0]);
    assert!(validator
        .validate(&first, &columns, &file.rows[0], ErrorsByLabel::new())
        .is_ok());
    let second = build_product(&columns, &file.rows[1]);
    assert!(validator
        .validate(&second, &columns, &file.rows[1], ErrorsByLabel::new())
        .is_err());
}

#[test]
fn unknown_header_fails() {
    let dir = TempDir::new().expect("tempdir");
    let attributes = write(&dir, "attributes.csv", ATTRIBUTES);
    let products = write(&dir, "products.csv", "sku,height\nABC123,2\n");

    let catalog = load_attributes(&attributes).expect("attributes");
    let file = read_products(&products).expect("products");
    let result = parse_columns(&file.headers, &catalog);

    assert!(matches!(result, Err(IngestError::UnknownColumn { ref header }) if header == "height"));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let result = load_attributes(&dir.path().join("missing.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}
