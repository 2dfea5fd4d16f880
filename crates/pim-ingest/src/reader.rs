//! Product CSV reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use pim_model::RawRow;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Header and raw rows of a product file.
#[derive(Debug, Clone, Default)]
pub struct ProductFile {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl ProductFile {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a product CSV file.
pub fn read_products(path: &Path) -> Result<ProductFile> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    parse_products(file, path)
}

/// Parse product CSV content; `path` is used in errors.
///
/// Cells are trimmed. Fully empty lines are skipped.
pub fn parse_products<R: Read>(reader: R, path: &Path) -> Result<ProductFile> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, &e))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row: RawRow = headers
            .iter()
            .cloned()
            .zip(record.iter().map(String::from))
            .collect();
        rows.push(row);
    }

    debug!(path = %path.display(), rows = rows.len(), "read product file");
    Ok(ProductFile { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_keyed_by_header() {
        let file = parse_products(
            " sku , name-en_US\nABC123, Shirt \n,\nDEF456,Pants\n".as_bytes(),
            Path::new("products.csv"),
        )
        .expect("parse");

        assert_eq!(file.headers, vec!["sku", "name-en_US"]);
        assert_eq!(file.len(), 2);
        assert_eq!(file.rows[0]["name-en_US"], "Shirt");
        assert_eq!(file.rows[1]["sku"], "DEF456");
    }

    #[test]
    fn ragged_rows_fail() {
        let result = parse_products("sku,name\nABC\n".as_bytes(), Path::new("products.csv"));
        assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    }
}
