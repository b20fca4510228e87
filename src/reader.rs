// 📂 CSV Reader - Product taxonomy rows
// Reads the export as header-keyed rows; values stay raw strings

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

// ============================================================================
// COLUMN NAMES
// ============================================================================

pub const GROUP_COLUMN: &str = "ProductGroup";
pub const CATEGORY_COLUMN: &str = "ProductCategory";
pub const TYPE_COLUMN: &str = "ProductType";

/// Columns the builder reads, in hierarchy order
pub const EXPECTED_COLUMNS: [&str; 3] = [GROUP_COLUMN, CATEGORY_COLUMN, TYPE_COLUMN];

const UTF8_BOM: char = '\u{feff}';

// ============================================================================
// ROW TYPES
// ============================================================================

/// One data row, field name → raw value, in header order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// 1-based line in the source file (header is line 1)
    pub line: u64,
    pub fields: IndexMap<String, String>,
}

impl CsvRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Expected columns this row has no value slot for at all
    pub fn missing_columns(&self) -> Vec<&'static str> {
        EXPECTED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !self.fields.contains_key(*column))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

// ============================================================================
// READING
// ============================================================================

/// Read and parse the CSV at `path`.
///
/// Open/decode failures are fatal. Rows without a `ProductGroup` slot are
/// skipped with a warning; rows missing only category/type are kept.
pub fn read_rows(path: &Path) -> Result<CsvTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read CSV file: {}", path.display()))?;

    read_rows_from(&content)
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))
}

/// Parse already-decoded CSV text (an optional leading BOM is stripped)
pub fn read_rows_from(content: &str) -> Result<CsvTable> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV header row")?
        .iter()
        .map(str::to_string)
        .collect();

    info!("CSV Headers: {:?}", headers);

    let mut rows = Vec::new();

    for (index, result) in reader.records().enumerate() {
        // +2 because: 1-indexed + header row
        let fallback_line = index as u64 + 2;
        let record = result
            .with_context(|| format!("Failed to parse CSV line {}", fallback_line))?;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(fallback_line);

        let row = to_row(&headers, &record, line);

        let missing = row.missing_columns();
        if missing.contains(&GROUP_COLUMN) {
            warn!("Missing column {:?} in row {}: {:?}; skipping", missing, line, row.fields);
            continue;
        }
        if !missing.is_empty() {
            warn!("Missing column {:?} in row {}; treating as empty", missing, line);
        }

        rows.push(row);
    }

    debug!("Read {} rows", rows.len());

    Ok(CsvTable { headers, rows })
}

fn to_row(headers: &[String], record: &StringRecord, line: u64) -> CsvRow {
    let fields = headers
        .iter()
        .zip(record.iter())
        .map(|(name, value)| (name.clone(), value.to_string()))
        .collect();

    CsvRow { line, fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_rows_in_order() {
        let table = read_rows_from(
            "ProductGroup,ProductCategory,ProductType\n\
             Electronics,Phones,Smartphones\n\
             Furniture,Chairs,\n",
        )
        .unwrap();

        assert_eq!(table.headers, vec!["ProductGroup", "ProductCategory", "ProductType"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].get(GROUP_COLUMN), Some("Electronics"));
        assert_eq!(table.rows[0].get(TYPE_COLUMN), Some("Smartphones"));
        assert_eq!(table.rows[1].get(GROUP_COLUMN), Some("Furniture"));
        assert_eq!(table.rows[1].get(TYPE_COLUMN), Some(""));
        assert_eq!(table.rows[0].line, 2);
        assert_eq!(table.rows[1].line, 3);
    }

    #[test]
    fn test_strips_byte_order_mark() {
        let table = read_rows_from("\u{feff}ProductGroup,ProductCategory\nToys,Puzzles\n").unwrap();

        assert_eq!(table.headers[0], "ProductGroup");
        assert_eq!(table.rows[0].get(GROUP_COLUMN), Some("Toys"));
    }

    #[test]
    fn test_values_are_not_trimmed_or_coerced() {
        let table = read_rows_from("ProductGroup,Qty\n  Toys  ,007\n").unwrap();

        assert_eq!(table.rows[0].get(GROUP_COLUMN), Some("  Toys  "));
        assert_eq!(table.rows[0].get("Qty"), Some("007"));
    }

    #[test]
    fn test_row_without_type_column_is_kept() {
        let table = read_rows_from("ProductGroup,ProductCategory\nToys,Puzzles\n").unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].missing_columns(), vec![TYPE_COLUMN]);
        assert_eq!(table.rows[0].get(TYPE_COLUMN), None);
    }

    #[test]
    fn test_short_row_keeps_present_fields() {
        let table = read_rows_from(
            "ProductGroup,ProductCategory,ProductType\n\
             Toys,Puzzles\n",
        )
        .unwrap();

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].get(CATEGORY_COLUMN), Some("Puzzles"));
        assert_eq!(table.rows[0].missing_columns(), vec![TYPE_COLUMN]);
    }

    #[test]
    fn test_row_without_group_column_is_skipped() {
        let table = read_rows_from("ProductCategory,ProductType\nPuzzles,Jigsaw\n").unwrap();

        assert!(table.rows.is_empty());
        assert_eq!(table.headers, vec!["ProductCategory", "ProductType"]);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let table = read_rows_from("ProductGroup\nToys,extra,more\n").unwrap();

        assert_eq!(table.rows[0].fields.len(), 1);
        assert_eq!(table.rows[0].get(GROUP_COLUMN), Some("Toys"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_rows(Path::new("/nonexistent/productsdata.csv")).unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to read CSV file"));
    }
}
