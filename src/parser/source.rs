use std::fs::File;
use std::path::Path;

use crate::error::{DietError, Result};
use crate::models::MealCatalog;
use crate::parser::cell::{Cell, Row};
use crate::parser::sheet::{ParseOptions, parse_rows};

/// Read every row of a sheet export into classified cells.
///
/// An unreadable path is fatal. A file that opens but does not decode
/// as tabular data is reported as malformed so the caller can carry on
/// with an empty catalog.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let file = File::open(path)
        .map_err(|e| DietError::SourceUnavailable(format!("{}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| DietError::MalformedSource(format!("{}: {}", path.display(), e)))?;
        rows.push(record.iter().map(Cell::from_raw).collect());
    }
    Ok(rows)
}

/// Load a sheet and parse it into a meal catalog in one step.
pub fn load_catalog(path: &Path, options: &ParseOptions) -> Result<MealCatalog> {
    let rows = load_rows(path)?;
    Ok(parse_rows(&rows, options))
}
