//! CSV table loading for the lookup harness.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use flookup_model::{CellValue, Row, Table};

/// Loads a CSV file into a [`Table`]. The first column is the match key.
///
/// Records are read flexibly: ragged files load without error and are
/// rejected later by the engine's grid validation, so the caller sees the
/// same sentinel a formula host would.
pub fn load_table(path: &Path, has_header: bool) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open table {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read table {}", path.display()))?;
        let cells = record.iter().map(parse_cell).collect();
        rows.push(Row::new(cells));
    }
    Ok(Table::from_rows(rows))
}

fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => CellValue::Number(number),
        _ => CellValue::Text(trimmed.to_string()),
    }
}
