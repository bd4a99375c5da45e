use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Dataset, Record, REQUIRED_COLUMNS};

/// The input file does not have the expected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("CSV missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the tourism dataset from a CSV file.
///
/// Header names are matched exactly; column order does not matter and extra
/// columns are ignored. Any missing required column, unreadable row or
/// non-numeric count aborts the whole load.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    let dataset = load_csv(file).with_context(|| format!("loading {}", path.display()))?;
    log::info!(
        "Loaded {} towns in {} regions from {}",
        dataset.len(),
        dataset.regions().len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse a dataset from any CSV byte stream.
pub fn load_csv<R: Read>(input: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let headers = reader.headers().context("reading CSV headers")?.clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingColumns(missing).into());
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<Record>().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(Dataset::from_records(records))
}
