use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::Result;
use crate::models::{RawFoodRecord, ReferenceRow};

/// Load raw food records from a CSV file.
///
/// Cells stay textual here; period parsing and nutrient coercion happen when
/// the catalog is built.
pub fn load_food_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawFoodRecord>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// Load historical reference rows from a CSV file.
///
/// Unlike the food table, these cells must be numeric; a malformed row is an
/// error rather than a zero.
pub fn load_reference_rows<P: AsRef<Path>>(path: P) -> Result<Vec<ReferenceRow>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
