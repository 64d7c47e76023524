//! CSV Table Loader Module
//! Reads a source table into raw string-keyed rows using Polars.

use crate::data::parser::RawRow;
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Read a delimited table into one [`RawRow`] per source row.
///
/// Schema inference is disabled so every column materializes as text; the
/// parser owns all numeric coercion, including locale comma decimals that
/// would otherwise trip the reader's own type guessing.
pub fn read_table(path: &str) -> Result<Vec<RawRow>, LoaderError> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(0))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    let mut rows = vec![RawRow::default(); df.height()];
    for column in df.get_columns() {
        let name = column.name().to_string();
        let cells = column.str()?;
        for (i, cell) in cells.into_iter().enumerate() {
            if let Some(value) = cell {
                rows[i].insert(name.clone(), value);
            }
        }
    }

    Ok(rows)
}
