//! Data module - CSV loading, record parsing, and the session store

mod loader;
mod parser;
mod records;
mod store;

pub use loader::{read_table, LoaderError};
pub use parser::{
    parse_last_year_row, parse_last_year_table, parse_locale_float, parse_time_series_row,
    parse_time_series_table, RawRow, RowError,
};
pub use records::*;
pub use store::{Dataset, DatasetStore, LoadState};
