//! Record Parser Module
//! Turns raw string-keyed CSV rows into typed records, handling locale
//! numeric formats and missing values.

use crate::data::records::*;
use log::warn;
use rayon::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

/// A single CSV row as delivered by the loader: column name to raw cell
/// text. Cells that were empty in the source are absent.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut row = Self::default();
        for (column, value) in pairs {
            row.insert(column, value);
        }
        row
    }
}

/// Why a whole row was rejected. Field-level problems never produce one of
/// these; they resolve to the missing sentinel instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RowError {
    #[error("row {0}: missing country name")]
    MissingCountry(usize),
    #[error("row {0}: missing or unparseable year")]
    MissingYear(usize),
}

/// Parse a numeric cell, accepting a comma as the decimal separator
/// ("7,5" reads as 7.5). Empty, unparseable, and non-finite input all
/// resolve to `None` rather than a fabricated zero.
pub fn parse_locale_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replacen(',', ".", 1);
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn numeric_field(row: &RawRow, index: usize, table: &str, column: &str) -> Option<f64> {
    let value = row.get(column).and_then(parse_locale_float);
    if value.is_none() {
        warn!(
            "{table}: row {index}, column {column:?} has no usable value (raw: {:?})",
            row.get(column).unwrap_or("")
        );
    }
    value
}

fn country_field(row: &RawRow, index: usize) -> Result<String, RowError> {
    match row.get(COL_COUNTRY).map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(RowError::MissingCountry(index)),
    }
}

/// Parse one time series row. Country and year are required; each of the
/// nine indicators independently falls back to the missing sentinel.
pub fn parse_time_series_row(row: &RawRow, index: usize) -> Result<TimeSeriesRecord, RowError> {
    let country = country_field(row, index)?;
    let year = row
        .get(COL_YEAR)
        .and_then(parse_locale_float)
        .map(|y| y as i32)
        .ok_or(RowError::MissingYear(index))?;

    Ok(TimeSeriesRecord {
        country,
        year,
        life_ladder: numeric_field(row, index, "time series", COL_LIFE_LADDER),
        log_gdp_per_capita: numeric_field(row, index, "time series", COL_LOG_GDP),
        social_support: numeric_field(row, index, "time series", COL_SOCIAL_SUPPORT),
        healthy_life_expectancy: numeric_field(row, index, "time series", COL_LIFE_EXPECTANCY),
        freedom: numeric_field(row, index, "time series", COL_FREEDOM),
        generosity: numeric_field(row, index, "time series", COL_GENEROSITY),
        corruption_perception: numeric_field(row, index, "time series", COL_CORRUPTION),
        positive_affect: numeric_field(row, index, "time series", COL_POSITIVE_AFFECT),
        negative_affect: numeric_field(row, index, "time series", COL_NEGATIVE_AFFECT),
    })
}

/// Parse one latest-report row. Only the country name is required.
pub fn parse_last_year_row(row: &RawRow, index: usize) -> Result<LastYearRecord, RowError> {
    let country = country_field(row, index)?;

    Ok(LastYearRecord {
        country,
        ladder_score: numeric_field(row, index, "last year", COL_LADDER_SCORE),
        upper_whisker: numeric_field(row, index, "last year", COL_UPPER_WHISKER),
        lower_whisker: numeric_field(row, index, "last year", COL_LOWER_WHISKER),
        explained_log_gdp: numeric_field(row, index, "last year", COL_EXPL_LOG_GDP),
        explained_social_support: numeric_field(row, index, "last year", COL_EXPL_SOCIAL_SUPPORT),
        explained_life_expectancy: numeric_field(row, index, "last year", COL_EXPL_LIFE_EXPECTANCY),
        explained_freedom: numeric_field(row, index, "last year", COL_EXPL_FREEDOM),
        explained_generosity: numeric_field(row, index, "last year", COL_EXPL_GENEROSITY),
        explained_corruption: numeric_field(row, index, "last year", COL_EXPL_CORRUPTION),
        dystopia_residual: numeric_field(row, index, "last year", COL_DYSTOPIA_RESIDUAL),
    })
}

/// Parse a whole time series table in parallel. Rejected rows are logged
/// and skipped; surviving records keep their input order.
pub fn parse_time_series_table(rows: &[RawRow]) -> Vec<TimeSeriesRecord> {
    rows.par_iter()
        .enumerate()
        .filter_map(|(index, row)| match parse_time_series_row(row, index) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("time series: skipping row ({err})");
                None
            }
        })
        .collect()
}

/// Parse a whole latest-report table in parallel, same row policy as
/// [`parse_time_series_table`].
pub fn parse_last_year_table(rows: &[RawRow]) -> Vec<LastYearRecord> {
    rows.par_iter()
        .enumerate()
        .filter_map(|(index, row)| match parse_last_year_row(row, index) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("last year: skipping row ({err})");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_float_accepts_comma_decimal_separator() {
        assert_eq!(parse_locale_float("7,5"), Some(7.5));
        assert_eq!(parse_locale_float("7.5"), Some(7.5));
        assert_eq!(parse_locale_float(" 0,123 "), Some(0.123));
    }

    #[test]
    fn locale_float_missing_is_none_not_zero() {
        assert_eq!(parse_locale_float(""), None);
        assert_eq!(parse_locale_float("   "), None);
        assert_eq!(parse_locale_float("n/a"), None);
        assert_eq!(parse_locale_float("inf"), None);
        assert_eq!(parse_locale_float("NaN"), None);
        assert_eq!(parse_locale_float("0"), Some(0.0));
    }

    #[test]
    fn time_series_row_parses_with_gaps() {
        let row = RawRow::from_pairs([
            (COL_COUNTRY, "Finland"),
            (COL_YEAR, "2006"),
            (COL_LIFE_LADDER, "7,3"),
            (COL_LOG_GDP, ""),
            (COL_SOCIAL_SUPPORT, "0.95"),
        ]);

        let record = parse_time_series_row(&row, 0).unwrap();
        assert_eq!(record.country, "Finland");
        assert_eq!(record.year, 2006);
        assert_eq!(record.life_ladder, Some(7.3));
        assert_eq!(record.log_gdp_per_capita, None);
        assert_eq!(record.social_support, Some(0.95));
        assert_eq!(record.generosity, None);
    }

    #[test]
    fn time_series_row_requires_country_and_year() {
        let no_country = RawRow::from_pairs([(COL_YEAR, "2006"), (COL_LIFE_LADDER, "7.3")]);
        assert_eq!(
            parse_time_series_row(&no_country, 3),
            Err(RowError::MissingCountry(3))
        );

        let no_year = RawRow::from_pairs([(COL_COUNTRY, "Finland"), (COL_LIFE_LADDER, "7.3")]);
        assert_eq!(
            parse_time_series_row(&no_year, 4),
            Err(RowError::MissingYear(4))
        );
    }

    #[test]
    fn last_year_row_parses_whiskers_and_components() {
        let row = RawRow::from_pairs([
            (COL_COUNTRY, "Denmark"),
            (COL_LADDER_SCORE, "7,583"),
            (COL_UPPER_WHISKER, "7.665"),
            (COL_LOWER_WHISKER, "7.500"),
            (COL_EXPL_LOG_GDP, "1,908"),
            (COL_EXPL_GENEROSITY, ""),
            (COL_DYSTOPIA_RESIDUAL, "2.052"),
        ]);

        let record = parse_last_year_row(&row, 0).unwrap();
        assert_eq!(record.ladder_score, Some(7.583));
        assert_eq!(record.upper_whisker, Some(7.665));
        assert_eq!(record.explained_log_gdp, Some(1.908));
        assert_eq!(record.explained_generosity, None);
        assert_eq!(record.dystopia_residual, Some(2.052));
    }

    #[test]
    fn table_parse_skips_bad_rows_and_keeps_order() {
        let rows = vec![
            RawRow::from_pairs([(COL_COUNTRY, "Finland"), (COL_YEAR, "2005")]),
            RawRow::from_pairs([(COL_YEAR, "2005")]),
            RawRow::from_pairs([(COL_COUNTRY, "Denmark"), (COL_YEAR, "2005")]),
        ];

        let records = parse_time_series_table(&rows);
        let names: Vec<&str> = records.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, ["Finland", "Denmark"]);
    }
}
