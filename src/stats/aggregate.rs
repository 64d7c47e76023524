//! Aggregation Module
//! Pure, chart-facing queries over the parsed tables. Every function is
//! total on empty or partial input and prefers an explicit no-data result
//! over a fabricated zero.

use crate::data::{CountryRecord, LastYearRecord, ReportMetric, SeriesMetric, TimeSeriesRecord};
use crate::geo::RegionScope;
use std::cmp::Ordering;

/// Arithmetic mean, `None` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f64)
}

/// The given year's records ranked descending by `metric`, truncated to
/// `n`. Ties and missing values keep input order; missing values rank
/// below every present value.
pub fn top_n_by_year(
    series: &[TimeSeriesRecord],
    year: i32,
    n: usize,
    metric: SeriesMetric,
) -> Vec<&TimeSeriesRecord> {
    let mut ranked: Vec<&TimeSeriesRecord> = series.iter().filter(|r| r.year == year).collect();
    ranked.sort_by(|a, b| match (metric.value(a), metric.value(b)) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ranked.truncate(n);
    ranked
}

/// Mean of `metric` over the records the scope admits. Missing values are
/// skipped; an empty filtered set yields `None`, never zero.
pub fn regional_mean<T, F>(records: &[T], scope: RegionScope, metric: F) -> Option<f64>
where
    T: CountryRecord,
    F: Fn(&T) -> Option<f64>,
{
    mean(
        records
            .iter()
            .filter(|r| scope.admits(r.country_name()))
            .filter_map(metric),
    )
}

/// Relative difference in percent. A zero baseline is a degenerate
/// comparison and maps to zero so chart consumers stay finite.
pub fn percent_difference(value: f64, baseline: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        (value - baseline) / baseline * 100.0
    }
}

/// Distinct reporting years, ascending.
pub fn years(series: &[TimeSeriesRecord]) -> Vec<i32> {
    let mut years: Vec<i32> = series.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Distinct country names in first-seen order.
pub fn countries<T: CountryRecord>(records: &[T]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    records
        .iter()
        .map(CountryRecord::country_name)
        .filter(|name| seen.insert(name.to_string()))
        .map(str::to_string)
        .collect()
}

/// Per-year scoped mean of `metric` across the full year range. Years
/// where the scope has no data carry `None`.
pub fn yearly_mean_trend(
    series: &[TimeSeriesRecord],
    scope: RegionScope,
    metric: SeriesMetric,
) -> Vec<(i32, Option<f64>)> {
    years(series)
        .into_iter()
        .map(|year| {
            let value = mean(
                series
                    .iter()
                    .filter(|r| r.year == year && scope.admits(r.country_name()))
                    .filter_map(|r| metric.value(r)),
            );
            (year, value)
        })
        .collect()
}

/// A country's percent difference against the scoped average, per report
/// metric. Degenerate inputs (unknown country, missing value, empty or
/// zero baseline) yield `0.0` so the comparison card never blows up.
pub fn percent_difference_profile(
    last_year: &[LastYearRecord],
    country: &str,
    scope: RegionScope,
) -> Vec<(ReportMetric, f64)> {
    let country_record = last_year.iter().find(|r| r.country == country);

    ReportMetric::ALL
        .into_iter()
        .map(|metric| {
            let baseline = regional_mean(last_year, scope, |r| metric.value(r));
            let difference = match (country_record.and_then(|r| metric.value(r)), baseline) {
                (Some(value), Some(baseline)) => percent_difference(value, baseline),
                _ => 0.0,
            };
            (metric, difference)
        })
        .collect()
}
