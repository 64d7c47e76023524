//! Happiness Atlas - World Happiness Report data core
//!
//! Loads the two report tables and prints the dashboard's derived views.

use anyhow::bail;
use happiness_atlas::data::{DatasetStore, LoadState, SeriesMetric};
use happiness_atlas::geo::{Continent, RegionScope};
use happiness_atlas::stats;
use std::path::Path;
use std::time::Duration;

const SERIES_FILE: &str = "data_over_the_years.csv";
const REPORT_FILE: &str = "data_last_year.csv";

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.3}"),
        None => "-".to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let data_dir = args.next().unwrap_or_else(|| "data".to_string());
    let country = args.next();

    let series_path = Path::new(&data_dir).join(SERIES_FILE);
    let report_path = Path::new(&data_dir).join(REPORT_FILE);

    let mut store = DatasetStore::new();
    store.begin_load(
        &series_path.to_string_lossy(),
        &report_path.to_string_lossy(),
    );
    while store.is_loading() {
        store.poll();
        std::thread::sleep(Duration::from_millis(25));
    }

    let dataset = match store.state() {
        LoadState::Ready(dataset) => dataset,
        LoadState::Failed(message) => bail!("failed to load dataset: {message}"),
        _ => bail!("dataset load never started"),
    };

    let series = dataset.time_series();
    let report = dataset.last_year();
    let years = stats::years(series);

    println!("Happiness Atlas");
    println!(
        "  {} time series records ({} countries, years {}..{})",
        series.len(),
        stats::countries(series).len(),
        years.first().copied().unwrap_or(0),
        years.last().copied().unwrap_or(0),
    );
    println!("  {} last-year records", report.len());

    println!("\nLadder score averages (latest report):");
    let global = stats::regional_mean(report, RegionScope::Global, |r| r.ladder_score);
    println!("  Global          {}", format_value(global));
    for continent in Continent::ALL {
        let scope = RegionScope::Continent(continent);
        let value = stats::regional_mean(report, scope, |r| r.ladder_score);
        println!("  {:<15} {}", continent.name(), format_value(value));
    }

    if let Some(year) = stats::latest_year(series) {
        println!("\nTop 15 by Life Ladder, {year}:");
        for (rank, record) in stats::top_n_by_year(series, year, 15, SeriesMetric::LifeLadder)
            .iter()
            .enumerate()
        {
            println!(
                "  {:>2}. {:<30} {}",
                rank + 1,
                record.country,
                format_value(record.life_ladder)
            );
        }
    }

    let rollup = stats::continent_rollup(series, SeriesMetric::LifeLadder);
    println!("\nContinent rollup (Life Ladder):");
    println!("{}", serde_json::to_string_pretty(&rollup)?);

    println!("\nRadar scale maxima (explained-by components):");
    for (metric, scale) in stats::report_scales(report) {
        println!("  {:<45} {:.3}", metric.column_name(), scale.max());
    }

    if let Some(country) = country {
        println!("\nLife Ladder trend for {country}:");
        let country_series: Vec<_> = series
            .iter()
            .filter(|r| r.country == country)
            .cloned()
            .collect();
        for (year, value) in
            stats::yearly_mean_trend(&country_series, RegionScope::Global, SeriesMetric::LifeLadder)
        {
            println!("  {year}: {}", format_value(value));
        }

        println!("\n{country} vs global average (latest report):");
        for (metric, diff) in
            stats::percent_difference_profile(report, &country, RegionScope::Global)
        {
            println!("  {:<45} {:>7.1}%", metric.column_name(), diff);
        }
    }

    Ok(())
}
