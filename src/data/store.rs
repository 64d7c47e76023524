//! Dataset Store Module
//! Orchestrates the one-time load of both source tables and holds the
//! parsed records for the rest of the session.

use crate::data::loader::{self, LoaderError};
use crate::data::parser;
use crate::data::records::{LastYearRecord, TimeSeriesRecord};
use log::{info, warn};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// Load result from the background thread.
enum LoadResult {
    Complete(Dataset),
    Error(String),
}

/// Both parsed tables, immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    time_series: Vec<TimeSeriesRecord>,
    last_year: Vec<LastYearRecord>,
}

impl Dataset {
    /// Read and parse both source tables. A failure on either table is a
    /// batch failure; malformed individual cells have already been handled
    /// inside the parser.
    pub fn load(series_path: &str, report_path: &str) -> Result<Dataset, LoaderError> {
        let series_rows = loader::read_table(series_path)?;
        let report_rows = loader::read_table(report_path)?;

        let time_series = parser::parse_time_series_table(&series_rows);
        let last_year = parser::parse_last_year_table(&report_rows);
        info!(
            "dataset loaded: {} time series records, {} last-year records",
            time_series.len(),
            last_year.len()
        );

        Ok(Dataset {
            time_series,
            last_year,
        })
    }

    pub fn time_series(&self) -> &[TimeSeriesRecord] {
        &self.time_series
    }

    pub fn last_year(&self) -> &[LastYearRecord] {
        &self.last_year
    }
}

/// Lifecycle of the session dataset. There is no path out of `Failed` and
/// no reload from `Ready`.
#[derive(Debug, Default)]
pub enum LoadState {
    #[default]
    Uninitialized,
    Loading,
    Ready(Dataset),
    Failed(String),
}

/// Holds the session dataset and drives its single load.
#[derive(Default)]
pub struct DatasetStore {
    state: LoadState,
    load_rx: Option<Receiver<LoadResult>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kick off the one-time load in a background thread. Any call after
    /// the first is ignored.
    pub fn begin_load(&mut self, series_path: &str, report_path: &str) {
        if !matches!(self.state, LoadState::Uninitialized) {
            warn!("dataset load already started; ignoring");
            return;
        }

        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        self.state = LoadState::Loading;

        let series_path = series_path.to_string();
        let report_path = report_path.to_string();
        thread::spawn(move || {
            let result = match Dataset::load(&series_path, &report_path) {
                Ok(dataset) => LoadResult::Complete(dataset),
                Err(err) => LoadResult::Error(err.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for a load result without blocking.
    pub fn poll(&mut self) -> &LoadState {
        if let Some(rx) = self.load_rx.take() {
            match rx.try_recv() {
                Ok(result) => self.apply(result),
                Err(_) => self.load_rx = Some(rx),
            }
        }
        &self.state
    }

    /// Block until the pending load settles to `Ready` or `Failed`.
    pub fn wait_until_done(&mut self) -> &LoadState {
        if let Some(rx) = self.load_rx.take() {
            match rx.recv() {
                Ok(result) => self.apply(result),
                Err(_) => self.apply(LoadResult::Error("loader thread vanished".to_string())),
            }
        }
        &self.state
    }

    fn apply(&mut self, result: LoadResult) {
        self.state = match result {
            LoadResult::Complete(dataset) => LoadState::Ready(dataset),
            LoadResult::Error(message) => {
                warn!("dataset load failed: {message}");
                LoadState::Failed(message)
            }
        };
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// The failure message, if the load failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.state {
            LoadState::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }

    /// Time series records, empty until the store is ready.
    pub fn time_series(&self) -> &[TimeSeriesRecord] {
        self.dataset().map(Dataset::time_series).unwrap_or(&[])
    }

    /// Last-year records, empty until the store is ready.
    pub fn last_year(&self) -> &[LastYearRecord] {
        self.dataset().map(Dataset::last_year).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn series_fixture() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"Country name,year,Life Ladder\n\
              Finland,2005,\"7,2\"\n\
              Finland,2006,7.3\n\
              Denmark,2005,7.5\n",
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    fn report_fixture() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"Country name,Ladder score,upperwhisker,lowerwhisker\n\
              Finland,7.741,7.815,7.667\n\
              Denmark,\"7,583\",7.665,7.500\n",
        )
        .unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn store_reaches_ready_and_exposes_both_tables() {
        let series = series_fixture();
        let report = report_fixture();

        let mut store = DatasetStore::new();
        assert!(store.time_series().is_empty());
        assert!(store.last_year().is_empty());

        store.begin_load(
            series.path().to_str().unwrap(),
            report.path().to_str().unwrap(),
        );
        assert!(store.is_loading());

        assert!(matches!(store.wait_until_done(), LoadState::Ready(_)));
        assert_eq!(store.time_series().len(), 3);
        assert_eq!(store.last_year().len(), 2);
        assert_eq!(store.time_series()[0].life_ladder, Some(7.2));
        assert_eq!(store.last_year()[1].ladder_score, Some(7.583));
    }

    #[test]
    fn missing_table_fails_the_whole_load() {
        let report = report_fixture();

        let mut store = DatasetStore::new();
        store.begin_load("/no/such/series.csv", report.path().to_str().unwrap());

        assert!(matches!(store.wait_until_done(), LoadState::Failed(_)));
        assert!(store.error().is_some());
        assert!(store.time_series().is_empty());
    }

    #[test]
    fn second_begin_load_is_ignored() {
        let series = series_fixture();
        let report = report_fixture();

        let mut store = DatasetStore::new();
        store.begin_load(
            series.path().to_str().unwrap(),
            report.path().to_str().unwrap(),
        );
        store.wait_until_done();

        store.begin_load("/no/such/series.csv", "/no/such/report.csv");
        assert!(matches!(store.state(), LoadState::Ready(_)));
    }

    #[test]
    fn poll_is_non_blocking_while_loading() {
        let series = series_fixture();
        let report = report_fixture();

        let mut store = DatasetStore::new();
        store.begin_load(
            series.path().to_str().unwrap(),
            report.path().to_str().unwrap(),
        );

        // Either still loading or already settled, but never blocked.
        match store.poll() {
            LoadState::Loading | LoadState::Ready(_) => {}
            other => panic!("unexpected state: {other:?}"),
        }
        store.wait_until_done();
        assert!(store.dataset().is_some());
    }
}
