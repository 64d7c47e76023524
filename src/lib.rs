//! World Happiness Report data core: CSV parsing, the session dataset
//! store, and the pure aggregations behind the dashboard's charts.

pub mod data;
pub mod geo;
pub mod stats;
