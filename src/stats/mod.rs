//! Stats module - pure aggregation, rollup, and scaling over the dataset

pub mod aggregate;
mod rollup;
mod scale;

pub use aggregate::{
    countries, mean, percent_difference, percent_difference_profile, regional_mean,
    top_n_by_year, yearly_mean_trend, years,
};
pub use rollup::{continent_rollup, hierarchical_rollup, latest_year, RollupNode};
pub use scale::{radial_scale, report_scales, RadialScale};
