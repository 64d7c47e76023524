//! Typed Records Module
//! Strongly-typed rows for the two happiness tables, plus closed metric selectors.

use serde::Serialize;

/// Column names shared by both tables.
pub const COL_COUNTRY: &str = "Country name";

/// Column names of the per-year time series table.
pub const COL_YEAR: &str = "year";
pub const COL_LIFE_LADDER: &str = "Life Ladder";
pub const COL_LOG_GDP: &str = "Log GDP per capita";
pub const COL_SOCIAL_SUPPORT: &str = "Social support";
pub const COL_LIFE_EXPECTANCY: &str = "Healthy life expectancy at birth";
pub const COL_FREEDOM: &str = "Freedom to make life choices";
pub const COL_GENEROSITY: &str = "Generosity";
pub const COL_CORRUPTION: &str = "Perceptions of corruption";
pub const COL_POSITIVE_AFFECT: &str = "Positive affect";
pub const COL_NEGATIVE_AFFECT: &str = "Negative affect";

/// Column names of the latest-report table.
pub const COL_LADDER_SCORE: &str = "Ladder score";
pub const COL_UPPER_WHISKER: &str = "upperwhisker";
pub const COL_LOWER_WHISKER: &str = "lowerwhisker";
pub const COL_EXPL_LOG_GDP: &str = "Explained by: Log GDP per capita";
pub const COL_EXPL_SOCIAL_SUPPORT: &str = "Explained by: Social support";
pub const COL_EXPL_LIFE_EXPECTANCY: &str = "Explained by: Healthy life expectancy";
pub const COL_EXPL_FREEDOM: &str = "Explained by: Freedom to make life choices";
pub const COL_EXPL_GENEROSITY: &str = "Explained by: Generosity";
pub const COL_EXPL_CORRUPTION: &str = "Explained by: Perceptions of corruption";
pub const COL_DYSTOPIA_RESIDUAL: &str = "Dystopia + residual";

/// One row per (country, year). `None` marks a value missing from the
/// source table; it is never collapsed to `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSeriesRecord {
    pub country: String,
    pub year: i32,
    pub life_ladder: Option<f64>,
    pub log_gdp_per_capita: Option<f64>,
    pub social_support: Option<f64>,
    pub healthy_life_expectancy: Option<f64>,
    pub freedom: Option<f64>,
    pub generosity: Option<f64>,
    pub corruption_perception: Option<f64>,
    pub positive_affect: Option<f64>,
    pub negative_affect: Option<f64>,
}

/// One row per country for the most recent reporting year.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LastYearRecord {
    pub country: String,
    pub ladder_score: Option<f64>,
    pub upper_whisker: Option<f64>,
    pub lower_whisker: Option<f64>,
    pub explained_log_gdp: Option<f64>,
    pub explained_social_support: Option<f64>,
    pub explained_life_expectancy: Option<f64>,
    pub explained_freedom: Option<f64>,
    pub explained_generosity: Option<f64>,
    pub explained_corruption: Option<f64>,
    pub dystopia_residual: Option<f64>,
}

impl LastYearRecord {
    /// Sum of the six explained-by components, `None` if any is missing.
    pub fn explained_sum(&self) -> Option<f64> {
        Some(
            self.explained_log_gdp?
                + self.explained_social_support?
                + self.explained_life_expectancy?
                + self.explained_freedom?
                + self.explained_generosity?
                + self.explained_corruption?,
        )
    }

    /// Ladder score minus (explained sum + dystopia residual).
    ///
    /// The report's methodology makes this approximately zero; it is a
    /// diagnostic cross-check, not an enforced constraint.
    pub fn score_breakdown_gap(&self) -> Option<f64> {
        Some(self.ladder_score? - (self.explained_sum()? + self.dystopia_residual?))
    }
}

/// Records that carry a country name, so scope filters and rollups can be
/// generic over either table.
pub trait CountryRecord {
    fn country_name(&self) -> &str;
}

impl CountryRecord for TimeSeriesRecord {
    fn country_name(&self) -> &str {
        &self.country
    }
}

impl CountryRecord for LastYearRecord {
    fn country_name(&self) -> &str {
        &self.country
    }
}

/// Numeric indicator of the time series table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesMetric {
    LifeLadder,
    LogGdpPerCapita,
    SocialSupport,
    HealthyLifeExpectancy,
    Freedom,
    Generosity,
    CorruptionPerception,
    PositiveAffect,
    NegativeAffect,
}

impl SeriesMetric {
    pub const ALL: [SeriesMetric; 9] = [
        SeriesMetric::LifeLadder,
        SeriesMetric::LogGdpPerCapita,
        SeriesMetric::SocialSupport,
        SeriesMetric::HealthyLifeExpectancy,
        SeriesMetric::Freedom,
        SeriesMetric::Generosity,
        SeriesMetric::CorruptionPerception,
        SeriesMetric::PositiveAffect,
        SeriesMetric::NegativeAffect,
    ];

    /// Source column name of this metric.
    pub fn column_name(&self) -> &'static str {
        match self {
            SeriesMetric::LifeLadder => COL_LIFE_LADDER,
            SeriesMetric::LogGdpPerCapita => COL_LOG_GDP,
            SeriesMetric::SocialSupport => COL_SOCIAL_SUPPORT,
            SeriesMetric::HealthyLifeExpectancy => COL_LIFE_EXPECTANCY,
            SeriesMetric::Freedom => COL_FREEDOM,
            SeriesMetric::Generosity => COL_GENEROSITY,
            SeriesMetric::CorruptionPerception => COL_CORRUPTION,
            SeriesMetric::PositiveAffect => COL_POSITIVE_AFFECT,
            SeriesMetric::NegativeAffect => COL_NEGATIVE_AFFECT,
        }
    }

    /// Read this metric from a record.
    pub fn value(&self, record: &TimeSeriesRecord) -> Option<f64> {
        match self {
            SeriesMetric::LifeLadder => record.life_ladder,
            SeriesMetric::LogGdpPerCapita => record.log_gdp_per_capita,
            SeriesMetric::SocialSupport => record.social_support,
            SeriesMetric::HealthyLifeExpectancy => record.healthy_life_expectancy,
            SeriesMetric::Freedom => record.freedom,
            SeriesMetric::Generosity => record.generosity,
            SeriesMetric::CorruptionPerception => record.corruption_perception,
            SeriesMetric::PositiveAffect => record.positive_affect,
            SeriesMetric::NegativeAffect => record.negative_affect,
        }
    }
}

/// Numeric metric of the latest-report table: the ladder score itself plus
/// the six explained-by components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportMetric {
    LadderScore,
    LogGdpPerCapita,
    SocialSupport,
    HealthyLifeExpectancy,
    Freedom,
    Generosity,
    CorruptionPerception,
}

impl ReportMetric {
    pub const ALL: [ReportMetric; 7] = [
        ReportMetric::LadderScore,
        ReportMetric::LogGdpPerCapita,
        ReportMetric::SocialSupport,
        ReportMetric::HealthyLifeExpectancy,
        ReportMetric::Freedom,
        ReportMetric::Generosity,
        ReportMetric::CorruptionPerception,
    ];

    /// The six explained-by components, without the ladder score.
    pub const FACTORS: [ReportMetric; 6] = [
        ReportMetric::LogGdpPerCapita,
        ReportMetric::SocialSupport,
        ReportMetric::HealthyLifeExpectancy,
        ReportMetric::Freedom,
        ReportMetric::Generosity,
        ReportMetric::CorruptionPerception,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            ReportMetric::LadderScore => COL_LADDER_SCORE,
            ReportMetric::LogGdpPerCapita => COL_EXPL_LOG_GDP,
            ReportMetric::SocialSupport => COL_EXPL_SOCIAL_SUPPORT,
            ReportMetric::HealthyLifeExpectancy => COL_EXPL_LIFE_EXPECTANCY,
            ReportMetric::Freedom => COL_EXPL_FREEDOM,
            ReportMetric::Generosity => COL_EXPL_GENEROSITY,
            ReportMetric::CorruptionPerception => COL_EXPL_CORRUPTION,
        }
    }

    pub fn value(&self, record: &LastYearRecord) -> Option<f64> {
        match self {
            ReportMetric::LadderScore => record.ladder_score,
            ReportMetric::LogGdpPerCapita => record.explained_log_gdp,
            ReportMetric::SocialSupport => record.explained_social_support,
            ReportMetric::HealthyLifeExpectancy => record.explained_life_expectancy,
            ReportMetric::Freedom => record.explained_freedom,
            ReportMetric::Generosity => record.explained_generosity,
            ReportMetric::CorruptionPerception => record.explained_corruption,
        }
    }
}
