//! Hierarchical Rollup Module
//! Two-level continent/country trees for the treemap view.

use crate::data::{CountryRecord, SeriesMetric, TimeSeriesRecord};
use crate::geo::Continent;
use crate::stats::aggregate::mean;
use serde::Serialize;

/// One node of the rollup tree: the root, a group, or a leaf record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollupNode {
    pub name: String,
    pub value: Option<f64>,
    pub children: Vec<RollupNode>,
}

impl RollupNode {
    fn leaf(name: &str, value: Option<f64>) -> Self {
        RollupNode {
            name: name.to_string(),
            value,
            children: Vec::new(),
        }
    }
}

/// Group records into named buckets and build a two-level tree.
///
/// Each bucket's value is the mean of its members' present values (`None`
/// when no member has one); buckets without any member records are
/// dropped. The root's value is the mean of the bucket values, so it is a
/// bucket-level average, not a population-weighted average over leaves.
pub fn hierarchical_rollup<T, F>(
    records: &[T],
    root_name: &str,
    groups: &[(&str, &[&str])],
    metric: F,
) -> RollupNode
where
    T: CountryRecord,
    F: Fn(&T) -> Option<f64>,
{
    let children: Vec<RollupNode> = groups
        .iter()
        .filter_map(|(group_name, members)| {
            let leaves: Vec<RollupNode> = records
                .iter()
                .filter(|r| members.contains(&r.country_name()))
                .map(|r| RollupNode::leaf(r.country_name(), metric(r)))
                .collect();
            if leaves.is_empty() {
                return None;
            }

            let value = mean(leaves.iter().filter_map(|leaf| leaf.value));
            Some(RollupNode {
                name: group_name.to_string(),
                value,
                children: leaves,
            })
        })
        .collect();

    let value = mean(children.iter().filter_map(|child| child.value));
    RollupNode {
        name: root_name.to_string(),
        value,
        children,
    }
}

/// Most recent reporting year in the series, `None` when empty.
pub fn latest_year(series: &[TimeSeriesRecord]) -> Option<i32> {
    series.iter().map(|r| r.year).max()
}

/// The dashboard's continent/country treemap: latest-year records rolled
/// up into the six world regions.
pub fn continent_rollup(series: &[TimeSeriesRecord], metric: SeriesMetric) -> RollupNode {
    let groups: Vec<(&str, &[&str])> = Continent::ALL
        .iter()
        .map(|c| (c.name(), c.members()))
        .collect();

    let latest: Vec<TimeSeriesRecord> = match latest_year(series) {
        Some(year) => series.iter().filter(|r| r.year == year).cloned().collect(),
        None => Vec::new(),
    };

    hierarchical_rollup(&latest, "World", &groups, |r| metric.value(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(country: &str, year: i32, ladder: Option<f64>) -> TimeSeriesRecord {
        TimeSeriesRecord {
            country: country.to_string(),
            year,
            life_ladder: ladder,
            ..Default::default()
        }
    }

    const GROUPS: &[(&str, &[&str])] = &[
        ("North", &["A", "B"]),
        ("South", &["C", "D"]),
        ("Empty", &["E"]),
    ];

    #[test]
    fn symmetric_fixture_means() {
        let records = vec![
            rec("A", 2024, Some(4.0)),
            rec("B", 2024, Some(6.0)),
            rec("C", 2024, Some(1.0)),
            rec("D", 2024, Some(9.0)),
        ];

        let root = hierarchical_rollup(&records, "World", GROUPS, |r| r.life_ladder);
        assert_eq!(root.children.len(), 2, "empty bucket is dropped");
        assert_eq!(root.children[0].value, Some(5.0));
        assert_eq!(root.children[1].value, Some(5.0));
        assert_eq!(root.value, Some(5.0));
        assert_eq!(root.children[0].children.len(), 2);
    }

    #[test]
    fn asymmetric_fixture_diverges_from_flat_mean() {
        // Two buckets of unequal size: [4, 6] and [9].
        let groups: &[(&str, &[&str])] = &[("North", &["A", "B"]), ("South", &["C"])];
        let records = vec![
            rec("A", 2024, Some(4.0)),
            rec("B", 2024, Some(6.0)),
            rec("C", 2024, Some(9.0)),
        ];

        let root = hierarchical_rollup(&records, "World", groups, |r| r.life_ladder);
        // Bucket means 5 and 9, root (5 + 9) / 2 = 7.
        assert_eq!(root.value, Some(7.0));
        // The flat leaf mean would be (4 + 6 + 9) / 3 ≈ 6.33.
        let flat = (4.0 + 6.0 + 9.0) / 3.0;
        assert!((root.value.unwrap() - flat).abs() > 0.5);
    }

    #[test]
    fn bucket_of_only_missing_values_has_no_value() {
        let records = vec![
            rec("A", 2024, None),
            rec("B", 2024, None),
            rec("C", 2024, Some(9.0)),
        ];

        let root = hierarchical_rollup(&records, "World", GROUPS, |r| r.life_ladder);
        assert_eq!(root.children[0].value, None);
        assert_eq!(root.children[0].children.len(), 2);
        // Root averages only the buckets that produced a value.
        assert_eq!(root.value, Some(9.0));
    }

    #[test]
    fn empty_input_yields_a_bare_root() {
        let root = hierarchical_rollup::<TimeSeriesRecord, _>(&[], "World", GROUPS, |r| {
            r.life_ladder
        });
        assert_eq!(root.value, None);
        assert!(root.children.is_empty());
    }

    #[test]
    fn continent_rollup_uses_only_the_latest_year() {
        let series = vec![
            rec("Finland", 2023, Some(1.0)),
            rec("Finland", 2024, Some(7.0)),
            rec("Australia", 2024, Some(7.0)),
        ];

        let root = continent_rollup(&series, SeriesMetric::LifeLadder);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].name, "Europe");
        assert_eq!(root.children[0].value, Some(7.0));
        assert_eq!(root.children[1].name, "Oceania");
        assert_eq!(root.value, Some(7.0));
    }

    #[test]
    fn latest_year_of_empty_series_is_none() {
        assert_eq!(latest_year(&[]), None);
    }
}
