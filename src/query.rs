//! Query engine
//!
//! Pure functions that turn (dataset, selection) into the data the four
//! charts consume: the selected country's time series over the year
//! range, the per-(country, region) aggregates over the same range, and
//! the selected country's highlight coordinates.
//!
//! [`compute_view`] has no side effects and no cached state; every
//! selection change recomputes the whole view from scratch.

use crate::dataset::Dataset;
use crate::types::{AggregateRow, Highlight, Record, Selection};
use std::collections::BTreeMap;

/// Everything one interaction cycle derives from the dataset.
///
/// Lives only between a selection change and the chart rebuild that
/// consumes it; the previous view is discarded wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewData {
    /// Rows of the selected country within the year range, ascending by year
    pub series_rows: Vec<Record>,
    /// One summary row per (country, region) present in the year range
    pub aggregate_rows: Vec<AggregateRow>,
    /// The selected country's aggregate coordinates, absent when the
    /// country has no rows in the range
    pub highlight: Option<Highlight>,
}

/// Compute the full view for one selection.
///
/// `series_rows` keeps the dataset's ascending year order (the dataset is
/// pre-sorted, so filtering preserves it). Aggregates are grouped in a
/// `BTreeMap` keyed by (country, region), which makes the output order
/// deterministic across calls. A reversed year range matches no rows and
/// yields empty outputs rather than an error.
pub fn compute_view(dataset: &Dataset, selection: &Selection) -> ViewData {
    let mut series_rows = Vec::new();
    let mut groups: BTreeMap<(String, String), AggregateRow> = BTreeMap::new();

    for record in dataset.rows() {
        if !selection.contains_year(record.year) {
            continue;
        }

        if record.country == selection.country {
            series_rows.push(record.clone());
        }

        let key = (record.country.clone(), record.region.clone());
        groups
            .entry(key)
            .and_modify(|agg| {
                agg.population_max = agg.population_max.max(record.population);
                agg.gdp_per_capita_total += record.gdp_per_capita;
                agg.co2_total += record.co2;
            })
            .or_insert_with(|| AggregateRow {
                country: record.country.clone(),
                region: record.region.clone(),
                population_max: record.population,
                gdp_per_capita_total: record.gdp_per_capita,
                co2_total: record.co2,
            });
    }

    let aggregate_rows: Vec<AggregateRow> = groups.into_values().collect();

    let highlight = aggregate_rows
        .iter()
        .find(|agg| agg.country == selection.country)
        .map(|agg| Highlight {
            population_max: agg.population_max,
            gdp_per_capita_total: agg.gdp_per_capita_total,
        });

    ViewData {
        series_rows,
        aggregate_rows,
        highlight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;

    fn example_dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::new("A", "R1", 2000, 100.0, 10.0, 5.0),
            Record::new("A", "R1", 2001, 120.0, 12.0, 6.0),
            Record::new("B", "R2", 2000, 50.0, 20.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_example_scenario() {
        let dataset = example_dataset();
        let selection = Selection::new("A", 2000, 2001);
        let view = compute_view(&dataset, &selection);

        assert_eq!(view.series_rows.len(), 2);
        assert_eq!(view.series_rows[0].year, 2000);
        assert_eq!(view.series_rows[1].year, 2001);
        assert!(view.series_rows.iter().all(|r| r.country == "A"));

        assert_eq!(view.aggregate_rows.len(), 2);
        let a = &view.aggregate_rows[0];
        assert_eq!(a.country, "A");
        assert_eq!(a.region, "R1");
        assert_eq!(a.population_max, 120.0);
        assert_eq!(a.gdp_per_capita_total, 22.0);
        assert_eq!(a.co2_total, 11.0);
        let b = &view.aggregate_rows[1];
        assert_eq!(b.country, "B");
        assert_eq!(b.population_max, 50.0);
        assert_eq!(b.gdp_per_capita_total, 20.0);
        assert_eq!(b.co2_total, 2.0);

        let highlight = view.highlight.unwrap();
        assert_eq!(highlight.population_max, 120.0);
        assert_eq!(highlight.gdp_per_capita_total, 22.0);
    }

    #[test]
    fn test_empty_range_scenario() {
        let dataset = example_dataset();
        let selection = Selection::new("A", 2050, 2060);
        let view = compute_view(&dataset, &selection);

        assert!(view.series_rows.is_empty());
        assert!(view.aggregate_rows.is_empty());
        assert!(view.highlight.is_none());
    }

    #[test]
    fn test_reversed_range_is_empty_not_error() {
        let dataset = example_dataset();
        let selection = Selection::new("A", 2001, 2000);
        let view = compute_view(&dataset, &selection);

        assert!(view.series_rows.is_empty());
        assert!(view.aggregate_rows.is_empty());
        assert!(view.highlight.is_none());
    }

    #[test]
    fn test_highlight_absent_when_country_outside_range() {
        let dataset = Dataset::from_records(vec![
            Record::new("A", "R1", 1990, 100.0, 10.0, 5.0),
            Record::new("B", "R2", 2000, 50.0, 20.0, 2.0),
        ])
        .unwrap();

        // "A" only has data in 1990, the range covers 2000 only.
        let selection = Selection::new("A", 2000, 2000);
        let view = compute_view(&dataset, &selection);

        assert!(view.series_rows.is_empty());
        assert_eq!(view.aggregate_rows.len(), 1);
        assert_eq!(view.aggregate_rows[0].country, "B");
        assert!(view.highlight.is_none());
    }

    #[test]
    fn test_partial_range_filters_both_outputs() {
        let dataset = example_dataset();
        let selection = Selection::new("A", 2001, 2001);
        let view = compute_view(&dataset, &selection);

        assert_eq!(view.series_rows.len(), 1);
        assert_eq!(view.series_rows[0].year, 2001);

        // Only "A" has a 2001 row, so "B" drops out of the aggregates too.
        assert_eq!(view.aggregate_rows.len(), 1);
        assert_eq!(view.aggregate_rows[0].population_max, 120.0);
        assert_eq!(view.aggregate_rows[0].gdp_per_capita_total, 12.0);
    }

    #[test]
    fn test_determinism_across_calls() {
        let dataset = example_dataset();
        let selection = Selection::new("A", 2000, 2001);

        let first = compute_view(&dataset, &selection);
        let second = compute_view(&dataset, &selection);
        assert_eq!(first, second);
    }

    #[test]
    fn test_series_rows_non_decreasing_in_year() {
        let dataset = Dataset::from_records(vec![
            Record::new("A", "R1", 2003, 130.0, 13.0, 7.0),
            Record::new("A", "R1", 2000, 100.0, 10.0, 5.0),
            Record::new("A", "R1", 2001, 120.0, 12.0, 6.0),
            Record::new("A", "R1", 2002, 110.0, 11.0, 5.5),
        ])
        .unwrap();

        let view = compute_view(&dataset, &Selection::new("A", 2000, 2003));
        assert!(view
            .series_rows
            .windows(2)
            .all(|pair| pair[0].year <= pair[1].year));
    }

    #[test]
    fn test_same_country_two_regions_groups_separately() {
        // (Country, Year) uniqueness is a practical convention, not a
        // structural one; grouping is by the (country, region) pair.
        let dataset = Dataset::from_records(vec![
            Record::new("A", "R1", 2000, 100.0, 10.0, 5.0),
            Record::new("A", "R2", 2000, 90.0, 9.0, 4.0),
        ])
        .unwrap();

        let view = compute_view(&dataset, &Selection::new("A", 2000, 2000));
        assert_eq!(view.aggregate_rows.len(), 2);

        // The highlight takes the first matching aggregate row.
        let highlight = view.highlight.unwrap();
        assert_eq!(highlight.population_max, 100.0);
    }
}
