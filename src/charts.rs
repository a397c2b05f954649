//! Chart builders
//!
//! Four pure mapping functions, each turning query-engine output into a
//! declarative chart specification: the three time-series line charts
//! (population, GDP per capita, CO2) and the cross-country scatter
//! summary. The specs describe the data, colors and value formatting a
//! chart needs; rendering them is the frontend's job.
//!
//! All builders are pure: the same input produces an equal spec, and no
//! builder touches the dataset or the selection.

use crate::dataset::Dataset;
use crate::query::{compute_view, ViewData};
use crate::types::{AggregateRow, Highlight, Record, Selection};
use serde::{Deserialize, Serialize};

/// Line color of the population chart
pub const POPULATION_COLOR: [u8; 3] = [0x17, 0xB8, 0x97];

/// Line color of the GDP per capita chart
pub const GDP_COLOR: [u8; 3] = [0x00, 0x00, 0xFF];

/// Line color of the CO2 emissions chart
pub const CO2_COLOR: [u8; 3] = [0xE1, 0x2D, 0x39];

/// Color of the summary chart guide lines
pub const GUIDE_COLOR: [u8; 3] = [0x00, 0x80, 0x00];

/// Largest bubble radius on the summary chart, in plot pixels
pub const MAX_BUBBLE_RADIUS: f32 = 30.0;

/// Categorical palette for region colors, assigned over sorted region
/// names so the mapping is stable across recomputations
pub const REGION_PALETTE: &[[u8; 3]] = &[
    [0x63, 0x6E, 0xFA],
    [0xEF, 0x55, 0x3B],
    [0x00, 0xCC, 0x96],
    [0xAB, 0x63, 0xFA],
    [0xFF, 0xA1, 0x5A],
    [0x19, 0xD3, 0xF3],
    [0xFF, 0x66, 0x92],
    [0xB6, 0xE8, 0x80],
];

/// How a chart's hover value is rendered as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Thousands-separated integer ("1,234,567")
    Thousands,
    /// USD currency with two decimals ("USD 1,234.56")
    Currency,
    /// Two decimals with thousands separators ("1,234.56")
    Decimal2,
}

impl ValueFormat {
    /// Format a value for hover display
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Thousands => format_grouped(value, 0),
            ValueFormat::Currency => format!("USD {}", format_grouped(value, 2)),
            ValueFormat::Decimal2 => format_grouped(value, 2),
        }
    }
}

/// Format a value with thousands separators and a fixed decimal count
fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, digit) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match fraction_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Declarative description of a connected-line time-series chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartSpec {
    /// Chart title
    pub title: String,
    /// X-axis label
    pub x_axis_label: String,
    /// (year, value) pairs in ascending year order
    pub points: Vec<[f64; 2]>,
    /// Line color
    pub color: [u8; 3],
    /// Hover value formatting
    pub value_format: ValueFormat,
    /// Prefix shown on Y-axis ticks (e.g. "USD ")
    pub y_tick_prefix: Option<String>,
}

/// One bubble of the summary chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleSpec {
    /// Hover label
    pub country: String,
    /// Region the bubble is colored by
    pub region: String,
    /// Maximum population over the year range (X coordinate, log scale)
    pub population_max: f64,
    /// Accumulated GDP per capita (Y coordinate)
    pub gdp_per_capita_total: f64,
    /// Accumulated CO2 emissions (drives the bubble size)
    pub co2_total: f64,
    /// Visual radius, scaled so the largest CO2 total gets
    /// [`MAX_BUBBLE_RADIUS`]
    pub radius: f32,
    /// Region category color
    pub color: [u8; 3],
}

/// Declarative description of the cross-country scatter summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartSpec {
    /// Chart title
    pub title: String,
    /// X-axis label
    pub x_axis_label: String,
    /// Y-axis label
    pub y_axis_label: String,
    /// Whether the X axis uses a log10 scale
    pub log_x: bool,
    /// One bubble per aggregate row
    pub bubbles: Vec<BubbleSpec>,
    /// Guide line coordinates for the selected country, absent when the
    /// country has no rows in the year range
    pub guide: Option<Highlight>,
}

/// A chart specification, one of the two shapes the dashboard displays.
///
/// Produced fresh on every selection change; the previous spec is
/// replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartSpec {
    Line(LineChartSpec),
    Scatter(ScatterChartSpec),
}

fn series_points(series_rows: &[Record], value: impl Fn(&Record) -> f64) -> Vec<[f64; 2]> {
    series_rows
        .iter()
        .map(|r| [r.year as f64, value(r)])
        .collect()
}

/// Build the population time-series chart
pub fn population_chart(series_rows: &[Record]) -> ChartSpec {
    ChartSpec::Line(LineChartSpec {
        title: "Population".to_string(),
        x_axis_label: "Year".to_string(),
        points: series_points(series_rows, |r| r.population),
        color: POPULATION_COLOR,
        value_format: ValueFormat::Thousands,
        y_tick_prefix: None,
    })
}

/// Build the GDP per capita time-series chart
pub fn gdp_chart(series_rows: &[Record]) -> ChartSpec {
    ChartSpec::Line(LineChartSpec {
        title: "GDP per Capita".to_string(),
        x_axis_label: "Year".to_string(),
        points: series_points(series_rows, |r| r.gdp_per_capita),
        color: GDP_COLOR,
        value_format: ValueFormat::Currency,
        y_tick_prefix: Some("USD ".to_string()),
    })
}

/// Build the CO2 emissions time-series chart
pub fn co2_chart(series_rows: &[Record]) -> ChartSpec {
    ChartSpec::Line(LineChartSpec {
        title: "CO2 Emissions".to_string(),
        x_axis_label: "Year".to_string(),
        points: series_points(series_rows, |r| r.co2),
        color: CO2_COLOR,
        value_format: ValueFormat::Decimal2,
        y_tick_prefix: None,
    })
}

/// Assign a palette color to each distinct region, in sorted region order
fn region_colors(aggregate_rows: &[AggregateRow]) -> Vec<(String, [u8; 3])> {
    let mut regions: Vec<String> = aggregate_rows.iter().map(|a| a.region.clone()).collect();
    regions.sort();
    regions.dedup();

    regions
        .into_iter()
        .enumerate()
        .map(|(i, region)| (region, REGION_PALETTE[i % REGION_PALETTE.len()]))
        .collect()
}

/// Build the cross-country scatter summary chart.
///
/// Bubble areas are proportional to the CO2 total, with the largest
/// bubble clamped to [`MAX_BUBBLE_RADIUS`]. The guide lines mark the
/// selected country's position and are omitted when `highlight` is
/// absent.
pub fn summary_chart(aggregate_rows: &[AggregateRow], highlight: Option<Highlight>) -> ChartSpec {
    let colors = region_colors(aggregate_rows);
    let color_for = |region: &str| -> [u8; 3] {
        colors
            .iter()
            .find(|(r, _)| r == region)
            .map(|(_, c)| *c)
            .unwrap_or([0x80, 0x80, 0x80])
    };

    let co2_max = aggregate_rows
        .iter()
        .map(|a| a.co2_total)
        .fold(0.0_f64, f64::max);

    let bubbles = aggregate_rows
        .iter()
        .map(|agg| {
            // Area-proportional sizing, as a bubble chart reads sizes by area.
            let radius = if co2_max > 0.0 && agg.co2_total > 0.0 {
                MAX_BUBBLE_RADIUS * ((agg.co2_total / co2_max).sqrt() as f32)
            } else {
                0.0
            };
            BubbleSpec {
                country: agg.country.clone(),
                region: agg.region.clone(),
                population_max: agg.population_max,
                gdp_per_capita_total: agg.gdp_per_capita_total,
                co2_total: agg.co2_total,
                radius,
                color: color_for(&agg.region),
            }
        })
        .collect();

    ChartSpec::Scatter(ScatterChartSpec {
        title: "Accumulated CO2 emissions across time".to_string(),
        x_axis_label: "Population (max.)".to_string(),
        y_axis_label: "GDP per Capita (acum.)".to_string(),
        log_x: true,
        bubbles,
        guide: highlight,
    })
}

/// Build all four chart specs from one computed view
pub fn build_all(view: &ViewData) -> [ChartSpec; 4] {
    [
        population_chart(&view.series_rows),
        gdp_chart(&view.series_rows),
        co2_chart(&view.series_rows),
        summary_chart(&view.aggregate_rows, view.highlight),
    ]
}

/// The selection-change handler: one complete synchronous recomputation
/// producing all four chart specs, invoked for every change notification
/// regardless of which of the three inputs changed.
pub fn on_selection_change(dataset: &Dataset, selection: &Selection) -> [ChartSpec; 4] {
    build_all(&compute_view(dataset, selection))
}
