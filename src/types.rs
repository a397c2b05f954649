//! Core data types for countryvis-rs
//!
//! This module contains the fundamental data structures used throughout
//! the application for representing dataset rows, the live selection and
//! the derived per-query aggregates.
//!
//! # Main Types
//!
//! - [`Record`] - One observation: a country in a given year
//! - [`Selection`] - The three live user-controlled parameters
//! - [`AggregateRow`] - Per-(country, region) summary over a year range
//! - [`Highlight`] - The selected country's aggregate coordinates

use serde::{Deserialize, Serialize};

/// One row of the dataset: a single per-country-year observation.
///
/// Field names map to the CSV header of the source table, which uses
/// spaced column names ("GDP per Capita").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Country name
    #[serde(rename = "Country")]
    pub country: String,

    /// World region the country belongs to
    #[serde(rename = "Region")]
    pub region: String,

    /// Observation year
    #[serde(rename = "Year")]
    pub year: i32,

    /// Population for that year
    #[serde(rename = "Population")]
    pub population: f64,

    /// GDP per capita in USD
    #[serde(rename = "GDP per Capita")]
    pub gdp_per_capita: f64,

    /// CO2 emissions
    #[serde(rename = "CO2")]
    pub co2: f64,
}

impl Record {
    /// Create a record with all fields set (used by tests and builders)
    pub fn new(
        country: impl Into<String>,
        region: impl Into<String>,
        year: i32,
        population: f64,
        gdp_per_capita: f64,
        co2: f64,
    ) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
            year,
            population,
            gdp_per_capita,
            co2,
        }
    }
}

/// The three live user-controlled parameters.
///
/// Owned by the control surface and read by the query engine on every
/// change. `year_start <= year_end` is expected but not enforced; a
/// reversed range simply yields empty results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected country, one of the dataset's distinct country values
    pub country: String,
    /// Inclusive lower year bound
    pub year_start: i32,
    /// Inclusive upper year bound
    pub year_end: i32,
}

impl Selection {
    pub fn new(country: impl Into<String>, year_start: i32, year_end: i32) -> Self {
        Self {
            country: country.into(),
            year_start,
            year_end,
        }
    }

    /// Check whether a year falls inside the selected range
    pub fn contains_year(&self, year: i32) -> bool {
        year >= self.year_start && year <= self.year_end
    }
}

/// Per-(country, region) summary over the selected year range.
///
/// Recomputed on every query; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub country: String,
    pub region: String,
    /// Maximum population across the group's rows
    pub population_max: f64,
    /// Sum of GDP per capita across the group's rows
    pub gdp_per_capita_total: f64,
    /// Sum of CO2 emissions across the group's rows
    pub co2_total: f64,
}

/// Aggregate coordinates of the currently selected country, used to draw
/// the guide lines on the summary chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub population_max: f64,
    pub gdp_per_capita_total: f64,
}
