//! Shared test helpers and dataset builders

#![allow(dead_code)]

use countryvis_rs::{Dataset, Record};

/// Shorthand record constructor for test fixtures
pub fn record(
    country: &str,
    region: &str,
    year: i32,
    population: f64,
    gdp_per_capita: f64,
    co2: f64,
) -> Record {
    Record::new(country, region, year, population, gdp_per_capita, co2)
}

/// A small multi-country dataset covering 2000-2002
pub fn small_world_dataset() -> Dataset {
    Dataset::from_records(vec![
        record("Portugal", "Europe", 2000, 10.2, 11500.6, 62.0),
        record("Portugal", "Europe", 2001, 10.3, 11700.1, 63.5),
        record("Portugal", "Europe", 2002, 10.4, 11850.7, 64.1),
        record("United States", "North America", 2000, 282.2, 36334.91, 5700.0),
        record("United States", "North America", 2001, 285.0, 37133.24, 5600.0),
        record("United States", "North America", 2002, 287.6, 38023.16, 5650.0),
        record("Angola", "Africa", 2000, 16.4, 557.0, 9.5),
        record("Angola", "Africa", 2002, 17.5, 872.5, 10.2),
    ])
    .unwrap()
}

/// The same dataset as [`small_world_dataset`], as semicolon CSV text
pub fn small_world_csv() -> String {
    let mut csv = String::from("Country;Region;Year;Population;GDP per Capita;CO2\n");
    for row in small_world_dataset().rows() {
        csv.push_str(&format!(
            "{};{};{};{};{};{}\n",
            row.country, row.region, row.year, row.population, row.gdp_per_capita, row.co2
        ));
    }
    csv
}
