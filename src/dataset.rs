//! Dataset loading and access
//!
//! The dataset is a semicolon-delimited table of per-country-year
//! observations, loaded once at startup and immutable thereafter. Rows
//! are sorted ascending by year at load time, so any filter over them
//! preserves time order without re-sorting.
//!
//! Besides the rows themselves, [`Dataset`] carries the two value
//! domains the control surface needs: the sorted distinct countries and
//! the sorted distinct years.

use crate::error::{CountryVisError, Result, ResultExt};
use crate::types::{Record, Selection};
use std::io::Read;
use std::path::Path;

/// Column headers the dataset file must provide
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Country",
    "Region",
    "Year",
    "Population",
    "GDP per Capita",
    "CO2",
];

/// Country preselected when present in the dataset
pub const DEFAULT_COUNTRY: &str = "United States";

/// The full immutable table of per-country-year observations.
///
/// Invariants held after construction:
/// - `rows` is non-empty and sorted ascending by year (stable, so rows
///   sharing a year keep their input order)
/// - `countries` and `years` are sorted and deduplicated
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<Record>,
    countries: Vec<String>,
    years: Vec<i32>,
}

impl Dataset {
    /// Build a dataset from already-parsed records.
    ///
    /// Fails on an empty record list: without rows there is no country or
    /// year domain to offer the control surface.
    pub fn from_records(mut rows: Vec<Record>) -> Result<Self> {
        if rows.is_empty() {
            return Err(CountryVisError::Dataset(
                "dataset contains no rows".to_string(),
            ));
        }

        rows.sort_by_key(|r| r.year);

        let mut countries: Vec<String> = rows.iter().map(|r| r.country.clone()).collect();
        countries.sort();
        countries.dedup();

        let mut years: Vec<i32> = rows.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();

        Ok(Self {
            rows,
            countries,
            years,
        })
    }

    /// Read a semicolon-delimited table from any reader.
    ///
    /// The header row is validated against [`REQUIRED_COLUMNS`] before any
    /// row is parsed, so a malformed file fails with the missing column
    /// named rather than a row-level parse error.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *column) {
                return Err(CountryVisError::Dataset(format!(
                    "missing column '{}' in dataset header",
                    column
                )));
            }
        }

        let mut rows = Vec::new();
        for result in csv_reader.deserialize() {
            let record: Record = result?;
            rows.push(record);
        }

        Self::from_records(rows)
    }

    /// Load the dataset from a file path. Fatal at startup on failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(CountryVisError::Io)?;
        let dataset = Self::from_reader(file)
            .with_context(|| format!("Failed to load dataset from {}", path.display()))?;

        tracing::info!(
            "Loaded dataset from {}: {} rows, {} countries, years {}-{}",
            path.display(),
            dataset.rows.len(),
            dataset.countries.len(),
            dataset.min_year(),
            dataset.max_year()
        );

        Ok(dataset)
    }

    /// All rows, sorted ascending by year
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Sorted distinct country names (the country dropdown domain)
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Sorted distinct years (the year dropdown domains)
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Earliest observed year
    pub fn min_year(&self) -> i32 {
        self.years[0]
    }

    /// Latest observed year
    pub fn max_year(&self) -> i32 {
        self.years[self.years.len() - 1]
    }

    /// Check whether a country exists in the dataset
    pub fn has_country(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    /// The selection shown before the user touches any control:
    /// "United States" when present (first country otherwise), spanning
    /// the full observed year range.
    pub fn default_selection(&self) -> Selection {
        let country = if self.has_country(DEFAULT_COUNTRY) {
            DEFAULT_COUNTRY.to_string()
        } else {
            self.countries[0].clone()
        };

        Selection {
            country,
            year_start: self.min_year(),
            year_end: self.max_year(),
        }
    }

    /// Validate a remembered selection against this dataset, falling back
    /// to the default when its country or years no longer exist.
    pub fn validate_selection(&self, selection: Selection) -> Selection {
        let valid = self.has_country(&selection.country)
            && self.years.contains(&selection.year_start)
            && self.years.contains(&selection.year_end);
        if valid {
            selection
        } else {
            tracing::warn!(
                "Remembered selection {:?} does not match the dataset, using defaults",
                selection
            );
            self.default_selection()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Country;Region;Year;Population;GDP per Capita;CO2
United States;North America;2001;285.0;37133.24;5600.0
Portugal;Europe;2000;10.2;11500.60;62.0
United States;North America;2000;282.2;36334.91;5700.0
Portugal;Europe;2001;10.3;11700.10;63.5
";

    #[test]
    fn test_rows_sorted_by_year() {
        let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        let years: Vec<i32> = dataset.rows().iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2000, 2000, 2001, 2001]);
    }

    #[test]
    fn test_sort_is_stable_within_year() {
        let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        // Input order within year 2000: Portugal first, then United States.
        let year_2000: Vec<&str> = dataset
            .rows()
            .iter()
            .filter(|r| r.year == 2000)
            .map(|r| r.country.as_str())
            .collect();
        assert_eq!(year_2000, vec!["Portugal", "United States"]);
    }

    #[test]
    fn test_distinct_domains() {
        let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(dataset.countries(), &["Portugal", "United States"]);
        assert_eq!(dataset.years(), &[2000, 2001]);
        assert_eq!(dataset.min_year(), 2000);
        assert_eq!(dataset.max_year(), 2001);
    }

    #[test]
    fn test_default_selection_prefers_united_states() {
        let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        let selection = dataset.default_selection();
        assert_eq!(selection.country, "United States");
        assert_eq!(selection.year_start, 2000);
        assert_eq!(selection.year_end, 2001);
    }

    #[test]
    fn test_default_selection_fallback_first_country() {
        let csv = "\
Country;Region;Year;Population;GDP per Capita;CO2
Portugal;Europe;2000;10.2;11500.60;62.0
Angola;Africa;2000;16.4;557.0;9.5
";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.default_selection().country, "Angola");
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "\
Country;Region;Year;Population;CO2
Portugal;Europe;2000;10.2;62.0
";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("GDP per Capita"));
    }

    #[test]
    fn test_empty_dataset_is_error() {
        let csv = "Country;Region;Year;Population;GDP per Capita;CO2\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("no rows"));
    }

    #[test]
    fn test_unparseable_row_is_error() {
        let csv = "\
Country;Region;Year;Population;GDP per Capita;CO2
Portugal;Europe;not-a-year;10.2;11500.60;62.0
";
        assert!(Dataset::from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_validate_selection_falls_back() {
        let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        let stale = Selection::new("Atlantis", 2000, 2001);
        let validated = dataset.validate_selection(stale);
        assert_eq!(validated, dataset.default_selection());

        let kept = Selection::new("Portugal", 2000, 2000);
        assert_eq!(dataset.validate_selection(kept.clone()), kept);
    }
}
