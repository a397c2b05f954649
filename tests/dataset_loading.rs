//! Integration tests for dataset file loading

mod common;

use common::small_world_csv;
use countryvis_rs::Dataset;
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(small_world_csv().as_bytes()).unwrap();

    let dataset = Dataset::load(file.path()).unwrap();
    assert_eq!(dataset.countries().len(), 3);
    assert_eq!(dataset.min_year(), 2000);
    assert_eq!(dataset.max_year(), 2002);
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    assert!(Dataset::load(&missing).is_err());
}

#[test]
fn test_load_wrong_delimiter_is_error() {
    // Comma-delimited input has a single unrecognized header column.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Country,Region,Year,Population,GDP per Capita,CO2\nA,R1,2000,1,2,3\n")
        .unwrap();

    let err = Dataset::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("missing column"));
}

#[test]
fn test_load_malformed_row_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut csv = small_world_csv();
    csv.push_str("Portugal;Europe;2003;ten;11850.7;64.1\n");
    file.write_all(csv.as_bytes()).unwrap();

    assert!(Dataset::load(file.path()).is_err());
}

#[test]
fn test_bundled_sample_dataset_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/countries.csv");
    let dataset = Dataset::load(path).unwrap();
    assert!(dataset.has_country("United States"));
    assert!(dataset.countries().len() >= 2);
}
