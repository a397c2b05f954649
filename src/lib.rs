//! # countryvis-rs: Country Analytics Dashboard
//!
//! An interactive dashboard for exploring per-country historical data.
//! The user picks a country and a year range; the dashboard shows three
//! time-series charts (population, GDP per capita, CO2 emissions) for
//! that country plus a cross-country scatter summary over the same
//! period, with the selected country highlighted by guide lines.
//!
//! ## Architecture
//!
//! - **Dataset**: an immutable in-memory table, loaded once from a
//!   semicolon-delimited CSV and sorted by year
//! - **Query engine**: pure functions deriving the selected country's
//!   series and the per-(country, region) aggregates from the selection
//! - **Chart builders**: four pure mappings from query output to
//!   declarative chart specs
//! - **Frontend**: eframe/egui with egui_plot rendering the specs and
//!   owning the three selection controls
//!
//! Every control change triggers one complete synchronous recomputation
//! of all four charts; there is no background work and no caching.
//!
//! ## Configuration
//!
//! Application state (last dataset, last selection, preferences) is
//! stored in the platform-appropriate data directory under
//! `dev.hxyulin.countryvis-rs`.
//!
//! ## Example
//!
//! ```
//! use countryvis_rs::charts::on_selection_change;
//! use countryvis_rs::dataset::Dataset;
//! use countryvis_rs::types::Record;
//!
//! let dataset = Dataset::from_records(vec![
//!     Record::new("Portugal", "Europe", 2000, 10.2, 11500.6, 62.0),
//!     Record::new("Portugal", "Europe", 2001, 10.3, 11700.1, 63.5),
//! ])
//! .unwrap();
//!
//! let selection = dataset.default_selection();
//! let charts = on_selection_change(&dataset, &selection);
//! assert_eq!(charts.len(), 4);
//! ```

pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod frontend;
pub mod query;
pub mod types;

// Re-export commonly used types
pub use charts::{ChartSpec, LineChartSpec, ScatterChartSpec};
pub use config::AppState;
pub use dataset::Dataset;
pub use error::{CountryVisError, Result};
pub use frontend::DashboardApp;
pub use query::{compute_view, ViewData};
pub use types::{AggregateRow, Highlight, Record, Selection};
