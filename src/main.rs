//! Country Analytics Dashboard - Main Entry Point
//!
//! Loads the dataset once at startup (fatal on failure), restores the
//! persisted application state, then runs the eframe application.

use anyhow::Context;
use countryvis_rs::{config::AppState, dataset::Dataset, frontend::DashboardApp};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Dataset used when neither a CLI argument nor a remembered path exists
const DEFAULT_DATASET_PATH: &str = "data/countries.csv";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,countryvis_rs=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Country Analytics Dashboard");

    // Load application state (last dataset, preferences)
    let mut app_state = AppState::load_or_default();

    // Dataset path: CLI argument, then remembered path, then the default
    let dataset_path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| app_state.get_dataset_path().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));

    // A dashboard without data cannot serve anything; fail before opening
    // a window.
    let dataset = Dataset::load(&dataset_path)
        .with_context(|| format!("Cannot start without dataset {}", dataset_path.display()))?;
    app_state.set_dataset_path(&dataset_path);

    // Configure eframe options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Country Analytics"),
        ..Default::default()
    };

    // Run the eframe application
    let dark_mode = app_state.ui_preferences.dark_mode;
    let result = eframe::run_native(
        "Country Analytics",
        native_options,
        Box::new(move |cc| {
            if dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            Ok(Box::new(DashboardApp::new(cc, dataset, app_state)))
        }),
    );

    tracing::info!("Shutting down...");
    result.map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
