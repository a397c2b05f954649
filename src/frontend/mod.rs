//! Frontend module for countryvis-rs
//!
//! The frontend owns the loaded dataset, the live selection and the
//! current four chart specs. One control-surface change triggers one
//! complete synchronous recomputation through
//! [`charts::on_selection_change`]; there is no background work and no
//! partial update.

pub mod controls;
pub mod plot;

pub use controls::ControlDomains;

use crate::charts::{self, ChartSpec};
use crate::config::AppState;
use crate::dataset::Dataset;
use crate::types::Selection;
use egui::Color32;
use std::path::Path;

/// Main application state
pub struct DashboardApp {
    dataset: Dataset,
    domains: ControlDomains,
    selection: Selection,
    /// The four displayed chart specs: population, GDP, CO2, summary.
    /// Replaced wholesale on every selection change.
    charts: [ChartSpec; 4],
    app_state: AppState,
    /// Error from the last dataset reload attempt, shown as a banner
    last_error: Option<String>,
}

impl DashboardApp {
    /// Create the application from an already-loaded dataset.
    ///
    /// A remembered selection is validated against the dataset before
    /// use; everything else is derived from the dataset itself.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        dataset: Dataset,
        app_state: AppState,
    ) -> Self {
        let selection = match app_state.last_selection.clone() {
            Some(remembered) => dataset.validate_selection(remembered),
            None => dataset.default_selection(),
        };

        let charts = charts::on_selection_change(&dataset, &selection);
        let domains = ControlDomains::from_dataset(&dataset);

        Self {
            dataset,
            domains,
            selection,
            charts,
            app_state,
            last_error: None,
        }
    }

    /// Current selection (exposed for tests)
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    fn recompute(&mut self) {
        self.charts = charts::on_selection_change(&self.dataset, &self.selection);
    }

    /// Replace the dataset from a file, keeping the old one on failure
    fn load_dataset(&mut self, path: &Path) {
        match Dataset::load(path) {
            Ok(dataset) => {
                self.domains = ControlDomains::from_dataset(&dataset);
                self.selection = dataset.default_selection();
                self.dataset = dataset;
                self.recompute();
                self.app_state.set_dataset_path(path);
                self.last_error = None;
            }
            Err(e) => {
                tracing::error!("Failed to load dataset from {}: {}", path.display(), e);
                self.last_error = Some(format!("Failed to load {}: {}", path.display(), e));
            }
        }
    }

    fn open_dataset_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV dataset", &["csv"])
            .pick_file()
        {
            self.load_dataset(&path);
        }
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        if self.app_state.ui_preferences.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Dataset...").clicked() {
                        self.open_dataset_dialog();
                        ui.close();
                    }

                    ui.separator();

                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close();
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui
                        .checkbox(
                            &mut self.app_state.ui_preferences.dark_mode,
                            "Dark mode",
                        )
                        .changed()
                    {
                        self.apply_visuals(ui.ctx());
                    }
                });
            });
        });
    }

    fn render_header_and_controls(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header_and_controls").show(ctx, |ui| {
            ui.add_space(4.0);
            controls::render_header(ui);
            ui.add_space(8.0);

            let changed = controls::render_controls(&self.domains, &mut self.selection, ui);
            ui.add_space(4.0);

            if changed {
                self.recompute();
            }
        });
    }

    fn render_charts(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.last_error {
                ui.colored_label(Color32::from_rgb(255, 100, 100), error);
                ui.separator();
            }

            let available = ui.available_height();
            let summary_height = (available * 0.55 - 32.0).max(180.0);
            let line_height = (available * 0.45 - 48.0).max(140.0);

            let [population, gdp, co2, summary] = &self.charts;

            if let ChartSpec::Scatter(spec) = summary {
                plot::render_scatter_chart(spec, summary_height, ui);
            }

            ui.separator();

            ui.columns(3, |columns| {
                if let ChartSpec::Line(spec) = population {
                    plot::render_line_chart(spec, "population_chart", line_height, &mut columns[0]);
                }
                if let ChartSpec::Line(spec) = gdp {
                    plot::render_line_chart(spec, "gdp_chart", line_height, &mut columns[1]);
                }
                if let ChartSpec::Line(spec) = co2 {
                    plot::render_line_chart(spec, "co2_chart", line_height, &mut columns[2]);
                }
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_menu_bar(ctx);
        self.render_header_and_controls(ctx);
        self.render_charts(ctx);
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.app_state.last_selection = Some(self.selection.clone());
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}
