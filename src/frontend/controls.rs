//! Header and selection controls
//!
//! The control surface exposes three values: the country and the two
//! year bounds. Their value domains are derived from the dataset once
//! per load by [`ControlDomains::from_dataset`]; rendering reports back
//! whether any value changed so the app can recompute the charts.

use crate::dataset::Dataset;
use crate::types::Selection;
use egui::Ui;

/// Value domains of the three selection controls.
///
/// Built purely from the dataset passed in; nothing here is captured
/// from surrounding state.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlDomains {
    /// Sorted distinct country names
    pub countries: Vec<String>,
    /// Sorted distinct years, shared by both year dropdowns
    pub years: Vec<i32>,
}

impl ControlDomains {
    /// Derive the control domains from a loaded dataset
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            countries: dataset.countries().to_vec(),
            years: dataset.years().to_vec(),
        }
    }
}

/// Render the dashboard header
pub fn render_header(ui: &mut Ui) {
    ui.heading("Country analytics");
    ui.label("Analyze historical behavior of");
    ui.label("Population, GDP per Capita and CO2 emissions across time");
}

/// Render the three selection dropdowns.
///
/// Returns true when any of the three values changed this frame. The
/// year bounds are deliberately not cross-validated: a reversed range is
/// allowed and simply produces empty charts.
pub fn render_controls(domains: &ControlDomains, selection: &mut Selection, ui: &mut Ui) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Country");
        egui::ComboBox::from_id_salt("country_filter")
            .selected_text(selection.country.clone())
            .width(200.0)
            .show_ui(ui, |ui| {
                for country in &domains.countries {
                    if ui
                        .selectable_value(&mut selection.country, country.clone(), country)
                        .changed()
                    {
                        changed = true;
                    }
                }
            });

        ui.separator();

        ui.label("Year (start)");
        egui::ComboBox::from_id_salt("year_start")
            .selected_text(selection.year_start.to_string())
            .width(80.0)
            .show_ui(ui, |ui| {
                for &year in &domains.years {
                    if ui
                        .selectable_value(&mut selection.year_start, year, year.to_string())
                        .changed()
                    {
                        changed = true;
                    }
                }
            });

        ui.label("Year (end)");
        egui::ComboBox::from_id_salt("year_end")
            .selected_text(selection.year_end.to_string())
            .width(80.0)
            .show_ui(ui, |ui| {
                for &year in &domains.years {
                    if ui
                        .selectable_value(&mut selection.year_end, year, year.to_string())
                        .changed()
                    {
                        changed = true;
                    }
                }
            });
    });

    changed
}
