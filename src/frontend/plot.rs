//! Chart spec rendering using egui_plot
//!
//! Maps the declarative [`ChartSpec`](crate::charts::ChartSpec) shapes
//! onto egui_plot primitives: line specs become a single `Line`, the
//! scatter spec becomes one `Points` item per bubble plus the guide
//! lines. All axes are fixed (no zoom/pan), matching the dashboard's
//! static chart panels.

use crate::charts::{LineChartSpec, ScatterChartSpec, GUIDE_COLOR};
use egui::{Color32, Ui};
use egui_plot::{HLine, Line, LineStyle, Plot, PlotPoints, Points, VLine};

fn to_color32(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// Render a time-series line chart at the given height
pub fn render_line_chart(spec: &LineChartSpec, id_salt: &str, height: f32, ui: &mut Ui) {
    ui.strong(&spec.title);

    let value_format = spec.value_format;
    let title = spec.title.clone();

    let mut plot = Plot::new(id_salt.to_string())
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(true)
        .x_axis_label(spec.x_axis_label.clone())
        .label_formatter(move |name, point| {
            let label = if name.is_empty() { title.as_str() } else { name };
            format!(
                "{}\nYear {:.0}\n{}",
                label,
                point.x,
                value_format.format(point.y)
            )
        });

    if let Some(prefix) = &spec.y_tick_prefix {
        plot = plot.y_axis_label(prefix.trim().to_string());
    }

    plot.show(ui, |plot_ui| {
        if spec.points.is_empty() {
            return;
        }

        let line = Line::new(spec.title.clone(), PlotPoints::from(spec.points.clone()))
            .color(to_color32(spec.color))
            .width(2.0);
        plot_ui.line(line);
    });
}

/// Render the scatter summary chart at the given height.
///
/// The X axis carries log10 values when the spec asks for a log scale;
/// hover text shows the original magnitudes. Guide lines are drawn only
/// when the spec carries a highlight.
pub fn render_scatter_chart(spec: &ScatterChartSpec, height: f32, ui: &mut Ui) {
    ui.strong(&spec.title);

    let log_x = spec.log_x;
    let x_axis_label = if log_x {
        format!("{} [log scale]", spec.x_axis_label)
    } else {
        spec.x_axis_label.clone()
    };

    // Hover shows the bubble's source magnitudes, not plot coordinates.
    let bubbles = spec.bubbles.clone();
    let label_formatter = move |name: &str, _point: &egui_plot::PlotPoint| -> String {
        if name.is_empty() {
            return String::new();
        }
        match bubbles.iter().find(|b| b.country == name) {
            Some(bubble) => format!(
                "{} ({})\nPopulation (max.): {:.1}\nGDP per Capita (acum.): {:.2}\nCO2 emissions (acum.): {:.2}",
                bubble.country,
                bubble.region,
                bubble.population_max,
                bubble.gdp_per_capita_total,
                bubble.co2_total
            ),
            None => name.to_string(),
        }
    };

    let plot = Plot::new("summary_chart")
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(true)
        .x_axis_label(x_axis_label)
        .y_axis_label(spec.y_axis_label.clone())
        .label_formatter(label_formatter);

    plot.show(ui, |plot_ui| {
        for bubble in &spec.bubbles {
            let x = scale_x(bubble.population_max, log_x);
            let points = Points::new(
                bubble.country.clone(),
                PlotPoints::from(vec![[x, bubble.gdp_per_capita_total]]),
            )
            .color(to_color32(bubble.color))
            .filled(true)
            .radius(bubble.radius);
            plot_ui.points(points);
        }

        if let Some(guide) = spec.guide {
            let guide_color = to_color32(GUIDE_COLOR);
            plot_ui.vline(
                VLine::new("Selected country", scale_x(guide.population_max, log_x))
                    .color(guide_color)
                    .width(3.0)
                    .style(LineStyle::dotted_loose()),
            );
            plot_ui.hline(
                HLine::new("Selected country", guide.gdp_per_capita_total)
                    .color(guide_color)
                    .width(3.0)
                    .style(LineStyle::dotted_loose()),
            );
        }
    });
}

fn scale_x(value: f64, log_x: bool) -> f64 {
    if log_x {
        value.max(f64::MIN_POSITIVE).log10()
    } else {
        value
    }
}
