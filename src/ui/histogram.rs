use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Plot};

use crate::registry::ColumnDescriptor;
use crate::stats::Histogram;

// ---------------------------------------------------------------------------
// Histogram window
// ---------------------------------------------------------------------------

/// One histogram chart window.
struct HistogramApp {
    title: String,
    x_label: String,
    y_label: String,
    histogram: Histogram,
    color: Color32,
}

impl eframe::App for HistogramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.title);

            let bars: Vec<Bar> = self
                .histogram
                .bins
                .iter()
                .enumerate()
                .map(|(i, bin)| {
                    Bar::new(self.histogram.center(i), bin.count as f64)
                        .width(self.histogram.bin_width)
                })
                .collect();

            let chart = BarChart::new(bars).name(&self.title).color(self.color);

            Plot::new("histogram")
                .x_axis_label(self.x_label.clone())
                .y_axis_label(self.y_label.clone())
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .allow_scroll(true)
                .allow_zoom(true)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(chart);
                });
        });
    }
}

/// Open the chart window and block until the user closes it.
///
/// The whole process waits here: statistics stay on screen in the terminal
/// while the user inspects the chart.
pub fn show_blocking(
    descriptor: &ColumnDescriptor,
    histogram: &Histogram,
    color: Color32,
) -> eframe::Result {
    let app = HistogramApp {
        title: descriptor.display_title.clone(),
        x_label: descriptor.x_axis_label.clone(),
        y_label: descriptor.y_axis_label.clone(),
        histogram: histogram.clone(),
        color,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        &descriptor.display_title,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
