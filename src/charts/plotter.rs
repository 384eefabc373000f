//! Chart Plotter Module
//! Line, density, scatter and heatmap widgets built on egui_plot.

use egui::{Color32, RichText, ScrollArea};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};
use olympics_dashboard::query::SportYearMatrix;
use olympics_dashboard::stats::DensityCurve;

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(121, 85, 72),   // Brown
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

const CHART_HEIGHT: f32 = 280.0;

/// Heatmap cells fade from this color (zero) to `HEAT_HIGH` (maximum).
const HEAT_LOW: [f32; 3] = [59.0, 76.0, 192.0];
const HEAT_HIGH: [f32; 3] = [180.0, 4.0, 38.0];

/// One named series of a line or scatter chart.
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Draws the dashboard's charts and tables.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Colors used for the medal groups of the height/weight scatter.
    pub fn medal_color(medal: &str) -> Color32 {
        match medal {
            "Gold" => Color32::from_rgb(212, 175, 55),
            "Silver" => Color32::from_rgb(160, 160, 170),
            "Bronze" => Color32::from_rgb(176, 110, 60),
            _ => Color32::from_rgb(52, 152, 219).gamma_multiply(0.6),
        }
    }

    /// Lines over a year axis.
    pub fn line_chart(ui: &mut egui::Ui, id: &str, y_label: &str, series: &[Series]) {
        Plot::new(id)
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label(y_label)
            .show(ui, |plot_ui| {
                for (i, s) in series.iter().enumerate() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(s.points.clone()))
                            .color(Self::color(i))
                            .width(2.0)
                            .name(&s.name),
                    );
                }
            });
    }

    /// Overlaid density curves.
    pub fn density_chart(ui: &mut egui::Ui, id: &str, curves: &[DensityCurve]) {
        if curves.is_empty() {
            Self::empty_note(ui, "Not enough ages recorded to estimate a distribution.");
            return;
        }

        Plot::new(id)
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Age")
            .y_axis_label("Density")
            .show(ui, |plot_ui| {
                for (i, curve) in curves.iter().enumerate() {
                    plot_ui.line(
                        Line::new(PlotPoints::from(curve.points.clone()))
                            .color(Self::color(i))
                            .width(1.5)
                            .name(&curve.label),
                    );
                }
            });
    }

    /// Scatter plot with one color per group.
    pub fn scatter_chart(
        ui: &mut egui::Ui,
        id: &str,
        x_label: &str,
        y_label: &str,
        groups: &[(Series, Color32)],
    ) {
        Plot::new(id)
            .height(CHART_HEIGHT + 80.0)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label(x_label)
            .y_axis_label(y_label)
            .show(ui, |plot_ui| {
                for (series, color) in groups {
                    plot_ui.points(
                        Points::new(PlotPoints::from(series.points.clone()))
                            .shape(MarkerShape::Circle)
                            .radius(2.5)
                            .color(*color)
                            .name(&series.name),
                    );
                }
            });
    }

    fn heat_color(value: u32, max: u32) -> Color32 {
        let t = if max == 0 {
            0.0
        } else {
            value as f32 / max as f32
        };
        let channel = |i: usize| (HEAT_LOW[i] + (HEAT_HIGH[i] - HEAT_LOW[i]) * t).round() as u8;
        Color32::from_rgb(channel(0), channel(1), channel(2))
    }

    /// Sport by year grid with annotated, colored cells.
    pub fn heatmap(ui: &mut egui::Ui, id: &str, matrix: &SportYearMatrix) {
        let max = matrix.max_count();

        ScrollArea::horizontal().id_salt(format!("{id}_scroll")).show(ui, |ui| {
            egui::Grid::new(id).spacing([2.0, 2.0]).show(ui, |ui| {
                ui.label("");
                for year in &matrix.years {
                    ui.label(RichText::new(year.to_string()).size(10.0));
                }
                ui.end_row();

                for (sport, row) in matrix.sports.iter().zip(&matrix.counts) {
                    ui.label(RichText::new(sport).size(11.0));
                    for &count in row {
                        ui.label(
                            RichText::new(format!("{count:>3}"))
                                .monospace()
                                .size(10.0)
                                .color(Color32::WHITE)
                                .background_color(Self::heat_color(count, max)),
                        );
                    }
                    ui.end_row();
                }
            });
        });
    }

    /// Plain striped table.
    pub fn table(ui: &mut egui::Ui, id: &str, headers: &[&str], rows: &[Vec<String>]) {
        if rows.is_empty() {
            Self::empty_note(ui, "No rows for this selection.");
            return;
        }

        egui::Grid::new(id)
            .striped(true)
            .min_col_width(60.0)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for header in headers {
                    ui.label(RichText::new(*header).strong());
                }
                ui.end_row();

                for row in rows {
                    for cell in row {
                        ui.label(cell.as_str());
                    }
                    ui.end_row();
                }
            });
    }

    pub fn empty_note(ui: &mut egui::Ui, text: &str) {
        ui.label(RichText::new(text).italics().color(Color32::GRAY));
    }
}
