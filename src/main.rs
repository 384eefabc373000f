//! Olympics Analysis - desktop dashboard over the Olympic history dataset.

mod charts;
mod gui;

use anyhow::Context;
use eframe::egui;
use gui::DashboardApp;
use olympics_dashboard::config::DashboardConfig;
use olympics_dashboard::session::AnalysisSession;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Missing files or columns stop here, before any window opens.
    let config = DashboardConfig::discover().context("Failed to read dashboard config")?;
    let session = AnalysisSession::load(&config).context("Failed to load the Olympic dataset")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("Olympics Analysis"),
        ..Default::default()
    };

    eframe::run_native(
        "Olympics Analysis",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, session)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))
}
