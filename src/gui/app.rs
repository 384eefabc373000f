//! Olympics Dashboard Main Application
//! Main window with the sidebar and the selected page.

use crate::gui::{pages, Sidebar};
use egui::{ScrollArea, SidePanel};
use olympics_dashboard::session::{AnalysisSession, ViewData, ViewRequest};
use tracing::{error, info};

/// Main application window.
pub struct DashboardApp {
    session: AnalysisSession,
    sidebar: Sidebar,
    /// Last dispatched request and its outcome. Re-run only when the
    /// sidebar produces a different request.
    view: Option<(ViewRequest, Result<ViewData, String>)>,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: AnalysisSession) -> Self {
        let sidebar = Sidebar::new(session.choices());
        Self {
            session,
            sidebar,
            view: None,
        }
    }

    fn refresh(&mut self) {
        let request = self.sidebar.request();
        if matches!(&self.view, Some((current, _)) if *current == request) {
            return;
        }

        info!("Rendering {}", request.menu().label());
        let outcome = self.session.dispatch(&request).map_err(|e| {
            error!("{} failed: {}", request.menu().label(), e);
            e.to_string()
        });
        self.view = Some((request, outcome));
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Sidebar
        SidePanel::left("sidebar")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.sidebar.show(ui, self.session.choices());
                });
            });

        self.refresh();

        // Central panel - selected page
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match &self.view {
                    Some((_, Ok(data))) => pages::show(ui, data),
                    Some((_, Err(message))) => pages::show_error(ui, message),
                    None => {}
                });
        });
    }
}
