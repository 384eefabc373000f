//! GUI module - User interface components

mod app;
mod pages;
mod sidebar;

pub use app::DashboardApp;
use sidebar::Sidebar;
