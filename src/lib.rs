//! Olympics Analysis - data layer of the Olympic history dashboard.
//!
//! Loads `athlete_events.csv` and `noc_regions.csv`, preprocesses them into
//! one analysis table and answers the dashboard's queries over it.

pub mod config;
pub mod data;
pub mod query;
pub mod session;
pub mod stats;

#[cfg(test)]
mod fixtures;
