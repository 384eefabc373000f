//! Stats module - sample summaries and density curves

mod calculator;

pub use calculator::{DensityCurve, SampleSummary, StatsCalculator, DENSITY_POINTS};
