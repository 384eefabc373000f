//! Statistics Calculator Module
//! Descriptive statistics and Gaussian kernel density estimates for the age
//! distribution charts.

use crate::query::AgeSample;
use rayon::prelude::*;
use serde::Serialize;
use statrs::distribution::{Continuous, Normal};

/// Grid resolution of a density curve.
pub const DENSITY_POINTS: usize = 200;

/// Summary of one sample.
#[derive(Debug, Clone, Serialize)]
pub struct SampleSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub p05: f64,
    pub p95: f64,
}

impl Default for SampleSummary {
    fn default() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
            p05: f64::NAN,
            p95: f64::NAN,
        }
    }
}

/// Estimated probability density of one labelled sample.
#[derive(Debug, Clone, Serialize)]
pub struct DensityCurve {
    pub label: String,
    pub summary: SampleSummary,
    pub points: Vec<[f64; 2]>,
}

/// Handles statistical calculations with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    pub fn summarize(values: &[f64]) -> SampleSummary {
        let n = values.len();
        if n == 0 {
            return SampleSummary::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = values.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };

        let variance = if n > 1 {
            values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };

        SampleSummary {
            count: n,
            mean,
            median,
            std: variance.sqrt(),
            p05: Self::percentile(&sorted, 5.0),
            p95: Self::percentile(&sorted, 95.0),
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Gaussian KDE with Scott's rule bandwidth, evaluated on `points` evenly
    /// spaced values covering the sample plus three bandwidths either side.
    ///
    /// Returns `None` when the sample has fewer than two values or no spread.
    pub fn density_curve(sample: &AgeSample, points: usize) -> Option<DensityCurve> {
        let values = &sample.ages;
        let summary = Self::summarize(values);
        if summary.count < 2 || !(summary.std > 0.0) || points < 2 {
            return None;
        }

        let n = summary.count as f64;
        let bandwidth = summary.std * n.powf(-0.2);
        let kernel = Normal::new(0.0, 1.0).ok()?;

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let start = min - 3.0 * bandwidth;
        let step = (max - min + 6.0 * bandwidth) / (points - 1) as f64;

        let curve = (0..points)
            .map(|i| {
                let x = start + i as f64 * step;
                let density = values
                    .iter()
                    .map(|v| kernel.pdf((x - v) / bandwidth))
                    .sum::<f64>()
                    / (n * bandwidth);
                [x, density]
            })
            .collect();

        Some(DensityCurve {
            label: sample.label.clone(),
            summary,
            points: curve,
        })
    }

    /// Density curves for many samples in parallel. Samples that cannot be
    /// estimated are skipped; the rest keep their input order.
    pub fn density_curves_parallel(samples: &[AgeSample]) -> Vec<DensityCurve> {
        samples
            .par_iter()
            .filter_map(|sample| Self::density_curve(sample, DENSITY_POINTS))
            .collect()
    }
}
