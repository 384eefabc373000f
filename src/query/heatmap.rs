//! Sport by year count matrices.

use super::{counts, ints, medal_rows, strings, subset, QueryError, COUNT};
use crate::data::schema::{EVENT, MEDAL, REGION, SPORT, YEAR};
use polars::prelude::*;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Counts laid out with one row per sport and one column per year, both
/// ascending. Combinations with no data hold zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportYearMatrix {
    pub sports: Vec<String>,
    pub years: Vec<i64>,
    /// `counts[sport_index][year_index]`
    pub counts: Vec<Vec<u32>>,
}

impl SportYearMatrix {
    fn from_triples(triples: impl IntoIterator<Item = (String, i64, u32)>) -> Self {
        let triples: Vec<(String, i64, u32)> = triples.into_iter().collect();
        let sports: Vec<String> = triples
            .iter()
            .map(|(sport, _, _)| sport.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let years: Vec<i64> = triples
            .iter()
            .map(|(_, year, _)| *year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let sport_index: HashMap<&str, usize> = sports
            .iter()
            .enumerate()
            .map(|(i, sport)| (sport.as_str(), i))
            .collect();
        let year_index: HashMap<i64, usize> =
            years.iter().enumerate().map(|(i, year)| (*year, i)).collect();

        let mut counts = vec![vec![0u32; years.len()]; sports.len()];
        for (sport, year, count) in &triples {
            counts[sport_index[sport.as_str()]][year_index[year]] += count;
        }

        Self {
            sports,
            years,
            counts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sports.is_empty() || self.years.is_empty()
    }

    pub fn get(&self, sport: &str, year: i64) -> Option<u32> {
        let row = self.sports.iter().position(|s| s == sport)?;
        let column = self.years.iter().position(|y| *y == year)?;
        Some(self.counts[row][column])
    }

    /// Largest cell value, used to scale heatmap colors.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }
}

fn pivot_counts(lf: LazyFrame, value: &str) -> Result<SportYearMatrix, QueryError> {
    let out = lf
        .group_by([col(SPORT), col(YEAR)])
        .agg([col(value).count().alias(COUNT)])
        .collect()?;

    let sports = strings(&out, SPORT)?;
    let years = ints(&out, YEAR)?;
    let counts = counts(&out, COUNT)?;

    Ok(SportYearMatrix::from_triples(
        sports
            .into_iter()
            .zip(years)
            .zip(counts)
            .filter_map(|((sport, year), count)| Some((sport?, year?, count))),
    ))
}

/// Medals a country won per sport and year.
///
/// `None` when the country has no medals, so callers never receive an empty
/// matrix to draw.
pub fn country_event_heatmap(
    df: &DataFrame,
    country: &str,
) -> Result<Option<SportYearMatrix>, QueryError> {
    let lf = medal_rows(df).filter(col(REGION).eq(lit(country)));
    let matrix = pivot_counts(lf, MEDAL)?;
    Ok((!matrix.is_empty()).then_some(matrix))
}

/// Number of distinct events held per sport in each edition.
pub fn events_heatmap(df: &DataFrame) -> Result<SportYearMatrix, QueryError> {
    let lf = df
        .clone()
        .lazy()
        .unique_stable(subset(&[YEAR, SPORT, EVENT]), UniqueKeepStrategy::First);
    pivot_counts(lf, EVENT)
}
