//! Query module - read-only aggregations over the analysis table
//!
//! Every function takes the preprocessed table by reference and returns a new,
//! typed result. Nothing here mutates the table it is given.

mod athletes;
mod heatmap;
mod medals;
mod trends;

pub use athletes::{
    age_samples, most_successful, most_successful_countrywise, sport_age_samples, sport_list,
    weight_v_height, AgeSample, AthleteProfile, AthleteRank, CountryAthleteRank, NO_MEDAL,
    POPULAR_SPORTS, TOP_ATHLETES, TOP_COUNTRY_ATHLETES,
};
pub use heatmap::{country_event_heatmap, events_heatmap, SportYearMatrix};
pub use medals::{
    country_year_list, fetch_medal_tally, tally_title, yearwise_medal_tally, MedalTally,
    TallyGrouping, TallyKey, TallyRow,
};
pub use trends::{data_over_time, men_vs_women, overall_stats, GenderPoint, OverallStats};

use crate::data::schema::{MEDAL, MEDAL_KEY, YEAR};
use polars::prelude::*;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Name of scratch count columns produced by aggregations.
pub(crate) const COUNT: &str = "count";

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// A filter on one dimension: everything, or a single value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Scope<T> {
    Overall,
    Only(T),
}

impl<T> Default for Scope<T> {
    fn default() -> Self {
        Scope::Overall
    }
}

impl<T> Scope<T> {
    pub fn is_overall(&self) -> bool {
        matches!(self, Scope::Overall)
    }

    pub fn as_only(&self) -> Option<&T> {
        match self {
            Scope::Overall => None,
            Scope::Only(value) => Some(value),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Scope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Overall => f.write_str("Overall"),
            Scope::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

/// Prefix a sorted list of values with the `Overall` choice.
pub(crate) fn with_overall<T>(values: Vec<T>) -> Vec<Scope<T>> {
    std::iter::once(Scope::Overall)
        .chain(values.into_iter().map(Scope::Only))
        .collect()
}

/// One year of a per-year count series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub year: i64,
    pub count: u32,
}

/// Column subset for `unique_stable`.
pub(crate) fn subset<S: From<&'static str>>(columns: &[&'static str]) -> Option<Vec<S>> {
    Some(columns.iter().map(|&c| S::from(c)).collect())
}

/// All rows with one row per distinct medal: team medals are recorded once
/// per team member and collapse to a single row here.
pub(crate) fn dedup_medals(df: &DataFrame) -> LazyFrame {
    df.clone()
        .lazy()
        .unique_stable(subset(&MEDAL_KEY), UniqueKeepStrategy::First)
}

/// Medal-winning rows only, one row per distinct medal.
pub(crate) fn medal_rows(df: &DataFrame) -> LazyFrame {
    df.clone()
        .lazy()
        .filter(col(MEDAL).is_not_null())
        .unique_stable(subset(&MEDAL_KEY), UniqueKeepStrategy::First)
}

pub(crate) fn strings(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>, QueryError> {
    Ok(df
        .column(name)?
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

pub(crate) fn ints(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>, QueryError> {
    let column = df.column(name)?.cast(&DataType::Int64)?;
    Ok(column.i64()?.into_iter().collect())
}

pub(crate) fn floats(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, QueryError> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

/// Count column as plain numbers; a null count is zero.
pub(crate) fn counts(df: &DataFrame, name: &str) -> Result<Vec<u32>, QueryError> {
    let column = df.column(name)?.cast(&DataType::UInt32)?;
    Ok(column.u32()?.into_iter().map(|v| v.unwrap_or(0)).collect())
}

/// Sorted distinct non-null values of a string column.
pub(crate) fn distinct_strings(df: &DataFrame, name: &str) -> Result<Vec<String>, QueryError> {
    let unique = df.column(name)?.unique()?;
    let mut values: Vec<String> = unique
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();
    values.sort();
    Ok(values)
}

/// Sorted distinct years present in the table.
pub(crate) fn distinct_years(df: &DataFrame) -> Result<Vec<i64>, QueryError> {
    let unique = df.column(YEAR)?.unique()?.cast(&DataType::Int64)?;
    let mut years: Vec<i64> = unique.i64()?.into_iter().flatten().collect();
    years.sort_unstable();
    Ok(years)
}

/// Zip a `Year` column with a count column into a series.
pub(crate) fn series_points(df: &DataFrame, count: &str) -> Result<Vec<SeriesPoint>, QueryError> {
    let years = ints(df, YEAR)?;
    let counts = counts(df, count)?;
    Ok(years
        .into_iter()
        .zip(counts)
        .filter_map(|(year, count)| year.map(|year| SeriesPoint { year, count }))
        .collect())
}
