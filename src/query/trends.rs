//! Participation over time and headline numbers.

use super::{counts, ints, series_points, subset, QueryError, SeriesPoint, COUNT};
use crate::data::schema::{CITY, EVENT, NAME, REGION, SEX, SPORT, YEAR};
use polars::prelude::*;
use serde::Serialize;

const MALE: &str = "Male";
const FEMALE: &str = "Female";
/// Scratch name for the counted column, which may itself be `Year`.
const VALUE: &str = "value";

/// Distinct counts shown at the top of the overall analysis page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallStats {
    pub editions: usize,
    pub hosts: usize,
    pub sports: usize,
    pub events: usize,
    pub nations: usize,
    pub athletes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderPoint {
    pub year: i64,
    pub male: u32,
    pub female: u32,
}

fn distinct_count(df: &DataFrame, name: &str) -> Result<usize, QueryError> {
    Ok(df
        .column(name)?
        .as_materialized_series()
        .drop_nulls()
        .n_unique()?)
}

pub fn overall_stats(df: &DataFrame) -> Result<OverallStats, QueryError> {
    Ok(OverallStats {
        editions: distinct_count(df, YEAR)?,
        hosts: distinct_count(df, CITY)?,
        sports: distinct_count(df, SPORT)?,
        events: distinct_count(df, EVENT)?,
        nations: distinct_count(df, REGION)?,
        athletes: distinct_count(df, NAME)?,
    })
}

/// How many distinct values of `column` appear in each edition.
///
/// Used for nations (`region`), events (`Event`) and athletes (`Name`).
pub fn data_over_time(df: &DataFrame, column: &str) -> Result<Vec<SeriesPoint>, QueryError> {
    let out = df
        .clone()
        .lazy()
        .filter(col(column).is_not_null())
        .select([col(YEAR), col(column).alias(VALUE)])
        .unique_stable(None, UniqueKeepStrategy::First)
        .group_by([col(YEAR)])
        .agg([col(VALUE).count().alias(COUNT)])
        .sort([YEAR], SortMultipleOptions::default())
        .collect()?;
    series_points(&out, COUNT)
}

/// Male and female participants per edition, each athlete counted once per
/// year. Every edition reports both counts.
pub fn men_vs_women(df: &DataFrame) -> Result<Vec<GenderPoint>, QueryError> {
    let is_sex = |sex: &str| col(SEX).eq(lit(sex)).cast(DataType::UInt32).sum();

    let out = df
        .clone()
        .lazy()
        .unique_stable(subset(&[NAME, REGION, YEAR]), UniqueKeepStrategy::First)
        .group_by([col(YEAR)])
        .agg([is_sex("M").alias(MALE), is_sex("F").alias(FEMALE)])
        .sort([YEAR], SortMultipleOptions::default())
        .collect()?;

    let years = ints(&out, YEAR)?;
    let male = counts(&out, MALE)?;
    let female = counts(&out, FEMALE)?;

    Ok(years
        .into_iter()
        .zip(male.into_iter().zip(female))
        .filter_map(|(year, (male, female))| {
            year.map(|year| GenderPoint { year, male, female })
        })
        .collect())
}
