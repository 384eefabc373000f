//! Preprocessor Module
//! Turns the raw events table into the analysis table: one season, regions
//! joined in, exact duplicates dropped, medals one-hot encoded.

use super::schema::{
    self, Medal, AGE, EVENT_COLUMNS, HEIGHT, MEDAL, NOC, REGION, REGION_COLUMNS, SEASON, WEIGHT,
    YEAR,
};
use polars::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("{table} table is missing columns: {}", .columns.join(", "))]
    MissingColumns {
        table: &'static str,
        columns: Vec<String>,
    },
}

/// Build the analysis table from the raw events and the NOC region mapping.
///
/// Rows from other seasons are dropped. The region join is a left join, so
/// rows whose NOC has no mapping stay with a null `region`.
pub fn preprocess(
    events: &DataFrame,
    regions: &DataFrame,
    season: &str,
) -> Result<DataFrame, PreprocessError> {
    require(events, "events", &EVENT_COLUMNS)?;
    require(regions, "regions", &REGION_COLUMNS)?;

    let indicators: Vec<Expr> = Medal::ALL
        .iter()
        .map(|medal| {
            col(MEDAL)
                .eq(lit(medal.as_str()))
                .fill_null(lit(false))
                .alias(medal.as_str())
        })
        .collect();

    let df = events
        .clone()
        .lazy()
        .filter(col(SEASON).eq(lit(season)))
        .with_columns([
            col(YEAR).cast(DataType::Int64),
            col(AGE).cast(DataType::Float64),
            col(HEIGHT).cast(DataType::Float64),
            col(WEIGHT).cast(DataType::Float64),
        ])
        .join(
            regions.clone().lazy(),
            [col(NOC)],
            [col(NOC)],
            JoinArgs::new(JoinType::Left),
        )
        .unique_stable(None, UniqueKeepStrategy::First)
        .with_columns(indicators)
        .collect()?;

    info!(
        "Preprocessed {} raw rows into {} {} analysis rows",
        events.height(),
        df.height(),
        season
    );
    let unmapped = df.column(REGION)?.null_count();
    if unmapped > 0 {
        warn!("{} rows have a NOC code with no region", unmapped);
    }
    Ok(df)
}

fn require(df: &DataFrame, table: &'static str, required: &[&str]) -> Result<(), PreprocessError> {
    let columns = schema::missing_columns(df, required);
    if columns.is_empty() {
        Ok(())
    } else {
        Err(PreprocessError::MissingColumns { table, columns })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::{BRONZE, GOLD, NAME, REGION, SILVER};
    use crate::fixtures::{raw_events, raw_regions};

    fn analysis_table() -> DataFrame {
        preprocess(&raw_events(), &raw_regions(), "Summer").unwrap()
    }

    #[test]
    fn test_keeps_only_requested_season_and_drops_exact_duplicates() {
        let df = analysis_table();
        // 10 raw rows: one Winter row and one exact duplicate go away.
        assert_eq!(df.height(), 8);

        let seasons = df.column(SEASON).unwrap().str().unwrap();
        assert!(seasons.into_iter().all(|s| s == Some("Summer")));

        let winter = preprocess(&raw_events(), &raw_regions(), "Winter").unwrap();
        assert_eq!(winter.height(), 1);
    }

    #[test]
    fn test_unmapped_noc_keeps_row_with_null_region() {
        let df = analysis_table();
        let names = df.column(NAME).unwrap().str().unwrap();
        let regions = df.column(REGION).unwrap().str().unwrap();

        let eve = names
            .into_iter()
            .position(|n| n == Some("Eve"))
            .expect("unmapped athlete should be retained");
        assert_eq!(regions.get(eve), None);
    }

    #[test]
    fn test_medal_indicators_are_one_hot() {
        let df = analysis_table();
        let medals = df.column(MEDAL).unwrap().str().unwrap();
        let gold = df.column(GOLD).unwrap().bool().unwrap();
        let silver = df.column(SILVER).unwrap().bool().unwrap();
        let bronze = df.column(BRONZE).unwrap().bool().unwrap();

        for i in 0..df.height() {
            let flags = [gold.get(i), silver.get(i), bronze.get(i)];
            let expected = match medals.get(i) {
                Some("Gold") => [Some(true), Some(false), Some(false)],
                Some("Silver") => [Some(false), Some(true), Some(false)],
                Some("Bronze") => [Some(false), Some(false), Some(true)],
                _ => [Some(false), Some(false), Some(false)],
            };
            assert_eq!(flags, expected, "row {i}");
        }
    }

    #[test]
    fn test_numeric_columns_are_normalized() {
        let df = analysis_table();
        assert_eq!(df.column(YEAR).unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column(AGE).unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column(HEIGHT).unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_input_tables_are_untouched() {
        let events = raw_events();
        let regions = raw_regions();
        let before = (events.height(), events.width());
        preprocess(&events, &regions, "Summer").unwrap();
        assert_eq!((events.height(), events.width()), before);
        assert!(events.get_column_index(GOLD).is_none());
    }

    #[test]
    fn test_missing_event_column_is_fatal() {
        let events = raw_events().drop(MEDAL).unwrap();
        let err = preprocess(&events, &raw_regions(), "Summer").unwrap_err();
        match err {
            PreprocessError::MissingColumns { table, columns } => {
                assert_eq!(table, "events");
                assert_eq!(columns, vec![MEDAL.to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
