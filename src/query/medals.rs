//! Medal tallies per region or per year.

use super::{
    counts, dedup_medals, distinct_strings, distinct_years, ints, medal_rows, series_points,
    strings, with_overall, QueryError, Scope, SeriesPoint,
};
use crate::data::schema::{Medal, GOLD, MEDAL, REGION, YEAR};
use polars::prelude::*;
use serde::Serialize;

/// What the rows of a tally are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TallyGrouping {
    Region,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TallyKey {
    Region(String),
    Year(i64),
}

impl std::fmt::Display for TallyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TallyKey::Region(region) => f.write_str(region),
            TallyKey::Year(year) => write!(f, "{year}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyRow {
    pub key: TallyKey,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl TallyRow {
    fn new(key: TallyKey, gold: u32, silver: u32, bronze: u32) -> Self {
        Self {
            key,
            gold,
            silver,
            bronze,
            total: gold + silver + bronze,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub grouping: TallyGrouping,
    pub rows: Vec<TallyRow>,
}

impl MedalTally {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of the `total` column.
    pub fn grand_total(&self) -> u32 {
        self.rows.iter().map(|row| row.total).sum()
    }
}

/// Gold/silver/bronze counts for the selected year and country.
///
/// Without a country the rows are regions, most golds first. With a country
/// the rows are years in chronological order. Team medals count once.
pub fn fetch_medal_tally(
    df: &DataFrame,
    year: &Scope<i64>,
    country: &Scope<String>,
) -> Result<MedalTally, QueryError> {
    let mut lf = dedup_medals(df);
    if let Scope::Only(year) = year {
        lf = lf.filter(col(YEAR).eq(lit(*year)));
    }

    let grouping = match country {
        Scope::Only(country) => {
            lf = lf.filter(col(REGION).eq(lit(country.as_str())));
            TallyGrouping::Year
        }
        Scope::Overall => {
            lf = lf.filter(col(REGION).is_not_null());
            TallyGrouping::Region
        }
    };

    let key = match grouping {
        TallyGrouping::Region => REGION,
        TallyGrouping::Year => YEAR,
    };
    let sums = Medal::ALL.map(|medal| {
        col(medal.as_str())
            .cast(DataType::UInt32)
            .sum()
            .alias(medal.as_str())
    });
    let grouped = lf.group_by([col(key)]).agg(sums);

    let out = match grouping {
        TallyGrouping::Region => grouped.sort_by_exprs(
            [col(GOLD), col(REGION)],
            SortMultipleOptions {
                descending: vec![true, false],
                ..Default::default()
            },
        ),
        TallyGrouping::Year => grouped.sort([YEAR], SortMultipleOptions::default()),
    }
    .collect()?;

    let keys: Vec<TallyKey> = match grouping {
        TallyGrouping::Region => strings(&out, REGION)?
            .into_iter()
            .map(|region| TallyKey::Region(region.unwrap_or_default()))
            .collect(),
        TallyGrouping::Year => ints(&out, YEAR)?
            .into_iter()
            .map(|year| TallyKey::Year(year.unwrap_or_default()))
            .collect(),
    };
    let [gold, silver, bronze] = Medal::ALL.map(|medal| counts(&out, medal.as_str()));

    let rows = keys
        .into_iter()
        .zip(gold?)
        .zip(silver?)
        .zip(bronze?)
        .map(|(((key, gold), silver), bronze)| TallyRow::new(key, gold, silver, bronze))
        .collect();

    Ok(MedalTally { grouping, rows })
}

/// Page heading for a tally selection.
pub fn tally_title(year: &Scope<i64>, country: &Scope<String>) -> String {
    match (year, country) {
        (Scope::Overall, Scope::Overall) => "Overall Medal Tally".to_string(),
        (Scope::Only(year), Scope::Overall) => format!("Medal Tally in {year} Olympics"),
        (Scope::Overall, Scope::Only(country)) => format!("{country} Overall Performance"),
        (Scope::Only(year), Scope::Only(country)) => {
            format!("{country} Performance in {year} Olympics")
        }
    }
}

/// Selectable years and countries, each list led by `Overall`.
pub fn country_year_list(
    df: &DataFrame,
) -> Result<(Vec<Scope<i64>>, Vec<Scope<String>>), QueryError> {
    let years = distinct_years(df)?;
    let countries = distinct_strings(df, REGION)?;
    Ok((with_overall(years), with_overall(countries)))
}

/// Number of distinct medals a country won in each year.
pub fn yearwise_medal_tally(df: &DataFrame, country: &str) -> Result<Vec<SeriesPoint>, QueryError> {
    let out = medal_rows(df)
        .filter(col(REGION).eq(lit(country)))
        .group_by([col(YEAR)])
        .agg([col(MEDAL).count().alias(MEDAL)])
        .sort([YEAR], SortMultipleOptions::default())
        .collect()?;
    series_points(&out, MEDAL)
}
