//! Athlete rankings, the per-athlete cohort and its age samples.

use super::{
    counts, distinct_strings, floats, strings, subset, with_overall, QueryError, Scope,
};
use crate::data::schema::{Medal, AGE, HEIGHT, MEDAL, NAME, REGION, SEX, SPORT, WEIGHT};
use polars::prelude::*;
use serde::Serialize;

/// Rows in the overall most successful athletes table.
pub const TOP_ATHLETES: usize = 15;
/// Rows in a country's most successful athletes table.
pub const TOP_COUNTRY_ATHLETES: usize = 10;
/// Medal value given to athletes who never won one.
pub const NO_MEDAL: &str = "No Medal";

/// Sports compared in the age by sport view.
pub const POPULAR_SPORTS: [&str; 18] = [
    "Basketball",
    "Judo",
    "Football",
    "Athletics",
    "Swimming",
    "Gymnastics",
    "Wrestling",
    "Hockey",
    "Rowing",
    "Fencing",
    "Boxing",
    "Cycling",
    "Tennis",
    "Golf",
    "Archery",
    "Volleyball",
    "Table Tennis",
    "Baseball",
];

const MEDALS: &str = "Medals";
const RANK: &str = "rank";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteRank {
    pub name: String,
    pub medals: u32,
    pub sport: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryAthleteRank {
    pub name: String,
    pub medals: u32,
    pub sport: Option<String>,
}

/// One athlete of the height/weight cohort.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteProfile {
    pub name: String,
    pub sex: Option<String>,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub sport: Option<String>,
    pub region: Option<String>,
    pub medal: String,
}

/// Ages of one group of athletes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeSample {
    pub label: String,
    pub ages: Vec<f64>,
}

/// Medal counts per athlete name, best first, with the sport and region of
/// the athlete's first row in the table.
///
/// Ties keep the order in which the athletes first appear.
fn top_athletes(
    df: &DataFrame,
    filter: Option<Expr>,
    limit: usize,
) -> Result<DataFrame, QueryError> {
    let mut medalists = df.clone().lazy().filter(col(MEDAL).is_not_null());
    if let Some(filter) = filter {
        medalists = medalists.filter(filter);
    }

    let first_rows = df
        .clone()
        .lazy()
        .select([col(NAME), col(SPORT), col(REGION)])
        .unique_stable(subset(&[NAME]), UniqueKeepStrategy::First);

    let out = medalists
        .group_by_stable([col(NAME)])
        .agg([col(MEDAL).count().alias(MEDALS)])
        .sort(
            [MEDALS],
            SortMultipleOptions {
                descending: vec![true],
                maintain_order: true,
                ..Default::default()
            },
        )
        .limit(limit as IdxSize)
        .with_row_index(RANK, None)
        .join(
            first_rows,
            [col(NAME)],
            [col(NAME)],
            JoinArgs::new(JoinType::Left),
        )
        .sort([RANK], SortMultipleOptions::default())
        .collect()?;
    Ok(out)
}

/// The 15 athletes with the most medals, optionally within one sport.
pub fn most_successful(
    df: &DataFrame,
    sport: &Scope<String>,
) -> Result<Vec<AthleteRank>, QueryError> {
    let filter = sport
        .as_only()
        .map(|sport| col(SPORT).eq(lit(sport.as_str())));
    let out = top_athletes(df, filter, TOP_ATHLETES)?;

    let names = strings(&out, NAME)?;
    let medals = counts(&out, MEDALS)?;
    let sports = strings(&out, SPORT)?;
    let regions = strings(&out, REGION)?;

    Ok(names
        .into_iter()
        .zip(medals)
        .zip(sports.into_iter().zip(regions))
        .map(|((name, medals), (sport, region))| AthleteRank {
            name: name.unwrap_or_default(),
            medals,
            sport,
            region,
        })
        .collect())
}

/// The 10 athletes of a country with the most medals.
pub fn most_successful_countrywise(
    df: &DataFrame,
    country: &str,
) -> Result<Vec<CountryAthleteRank>, QueryError> {
    let filter = col(REGION).eq(lit(country));
    let out = top_athletes(df, Some(filter), TOP_COUNTRY_ATHLETES)?;

    let names = strings(&out, NAME)?;
    let medals = counts(&out, MEDALS)?;
    let sports = strings(&out, SPORT)?;

    Ok(names
        .into_iter()
        .zip(medals)
        .zip(sports)
        .map(|((name, medals), sport)| CountryAthleteRank {
            name: name.unwrap_or_default(),
            medals,
            sport,
        })
        .collect())
}

/// One row per athlete (name and region), with a missing medal shown as
/// `No Medal`.
fn athlete_cohort(df: &DataFrame) -> LazyFrame {
    df.clone()
        .lazy()
        .unique_stable(subset(&[NAME, REGION]), UniqueKeepStrategy::First)
        .with_column(col(MEDAL).fill_null(lit(NO_MEDAL)))
}

/// Height and weight of every athlete, optionally within one sport.
///
/// Athletes without a recorded height or weight are kept; leaving them off
/// the scatter plot is up to the caller.
pub fn weight_v_height(
    df: &DataFrame,
    sport: &Scope<String>,
) -> Result<Vec<AthleteProfile>, QueryError> {
    let mut lf = athlete_cohort(df);
    if let Scope::Only(sport) = sport {
        lf = lf.filter(col(SPORT).eq(lit(sport.as_str())));
    }
    let out = lf.collect()?;

    let names = strings(&out, NAME)?;
    let sexes = strings(&out, SEX)?;
    let ages = floats(&out, AGE)?;
    let heights = floats(&out, HEIGHT)?;
    let weights = floats(&out, WEIGHT)?;
    let sports = strings(&out, SPORT)?;
    let regions = strings(&out, REGION)?;
    let medals = strings(&out, MEDAL)?;

    let mut profiles = Vec::with_capacity(out.height());
    for i in 0..out.height() {
        profiles.push(AthleteProfile {
            name: names[i].clone().unwrap_or_default(),
            sex: sexes[i].clone(),
            age: ages[i],
            height: heights[i],
            weight: weights[i],
            sport: sports[i].clone(),
            region: regions[i].clone(),
            medal: medals[i].clone().unwrap_or_else(|| NO_MEDAL.to_string()),
        });
    }
    Ok(profiles)
}

fn cohort_ages(lf: LazyFrame) -> Result<Vec<f64>, QueryError> {
    let out = lf.select([col(AGE)]).collect()?;
    Ok(floats(&out, AGE)?.into_iter().flatten().collect())
}

/// Ages of all athletes and of gold, silver and bronze medalists.
pub fn age_samples(df: &DataFrame) -> Result<Vec<AgeSample>, QueryError> {
    let cohort = athlete_cohort(df).collect()?;

    let mut samples = vec![AgeSample {
        label: "Overall Age".to_string(),
        ages: cohort_ages(cohort.clone().lazy())?,
    }];
    for medal in Medal::ALL {
        let lf = cohort
            .clone()
            .lazy()
            .filter(col(MEDAL).eq(lit(medal.as_str())));
        samples.push(AgeSample {
            label: format!("{medal} Medalist"),
            ages: cohort_ages(lf)?,
        });
    }
    Ok(samples)
}

/// Ages per sport, optionally only of athletes holding one medal kind.
pub fn sport_age_samples(
    df: &DataFrame,
    sports: &[&str],
    medal: Option<Medal>,
) -> Result<Vec<AgeSample>, QueryError> {
    let cohort = athlete_cohort(df).collect()?;

    sports
        .iter()
        .map(|sport| {
            let mut lf = cohort.clone().lazy().filter(col(SPORT).eq(lit(*sport)));
            if let Some(medal) = medal {
                lf = lf.filter(col(MEDAL).eq(lit(medal.as_str())));
            }
            Ok(AgeSample {
                label: sport.to_string(),
                ages: cohort_ages(lf)?,
            })
        })
        .collect()
}

/// Selectable sports, led by `Overall`.
pub fn sport_list(df: &DataFrame) -> Result<Vec<Scope<String>>, QueryError> {
    Ok(with_overall(distinct_strings(df, SPORT)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::analysis_table;

    fn rank(name: &str, medals: u32, sport: &str, region: &str) -> AthleteRank {
        AthleteRank {
            name: name.to_string(),
            medals,
            sport: Some(sport.to_string()),
            region: Some(region.to_string()),
        }
    }

    #[test]
    fn test_most_successful_overall_orders_ties_by_first_appearance() {
        let top = most_successful(&analysis_table(), &Scope::Overall).unwrap();
        assert_eq!(
            top,
            vec![
                rank("Alice", 3, "Swimming", "USA"),
                rank("Beth", 1, "Swimming", "USA"),
                rank("Carl", 1, "Athletics", "Kenya"),
                rank("Dmitri", 1, "Wrestling", "Russia"),
            ]
        );
    }

    #[test]
    fn test_most_successful_by_sport() {
        let df = analysis_table();
        let wrestling = most_successful(&df, &Scope::Only("Wrestling".to_string())).unwrap();
        assert_eq!(wrestling, vec![rank("Dmitri", 1, "Wrestling", "Russia")]);

        let curling = most_successful(&df, &Scope::Only("Curling".to_string())).unwrap();
        assert!(curling.is_empty());
    }

    /// Twenty single-gold athletes from the same country.
    fn crowded_podium() -> DataFrame {
        let n = 20;
        let names: Vec<String> = (0..n).map(|i| format!("Athlete {i:02}")).collect();
        let events: Vec<String> = (0..n).map(|i| format!("Event {i:02}")).collect();
        let raw = df!(
            "Name" => names,
            "Sex" => vec!["M"; n],
            "Age" => vec![25.0; n],
            "Height" => vec![180.0; n],
            "Weight" => vec![75.0; n],
            "Team" => vec!["United States"; n],
            "NOC" => vec!["USA"; n],
            "Games" => vec!["2000 Summer"; n],
            "Year" => vec![2000i64; n],
            "Season" => vec!["Summer"; n],
            "City" => vec!["Sydney"; n],
            "Sport" => vec!["Athletics"; n],
            "Event" => events,
            "Medal" => vec!["Gold"; n],
        )
        .unwrap();
        crate::data::preprocess(&raw, &crate::fixtures::raw_regions(), "Summer").unwrap()
    }

    #[test]
    fn test_rankings_are_capped_and_ties_are_stable() {
        let df = crowded_podium();

        let top = most_successful(&df, &Scope::Overall).unwrap();
        assert_eq!(top.len(), TOP_ATHLETES);
        assert_eq!(top[0].name, "Athlete 00");
        assert_eq!(top[14].name, "Athlete 14");

        let country = most_successful_countrywise(&df, "USA").unwrap();
        assert_eq!(country.len(), TOP_COUNTRY_ATHLETES);
        assert_eq!(country[9].name, "Athlete 09");
    }

    #[test]
    fn test_most_successful_countrywise() {
        let df = analysis_table();
        let usa = most_successful_countrywise(&df, "USA").unwrap();
        assert_eq!(
            usa,
            vec![
                CountryAthleteRank {
                    name: "Alice".to_string(),
                    medals: 3,
                    sport: Some("Swimming".to_string()),
                },
                CountryAthleteRank {
                    name: "Beth".to_string(),
                    medals: 1,
                    sport: Some("Swimming".to_string()),
                },
            ]
        );
        assert!(most_successful_countrywise(&df, "Norway").unwrap().is_empty());
    }

    #[test]
    fn test_weight_v_height_fills_missing_medal() {
        let df = analysis_table();
        let cohort = weight_v_height(&df, &Scope::Overall).unwrap();
        let names: Vec<&str> = cohort.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Beth", "Carl", "Dmitri", "Eve", "Gus"]);

        let eve = &cohort[4];
        assert_eq!(eve.medal, NO_MEDAL);
        assert_eq!(eve.region, None);
        assert_eq!(eve.height, None);

        // The table itself still has a null medal for Eve.
        assert_eq!(df.column(MEDAL).unwrap().null_count(), 2);
    }

    #[test]
    fn test_weight_v_height_by_sport() {
        let athletics =
            weight_v_height(&analysis_table(), &Scope::Only("Athletics".to_string())).unwrap();
        let names: Vec<&str> = athletics.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Carl", "Eve", "Gus"]);
    }

    #[test]
    fn test_age_samples() {
        let samples = age_samples(&analysis_table()).unwrap();
        let labels: Vec<&str> = samples.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Overall Age", "Gold Medalist", "Silver Medalist", "Bronze Medalist"]
        );
        // Gus has no recorded age.
        assert_eq!(samples[0].ages.len(), 5);
        // One row per athlete: Alice's first row is the relay gold at 24.
        assert_eq!(samples[1].ages, vec![24.0, 22.0, 30.0]);
        assert!(samples[2].ages.is_empty());
        assert_eq!(samples[3].ages, vec![28.0]);
    }

    #[test]
    fn test_sport_age_samples_with_medal_filter() {
        let df = analysis_table();
        let samples = sport_age_samples(&df, &["Swimming", "Fencing"], Some(Medal::Gold)).unwrap();
        assert_eq!(samples[0].ages, vec![24.0, 22.0]);
        assert!(samples[1].ages.is_empty());
    }

    #[test]
    fn test_sport_list() {
        let sports = sport_list(&analysis_table()).unwrap();
        assert_eq!(sports.len(), 4);
        assert_eq!(sports[0], Scope::Overall);
        assert_eq!(sports[1], Scope::Only("Athletics".to_string()));
    }
}
