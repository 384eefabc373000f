//! Column names of the raw events file, the region mapping and the
//! analysis table derived from them.

pub const NAME: &str = "Name";
pub const SEX: &str = "Sex";
pub const AGE: &str = "Age";
pub const HEIGHT: &str = "Height";
pub const WEIGHT: &str = "Weight";
pub const TEAM: &str = "Team";
pub const NOC: &str = "NOC";
pub const GAMES: &str = "Games";
pub const YEAR: &str = "Year";
pub const SEASON: &str = "Season";
pub const CITY: &str = "City";
pub const SPORT: &str = "Sport";
pub const EVENT: &str = "Event";
pub const MEDAL: &str = "Medal";

pub const REGION: &str = "region";

/// Indicator columns added by preprocessing.
pub const GOLD: &str = "Gold";
pub const SILVER: &str = "Silver";
pub const BRONZE: &str = "Bronze";

/// Columns every events file must provide.
pub const EVENT_COLUMNS: [&str; 14] = [
    NAME, SEX, AGE, HEIGHT, WEIGHT, TEAM, NOC, GAMES, YEAR, SEASON, CITY, SPORT, EVENT, MEDAL,
];

/// Columns every region mapping file must provide.
pub const REGION_COLUMNS: [&str; 2] = [NOC, REGION];

/// One team medal is recorded once per team member; rows sharing this key
/// are the same medal.
pub const MEDAL_KEY: [&str; 8] = [TEAM, NOC, GAMES, YEAR, CITY, SPORT, EVENT, MEDAL];

/// Medal outcomes, in podium order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    /// Value in the `Medal` column, which is also the indicator column name.
    pub fn as_str(self) -> &'static str {
        match self {
            Medal::Gold => GOLD,
            Medal::Silver => SILVER,
            Medal::Bronze => BRONZE,
        }
    }
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names from `required` that `df` does not have.
pub fn missing_columns(df: &polars::prelude::DataFrame, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| df.get_column_index(name).is_none())
        .map(|name| name.to_string())
        .collect()
}
