//! Analysis Session
//! Owns the preprocessed table for the lifetime of the dashboard and turns
//! page selections into query results.

use crate::config::DashboardConfig;
use crate::data::schema::{EVENT, NAME, REGION};
use crate::data::{preprocess, DataLoader, LoaderError, PreprocessError};
use crate::query::{
    self, AthleteProfile, AthleteRank, CountryAthleteRank, GenderPoint, MedalTally, OverallStats,
    QueryError, Scope, SeriesPoint, SportYearMatrix, POPULAR_SPORTS,
};
use crate::stats::{DensityCurve, StatsCalculator};
use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Preprocess(#[from] PreprocessError),
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Sidebar pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    MedalTally,
    OverallAnalysis,
    CountryWise,
    AthleteWise,
}

impl Menu {
    pub const ALL: [Menu; 4] = [
        Menu::MedalTally,
        Menu::OverallAnalysis,
        Menu::CountryWise,
        Menu::AthleteWise,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Menu::MedalTally => "Medal Tally",
            Menu::OverallAnalysis => "Overall Analysis",
            Menu::CountryWise => "Country-wise Analysis",
            Menu::AthleteWise => "Athlete-wise Analysis",
        }
    }
}

/// A page together with the selections made on it.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewRequest {
    MedalTally {
        year: Scope<i64>,
        country: Scope<String>,
    },
    OverallAnalysis {
        sport: Scope<String>,
    },
    CountryWise {
        country: String,
    },
    AthleteWise {
        sport: Scope<String>,
    },
}

impl ViewRequest {
    pub fn menu(&self) -> Menu {
        match self {
            ViewRequest::MedalTally { .. } => Menu::MedalTally,
            ViewRequest::OverallAnalysis { .. } => Menu::OverallAnalysis,
            ViewRequest::CountryWise { .. } => Menu::CountryWise,
            ViewRequest::AthleteWise { .. } => Menu::AthleteWise,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MedalTallyView {
    pub title: String,
    pub tally: MedalTally,
}

#[derive(Debug, Clone)]
pub struct OverallView {
    pub stats: OverallStats,
    pub nations: Vec<SeriesPoint>,
    pub events: Vec<SeriesPoint>,
    pub athletes: Vec<SeriesPoint>,
    pub events_heatmap: SportYearMatrix,
    pub top_athletes: Vec<AthleteRank>,
}

#[derive(Debug, Clone)]
pub struct CountryView {
    pub country: String,
    pub yearly_medals: Vec<SeriesPoint>,
    pub heatmap: Option<SportYearMatrix>,
    pub top_athletes: Vec<CountryAthleteRank>,
}

#[derive(Debug, Clone)]
pub struct AthleteView {
    pub age_curves: Vec<DensityCurve>,
    pub sport_age_curves: Vec<DensityCurve>,
    pub cohort: Vec<AthleteProfile>,
    pub gender: Vec<GenderPoint>,
}

/// Everything a page needs to draw itself.
#[derive(Debug, Clone)]
pub enum ViewData {
    MedalTally(MedalTallyView),
    OverallAnalysis(OverallView),
    CountryWise(CountryView),
    AthleteWise(AthleteView),
}

/// Values offered by the sidebar selectors.
#[derive(Debug, Clone, Default)]
pub struct Choices {
    pub years: Vec<Scope<i64>>,
    pub countries: Vec<Scope<String>>,
    pub sports: Vec<Scope<String>>,
}

impl Choices {
    /// Countries without the leading `Overall` entry.
    pub fn regions(&self) -> impl Iterator<Item = &String> {
        self.countries.iter().filter_map(Scope::as_only)
    }
}

/// The loaded dataset. Built once; read-only afterwards.
pub struct AnalysisSession {
    table: DataFrame,
    choices: Choices,
}

impl AnalysisSession {
    /// Read both input files and preprocess them.
    pub fn load(config: &DashboardConfig) -> Result<Self, SessionError> {
        let events = DataLoader::read_events(&config.events_path)?;
        let regions = DataLoader::read_regions(&config.regions_path)?;
        Self::from_frames(&events, &regions, &config.season)
    }

    pub fn from_frames(
        events: &DataFrame,
        regions: &DataFrame,
        season: &str,
    ) -> Result<Self, SessionError> {
        let table = preprocess(events, regions, season)?;
        let (years, countries) = query::country_year_list(&table)?;
        let sports = query::sport_list(&table)?;
        info!(
            "Session ready: {} rows, {} editions, {} countries",
            table.height(),
            years.len().saturating_sub(1),
            countries.len().saturating_sub(1)
        );

        Ok(Self {
            table,
            choices: Choices {
                years,
                countries,
                sports,
            },
        })
    }

    pub fn table(&self) -> &DataFrame {
        &self.table
    }

    pub fn choices(&self) -> &Choices {
        &self.choices
    }

    /// Run the queries behind one page.
    pub fn dispatch(&self, request: &ViewRequest) -> Result<ViewData, QueryError> {
        debug!("Dispatching {:?}", request);
        let df = &self.table;

        let data = match request {
            ViewRequest::MedalTally { year, country } => ViewData::MedalTally(MedalTallyView {
                title: query::tally_title(year, country),
                tally: query::fetch_medal_tally(df, year, country)?,
            }),
            ViewRequest::OverallAnalysis { sport } => ViewData::OverallAnalysis(OverallView {
                stats: query::overall_stats(df)?,
                nations: query::data_over_time(df, REGION)?,
                events: query::data_over_time(df, EVENT)?,
                athletes: query::data_over_time(df, NAME)?,
                events_heatmap: query::events_heatmap(df)?,
                top_athletes: query::most_successful(df, sport)?,
            }),
            ViewRequest::CountryWise { country } => ViewData::CountryWise(CountryView {
                country: country.clone(),
                yearly_medals: query::yearwise_medal_tally(df, country)?,
                heatmap: query::country_event_heatmap(df, country)?,
                top_athletes: query::most_successful_countrywise(df, country)?,
            }),
            ViewRequest::AthleteWise { sport } => {
                let ages = query::age_samples(df)?;
                let sport_ages = query::sport_age_samples(df, &POPULAR_SPORTS, None)?;
                ViewData::AthleteWise(AthleteView {
                    age_curves: StatsCalculator::density_curves_parallel(&ages),
                    sport_age_curves: StatsCalculator::density_curves_parallel(&sport_ages),
                    cohort: query::weight_v_height(df, sport)?,
                    gender: query::men_vs_women(df)?,
                })
            }
        };
        Ok(data)
    }
}
