//! CSV Data Loader Module
//! Reads the events and region mapping files using Polars.

use super::schema::{self, EVENT_COLUMNS, REGION_COLUMNS};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Token the events file uses for missing values.
const EVENTS_NULL_TOKEN: &str = "NA";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV {}: {source}", .path.display())]
    Csv { path: PathBuf, source: PolarsError },
    #[error("{} is missing columns: {}", .path.display(), .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },
}

/// Reads the two input files of the dashboard.
pub struct DataLoader;

impl DataLoader {
    /// Load the athlete events file, validating its column set.
    pub fn read_events(path: &Path) -> Result<DataFrame, LoaderError> {
        let df = Self::read_csv(path, Some(EVENTS_NULL_TOKEN))?;
        Self::require_columns(&df, path, &EVENT_COLUMNS)?;
        info!("Loaded {} event rows from {}", df.height(), path.display());
        Ok(df)
    }

    /// Load the NOC to region mapping file, validating its column set.
    pub fn read_regions(path: &Path) -> Result<DataFrame, LoaderError> {
        let df = Self::read_csv(path, None)?;
        Self::require_columns(&df, path, &REGION_COLUMNS)?;
        info!("Loaded {} region mappings from {}", df.height(), path.display());
        Ok(df)
    }

    fn read_csv(path: &Path, null_token: Option<&str>) -> Result<DataFrame, LoaderError> {
        let csv_error = |source| LoaderError::Csv {
            path: path.to_path_buf(),
            source,
        };

        // Infer over the whole file: numeric columns switch from integer to
        // float values deep into the events file.
        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(None)
            .with_null_values(null_token.map(|token| NullValues::AllColumnsSingle(token.into())))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(csv_error)
    }

    fn require_columns(df: &DataFrame, path: &Path, required: &[&str]) -> Result<(), LoaderError> {
        let columns = schema::missing_columns(df, required);
        if columns.is_empty() {
            Ok(())
        } else {
            Err(LoaderError::MissingColumns {
                path: path.to_path_buf(),
                columns,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const EVENTS_CSV: &str = "\
ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal
1,A Dijiang,M,24,180,80,China,CHN,1992 Summer,1992,Summer,Barcelona,Basketball,Basketball Men's Basketball,NA
2,A Lamusi,M,23,170,60,China,CHN,2012 Summer,2012,Summer,London,Judo,Judo Men's Extra-Lightweight,NA
3,Edgar Aabye,M,34,NA,NA,Denmark/Sweden,DEN,1900 Summer,1900,Summer,Paris,Tug-Of-War,Tug-Of-War Men's Tug-Of-War,Gold
4,Christine Jacoba Aaftink,F,21,185,82.5,Netherlands,NED,1988 Winter,1988,Winter,Calgary,Speed Skating,Speed Skating Women's 500 metres,NA
";

    const REGIONS_CSV: &str = "\
NOC,region,notes
CHN,China,
DEN,Denmark,
NED,Netherlands,
";

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_read_events_maps_na_to_null() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "athlete_events.csv", EVENTS_CSV);

        let df = DataLoader::read_events(&path).unwrap();
        assert_eq!(df.height(), 4);
        assert_eq!(df.column(schema::MEDAL).unwrap().null_count(), 3);
        assert_eq!(df.column(schema::HEIGHT).unwrap().null_count(), 1);
        // 82.5 is further down than the integer weights before it.
        assert_eq!(df.column(schema::WEIGHT).unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_read_regions_keeps_empty_notes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "noc_regions.csv", REGIONS_CSV);

        let df = DataLoader::read_regions(&path).unwrap();
        assert_eq!(df.height(), 3);
        assert!(df.get_column_index("notes").is_some());
    }

    #[test]
    fn test_missing_columns_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "noc_regions.csv", "NOC,country\nCHN,China\n");

        match DataLoader::read_regions(&path) {
            Err(LoaderError::MissingColumns { columns, .. }) => {
                assert_eq!(columns, vec!["region".to_string()]);
            }
            other => panic!("expected MissingColumns, got {:?}", other.map(|df| df.height())),
        }
    }

    #[test]
    fn test_unreadable_file_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does_not_exist.csv");

        let err = DataLoader::read_events(&path).unwrap_err();
        assert!(matches!(err, LoaderError::Csv { .. }));
    }
}
