//! Small hand-built dataset shared by the unit tests.
//!
//! The raw events cover the cases the query layer has to get right:
//! - Alice and Beth share a relay gold, recorded once per swimmer
//! - Carl's marathon bronze appears twice as an exact duplicate row
//! - Eve competes for an NOC with no region mapping
//! - Frank's row is from the Winter games
//! - Dmitri competed for URS, which maps to the same region as RUS

use crate::data::preprocess;
use polars::prelude::*;

pub fn raw_events() -> DataFrame {
    df!(
        "ID" => [1i64, 2, 1, 3, 1, 4, 5, 6, 3, 7],
        "Name" => ["Alice", "Beth", "Alice", "Carl", "Alice", "Dmitri", "Eve", "Frank", "Carl", "Gus"],
        "Sex" => ["F", "F", "F", "M", "F", "M", "F", "M", "M", "M"],
        "Age" => [Some(24.0), Some(22.0), Some(24.0), Some(28.0), Some(28.0), Some(30.0), Some(19.0), Some(25.0), Some(28.0), None],
        "Height" => [Some(170.0), Some(172.0), Some(170.0), Some(185.0), Some(170.0), Some(190.0), None, Some(180.0), Some(185.0), Some(178.0)],
        "Weight" => [Some(60.0), Some(62.0), Some(60.0), Some(80.0), Some(60.0), Some(95.0), None, Some(75.0), Some(80.0), Some(85.0)],
        "Team" => ["United States", "United States", "United States", "Kenya", "United States", "Soviet Union", "Atlantis", "Norway", "Kenya", "Kenya"],
        "NOC" => ["USA", "USA", "USA", "KEN", "USA", "URS", "XXX", "NOR", "KEN", "KEN"],
        "Games" => ["2000 Summer", "2000 Summer", "2000 Summer", "2000 Summer", "2004 Summer", "1988 Summer", "2004 Summer", "2002 Winter", "2000 Summer", "2004 Summer"],
        "Year" => [2000i64, 2000, 2000, 2000, 2004, 1988, 2004, 2002, 2000, 2004],
        "Season" => ["Summer", "Summer", "Summer", "Summer", "Summer", "Summer", "Summer", "Winter", "Summer", "Summer"],
        "City" => ["Sydney", "Sydney", "Sydney", "Sydney", "Athina", "Seoul", "Athina", "Salt Lake City", "Sydney", "Athina"],
        "Sport" => ["Swimming", "Swimming", "Swimming", "Athletics", "Swimming", "Wrestling", "Athletics", "Alpine Skiing", "Athletics", "Athletics"],
        "Event" => [
            "Swimming Women's 4 x 100 metres Freestyle Relay",
            "Swimming Women's 4 x 100 metres Freestyle Relay",
            "Swimming Women's 100 metres Freestyle",
            "Athletics Men's Marathon",
            "Swimming Women's 100 metres Freestyle",
            "Wrestling Men's Heavyweight, Freestyle",
            "Athletics Women's 100 metres",
            "Alpine Skiing Men's Downhill",
            "Athletics Men's Marathon",
            "Athletics Men's Marathon",
        ],
        "Medal" => [Some("Gold"), Some("Gold"), Some("Silver"), Some("Bronze"), Some("Gold"), Some("Gold"), None, Some("Gold"), Some("Bronze"), None],
    )
    .unwrap()
}

pub fn raw_regions() -> DataFrame {
    df!(
        "NOC" => ["USA", "KEN", "URS", "RUS", "NOR"],
        "region" => ["USA", "Kenya", "Russia", "Russia", "Norway"],
        "notes" => [None, None, Some("Soviet Union"), None, None::<&str>],
    )
    .unwrap()
}

/// The preprocessed Summer table built from the raw fixture.
pub fn analysis_table() -> DataFrame {
    preprocess(&raw_events(), &raw_regions(), "Summer").unwrap()
}
