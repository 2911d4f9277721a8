use std::path::PathBuf;

use crate::data::loader::HR_RATE_COLUMN;
use crate::data::pivot::SeasonPair;

/// Per-season stats for every hitter with at least 200 PA in 2017 or 2018,
/// exported from the FanGraphs leaderboards:
/// https://www.fangraphs.com/leaders.aspx?pos=np&stats=bat&lg=all&qual=200&type=c,4,6,11,12,13,21,34,35,41,23,37,38,44,45,43,102,103,104,105,106,107&season=2018&month=0&season1=2017&ind=1&team=0&rost=0&age=0&filter=&players=0&sort=5,a
pub const CSV_FILENAME: &str = "hitters_2017_2018.csv";

pub const DEFAULT_SEASONS: SeasonPair = SeasonPair {
    from: 2017,
    to: 2018,
};

/// Candidate predictors for the stats of interest.
pub const PREDICTOR_RATE_STATS: [&str; 14] = [
    "BB%",
    "K%",
    "AVG",
    "OBP",
    "SLG",
    "GB%",
    "FB%",
    "LD%",
    "O-Swing%",
    "Z-Swing%",
    "Swing%",
    "O-Contact%",
    "Z-Contact%",
    "Contact%",
];

// RBI, R and SB are counting stats; rate versions would compare better.
pub const STATS_OF_INTEREST: [&str; 6] = [HR_RATE_COLUMN, "OBP", "AVG", "RBI", "R", "SB"];

/// Stats checked for season-to-season stability, including batted-ball quality.
pub const STABILITY_RATE_STATS: [&str; 17] = [
    "BB%",
    "K%",
    "AVG",
    "OBP",
    "SLG",
    "GB%",
    "FB%",
    "LD%",
    "O-Swing%",
    "Z-Swing%",
    "Swing%",
    "O-Contact%",
    "Z-Contact%",
    "Contact%",
    "Hard%",
    "Soft%",
    "Med%",
];

/// Every input column either flow reads, derived `HRRate` aside.
/// Both binaries require all of them.
pub fn input_columns() -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = STABILITY_RATE_STATS.to_vec();
    for stat in PREDICTOR_RATE_STATS.iter().chain(&STATS_OF_INTEREST) {
        if *stat != HR_RATE_COLUMN && !columns.contains(stat) {
            columns.push(*stat);
        }
    }
    columns
}

/// CSV path from the first command-line argument, else `CSV_FILENAME`
/// in the working directory.
pub fn csv_path_from_args<I>(mut args: I) -> PathBuf
where
    I: Iterator<Item = String>,
{
    args.nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CSV_FILENAME))
}
