use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use super::model::{BattingTable, Cell, SeasonRecord};
use crate::error::{Result, StatsError};

pub const NAME_COLUMN: &str = "Name";
pub const SEASON_COLUMN: &str = "Season";
pub const PA_COLUMN: &str = "PA";
pub const HR_COLUMN: &str = "HR";
/// Derived: home runs per plate appearance.
pub const HR_RATE_COLUMN: &str = "HRRate";

/// The identifying fields of a row; every other column becomes a [`Cell`].
#[derive(Debug, Deserialize)]
struct RowKey {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Season")]
    season: i32,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load, normalize and extend a season-stats CSV.
///
/// Every name in `rate_stats` must be a column of the file. Those ending
/// in `%` are normalized with [`parse_percentage`], and `HRRate` is
/// appended as `HR / PA`.
pub fn load_file(path: &Path, rate_stats: &[&str]) -> Result<BattingTable> {
    let file = File::open(path)?;
    let table = load_reader(file, rate_stats)?;
    info!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.column_names.len(),
        path.display()
    );
    Ok(table)
}

/// Same as [`load_file`] over any reader.
pub fn load_reader<R: Read>(reader: R, rate_stats: &[&str]) -> Result<BattingTable> {
    let table = read_table(reader, rate_stats)?;
    let table = normalize_percentages(table, rate_stats)?;
    derive_hr_rate(table)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

fn verify_required_columns(headers: &[String], rate_stats: &[&str]) -> Result<()> {
    let headers_set: HashSet<&str> = headers.iter().map(String::as_str).collect();
    let required = [NAME_COLUMN, SEASON_COLUMN, PA_COLUMN, HR_COLUMN];

    for column in required.iter().chain(rate_stats) {
        if !headers_set.contains(column) {
            return Err(StatsError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

fn read_table<R: Read>(reader: R, rate_stats: &[&str]) -> Result<BattingTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let header_record = rdr.headers()?.clone();
    let headers: Vec<String> = header_record.iter().map(str::to_string).collect();
    verify_required_columns(&headers, rate_stats)?;

    let column_names: Vec<String> = headers
        .iter()
        .filter(|h| *h != NAME_COLUMN && *h != SEASON_COLUMN)
        .cloned()
        .collect();

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let key: RowKey = record.deserialize(Some(&header_record))?;

        let mut cells = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            let col_name = &headers[col_idx];
            if col_name == NAME_COLUMN || col_name == SEASON_COLUMN {
                continue;
            }
            cells.insert(col_name.clone(), Cell::from_raw(value.trim()));
        }

        records.push(SeasonRecord {
            name: key.name,
            season: key.season,
            cells,
        });
    }

    Ok(BattingTable::new(records, column_names))
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Strip a trailing `%` (and any whitespace before it) and parse the rest.
///
/// The value is kept on its percentage scale: `"25.3%"` gives `25.3`.
pub fn parse_percentage(raw: &str) -> Option<f64> {
    let residual = match raw.trim_end().strip_suffix('%') {
        Some(rest) => rest.trim_end(),
        None => raw,
    };
    residual.trim().parse::<f64>().ok()
}

/// Convert every `%`-suffixed stat in `rate_stats` to numbers.
pub fn normalize_percentages(table: BattingTable, rate_stats: &[&str]) -> Result<BattingTable> {
    rate_stats
        .iter()
        .filter(|stat| stat.ends_with('%'))
        .try_fold(table, |table, stat| {
            debug!("Normalizing percentage column {stat}");
            table.map_column(stat, |row, cell| match cell {
                Cell::Text(raw) => parse_percentage(raw).map(Cell::Number).ok_or_else(|| {
                    StatsError::Parse {
                        column: stat.to_string(),
                        row,
                        value: raw.clone(),
                    }
                }),
                other => Ok(other.clone()),
            })
        })
}

/// Append `HRRate = HR / PA` row by row.
pub fn derive_hr_rate(table: BattingTable) -> Result<BattingTable> {
    let hr = table.column(HR_COLUMN)?;
    let pa = table.column(PA_COLUMN)?;
    let rate = hr.iter().zip(&pa).map(|(h, p)| h / p).collect();
    table.with_column(HR_RATE_COLUMN, rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Name,Season,PA,HR,BB%,AVG\n";

    fn load(body: &str) -> Result<BattingTable> {
        let csv = format!("{HEADER}{body}");
        load_reader(csv.as_bytes(), &["BB%", "AVG"])
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("12.5%"), Some(12.5));
        assert_eq!(parse_percentage("0%"), Some(0.0));
        assert_eq!(parse_percentage("25.3 %"), Some(25.3));
        assert_eq!(parse_percentage("7.1"), Some(7.1));
        assert_eq!(parse_percentage("abc%"), None);
        assert_eq!(parse_percentage("%"), None);
    }

    #[test]
    fn test_load_normalizes_percentages() {
        let table = load("Mike Trout,2017,507,33,17.8 %,.306\nJoey Votto,2017,707,36,19.0%,.320\n")
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("BB%").unwrap(), vec![17.8, 19.0]);
        assert_eq!(table.column("AVG").unwrap(), vec![0.306, 0.320]);
        assert_eq!(table.records[1].name, "Joey Votto");
        assert_eq!(table.records[1].season, 2017);
    }

    #[test]
    fn test_load_malformed_percentage() {
        let err = load("A,2017,500,20,abc%,.250\n").unwrap_err();
        match err {
            StatsError::Parse { column, row, value } => {
                assert_eq!(column, "BB%");
                assert_eq!(row, 0);
                assert_eq!(value, "abc%");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_hr_rate() {
        let table = load("A,2018,500,20,10.0%,.250\n").unwrap();
        let rate = table.column(HR_RATE_COLUMN).unwrap();
        assert!((rate[0] - 0.04).abs() < 1e-12);
        assert!(table.has_column(HR_RATE_COLUMN));
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Name,Season,PA,HR,AVG\nA,2017,500,20,.250\n";
        match load_reader(csv.as_bytes(), &["BB%", "AVG"]) {
            Err(StatsError::MissingColumn(c)) => assert_eq!(c, "BB%"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_file(Path::new("does/not/exist.csv"), &[]).unwrap_err();
        assert!(matches!(err, StatsError::Io(_)));
    }
}
