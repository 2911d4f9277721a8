use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, StatsError};

// ---------------------------------------------------------------------------
// Cell – a single value in a stat column
// ---------------------------------------------------------------------------

/// A loosely-typed CSV cell. Columns are parsed lazily: a cell stays
/// `Text` until a flow asks for it as a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s}"),
            Cell::Missing => write!(f, "<missing>"),
        }
    }
}

impl Cell {
    /// Guess the cell type from raw CSV text.
    pub fn from_raw(s: &str) -> Self {
        if s.is_empty() {
            return Cell::Missing;
        }
        match s.parse::<f64>() {
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Text(s.to_string()),
        }
    }

    /// Missing cells read as NaN; text cells do not read at all.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Missing => Some(f64::NAN),
            Cell::Text(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// SeasonRecord – one (player, season) row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SeasonRecord {
    pub name: String,
    pub season: i32,
    /// Every other column: column_name → value.
    pub cells: BTreeMap<String, Cell>,
}

// ---------------------------------------------------------------------------
// BattingTable – the complete loaded dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct BattingTable {
    pub records: Vec<SeasonRecord>,
    /// Stat columns in header order (excludes Name and Season).
    pub column_names: Vec<String>,
}

impl BattingTable {
    pub fn new(records: Vec<SeasonRecord>, column_names: Vec<String>) -> Self {
        BattingTable {
            records,
            column_names,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_names.iter().any(|c| c == name)
    }

    fn require_column(&self, name: &str) -> Result<()> {
        if self.has_column(name) {
            Ok(())
        } else {
            Err(StatsError::MissingColumn(name.to_string()))
        }
    }

    /// Fails on the first of `names` that is not a column.
    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        names.iter().try_for_each(|name| self.require_column(name))
    }

    /// The full column as floats, one entry per row.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        self.require_column(name)?;
        self.records
            .iter()
            .enumerate()
            .map(|(row, rec)| {
                let cell = rec.cells.get(name).unwrap_or(&Cell::Missing);
                cell.as_f64().ok_or_else(|| StatsError::NonNumeric {
                    column: name.to_string(),
                    row,
                    value: cell.to_string(),
                })
            })
            .collect()
    }

    /// Rewrite every cell of `name` through `f(row, cell)`.
    pub fn map_column<F>(mut self, name: &str, f: F) -> Result<Self>
    where
        F: Fn(usize, &Cell) -> Result<Cell>,
    {
        self.require_column(name)?;
        for (row, rec) in self.records.iter_mut().enumerate() {
            let old = rec.cells.remove(name).unwrap_or(Cell::Missing);
            rec.cells.insert(name.to_string(), f(row, &old)?);
        }
        Ok(self)
    }

    /// Attach a derived numeric column, replacing any column of the same name.
    pub fn with_column(mut self, name: &str, values: Vec<f64>) -> Result<Self> {
        if values.len() != self.records.len() {
            return Err(StatsError::LengthMismatch {
                left: self.records.len(),
                right: values.len(),
            });
        }
        for (rec, v) in self.records.iter_mut().zip(values) {
            rec.cells.insert(name.to_string(), Cell::Number(v));
        }
        if !self.has_column(name) {
            self.column_names.push(name.to_string());
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, season: i32, cells: &[(&str, Cell)]) -> SeasonRecord {
        SeasonRecord {
            name: name.to_string(),
            season,
            cells: cells
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    #[test]
    fn test_cell_from_raw() {
        assert_eq!(Cell::from_raw(""), Cell::Missing);
        assert_eq!(Cell::from_raw("0.251"), Cell::Number(0.251));
        assert_eq!(Cell::from_raw("12.5 %"), Cell::Text("12.5 %".into()));
    }

    #[test]
    fn test_column_unknown_name() {
        let table = BattingTable::new(vec![], vec!["AVG".into()]);
        match table.column("OBP") {
            Err(StatsError::MissingColumn(c)) => assert_eq!(c, "OBP"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_column_text_cell_is_an_error() {
        let table = BattingTable::new(
            vec![record("A", 2017, &[("K%", Cell::Text("20%".into()))])],
            vec!["K%".into()],
        );
        assert!(matches!(
            table.column("K%"),
            Err(StatsError::NonNumeric { row: 0, .. })
        ));
    }

    #[test]
    fn test_column_missing_reads_nan() {
        let table = BattingTable::new(
            vec![
                record("A", 2017, &[("AVG", Cell::Number(0.3))]),
                record("B", 2017, &[("AVG", Cell::Missing)]),
            ],
            vec!["AVG".into()],
        );
        let col = table.column("AVG").unwrap();
        assert_eq!(col[0], 0.3);
        assert!(col[1].is_nan());
    }

    #[test]
    fn test_with_column_length_checked() {
        let table = BattingTable::new(vec![record("A", 2017, &[])], vec![]);
        assert!(table.clone().with_column("X", vec![]).is_err());
        let table = table.with_column("X", vec![1.5]).unwrap();
        assert_eq!(table.column_names, vec!["X".to_string()]);
        assert_eq!(table.column("X").unwrap(), vec![1.5]);
    }

    #[test]
    fn test_require_columns() {
        let table = BattingTable::new(vec![], vec!["AVG".into(), "RBI".into()]);
        assert!(table.is_empty());
        assert!(table.require_columns(&["AVG", "RBI"]).is_ok());
        match table.require_columns(&["AVG", "SB", "R"]) {
            Err(StatsError::MissingColumn(c)) => assert_eq!(c, "SB"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_len_and_is_empty() {
        let table = BattingTable::new(vec![record("A", 2018, &[])], vec![]);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }
}
