use std::collections::BTreeMap;

use log::debug;

use super::model::BattingTable;
use crate::error::{Result, StatsError};

/// The two seasons compared by the stability flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonPair {
    pub from: i32,
    pub to: i32,
}

// ---------------------------------------------------------------------------
// SeasonPivot – wide view keyed by player, then season
// ---------------------------------------------------------------------------

/// Rows indexed by player name with season as a sub-axis.
///
/// Each (player, season) cell points back at the row of the source table,
/// and the pivoted stats are kept as whole columns of that table.
#[derive(Debug, Clone)]
pub struct SeasonPivot {
    rows: BTreeMap<String, BTreeMap<i32, usize>>,
    columns: BTreeMap<String, Vec<f64>>,
}

impl SeasonPivot {
    /// Pivot `stats` of `table`. A player may appear at most once per season.
    pub fn new(table: &BattingTable, stats: &[&str]) -> Result<Self> {
        let mut rows: BTreeMap<String, BTreeMap<i32, usize>> = BTreeMap::new();
        for (idx, rec) in table.records.iter().enumerate() {
            let seasons = rows.entry(rec.name.clone()).or_default();
            if seasons.insert(rec.season, idx).is_some() {
                return Err(StatsError::DuplicateEntry {
                    name: rec.name.clone(),
                    season: rec.season,
                });
            }
        }

        let columns = stats
            .iter()
            .map(|stat| -> Result<(String, Vec<f64>)> {
                Ok((stat.to_string(), table.column(stat)?))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(SeasonPivot { rows, columns })
    }

    /// Number of distinct players.
    pub fn players(&self) -> usize {
        self.rows.len()
    }

    /// Paired `(from, to)` values of `stat` for every player having a
    /// non-NaN value in both seasons. Other players are dropped, not imputed.
    pub fn paired(&self, stat: &str, seasons: SeasonPair) -> Result<(Vec<f64>, Vec<f64>)> {
        let column = self
            .columns
            .get(stat)
            .ok_or_else(|| StatsError::MissingColumn(stat.to_string()))?;

        let mut from = Vec::new();
        let mut to = Vec::new();
        for by_season in self.rows.values() {
            let (Some(&a), Some(&b)) = (by_season.get(&seasons.from), by_season.get(&seasons.to))
            else {
                continue;
            };
            let (va, vb) = (column[a], column[b]);
            if va.is_nan() || vb.is_nan() {
                continue;
            }
            from.push(va);
            to.push(vb);
        }

        debug!(
            "{stat}: {} of {} players present in both {} and {}",
            from.len(),
            self.rows.len(),
            seasons.from,
            seasons.to
        );
        Ok((from, to))
    }
}
