use log::info;

use super::correlation::{squared_or_skip, RankedStat, Ranking};
use crate::data::model::BattingTable;
use crate::error::Result;

/// How well each rate stat explains one stat of interest.
#[derive(Debug, Clone)]
pub struct PredictorRanking {
    pub target: String,
    pub ranking: Ranking,
}

/// Rank every rate stat (except `target` itself) by r squared against `target`,
/// using whole columns across all rows.
pub fn rank_against(table: &BattingTable, target: &str, rate_stats: &[&str]) -> Result<Ranking> {
    let target_values = table.column(target)?;

    let mut entries = Vec::with_capacity(rate_stats.len());
    for &stat in rate_stats {
        if stat == target {
            continue;
        }
        let values = table.column(stat)?;
        if let Some(r_squared) = squared_or_skip(stat, &values, &target_values)? {
            entries.push(RankedStat {
                stat: stat.to_string(),
                r_squared,
            });
        }
    }
    Ok(Ranking::from_unsorted(entries))
}

/// One ranking per stat of interest, in the order given.
pub fn rank_predictors(
    table: &BattingTable,
    rate_stats: &[&str],
    targets: &[&str],
) -> Result<Vec<PredictorRanking>> {
    targets
        .iter()
        .map(|&target| -> Result<PredictorRanking> {
            info!("Ranking predictors of {target}");
            Ok(PredictorRanking {
                target: target.to_string(),
                ranking: rank_against(table, target, rate_stats)?,
            })
        })
        .collect()
}
