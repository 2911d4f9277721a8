use log::info;

use super::correlation::{squared_or_skip, RankedStat, Ranking};
use crate::data::model::BattingTable;
use crate::data::pivot::{SeasonPair, SeasonPivot};
use crate::error::Result;

/// Rank rate stats by how well a player's value in `seasons.from`
/// explains the same stat in `seasons.to`.
pub fn rank_stability(
    table: &BattingTable,
    rate_stats: &[&str],
    seasons: SeasonPair,
) -> Result<Ranking> {
    let pivot = SeasonPivot::new(table, rate_stats)?;
    info!(
        "Comparing {} players across seasons {} and {}",
        pivot.players(),
        seasons.from,
        seasons.to
    );

    let mut entries = Vec::with_capacity(rate_stats.len());
    for &stat in rate_stats {
        let (from, to) = pivot.paired(stat, seasons)?;
        if let Some(r_squared) = squared_or_skip(stat, &from, &to)? {
            entries.push(RankedStat {
                stat: stat.to_string(),
                r_squared,
            });
        }
    }
    Ok(Ranking::from_unsorted(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Cell, SeasonRecord};

    const SEASONS: SeasonPair = SeasonPair { from: 2017, to: 2018 };

    fn record(name: &str, season: i32, bb: f64, k: Option<f64>) -> SeasonRecord {
        let k = k.map(Cell::Number).unwrap_or(Cell::Missing);
        SeasonRecord {
            name: name.to_string(),
            season,
            cells: [
                ("BB%".to_string(), Cell::Number(bb)),
                ("K%".to_string(), k),
            ]
            .into_iter()
            .collect(),
        }
    }

    fn table(records: Vec<SeasonRecord>) -> BattingTable {
        BattingTable::new(records, vec!["BB%".into(), "K%".into()])
    }

    #[test]
    fn test_linear_stat_ranks_first() {
        let t = table(vec![
            record("A", 2017, 8.0, Some(20.0)),
            record("A", 2018, 9.0, Some(25.0)),
            record("B", 2017, 10.0, Some(22.0)),
            record("B", 2018, 11.0, Some(19.0)),
            record("C", 2017, 12.0, Some(18.0)),
            record("C", 2018, 13.0, Some(21.0)),
        ]);
        let ranking = rank_stability(&t, &["K%", "BB%"], SEASONS).unwrap();
        let top = ranking.top().unwrap();
        assert_eq!(top.stat, "BB%");
        assert!((top.r_squared - 1.0).abs() < 1e-9);
        assert!(ranking.get("K%").unwrap() < 0.5);
    }

    #[test]
    fn test_player_without_both_seasons_excluded() {
        // D only has 2017; including it with any 2018 value would break linearity.
        let t = table(vec![
            record("A", 2017, 8.0, None),
            record("A", 2018, 9.0, None),
            record("B", 2017, 10.0, None),
            record("B", 2018, 11.0, None),
            record("C", 2017, 12.0, None),
            record("C", 2018, 13.0, None),
            record("D", 2017, 30.0, None),
        ]);
        let ranking = rank_stability(&t, &["BB%"], SEASONS).unwrap();
        assert!((ranking.get("BB%").unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_stat_absent_in_a_season_is_skipped() {
        let t = table(vec![
            record("A", 2017, 8.0, Some(20.0)),
            record("A", 2018, 9.0, None),
            record("B", 2017, 10.0, Some(22.0)),
            record("B", 2018, 11.0, None),
        ]);
        let ranking = rank_stability(&t, &["BB%", "K%"], SEASONS).unwrap();
        assert_eq!(ranking.len(), 1);
        assert!(ranking.get("K%").is_none());
    }
}
