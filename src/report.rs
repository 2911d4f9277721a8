use std::io::{self, Write};

use crate::analysis::correlation::Ranking;
use crate::analysis::predictors::PredictorRanking;
use crate::data::pivot::SeasonPair;

const RULE_WIDTH: usize = 45;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Shortest round-trip float text with a `.0` on whole numbers and
/// exponent notation (`5e-05`, `1.5e+16`) outside `1e-4 <= |v| < 1e16`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v == 0.0 {
        return if v.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let sci = format!("{v:e}");
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if !(-4..16).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.abs());
    }

    let plain = format!("{v}");
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

// ---------------------------------------------------------------------------
// Predictor blocks
// ---------------------------------------------------------------------------

/// One block per stat of interest: ruled title, header, rows, blank line.
pub fn write_predictor_block<W: Write>(out: &mut W, block: &PredictorRanking) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "{}", block.target)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "{:<20} {:<15}", "Target Stat", "Correlation")?;
    for entry in block.ranking.entries() {
        writeln!(out, "{:<20} {:<15}", entry.stat, format_float(entry.r_squared))?;
    }
    writeln!(out)
}

pub fn write_predictor_report<W: Write>(out: &mut W, blocks: &[PredictorRanking]) -> io::Result<()> {
    blocks
        .iter()
        .try_for_each(|block| write_predictor_block(out, block))
}

// ---------------------------------------------------------------------------
// Stability table
// ---------------------------------------------------------------------------

/// A single table: header, rule, rows.
pub fn write_stability_table<W: Write>(
    out: &mut W,
    ranking: &Ranking,
    seasons: SeasonPair,
) -> io::Result<()> {
    let heading = format!("Correlation, {} to {}", seasons.from, seasons.to);
    writeln!(out, "{:<20} {:<15}", "Stat", heading)?;
    writeln!(out, "{}", rule())?;
    for entry in ranking.entries() {
        writeln!(out, "{:<20} {:<20}", entry.stat, format_float(entry.r_squared))?;
    }
    Ok(())
}
