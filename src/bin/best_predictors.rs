use std::io::{self, Write};

use anyhow::{Context, Result};
use stat_predictive_power::analysis::predictors::rank_predictors;
use stat_predictive_power::config::{self, PREDICTOR_RATE_STATS, STATS_OF_INTEREST};
use stat_predictive_power::data::loader::load_file;
use stat_predictive_power::report::write_predictor_report;

fn main() -> Result<()> {
    env_logger::init();

    let path = config::csv_path_from_args(std::env::args());
    let table = load_file(&path, &PREDICTOR_RATE_STATS)
        .with_context(|| format!("loading {}", path.display()))?;
    table
        .require_columns(&config::input_columns())
        .with_context(|| format!("checking columns of {}", path.display()))?;

    let rankings = rank_predictors(&table, &PREDICTOR_RATE_STATS, &STATS_OF_INTEREST)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_predictor_report(&mut out, &rankings)?;
    out.flush()?;
    Ok(())
}
