use std::io::{self, Write};

use anyhow::{Context, Result};
use stat_predictive_power::analysis::stability::rank_stability;
use stat_predictive_power::config::{self, DEFAULT_SEASONS, STABILITY_RATE_STATS};
use stat_predictive_power::data::loader::load_file;
use stat_predictive_power::report::write_stability_table;

fn main() -> Result<()> {
    env_logger::init();

    let path = config::csv_path_from_args(std::env::args());
    let table = load_file(&path, &STABILITY_RATE_STATS)
        .with_context(|| format!("loading {}", path.display()))?;
    table
        .require_columns(&config::input_columns())
        .with_context(|| format!("checking columns of {}", path.display()))?;

    let ranking = rank_stability(&table, &STABILITY_RATE_STATS, DEFAULT_SEASONS)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_stability_table(&mut out, &ranking, DEFAULT_SEASONS)?;
    out.flush()?;
    Ok(())
}
