use log::{debug, warn};

use crate::error::{Result, StatsError};

/// Pearson correlation coefficient of two paired vectors.
///
/// NaN values are not filtered and yield a NaN coefficient. Fewer than two
/// observations or a zero-variance vector is a `DegenerateCorrelation`.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(StatsError::DegenerateCorrelation {
            reason: format!("{} paired observations, need at least 2", x.len()),
        });
    }

    // A constant vector leaves rounding noise in its variance, so test
    // the values themselves.
    if is_constant(x) || is_constant(y) {
        return Err(StatsError::DegenerateCorrelation {
            reason: "zero variance".to_string(),
        });
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    Ok((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|v| *v == values[0])
}

/// Coefficient of determination: Pearson r squared, sign discarded.
pub fn squared_pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    pearson(x, y).map(|r| r * r)
}

/// `squared_pearson` for a named stat, where a degenerate pair is logged
/// and reported as `None` instead of failing the whole run.
pub(crate) fn squared_or_skip(stat: &str, x: &[f64], y: &[f64]) -> Result<Option<f64>> {
    match squared_pearson(x, y) {
        Ok(r2) => {
            debug!("{stat}: r^2 = {r2}");
            Ok(Some(r2))
        }
        Err(StatsError::DegenerateCorrelation { reason }) => {
            warn!("Skipping {stat}: {reason}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RankedStat {
    pub stat: String,
    pub r_squared: f64,
}

/// Stats ordered by descending r squared.
///
/// The sort is stable, so equal values keep their input order, and NaN
/// goes after every real value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<RankedStat>,
}

impl Ranking {
    pub fn from_unsorted(mut entries: Vec<RankedStat>) -> Self {
        fn key(v: f64) -> f64 {
            if v.is_nan() {
                f64::NEG_INFINITY
            } else {
                v
            }
        }
        entries.sort_by(|a, b| key(b.r_squared).total_cmp(&key(a.r_squared)));
        Ranking { entries }
    }

    pub fn entries(&self) -> &[RankedStat] {
        &self.entries
    }

    pub fn top(&self) -> Option<&RankedStat> {
        self.entries.first()
    }

    pub fn get(&self, stat: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.stat == stat)
            .map(|e| e.r_squared)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
