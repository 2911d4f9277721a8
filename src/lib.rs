//! Rank baseball rate stats by squared Pearson correlation.
//!
//! - [`analysis::predictors`]: which rate stats best explain each stat of
//!   interest within the same rows.
//! - [`analysis::stability`]: which rate stats carry over best from one
//!   season to the next for the same player.

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod report;

pub use error::{Result, StatsError};
