//! Squared Pearson correlations and the two ranking flows built on them.

pub mod correlation;
pub mod predictors;
pub mod stability;
