//! Pipeline configuration
//!
//! Defaults: 10 000 hashed feature buckets, a 60/40 split seeded with 11,
//! and 4 worker threads.

use anyhow::{ensure, Result};
use std::path::PathBuf;

/// Configuration for one classification run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Labeled reviews file, one `<review text>\t<label>` per line
    pub input_path: PathBuf,
    /// Number of hashed feature buckets
    pub dimension: usize,
    /// Fraction of records used for training
    pub train_fraction: f64,
    /// Seed for the train/test shuffle
    pub seed: u64,
    /// Worker threads for row-wise transforms
    pub threads: usize,
    /// Skip malformed lines instead of aborting
    pub lenient: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("imdb_labelled.txt"),
            dimension: 10_000,
            train_fraction: 0.6,
            seed: 11,
            threads: 4,
            lenient: false,
        }
    }
}

impl PipelineConfig {
    /// Check that all parameters are usable before the pipeline starts
    pub fn validate(&self) -> Result<()> {
        ensure!(self.dimension > 0, "feature dimension must be positive");
        ensure!(
            (0.0..=1.0).contains(&self.train_fraction),
            "train fraction must lie in [0, 1], got {}",
            self.train_fraction
        );
        ensure!(self.threads > 0, "thread count must be positive");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let config = PipelineConfig::default();
        assert_eq!(config.dimension, 10_000);
        assert!((config.train_fraction - 0.6).abs() < 1e-12);
        assert_eq!(config.seed, 11);
        assert_eq!(config.threads, 4);
        assert!(!config.lenient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_fraction() {
        let config = PipelineConfig {
            train_fraction: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let config = PipelineConfig {
            dimension: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
