//! End-to-end classification pipeline
//!
//! One-shot batch run: load -> hash -> split -> train -> score -> evaluate.
//! Row-wise transforms run on a worker pool scoped to the run; any error
//! aborts the whole pipeline.

use crate::config::PipelineConfig;
use crate::data::loader::load_reviews;
use crate::data::split::train_test_split;
use crate::data::types::LabeledExample;
use crate::features::hashing::HashingVectorizer;
use crate::features::tokenizer::Tokenizer;
use crate::metrics::classification::BinaryClassificationMetrics;
use crate::models::svm::{SvmError, Trainer};
use anyhow::{ensure, Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// Number of (score, label) pairs surfaced in the report
const SAMPLE_SIZE: usize = 10;

/// Summary of one classification run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Area under the precision-recall curve
    pub auprc: f64,
    /// Area under the ROC curve
    pub auroc: f64,
    /// Records loaded from the input file
    pub n_records: usize,
    /// Malformed lines skipped (lenient mode only)
    pub n_skipped: usize,
    /// Training split size
    pub n_train: usize,
    /// Test split size
    pub n_test: usize,
    /// First raw (score, label) pairs of the scored test set
    pub sample: Vec<(f64, u8)>,
}

/// Run the full pipeline and return the evaluation report
pub fn run(config: &PipelineConfig, trainer: &dyn Trainer) -> Result<RunReport> {
    config.validate()?;

    let summary = load_reviews(&config.input_path, config.lenient)
        .with_context(|| format!("failed to load {}", config.input_path.display()))?;
    info!(
        "loaded {} reviews from {} ({} skipped)",
        summary.reviews.len(),
        config.input_path.display(),
        summary.skipped
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .context("failed to build worker pool")?;

    let tokenizer = Tokenizer::new();
    let vectorizer = HashingVectorizer::new(config.dimension);

    pool.install(|| {
        let examples: Vec<LabeledExample> = summary
            .reviews
            .par_iter()
            .map(|review| LabeledExample {
                features: vectorizer.transform(&tokenizer.tokenize(&review.text)),
                label: review.label,
            })
            .collect();

        let n_records = examples.len();
        let (train, test) = train_test_split(examples, config.train_fraction, config.seed);
        info!("split: {} train / {} test", train.len(), test.len());
        ensure!(!train.is_empty(), "training split is empty");
        ensure!(!test.is_empty(), "test split is empty");

        let model = trainer.train(&train).context("training failed")?;
        info!("trained on {} examples", train.len());

        let scored: Vec<(f64, u8)> = test
            .par_iter()
            .map(|ex| Ok((model.decision_function(&ex.features)?, ex.label)))
            .collect::<Result<_, SvmError>>()
            .context("scoring failed")?;

        let metrics = BinaryClassificationMetrics::new(&scored);
        let sample: Vec<(f64, u8)> = scored.iter().take(SAMPLE_SIZE).copied().collect();

        Ok(RunReport {
            auprc: metrics.area_under_pr(),
            auroc: metrics.area_under_roc(),
            n_records,
            n_skipped: summary.skipped,
            n_train: train.len(),
            n_test: test.len(),
            sample,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::svm::{SgdTrainer, SvmConfig};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_reviews(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn separable_file() -> NamedTempFile {
        let lines: Vec<String> = (0..30)
            .map(|i| {
                if i % 2 == 0 {
                    "good\t1".to_string()
                } else {
                    "bad\t0".to_string()
                }
            })
            .collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        write_reviews(&refs)
    }

    fn test_config(file: &NamedTempFile) -> PipelineConfig {
        PipelineConfig {
            input_path: file.path().to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_separable_data_reaches_perfect_auroc() {
        let file = separable_file();
        let trainer = SgdTrainer::new(SvmConfig::default());

        let report = run(&test_config(&file), &trainer).unwrap();

        assert!((report.auroc - 1.0).abs() < 1e-12);
        assert_eq!(report.n_records, 30);
        assert_eq!(report.n_train, 18);
        assert_eq!(report.n_test, 12);
        assert_eq!(report.sample.len(), 10);
    }

    #[test]
    fn test_runs_are_reproducible() {
        let file = separable_file();
        let trainer = SgdTrainer::new(SvmConfig::default());
        let config = test_config(&file);

        let first = run(&config, &trainer).unwrap();
        let second = run(&config, &trainer).unwrap();

        assert_eq!(first.auprc, second.auprc);
        assert_eq!(first.auroc, second.auroc);
        assert_eq!(first.sample, second.sample);
    }

    #[test]
    fn test_metrics_in_unit_interval() {
        let file = write_reviews(&[
            "dull and slow\t0",
            "a fine film\t1",
            "terrible acting\t0",
            "really enjoyed it\t1",
            "not worth it\t0",
            "would watch again\t1",
            "fell asleep\t0",
            "sharp writing\t1",
            "waste of time\t0",
            "great cast\t1",
        ]);
        let trainer = SgdTrainer::new(SvmConfig {
            iterations: 100,
            ..Default::default()
        });

        let report = run(&test_config(&file), &trainer).unwrap();

        assert!((0.0..=1.0).contains(&report.auprc));
        assert!((0.0..=1.0).contains(&report.auroc));
    }

    #[test]
    fn test_strict_mode_aborts_on_malformed_line() {
        let file = write_reviews(&["fine\t1", "broken line", "bad\t0"]);
        let trainer = SgdTrainer::new(SvmConfig::default());

        let err = run(&test_config(&file), &trainer).unwrap_err();

        assert!(err.to_string().contains("failed to load"));
    }

    #[test]
    fn test_lenient_mode_counts_skips() {
        let mut lines = vec!["broken line"];
        let owned: Vec<String> = (0..20)
            .map(|i| {
                if i % 2 == 0 {
                    "good\t1".to_string()
                } else {
                    "bad\t0".to_string()
                }
            })
            .collect();
        lines.extend(owned.iter().map(String::as_str));
        let file = write_reviews(&lines);

        let config = PipelineConfig {
            input_path: file.path().to_path_buf(),
            lenient: true,
            ..Default::default()
        };
        let trainer = SgdTrainer::new(SvmConfig {
            iterations: 100,
            ..Default::default()
        });

        let report = run(&config, &trainer).unwrap();

        assert_eq!(report.n_skipped, 1);
        assert_eq!(report.n_records, 20);
    }

    #[test]
    fn test_missing_input_fails() {
        let config = PipelineConfig {
            input_path: "/nonexistent/reviews.txt".into(),
            ..Default::default()
        };
        let trainer = SgdTrainer::new(SvmConfig::default());

        assert!(run(&config, &trainer).is_err());
    }
}
