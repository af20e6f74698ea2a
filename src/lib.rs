//! # Sentiment SVM - Linear SVM Sentiment Classification
//!
//! This library trains a linear Support Vector Machine on short labeled
//! movie-review sentences and evaluates it with ranking metrics. It covers
//! the full workflow:
//!
//! - Loading tab-separated `<review text>\t<label>` files
//! - Feature hashing into fixed-dimension sparse term-count vectors
//! - Reproducible seeded train/test splitting
//! - Hinge-loss SGD training
//! - AUPRC / AUROC evaluation over raw decision scores

pub mod config;
pub mod data;
pub mod features;
pub mod metrics;
pub mod models;
pub mod pipeline;

pub use config::PipelineConfig;
pub use data::loader::{load_reviews, DataError, LoadSummary};
pub use data::split::train_test_split;
pub use data::types::{LabeledExample, Review, SparseVector};
pub use features::hashing::HashingVectorizer;
pub use features::tokenizer::Tokenizer;
pub use metrics::classification::BinaryClassificationMetrics;
pub use models::svm::{LinearSvm, SgdTrainer, SvmConfig, SvmError, Trainer};
pub use pipeline::{run, RunReport};
