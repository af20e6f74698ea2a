//! Linear Support Vector Machine trained with subgradient descent
//!
//! Minimizes hinge loss with an L2 penalty over sparse term-count vectors.
//! Labels {0, 1} are mapped to {-1, +1} internally; the model carries no
//! intercept, and scoring returns the raw unthresholded margin.

use crate::data::types::{LabeledExample, SparseVector};
use ndarray::Array1;
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

/// Examples per partial gradient sum. Partials are combined in slice
/// order, so training results do not depend on thread scheduling.
const GRADIENT_CHUNK: usize = 256;

/// Errors for SVM training and scoring
#[derive(Error, Debug)]
pub enum SvmError {
    #[error("Model has not been fitted yet")]
    NotFitted,

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Training set is empty")]
    EmptyTrainingSet,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Training hyperparameters
#[derive(Debug, Clone)]
pub struct SvmConfig {
    /// Number of subgradient steps
    pub iterations: usize,
    /// Initial step size; step at iteration t is `learning_rate / sqrt(t)`
    pub learning_rate: f64,
    /// L2 regularization strength
    pub l2_penalty: f64,
}

impl Default for SvmConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            learning_rate: 1.0,
            l2_penalty: 0.01,
        }
    }
}

impl SvmConfig {
    fn validate(&self) -> Result<(), SvmError> {
        if self.iterations == 0 {
            return Err(SvmError::InvalidParameter(
                "iterations must be positive".to_string(),
            ));
        }
        if self.learning_rate <= 0.0 {
            return Err(SvmError::InvalidParameter(
                "learning rate must be positive".to_string(),
            ));
        }
        if self.l2_penalty < 0.0 {
            return Err(SvmError::InvalidParameter(
                "l2 penalty must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Linear SVM classifier
#[derive(Debug, Clone)]
pub struct LinearSvm {
    /// Fitted weight vector
    pub weights: Option<Array1<f64>>,
    /// Training configuration
    config: SvmConfig,
    /// Regularized hinge loss per iteration
    pub loss_history: Vec<f64>,
}

impl LinearSvm {
    pub fn new(config: SvmConfig) -> Self {
        Self {
            weights: None,
            config,
            loss_history: Vec::new(),
        }
    }

    /// Fit with full-batch subgradient descent on hinge loss
    ///
    /// Runs for the configured number of iterations with no early
    /// stopping. All examples must share one feature dimension.
    pub fn fit(&mut self, examples: &[LabeledExample]) -> Result<(), SvmError> {
        self.config.validate()?;

        let first = examples.first().ok_or(SvmError::EmptyTrainingSet)?;
        let dim = first.features.dimension();
        for ex in examples {
            if ex.features.dimension() != dim {
                return Err(SvmError::DimensionMismatch {
                    expected: dim,
                    got: ex.features.dimension(),
                });
            }
        }

        let n = examples.len() as f64;
        let mut weights = Array1::<f64>::zeros(dim);
        self.loss_history.clear();

        for iter in 1..=self.config.iterations {
            let partials: Vec<(Array1<f64>, f64)> = examples
                .par_chunks(GRADIENT_CHUNK)
                .map(|chunk| {
                    let mut grad = Array1::<f64>::zeros(dim);
                    let mut hinge = 0.0;
                    for ex in chunk {
                        let y = f64::from(ex.label) * 2.0 - 1.0;
                        let margin = y * ex.features.dot(&weights);
                        if margin < 1.0 {
                            ex.features.add_scaled_to(-y, &mut grad);
                            hinge += 1.0 - margin;
                        }
                    }
                    (grad, hinge)
                })
                .collect();

            let mut grad = Array1::<f64>::zeros(dim);
            let mut hinge = 0.0;
            for (g, h) in partials {
                grad += &g;
                hinge += h;
            }

            grad /= n;
            grad += &(&weights * self.config.l2_penalty);

            let step = self.config.learning_rate / (iter as f64).sqrt();
            weights -= &(&grad * step);

            let loss = hinge / n + 0.5 * self.config.l2_penalty * weights.dot(&weights);
            self.loss_history.push(loss);

            if iter % 100 == 0 {
                debug!("iteration {iter}: loss {loss:.6}");
            }
        }

        self.weights = Some(weights);
        Ok(())
    }

    /// Raw decision value `w . x` without thresholding
    pub fn decision_function(&self, features: &SparseVector) -> Result<f64, SvmError> {
        let weights = self.weights.as_ref().ok_or(SvmError::NotFitted)?;
        if features.dimension() != weights.len() {
            return Err(SvmError::DimensionMismatch {
                expected: weights.len(),
                got: features.dimension(),
            });
        }
        Ok(features.dot(weights))
    }

    /// Predicted class label with the decision boundary at zero
    pub fn predict(&self, features: &SparseVector) -> Result<u8, SvmError> {
        Ok(u8::from(self.decision_function(features)? >= 0.0))
    }
}

/// A training capability producing a fitted linear model
///
/// The driver only depends on this contract, so alternative trainers can
/// be substituted without changing its shape.
pub trait Trainer: Send + Sync {
    fn train(&self, examples: &[LabeledExample]) -> Result<LinearSvm, SvmError>;
}

/// Subgradient-descent trainer
#[derive(Debug, Clone, Default)]
pub struct SgdTrainer {
    config: SvmConfig,
}

impl SgdTrainer {
    pub fn new(config: SvmConfig) -> Self {
        Self { config }
    }
}

impl Trainer for SgdTrainer {
    fn train(&self, examples: &[LabeledExample]) -> Result<LinearSvm, SvmError> {
        let mut model = LinearSvm::new(self.config.clone());
        model.fit(examples)?;
        Ok(model)
    }
}
