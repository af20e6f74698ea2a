//! Core data types for the classification workflow

use ndarray::Array1;

/// A single labeled movie review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Raw review text
    pub text: String,
    /// Sentiment label, 0 (negative) or 1 (positive)
    pub label: u8,
}

/// A hashed feature vector paired with its label; the unit consumed by
/// training and scoring
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledExample {
    pub features: SparseVector,
    pub label: u8,
}

/// Fixed-dimension sparse vector of term counts
///
/// Indices are sorted ascending and strictly below `dimension`; `values`
/// holds the count for the index at the same position.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    dimension: usize,
    indices: Vec<u32>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Build from parallel index/value vectors
    ///
    /// Indices must be sorted, unique, and within `dimension`.
    pub fn new(dimension: usize, indices: Vec<u32>, values: Vec<f64>) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(indices.iter().all(|&i| (i as usize) < dimension));
        Self {
            dimension,
            indices,
            values,
        }
    }

    /// An all-zero vector
    pub fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Total vector dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of non-zero entries
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Non-zero entries as (index, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Value at a bucket index, zero if absent
    pub fn get(&self, index: u32) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Dot product against a dense weight vector of the same dimension
    pub fn dot(&self, weights: &Array1<f64>) -> f64 {
        self.iter().map(|(i, v)| weights[i as usize] * v).sum()
    }

    /// Add `coef * self` into a dense accumulator of the same dimension
    pub fn add_scaled_to(&self, coef: f64, acc: &mut Array1<f64>) {
        for (i, v) in self.iter() {
            acc[i as usize] += coef * v;
        }
    }
}
