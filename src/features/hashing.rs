//! Feature hashing
//!
//! Maps each token to one of a fixed number of buckets via a hash function
//! and accumulates term counts. Distinct tokens may collide in a bucket;
//! the collision is accepted as an inherent approximation of the scheme.

use crate::data::types::SparseVector;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Hashing term-count vectorizer with a fixed output dimension
#[derive(Debug, Clone)]
pub struct HashingVectorizer {
    n_features: usize,
}

impl HashingVectorizer {
    pub fn new(n_features: usize) -> Self {
        assert!(n_features > 0, "n_features must be positive");
        Self { n_features }
    }

    /// Output dimension
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Bucket index for a single token
    ///
    /// `DefaultHasher::new()` uses fixed keys, so indices are stable
    /// across runs and processes.
    pub fn index_of(&self, token: &str) -> u32 {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        (hasher.finish() % self.n_features as u64) as u32
    }

    /// Transform a token sequence into a sparse term-count vector
    pub fn transform<S: AsRef<str>>(&self, tokens: &[S]) -> SparseVector {
        let mut counts: BTreeMap<u32, f64> = BTreeMap::new();
        for token in tokens {
            *counts.entry(self.index_of(token.as_ref())).or_insert(0.0) += 1.0;
        }

        let (indices, values) = counts.into_iter().unzip();
        SparseVector::new(self.n_features, indices, values)
    }
}
