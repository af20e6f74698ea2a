//! Ranking metrics for binary classifiers
//!
//! Computes area under the ROC and precision-recall curves from raw
//! (score, label) pairs. Tied scores are grouped into a single curve
//! point, so the areas do not depend on the order of tied examples.

use tracing::warn;

/// Binary classification metrics over raw decision scores
#[derive(Debug, Clone)]
pub struct BinaryClassificationMetrics {
    /// (score, is_positive) sorted by score descending
    pairs: Vec<(f64, bool)>,
    n_pos: usize,
    n_neg: usize,
}

impl BinaryClassificationMetrics {
    /// Build from (raw score, true label) pairs
    pub fn new(scores_and_labels: &[(f64, u8)]) -> Self {
        let mut pairs: Vec<(f64, bool)> = scores_and_labels
            .iter()
            .map(|&(score, label)| (score, label == 1))
            .collect();
        pairs.sort_by(|a, b| b.0.total_cmp(&a.0));

        let n_pos = pairs.iter().filter(|(_, positive)| *positive).count();
        let n_neg = pairs.len() - n_pos;

        Self { pairs, n_pos, n_neg }
    }

    /// Number of positive examples
    pub fn n_positives(&self) -> usize {
        self.n_pos
    }

    /// Number of negative examples
    pub fn n_negatives(&self) -> usize {
        self.n_neg
    }

    /// Cumulative (tp, fp) after each distinct-score threshold
    fn confusion_points(&self) -> Vec<(usize, usize)> {
        let mut points = Vec::new();
        let mut tp = 0;
        let mut fp = 0;

        let n = self.pairs.len();
        let mut i = 0;
        while i < n {
            let score = self.pairs[i].0;
            while i < n && self.pairs[i].0 == score {
                if self.pairs[i].1 {
                    tp += 1;
                } else {
                    fp += 1;
                }
                i += 1;
            }
            points.push((tp, fp));
        }

        points
    }

    /// ROC curve as (false positive rate, true positive rate) points,
    /// starting at (0, 0)
    pub fn roc_curve(&self) -> Vec<(f64, f64)> {
        if self.n_pos == 0 || self.n_neg == 0 {
            return vec![(0.0, 0.0), (1.0, 1.0)];
        }

        let mut curve = vec![(0.0, 0.0)];
        for (tp, fp) in self.confusion_points() {
            curve.push((fp as f64 / self.n_neg as f64, tp as f64 / self.n_pos as f64));
        }
        curve
    }

    /// Precision-recall curve as (recall, precision) points
    ///
    /// Anchored at recall 0 with the precision of the highest-score
    /// threshold, matching the usual rank-based construction.
    pub fn pr_curve(&self) -> Vec<(f64, f64)> {
        if self.n_pos == 0 {
            return vec![(0.0, 0.0)];
        }

        let points = self.confusion_points();
        let mut curve = Vec::with_capacity(points.len() + 1);
        for (tp, fp) in points {
            let recall = tp as f64 / self.n_pos as f64;
            let precision = tp as f64 / (tp + fp) as f64;
            if curve.is_empty() {
                curve.push((0.0, precision));
            }
            curve.push((recall, precision));
        }
        curve
    }

    /// Area under the ROC curve via trapezoidal integration
    ///
    /// A test set with only one class has no defined curve; 0.5 is
    /// returned with a warning.
    pub fn area_under_roc(&self) -> f64 {
        if self.n_pos == 0 || self.n_neg == 0 {
            warn!(
                "ROC undefined for a single-class test set ({} positive, {} negative)",
                self.n_pos, self.n_neg
            );
            return 0.5;
        }

        trapezoid_area(&self.roc_curve())
    }

    /// Area under the precision-recall curve via trapezoidal integration
    ///
    /// With no positive examples the curve is undefined; 0.0 is returned
    /// with a warning.
    pub fn area_under_pr(&self) -> f64 {
        if self.n_pos == 0 {
            warn!("precision-recall undefined with no positive examples");
            return 0.0;
        }

        trapezoid_area(&self.pr_curve())
    }
}

/// Trapezoidal area under a piecewise-linear curve of (x, y) points
fn trapezoid_area(curve: &[(f64, f64)]) -> f64 {
    curve
        .windows(2)
        .map(|w| (w[1].0 - w[0].0) * (w[1].1 + w[0].1) / 2.0)
        .sum()
}
