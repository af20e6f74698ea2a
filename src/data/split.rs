//! Reproducible train/test splitting
//!
//! The partition is an explicit shuffle-and-cut over the full example set,
//! so train and test are always disjoint and together cover every example.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split examples into training and test sets
///
/// Shuffles with a seeded RNG and takes `round(train_fraction * n)`
/// examples for training; the remainder is the test set. The same seed
/// always produces the same partition.
pub fn train_test_split<T>(examples: Vec<T>, train_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    assert!(
        (0.0..=1.0).contains(&train_fraction),
        "train_fraction must lie in [0, 1]"
    );

    let mut examples = examples;
    let mut rng = StdRng::seed_from_u64(seed);
    examples.shuffle(&mut rng);

    let n_train = (train_fraction * examples.len() as f64).round() as usize;
    let test = examples.split_off(n_train);

    (examples, test)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_is_disjoint_and_exhaustive() {
        let examples: Vec<usize> = (0..100).collect();

        let (train, test) = train_test_split(examples, 0.6, 11);

        assert_eq!(train.len(), 60);
        assert_eq!(test.len(), 40);

        let mut all: Vec<usize> = train.iter().chain(test.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..100).collect::<Vec<usize>>());

        assert!(train.iter().all(|x| !test.contains(x)));
    }

    #[test]
    fn test_split_is_deterministic() {
        let (train_a, test_a) = train_test_split((0..50).collect::<Vec<usize>>(), 0.6, 11);
        let (train_b, test_b) = train_test_split((0..50).collect::<Vec<usize>>(), 0.6, 11);

        assert_eq!(train_a, train_b);
        assert_eq!(test_a, test_b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let (train_a, _) = train_test_split((0..100).collect::<Vec<usize>>(), 0.6, 11);
        let (train_b, _) = train_test_split((0..100).collect::<Vec<usize>>(), 0.6, 12);

        assert_ne!(train_a, train_b);
    }

    #[test]
    fn test_extreme_fractions() {
        let (train, test) = train_test_split((0..10).collect::<Vec<usize>>(), 1.0, 11);
        assert_eq!(train.len(), 10);
        assert!(test.is_empty());

        let (train, test) = train_test_split((0..10).collect::<Vec<usize>>(), 0.0, 11);
        assert!(train.is_empty());
        assert_eq!(test.len(), 10);
    }

    #[test]
    #[should_panic(expected = "train_fraction")]
    fn test_invalid_fraction_panics() {
        train_test_split(vec![1, 2, 3], 1.5, 11);
    }
}
