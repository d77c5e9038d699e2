//! # Fitness conventions
//!
//! A genome's quality can be reported two ways. Both are derived from the same
//! conflict count and are algebraically tied together:
//! `non_attacking = total_pairs - conflicts`.
//!
//! The convention decides which direction is "better" everywhere in the engine:
//! sorting for truncation selection, picking a generation's best genome and
//! updating the best-ever genome. Roulette selection does not follow the
//! direction; it always weights a genome by its non-attacking pairs, so fewer
//! conflicts always means a larger slice of the wheel.

use std::{cmp::Ordering, fmt};

use crate::genome::{total_pairs, Genome};

/// How a genome's score is reported and which direction is an improvement.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitnessConvention {
    /// Number of conflicting pairs. Lower is better, 0 is a solution.
    #[default]
    ConflictCount,
    /// Number of non-attacking pairs. Higher is better, `N·(N-1)/2` is a solution.
    NonAttackingPairs,
}

impl FitnessConvention {
    /// Scores a genome. Pure: the same genome always yields the same score.
    pub fn score(&self, genome: &Genome) -> usize {
        match self {
            FitnessConvention::ConflictCount => genome.conflicts(),
            FitnessConvention::NonAttackingPairs => genome.non_attacking_pairs(),
        }
    }

    /// Orders two scores so that the better one compares as `Less`.
    ///
    /// Sorting ascending with this comparator puts the best genomes first.
    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        match self {
            FitnessConvention::ConflictCount => a.cmp(&b),
            FitnessConvention::NonAttackingPairs => b.cmp(&a),
        }
    }

    /// Whether `candidate` is strictly better than `incumbent`.
    pub fn is_better(&self, candidate: usize, incumbent: usize) -> bool {
        self.compare(candidate, incumbent) == Ordering::Less
    }

    /// The score of a conflict-free board of the given dimension.
    pub fn perfect_score(&self, dimension: usize) -> usize {
        match self {
            FitnessConvention::ConflictCount => 0,
            FitnessConvention::NonAttackingPairs => total_pairs(dimension),
        }
    }

    pub fn is_perfect(&self, score: usize, dimension: usize) -> bool {
        score == self.perfect_score(dimension)
    }

    /// Recovers the conflict count a score stands for.
    pub fn conflicts_from_score(&self, score: usize, dimension: usize) -> usize {
        match self {
            FitnessConvention::ConflictCount => score,
            FitnessConvention::NonAttackingPairs => total_pairs(dimension).saturating_sub(score),
        }
    }

    /// Roulette weight for a score: the number of non-attacking pairs.
    ///
    /// Always non-negative, and larger for genomes with fewer conflicts under
    /// either convention.
    pub fn selection_weight(&self, score: usize, dimension: usize) -> usize {
        total_pairs(dimension).saturating_sub(self.conflicts_from_score(score, dimension))
    }

    /// Index of the first genome holding the best score, in population order.
    pub fn best_index(&self, scores: &[usize]) -> Option<usize> {
        scores
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, usize)>, (idx, &score)| match best {
                Some((_, best_score)) if !self.is_better(score, best_score) => best,
                _ => Some((idx, score)),
            })
            .map(|(idx, _)| idx)
    }
}

impl fmt::Display for FitnessConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitnessConvention::ConflictCount => write!(f, "conflict-count"),
            FitnessConvention::NonAttackingPairs => write!(f, "non-attacking-pairs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventions_are_consistent() {
        let genome = Genome::new(vec![0, 0, 3, 1, 2]).unwrap();
        let conflicts = FitnessConvention::ConflictCount.score(&genome);
        let non_attacking = FitnessConvention::NonAttackingPairs.score(&genome);
        assert_eq!(conflicts + non_attacking, total_pairs(5));
    }

    #[test]
    fn test_direction() {
        let conflict = FitnessConvention::ConflictCount;
        assert!(conflict.is_better(1, 2));
        assert!(!conflict.is_better(2, 1));
        assert!(!conflict.is_better(2, 2));

        let pairs = FitnessConvention::NonAttackingPairs;
        assert!(pairs.is_better(5, 4));
        assert!(!pairs.is_better(4, 5));
        assert!(!pairs.is_better(4, 4));
    }

    #[test]
    fn test_perfect_scores() {
        assert_eq!(FitnessConvention::ConflictCount.perfect_score(8), 0);
        assert_eq!(FitnessConvention::NonAttackingPairs.perfect_score(8), 28);

        // A single queen is perfect under both conventions
        let single = Genome::new(vec![0]).unwrap();
        for convention in [FitnessConvention::ConflictCount, FitnessConvention::NonAttackingPairs] {
            assert!(convention.is_perfect(convention.score(&single), 1));
        }
    }

    #[test]
    fn test_selection_weight_favours_fewer_conflicts() {
        for convention in [FitnessConvention::ConflictCount, FitnessConvention::NonAttackingPairs] {
            let good = Genome::new(vec![1, 3, 0, 2]).unwrap();
            let bad = Genome::new(vec![0, 0, 0, 0]).unwrap();
            let good_weight = convention.selection_weight(convention.score(&good), 4);
            let bad_weight = convention.selection_weight(convention.score(&bad), 4);
            assert_eq!(good_weight, 6);
            assert_eq!(bad_weight, 0);
        }
    }

    #[test]
    fn test_best_index_takes_first_of_ties() {
        let scores = [3, 1, 4, 1, 5];
        assert_eq!(FitnessConvention::ConflictCount.best_index(&scores), Some(1));
        assert_eq!(FitnessConvention::NonAttackingPairs.best_index(&scores), Some(4));

        let tied = [2, 2, 2];
        assert_eq!(FitnessConvention::NonAttackingPairs.best_index(&tied), Some(0));
        assert_eq!(FitnessConvention::ConflictCount.best_index(&[]), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FitnessConvention::ConflictCount.to_string(), "conflict-count");
        assert_eq!(
            FitnessConvention::NonAttackingPairs.to_string(),
            "non-attacking-pairs"
        );
    }
}
