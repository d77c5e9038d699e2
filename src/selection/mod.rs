pub mod roulette;
pub mod selection_strategy;
pub mod truncation;

pub use roulette::RouletteWheelSelection;
pub use selection_strategy::{MatingPair, SelectionStrategy};
pub use truncation::TruncationSelection;

use std::fmt;

use crate::{
    error::Result, fitness::FitnessConvention, genome::Genome, rng::RandomNumberGenerator,
};

/// The configurable choice of selection strategy.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionMethod {
    /// Mate the best `elite_ratio` of the population, see [`TruncationSelection`].
    Truncation { elite_ratio: f64 },
    /// Fitness-proportional draws, see [`RouletteWheelSelection`].
    Roulette,
}

impl SelectionMethod {
    /// Checks the method's parameter.
    pub fn validate(&self) -> Result<()> {
        match self {
            SelectionMethod::Truncation { elite_ratio } => {
                TruncationSelection::new(*elite_ratio).map(|_| ())
            }
            SelectionMethod::Roulette => Ok(()),
        }
    }
}

impl Default for SelectionMethod {
    fn default() -> Self {
        SelectionMethod::Truncation { elite_ratio: 0.5 }
    }
}

impl SelectionStrategy for SelectionMethod {
    fn select_pairs(
        &self,
        population: &[Genome],
        scores: &[usize],
        convention: FitnessConvention,
        num_pairs: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<MatingPair>> {
        match self {
            SelectionMethod::Truncation { elite_ratio } => TruncationSelection::new(*elite_ratio)?
                .select_pairs(population, scores, convention, num_pairs, rng),
            SelectionMethod::Roulette => RouletteWheelSelection::new().select_pairs(
                population, scores, convention, num_pairs, rng,
            ),
        }
    }
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMethod::Truncation { elite_ratio } => {
                write!(f, "truncation(elite_ratio={})", elite_ratio)
            }
            SelectionMethod::Roulette => write!(f, "roulette"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(SelectionMethod::default().validate().is_ok());
        assert!(SelectionMethod::Roulette.validate().is_ok());
        assert!(SelectionMethod::Truncation { elite_ratio: 0.0 }
            .validate()
            .is_err());
        assert!(SelectionMethod::Truncation { elite_ratio: 1.01 }
            .validate()
            .is_err());
    }

    #[test]
    fn test_dispatch_matches_concrete_strategy() {
        let population: Vec<Genome> = vec![
            Genome::new(vec![1, 3, 0, 2]).unwrap(),
            Genome::new(vec![0, 0, 0, 0]).unwrap(),
            Genome::new(vec![0, 2, 0, 2]).unwrap(),
            Genome::new(vec![2, 0, 3, 1]).unwrap(),
        ];
        let convention = FitnessConvention::ConflictCount;
        let scores: Vec<usize> = population.iter().map(|g| convention.score(g)).collect();

        let method = SelectionMethod::Truncation { elite_ratio: 0.5 };
        let via_method = method
            .select_pairs(
                &population,
                &scores,
                convention,
                4,
                &mut RandomNumberGenerator::from_seed(1),
            )
            .unwrap();
        let direct = TruncationSelection::new(0.5)
            .unwrap()
            .select_pairs(
                &population,
                &scores,
                convention,
                4,
                &mut RandomNumberGenerator::from_seed(1),
            )
            .unwrap();

        assert_eq!(via_method, direct);
    }

    #[test]
    fn test_display() {
        assert_eq!(SelectionMethod::Roulette.to_string(), "roulette");
        assert_eq!(
            SelectionMethod::default().to_string(),
            "truncation(elite_ratio=0.5)"
        );
    }
}
