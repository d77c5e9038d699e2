use tracing::debug;

use crate::{
    error::{GeneticError, Result},
    fitness::FitnessConvention,
    genome::Genome,
    rng::RandomNumberGenerator,
    selection::selection_strategy::{check_inputs, MatingPair, SelectionStrategy},
};

/// A selection strategy that draws parents through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) picks
/// each parent independently, with replacement, with probability proportional to
/// its number of non-attacking pairs. That weight grows as conflicts shrink under
/// either fitness convention, so a conflict count is never used as a raw weight.
///
/// When every weight is zero (every pair of queens attacks, or the board has a
/// single queen) the wheel is degenerate and parents are drawn uniformly instead.
///
/// # Examples
///
/// ```
/// use nqueens_ga::fitness::FitnessConvention;
/// use nqueens_ga::genome::Genome;
/// use nqueens_ga::rng::RandomNumberGenerator;
/// use nqueens_ga::selection::{RouletteWheelSelection, SelectionStrategy};
/// use nqueens_ga::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![
///         Genome::new(vec![0, 0, 0, 0])?,
///         Genome::new(vec![1, 3, 0, 2])?,
///     ];
///     let convention = FitnessConvention::ConflictCount;
///     let scores: Vec<usize> = population.iter().map(|g| convention.score(g)).collect();
///     let mut rng = RandomNumberGenerator::from_seed(3);
///
///     let pairs = RouletteWheelSelection::new()
///         .select_pairs(&population, &scores, convention, 4, &mut rng)?;
///
///     // The stacked board has no non-attacking pairs and can never be drawn
///     assert!(pairs.iter().all(|&pair| pair == (1, 1)));
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Calculates the cumulative selection probabilities for each genome.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateSelection` if every weight is zero.
    fn calculate_probabilities(
        &self,
        scores: &[usize],
        convention: FitnessConvention,
        dimension: usize,
    ) -> Result<Vec<f64>> {
        let weights: Vec<usize> = scores
            .iter()
            .map(|&score| convention.selection_weight(score, dimension))
            .collect();

        let sum: usize = weights.iter().sum();
        if sum == 0 {
            return Err(GeneticError::DegenerateSelection);
        }

        let mut cumulative = 0.0;
        let mut probs: Vec<f64> = weights
            .iter()
            .map(|&weight| {
                cumulative += weight as f64 / sum as f64;
                cumulative
            })
            .collect();

        // Ensure the last probability is exactly 1.0 to avoid floating-point errors
        if let Some(last) = probs.last_mut() {
            *last = 1.0;
        }

        Ok(probs)
    }

    /// Spins the wheel once and returns the index it lands on.
    ///
    /// Zero-weight genomes occupy an empty slice and are never returned.
    fn select_individual(&self, cumulative_probs: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let r = rng.gen_unit();
        cumulative_probs
            .partition_point(|&prob| prob <= r)
            .min(cumulative_probs.len() - 1)
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn select_pairs(
        &self,
        population: &[Genome],
        scores: &[usize],
        convention: FitnessConvention,
        num_pairs: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<MatingPair>> {
        check_inputs(population, scores)?;

        let dimension = population[0].len();
        match self.calculate_probabilities(scores, convention, dimension) {
            Ok(cumulative_probs) => Ok((0..num_pairs)
                .map(|_| {
                    let first = self.select_individual(&cumulative_probs, rng);
                    let second = self.select_individual(&cumulative_probs, rng);
                    (first, second)
                })
                .collect()),
            Err(GeneticError::DegenerateSelection) => {
                debug!(
                    population = population.len(),
                    "All roulette weights are zero, sampling parents uniformly"
                );
                Ok((0..num_pairs)
                    .map(|_| {
                        let first = rng.gen_index(population.len());
                        let second = rng.gen_index(population.len());
                        (first, second)
                    })
                    .collect())
            }
            Err(e) => Err(e),
        }
    }
}
