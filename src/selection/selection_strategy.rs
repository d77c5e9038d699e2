use std::fmt::Debug;

use crate::{
    error::{GeneticError, Result},
    fitness::FitnessConvention,
    genome::Genome,
    rng::RandomNumberGenerator,
};

/// Indices of the two parents of one mating, `(parent1, parent2)`.
///
/// Both indices may be equal, in which case the genome mates with itself.
pub type MatingPair = (usize, usize);

/// Trait for selection strategies.
///
/// A selection strategy looks at the current population and its scores and
/// decides which genomes mate. It returns exactly `num_pairs` pairs of indices
/// into `population`; the breeding step turns each pair into offspring.
///
/// # Examples
///
/// ```
/// use nqueens_ga::fitness::FitnessConvention;
/// use nqueens_ga::genome::Genome;
/// use nqueens_ga::rng::RandomNumberGenerator;
/// use nqueens_ga::selection::{SelectionStrategy, TruncationSelection};
/// use nqueens_ga::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![
///         Genome::new(vec![0, 0, 0, 0])?,
///         Genome::new(vec![1, 3, 0, 2])?,
///         Genome::new(vec![0, 2, 0, 2])?,
///     ];
///     let convention = FitnessConvention::ConflictCount;
///     let scores: Vec<usize> = population.iter().map(|g| convention.score(g)).collect();
///     let mut rng = RandomNumberGenerator::from_seed(1);
///
///     let selection = TruncationSelection::new(0.5)?;
///     let pairs = selection.select_pairs(&population, &scores, convention, 3, &mut rng)?;
///
///     assert_eq!(pairs.len(), 3);
///     // The solved board is the only elite genome, so it is every first parent
///     assert!(pairs.iter().all(|&(first, _)| first == 1));
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Chooses `num_pairs` mating pairs from the population.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population.
    /// * `scores` - The score of each genome, in population order.
    /// * `convention` - The active fitness convention.
    /// * `num_pairs` - How many pairs to return.
    /// * `rng` - The run's random source.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The score vector length doesn't match the population length
    fn select_pairs(
        &self,
        population: &[Genome],
        scores: &[usize],
        convention: FitnessConvention,
        num_pairs: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<MatingPair>>;
}

/// Checks the inputs every strategy shares.
pub(crate) fn check_inputs(population: &[Genome], scores: &[usize]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if scores.len() != population.len() {
        return Err(GeneticError::FitnessMismatch(format!(
            "Score vector length ({}) doesn't match population length ({})",
            scores.len(),
            population.len()
        )));
    }

    Ok(())
}
