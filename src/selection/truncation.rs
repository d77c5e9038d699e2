use crate::{
    error::{GeneticError, Result},
    fitness::FitnessConvention,
    genome::Genome,
    rng::RandomNumberGenerator,
    selection::selection_strategy::{check_inputs, MatingPair, SelectionStrategy},
};

/// A selection strategy that mates the best fraction of the population.
///
/// The population is stably sorted so the best scores come first and the top
/// `elite_ratio` of it forms the elite pool, never fewer than one genome.
/// Pair `i` takes elite genome `i mod elite_len` as its first parent and a genome
/// drawn uniformly from the whole population as its second.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TruncationSelection {
    elite_ratio: f64,
}

impl TruncationSelection {
    /// Creates a new TruncationSelection keeping the given fraction of the population.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `elite_ratio` is not in `(0, 1]`.
    pub fn new(elite_ratio: f64) -> Result<Self> {
        if !(elite_ratio > 0.0 && elite_ratio <= 1.0) {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Elite ratio must be in (0, 1], got {}",
                elite_ratio
            )));
        }

        Ok(Self { elite_ratio })
    }

    pub fn elite_ratio(&self) -> f64 {
        self.elite_ratio
    }

    /// Size of the elite pool for a population of `population_size` genomes.
    pub fn elite_count(&self, population_size: usize) -> usize {
        let count = (population_size as f64 * self.elite_ratio).floor() as usize;
        count.clamp(1, population_size.max(1))
    }

    /// Indices of the elite pool, best first. Ties keep population order.
    pub fn elite(&self, scores: &[usize], convention: FitnessConvention) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..scores.len()).collect();
        indices.sort_by(|&a, &b| convention.compare(scores[a], scores[b]));
        indices.truncate(self.elite_count(scores.len()));
        indices
    }
}

impl Default for TruncationSelection {
    fn default() -> Self {
        Self { elite_ratio: 0.5 }
    }
}

impl SelectionStrategy for TruncationSelection {
    fn select_pairs(
        &self,
        population: &[Genome],
        scores: &[usize],
        convention: FitnessConvention,
        num_pairs: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<MatingPair>> {
        check_inputs(population, scores)?;

        let elite = self.elite(scores, convention);

        Ok((0..num_pairs)
            .map(|i| (elite[i % elite.len()], rng.gen_index(population.len())))
            .collect())
    }
}
