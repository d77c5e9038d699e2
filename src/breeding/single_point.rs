//! # SinglePointStrategy
//!
//! Recombines every mating pair with single-point crossover and mutates each
//! child before it joins the next population.
use super::{crossover, mutation, BreedStrategy};
use crate::{
    error::{GeneticError, OptionExt, Result},
    evolution::options::EvolutionOptions,
    genome::Genome,
    rng::RandomNumberGenerator,
    selection::MatingPair,
};

/// # SinglePointStrategy
///
/// Crossover followed by per-gene mutation, one pair at a time in pair order.
#[derive(Debug, Clone, Default)]
pub struct SinglePointStrategy {
    // No fields needed
}

impl SinglePointStrategy {
    /// Creates a new `SinglePointStrategy` instance.
    pub fn new() -> Self {
        Self {}
    }
}

impl BreedStrategy for SinglePointStrategy {
    fn breed(
        &self,
        population: &[Genome],
        pairs: &[MatingPair],
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let offspring = options.get_offspring_per_mating();
        let mut children = Vec::with_capacity(pairs.len() * offspring.get());

        for &(first, second) in pairs {
            let parent = |idx: usize| {
                population.get(idx).ok_or_else_genetic(|| {
                    GeneticError::ArithmeticDomain(format!(
                        "Mating pair refers to genome {} of a population of {}",
                        idx,
                        population.len()
                    ))
                })
            };
            let (parent1, parent2) = (parent(first)?, parent(second)?);

            for mut child in crossover::single_point(parent1, parent2, offspring, rng)? {
                mutation::mutate(&mut child, options.get_mutation_rate(), rng);
                children.push(child);
            }
        }

        Ok(children)
    }
}
