//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for
//! turning the mating pairs chosen by selection into the next population.
pub mod crossover;
pub mod mutation;
pub mod single_point;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, genome::Genome,
    rng::RandomNumberGenerator, selection::MatingPair,
};

/// # BreedStrategy
///
/// Breeds offspring from mating pairs. The returned offspring form the next
/// population in full, so an implementation must return
/// `pairs.len() * options.get_offspring_per_mating().get()` genomes.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds the offspring of every pair.
    ///
    /// ## Parameters
    ///
    /// - `population`: The population the pair indices refer to.
    /// - `pairs`: Parent indices chosen by selection.
    /// - `options`: Evolution options carrying the mutation rate and offspring count.
    /// - `rng`: The run's random source.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The population is empty
    /// - A pair refers outside the population
    /// - Recombination is asked to work on a zero-length genome
    fn breed(
        &self,
        population: &[Genome],
        pairs: &[MatingPair],
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>>;
}

pub use crossover::OffspringCount;
pub use single_point::SinglePointStrategy;
