//! # Population
//!
//! Generation of the initial population. Later populations are produced entirely
//! by breeding; nothing here is reused after the first generation.

use crate::{
    error::{GeneticError, Result},
    genome::Genome,
    rng::RandomNumberGenerator,
};

/// Produces `population_size` genomes of length `genome_length`, every gene
/// drawn independently and uniformly from `0..genome_length`.
///
/// Duplicate genomes and repeated columns are allowed.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if either size is zero.
pub fn generate(
    genome_length: usize,
    population_size: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<Genome>> {
    if genome_length == 0 {
        return Err(GeneticError::InvalidConfiguration(
            "Genome length must be at least 1".to_string(),
        ));
    }

    if population_size == 0 {
        return Err(GeneticError::InvalidConfiguration(
            "Population size cannot be zero".to_string(),
        ));
    }

    Ok((0..population_size)
        .map(|_| Genome::random(genome_length, rng))
        .collect())
}
