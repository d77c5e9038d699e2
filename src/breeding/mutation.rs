use crate::{genome::Genome, rng::RandomNumberGenerator};

/// Mutates a genome in place.
///
/// Each gene independently, with probability `rate`, is replaced by a column drawn
/// uniformly from `0..genome.len()`. The fresh draw may equal the old column.
/// A rate of 0 never touches the genome and consumes no randomness.
///
/// Returns the number of genes that were redrawn.
pub fn mutate(genome: &mut Genome, rate: f64, rng: &mut RandomNumberGenerator) -> usize {
    let dimension = genome.len();
    let mut redrawn = 0;

    for gene in genome.genes_mut() {
        if rng.chance(rate) {
            *gene = rng.gen_index(dimension);
            redrawn += 1;
        }
    }

    redrawn
}
