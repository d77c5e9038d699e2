//! Output records of a run.
//!
//! A [`GenerationRecord`] is emitted once per generation and owns copies of the
//! genomes it reports, so it stays valid after the population it describes has
//! been replaced.

use crate::genome::Genome;

/// A genome together with its score under the run's fitness convention.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGenome {
    pub genome: Genome,
    pub score: usize,
}

/// What one generation produced.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRecord {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best genome of this generation's population.
    pub generation_best: ScoredGenome,
    /// Best genome seen so far in the run, this generation included.
    pub best_ever: ScoredGenome,
}

/// The outcome of a completed run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionResult {
    /// One record per executed generation, in generation order.
    pub records: Vec<GenerationRecord>,
    /// The best genome of the whole run.
    pub best: ScoredGenome,
}
