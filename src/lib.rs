//! # nqueens-ga
//!
//! A genetic algorithm engine that searches for placements of N non-attacking
//! queens on an N×N board.
//!
//! ```rust
//! use nqueens_ga::{
//!     evolution::{EvolutionLauncher, EvolutionOptions},
//!     rng::RandomNumberGenerator,
//! };
//!
//! let options = EvolutionOptions::builder()
//!     .dimension(6)
//!     .population_size(40)
//!     .num_generations(30)
//!     .build();
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let result = EvolutionLauncher::default().evolve(&options, &mut rng).unwrap();
//! assert_eq!(result.records.len(), 30);
//! println!("{}", result.best.genome);
//! ```

pub mod breeding;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod genome;
pub mod population;
pub mod report;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, GenerationRecord};
pub use fitness::FitnessConvention;
pub use genome::Genome;
