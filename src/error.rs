//! # Error Types
//!
//! This module defines the error type shared by every part of the engine.
//! Configuration problems are reported before a run starts; everything that can
//! go wrong afterwards is either recovered locally or indicates a broken contract.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use nqueens_ga::error::{GeneticError, Result};
//!
//! fn check_dimension(dimension: usize) -> Result<()> {
//!     if dimension == 0 {
//!         return Err(GeneticError::InvalidConfiguration(
//!             "Board dimension must be at least 1".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_dimension(0).is_err());
//! assert!(check_dimension(8).is_ok());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use nqueens_ga::error::{GeneticError, OptionExt};
//!
//! fn lowest_score(scores: &[usize]) -> nqueens_ga::error::Result<usize> {
//!     scores.iter().min().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(lowest_score(&[3, 1, 2]).unwrap(), 1);
//! assert!(lowest_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the engine.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// A configuration value is out of its valid domain. Always reported
    /// before the first generation runs.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An operator received a population with no genomes.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// The score vector does not line up with the population it describes.
    #[error("Fitness mismatch: {0}")]
    FitnessMismatch(String),

    /// Every roulette weight is zero. Roulette selection recovers from this by
    /// sampling uniformly, so it never escapes a run.
    #[error("Degenerate selection: all selection weights are zero")]
    DegenerateSelection,

    /// An operator was asked to work outside its arithmetic domain, such as a
    /// crossover point on a zero-length genome.
    #[error("Arithmetic domain error: {0}")]
    ArithmeticDomain(String),

    /// Error that occurs when a generation breaks the engine's own invariants,
    /// such as breeding the wrong number of offspring.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for engine operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
