//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct carries every knob of a run: board dimension,
//! population size, generation count, selection method, mutation rate, offspring
//! per mating, fitness convention, logging and parallel evaluation threshold.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::evolution::options::{EvolutionOptions, LogLevel};
//! use nqueens_ga::selection::SelectionMethod;
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(8, 200, LogLevel::Minimal, 64);
//! assert!(custom_options.validate().is_ok());
//!
//! // Or through the builder
//! let roulette = EvolutionOptions::builder()
//!     .dimension(6)
//!     .population_size(40)
//!     .selection(SelectionMethod::Roulette)
//!     .build();
//! assert_eq!(roulette.get_num_pairs(), 20);
//! ```
//!
//! ## Population arithmetic
//!
//! Every generation selection returns `population_size / offspring_per_mating`
//! pairs and each pair yields `offspring_per_mating` children, so the population
//! size never changes. [`EvolutionOptions::validate`] therefore requires the
//! population size to be a multiple of the offspring count.

use crate::{
    breeding::OffspringCount,
    error::{GeneticError, Result},
    fitness::FitnessConvention,
    selection::SelectionMethod,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    dimension: usize,
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    selection: SelectionMethod,
    mutation_rate: f64,
    offspring_per_mating: OffspringCount,
    convention: FitnessConvention,
    /// Minimum population size evaluated in parallel
    parallel_threshold: usize,
    stop_on_perfect: bool,
}

impl EvolutionOptions {
    pub fn new(
        dimension: usize,
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
    ) -> Self {
        Self {
            dimension,
            num_generations,
            log_level,
            population_size,
            ..Self::default()
        }
    }

    /// Checks every option, reporting the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - The dimension is zero
    /// - The population size is below 2
    /// - The population size is not a multiple of the offspring per mating
    /// - The mutation rate is outside `[0, 1]`
    /// - The selection parameter is invalid
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(GeneticError::InvalidConfiguration(
                "Board dimension must be at least 1".to_string(),
            ));
        }

        if self.population_size < 2 {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }

        if self.population_size % self.offspring_per_mating.get() != 0 {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Population size {} is not a multiple of {} offspring per mating",
                self.population_size,
                self.offspring_per_mating.get()
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Mutation rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }

        self.selection.validate()
    }

    pub fn get_dimension(&self) -> usize {
        self.dimension
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_selection(&self) -> SelectionMethod {
        self.selection
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_offspring_per_mating(&self) -> OffspringCount {
        self.offspring_per_mating
    }

    pub fn get_convention(&self) -> FitnessConvention {
        self.convention
    }

    /// Returns the minimum population size evaluated in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_stop_on_perfect(&self) -> bool {
        self.stop_on_perfect
    }

    /// Number of mating pairs selected per generation.
    pub fn get_num_pairs(&self) -> usize {
        self.population_size / self.offspring_per_mating.get()
    }

    /// Sets the board dimension.
    pub fn set_dimension(&mut self, dimension: usize) {
        self.dimension = dimension;
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_selection(&mut self, selection: SelectionMethod) {
        self.selection = selection;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_offspring_per_mating(&mut self, offspring: OffspringCount) {
        self.offspring_per_mating = offspring;
    }

    pub fn set_convention(&mut self, convention: FitnessConvention) {
        self.convention = convention;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub fn set_stop_on_perfect(&mut self, stop: bool) {
        self.stop_on_perfect = stop;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nqueens_ga::evolution::options::{EvolutionOptions, LogLevel};
    /// use nqueens_ga::fitness::FitnessConvention;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .dimension(8)
    ///     .num_generations(200)
    ///     .log_level(LogLevel::Minimal)
    ///     .population_size(50)
    ///     .mutation_rate(0.02)
    ///     .convention(FitnessConvention::NonAttackingPairs)
    ///     .build();
    /// assert!(options.validate().is_ok());
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            dimension: 8,
            num_generations: 100,
            log_level: LogLevel::None,
            population_size: 100,
            selection: SelectionMethod::default(),
            mutation_rate: 0.05,
            offspring_per_mating: OffspringCount::Two,
            convention: FitnessConvention::ConflictCount,
            parallel_threshold: 1000,
            stop_on_perfect: false,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset values fall back to [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    dimension: Option<usize>,
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    selection: Option<SelectionMethod>,
    mutation_rate: Option<f64>,
    offspring_per_mating: Option<OffspringCount>,
    convention: Option<FitnessConvention>,
    parallel_threshold: Option<usize>,
    stop_on_perfect: Option<bool>,
}

impl EvolutionOptionsBuilder {
    pub fn dimension(mut self, value: usize) -> Self {
        self.dimension = Some(value);
        self
    }

    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn selection(mut self, value: SelectionMethod) -> Self {
        self.selection = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn offspring_per_mating(mut self, value: OffspringCount) -> Self {
        self.offspring_per_mating = Some(value);
        self
    }

    pub fn convention(mut self, value: FitnessConvention) -> Self {
        self.convention = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Ends the run after the first generation whose best-ever score is perfect.
    pub fn stop_on_perfect(mut self, value: bool) -> Self {
        self.stop_on_perfect = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            dimension: self.dimension.unwrap_or(defaults.dimension),
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            selection: self.selection.unwrap_or(defaults.selection),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            offspring_per_mating: self
                .offspring_per_mating
                .unwrap_or(defaults.offspring_per_mating),
            convention: self.convention.unwrap_or(defaults.convention),
            parallel_threshold: self.parallel_threshold.unwrap_or(defaults.parallel_threshold),
            stop_on_perfect: self.stop_on_perfect.unwrap_or(defaults.stop_on_perfect),
        }
    }
}
