use rayon::prelude::*;
use tracing::{debug, info};

use super::{
    options::{EvolutionOptions, LogLevel},
    record::{EvolutionResult, GenerationRecord, ScoredGenome},
};
use crate::{
    breeding::{BreedStrategy, SinglePointStrategy},
    error::{GeneticError, OptionExt, Result},
    fitness::FitnessConvention,
    genome::Genome,
    population,
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
};

/// Lifecycle of an [`EvolutionRun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// The initial population exists, no generation has run yet.
    Initialized,
    /// `generation` is the index of the last generation that ran.
    Running { generation: usize },
    /// No further generations will run.
    Completed,
}

/// Drives evolution runs using a specified breeding strategy.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy>
where
    Strategy: BreedStrategy,
{
    strategy: Strategy,
}

impl<Strategy> EvolutionLauncher<Strategy>
where
    Strategy: BreedStrategy,
{
    /// Creates a new `EvolutionLauncher` instance with the specified breeding strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Validates the options and prepares a run.
    ///
    /// The initial population is generated and scored here; no generation runs
    /// until the returned [`EvolutionRun`] is iterated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the options are invalid. In that case no
    /// randomness is consumed and no record is ever produced.
    pub fn start<'a>(
        &'a self,
        options: &EvolutionOptions,
        rng: &'a mut RandomNumberGenerator,
    ) -> Result<EvolutionRun<'a, Strategy>> {
        options.validate()?;

        info!(
            dimension = options.get_dimension(),
            population = options.get_population_size(),
            generations = options.get_num_generations(),
            convention = %options.get_convention(),
            selection = %options.get_selection(),
            "Starting evolution run"
        );

        let population = population::generate(
            options.get_dimension(),
            options.get_population_size(),
            rng,
        )?;
        let scores = evaluate(
            &population,
            options.get_convention(),
            options.get_parallel_threshold(),
        );
        let best = best_of(&population, &scores, options.get_convention())?;

        Ok(EvolutionRun {
            strategy: &self.strategy,
            options: options.clone(),
            rng,
            population,
            scores,
            best,
            state: RunState::Initialized,
        })
    }

    /// Runs every configured generation and collects the records.
    ///
    /// # Arguments
    ///
    /// * `options` - Evolution options controlling the run.
    /// * `rng` - The run's random source; a seeded generator makes the run reproducible.
    ///
    /// # Returns
    ///
    /// A `Result` containing one record per generation and the best-ever genome,
    /// or a `GeneticError` if the configuration is invalid.
    ///
    /// # Performance
    ///
    /// Fitness evaluation of a population runs on Rayon's parallel iterator when
    /// the population is at least `parallel_threshold` genomes. Evaluation is pure
    /// and keeps population order, so the records are the same either way.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        let mut run = self.start(options, rng)?;
        let records = run.by_ref().collect::<Result<Vec<_>>>()?;

        info!(
            best_score = run.best().score,
            generations = records.len(),
            "Evolution run completed"
        );

        Ok(EvolutionResult {
            records,
            best: run.into_best(),
        })
    }
}

impl Default for EvolutionLauncher<SinglePointStrategy> {
    fn default() -> Self {
        Self::new(SinglePointStrategy::new())
    }
}

/// One evolution run, advanced a generation at a time.
///
/// The run owns its population and the best-ever genome. Iterating yields one
/// [`GenerationRecord`] per generation; the best-ever score never gets worse
/// from one record to the next.
#[derive(Debug)]
pub struct EvolutionRun<'a, Strategy>
where
    Strategy: BreedStrategy,
{
    strategy: &'a Strategy,
    options: EvolutionOptions,
    rng: &'a mut RandomNumberGenerator,
    population: Vec<Genome>,
    scores: Vec<usize>,
    best: ScoredGenome,
    state: RunState,
}

impl<'a, Strategy> EvolutionRun<'a, Strategy>
where
    Strategy: BreedStrategy,
{
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// The current population.
    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// Scores of the current population, in population order.
    pub fn scores(&self) -> &[usize] {
        &self.scores
    }

    /// The best genome seen so far, initial population included.
    pub fn best(&self) -> &ScoredGenome {
        &self.best
    }

    pub fn into_best(self) -> ScoredGenome {
        self.best
    }

    /// Runs the next generation.
    ///
    /// Returns `Ok(None)` once the run is completed. An error also completes the run.
    pub fn step(&mut self) -> Result<Option<GenerationRecord>> {
        let generation = match self.state {
            RunState::Completed => return Ok(None),
            RunState::Initialized => 0,
            RunState::Running { generation } => generation + 1,
        };

        if generation >= self.options.get_num_generations() {
            self.state = RunState::Completed;
            return Ok(None);
        }

        match self.run_generation(generation) {
            Ok(record) => {
                self.state = if self.should_stop(generation) {
                    RunState::Completed
                } else {
                    RunState::Running { generation }
                };
                Ok(Some(record))
            }
            Err(e) => {
                self.state = RunState::Completed;
                Err(e)
            }
        }
    }

    fn run_generation(&mut self, generation: usize) -> Result<GenerationRecord> {
        let convention = self.options.get_convention();

        let pairs = self.options.get_selection().select_pairs(
            &self.population,
            &self.scores,
            convention,
            self.options.get_num_pairs(),
            self.rng,
        )?;

        let offspring = self
            .strategy
            .breed(&self.population, &pairs, &self.options, self.rng)?;

        if offspring.len() != self.options.get_population_size() {
            return Err(GeneticError::Evolution(format!(
                "Generation {} bred {} genomes for a population of {}",
                generation,
                offspring.len(),
                self.options.get_population_size()
            )));
        }

        // Generational replacement: the old population is dropped here
        self.scores = evaluate(&offspring, convention, self.options.get_parallel_threshold());
        self.population = offspring;

        let generation_best = best_of(&self.population, &self.scores, convention)?;
        if convention.is_better(generation_best.score, self.best.score) {
            debug!(
                generation,
                previous = self.best.score,
                score = generation_best.score,
                "New best-ever genome"
            );
            self.best = generation_best.clone();
        }

        self.log_generation(generation, &generation_best);

        Ok(GenerationRecord {
            generation,
            generation_best,
            best_ever: self.best.clone(),
        })
    }

    fn should_stop(&self, generation: usize) -> bool {
        if generation + 1 >= self.options.get_num_generations() {
            return true;
        }

        let perfect = self
            .options
            .get_convention()
            .is_perfect(self.best.score, self.options.get_dimension());
        if self.options.get_stop_on_perfect() && perfect {
            info!(generation, "Perfect placement found, stopping early");
            return true;
        }

        false
    }

    fn log_generation(&self, generation: usize, generation_best: &ScoredGenome) {
        match self.options.get_log_level() {
            LogLevel::None => {}
            LogLevel::Minimal => info!(
                generation,
                generation_best = generation_best.score,
                best_ever = self.best.score,
                "Generation complete"
            ),
            LogLevel::Verbose => {
                info!(
                    generation,
                    generation_best = generation_best.score,
                    best_ever = self.best.score,
                    "Generation complete"
                );
                self.population
                    .iter()
                    .zip(&self.scores)
                    .for_each(|(genome, score)| {
                        debug!(generation, genes = ?genome.genes(), score, "Genome");
                    });
            }
        }
    }
}

impl<'a, Strategy> Iterator for EvolutionRun<'a, Strategy>
where
    Strategy: BreedStrategy,
{
    type Item = Result<GenerationRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

/// Scores every genome, in population order.
fn evaluate(
    population: &[Genome],
    convention: FitnessConvention,
    parallel_threshold: usize,
) -> Vec<usize> {
    if population.len() >= parallel_threshold {
        population
            .par_iter()
            .map(|genome| convention.score(genome))
            .collect()
    } else {
        population
            .iter()
            .map(|genome| convention.score(genome))
            .collect()
    }
}

/// Deep copy of the first genome holding the best score.
fn best_of(
    population: &[Genome],
    scores: &[usize],
    convention: FitnessConvention,
) -> Result<ScoredGenome> {
    let idx = convention
        .best_index(scores)
        .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

    Ok(ScoredGenome {
        genome: population[idx].clone(),
        score: scores[idx],
    })
}
