pub mod launcher;
pub mod options;
pub mod record;

pub use launcher::{EvolutionLauncher, EvolutionRun, RunState};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use record::{EvolutionResult, GenerationRecord, ScoredGenome};
