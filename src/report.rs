//! # Reporting
//!
//! Read-only views of a run's output for presentation code: a text rendering of a
//! board, the per-generation summary line, and the two fitness series a chart
//! plots against the generation index. Nothing here touches engine state.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::genome::Genome;
//! use nqueens_ga::report::render_board;
//!
//! let board = render_board(&Genome::new(vec![1, 0]).unwrap());
//! assert_eq!(
//!     board,
//!     "     0   1 \n   +---+---+\n 0 |   | ♛ |\n   +---+---+\n 1 | ♛ |   |\n   +---+---+\n"
//! );
//! ```

use std::fmt;

use crate::{evolution::GenerationRecord, genome::Genome};

const QUEEN: &str = " ♛ |";
const EMPTY: &str = "   |";

/// Renders a genome as a numbered grid with a queen in each row.
pub fn render_board(genome: &Genome) -> String {
    let n = genome.len();
    let separator = format!("   +{}\n", "---+".repeat(n));

    let mut out = String::from("   ");
    for column in 0..n {
        out.push_str(&format!("  {} ", column));
    }
    out.push('\n');
    out.push_str(&separator);

    for (row, &queen) in genome.genes().iter().enumerate() {
        out.push_str(&format!(" {} |", row));
        for column in 0..n {
            out.push_str(if column == queen { QUEEN } else { EMPTY });
        }
        out.push('\n');
        out.push_str(&separator);
    }

    out
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

/// One-line summary of a generation.
pub fn summary_line(record: &GenerationRecord) -> String {
    format!(
        "Generation: {} | Generation best: {} | Best overall: {}",
        record.generation, record.generation_best.score, record.best_ever.score
    )
}

/// The series a fitness chart plots: per-generation best and best-ever scores
/// against the generation index.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FitnessTrajectory {
    pub generations: Vec<usize>,
    pub generation_best: Vec<usize>,
    pub best_ever: Vec<usize>,
}

impl FitnessTrajectory {
    pub fn from_records(records: &[GenerationRecord]) -> Self {
        Self {
            generations: records.iter().map(|r| r.generation).collect(),
            generation_best: records.iter().map(|r| r.generation_best.score).collect(),
            best_ever: records.iter().map(|r| r.best_ever.score).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// A shared y-axis range covering both series with half a point of margin.
    ///
    /// `None` for an empty trajectory.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let all = self.generation_best.iter().chain(&self.best_ever);
        let min = all.clone().min()?;
        let max = all.max()?;
        Some((*min as f64 - 0.5, *max as f64 + 0.5))
    }
}
