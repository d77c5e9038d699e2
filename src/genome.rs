//! # Genome
//!
//! A `Genome` encodes one candidate board: position `i` is the row, the value at
//! that position is the column of the queen placed in that row. A genome's length
//! is the board dimension and never changes during a run.
//!
//! ## Example
//!
//! ```rust
//! use nqueens_ga::genome::Genome;
//!
//! let solved = Genome::new(vec![1, 3, 0, 2]).unwrap();
//! assert_eq!(solved.conflicts(), 0);
//!
//! let stacked = Genome::new(vec![0, 0, 0, 0]).unwrap();
//! assert_eq!(stacked.conflicts(), 6);
//! ```

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Number of distinct unordered row pairs on an `n`×`n` board, `n·(n-1)/2`.
pub fn total_pairs(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// One queen per row; `genes[row]` is the queen's column.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genome {
    genes: Vec<usize>,
}

impl Genome {
    /// Creates a genome from explicit columns.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if any column is outside `0..genes.len()`.
    pub fn new(genes: Vec<usize>) -> Result<Self> {
        let n = genes.len();
        if let Some((row, &column)) = genes.iter().enumerate().find(|(_, &c)| c >= n) {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Column {} in row {} is outside the {}x{} board",
                column, row, n, n
            )));
        }
        Ok(Self { genes })
    }

    /// Creates a genome with every column drawn uniformly from `0..dimension`.
    pub fn random(dimension: usize, rng: &mut RandomNumberGenerator) -> Self {
        let genes = (0..dimension).map(|_| rng.gen_index(dimension)).collect();
        Self { genes }
    }

    /// Builds a genome from columns already known to be in range.
    pub(crate) fn from_genes(genes: Vec<usize>) -> Self {
        debug_assert!(genes.iter().all(|&c| c < genes.len()));
        Self { genes }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [usize] {
        &mut self.genes
    }

    /// Whether the queens in rows `i` and `j` share a column or a diagonal.
    pub fn attacks(&self, i: usize, j: usize) -> bool {
        let (a, b) = (self.genes[i], self.genes[j]);
        a == b || a.abs_diff(b) == i.abs_diff(j)
    }

    /// Counts conflicting pairs over all distinct rows `i < j`.
    ///
    /// A pair that shares a column cannot also share a diagonal, so every pair
    /// contributes at most one conflict and the result never exceeds
    /// [`total_pairs`].
    pub fn conflicts(&self) -> usize {
        let n = self.genes.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.attacks(i, j))
            .count()
    }

    /// Counts pairs of queens that do not attack each other.
    pub fn non_attacking_pairs(&self) -> usize {
        total_pairs(self.len()) - self.conflicts()
    }
}

impl From<Genome> for Vec<usize> {
    fn from(genome: Genome) -> Self {
        genome.genes
    }
}
