//! Position-by-amino-acid composition matrices.

use crate::data::alphabet::{aa_index, ALPHABET_SIZE, AMINO_ACIDS};
use crate::error::{LogoError, Result};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// How the composition matrix values were computed.
///
/// `Frequency` divides each (position, letter) count by the number of
/// retained sequences, per letter independently; rows sum to 1 only when no
/// `*`/`_` markers were present. `Bits` computes true per-position
/// frequencies and converts them to clamped information content
/// (`max(0, 2 - entropy)` for letters present at the position). The two
/// normalizations are deliberately asymmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompositionMethod {
    Frequency,
    Bits,
}

impl std::str::FromStr for CompositionMethod {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "frequency" | "freq" => Ok(CompositionMethod::Frequency),
            "bits" => Ok(CompositionMethod::Bits),
            _ => Err(LogoError::InvalidParameter(format!(
                "Unknown composition method: {} (expected 'frequency' or 'bits')",
                s
            ))),
        }
    }
}

impl std::fmt::Display for CompositionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompositionMethod::Frequency => write!(f, "frequency"),
            CompositionMethod::Bits => write!(f, "bits"),
        }
    }
}

/// A positions × 20 matrix of per-position letter scores.
///
/// Row i holds position i of the chosen sequence length; columns follow
/// [`AMINO_ACIDS`] order. Created fresh by the preparer and never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct CompositionMatrix {
    /// Scores, positions × alphabet.
    data: DMatrix<f64>,
    /// Normalization that produced the values.
    method: CompositionMethod,
    /// Number of sequences retained for counting.
    n_sequences: usize,
}

impl CompositionMatrix {
    /// Wrap a score matrix, validating the alphabet-sized column count.
    pub fn new(data: DMatrix<f64>, method: CompositionMethod, n_sequences: usize) -> Result<Self> {
        if data.ncols() != ALPHABET_SIZE {
            return Err(LogoError::DimensionMismatch {
                expected: ALPHABET_SIZE,
                actual: data.ncols(),
            });
        }
        Ok(Self {
            data,
            method,
            n_sequences,
        })
    }

    /// Score at (position, alphabet column).
    #[inline]
    pub fn get(&self, position: usize, column: usize) -> f64 {
        self.data[(position, column)]
    }

    /// Score of a residue byte at a position, `None` for non-alphabet bytes.
    pub fn value(&self, position: usize, residue: u8) -> Option<f64> {
        aa_index(residue).map(|col| self.data[(position, col)])
    }

    /// Number of positions (rows).
    #[inline]
    pub fn n_positions(&self) -> usize {
        self.data.nrows()
    }

    /// Number of sequences retained for counting.
    #[inline]
    pub fn n_sequences(&self) -> usize {
        self.n_sequences
    }

    /// Normalization method.
    #[inline]
    pub fn method(&self) -> CompositionMethod {
        self.method
    }

    /// One position's scores in alphabet order.
    pub fn row(&self, position: usize) -> Vec<f64> {
        self.data.row(position).iter().cloned().collect()
    }

    /// The letters and scores stacked at a position, skipping non-positive
    /// and undefined cells, sorted ascending so the tallest letter ends up
    /// on top of the stack.
    pub fn stack(&self, position: usize) -> Vec<(u8, f64)> {
        let mut letters: Vec<(u8, f64)> = AMINO_ACIDS
            .iter()
            .enumerate()
            .map(|(col, &aa)| (aa, self.data[(position, col)]))
            .filter(|(_, v)| v.is_finite() && *v > 0.0)
            .collect();
        letters.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        letters
    }

    /// Total stacked height at a position (undefined cells excluded).
    pub fn stack_height(&self, position: usize) -> f64 {
        self.data
            .row(position)
            .iter()
            .filter(|v| v.is_finite() && **v > 0.0)
            .sum()
    }

    /// Tallest stack across all positions.
    pub fn max_stack_height(&self) -> f64 {
        (0..self.n_positions())
            .map(|p| self.stack_height(p))
            .fold(0.0, f64::max)
    }

    /// Whether any cell is undefined. Happens when zero sequences were
    /// retained at the chosen length; grid rendering skips such samples.
    pub fn has_nan(&self) -> bool {
        self.data.iter().any(|v| v.is_nan())
    }

    /// Get reference to the underlying matrix.
    #[inline]
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.data
    }
}

impl std::fmt::Display for CompositionMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Composition ({})", self.method)?;
        writeln!(f, "  Positions: {}", self.n_positions())?;
        writeln!(f, "  Sequences: {}", self.n_sequences)?;
        Ok(())
    }
}
