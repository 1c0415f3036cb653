//! Sequencing report handling: the tabular input with one row per clonotype.

use crate::error::{LogoError, Result};
use std::path::Path;

/// Name of the sample identifier column.
pub const EXPERIMENT_COLUMN: &str = "Experiment";

/// Name of the fractional abundance column. The value is carried through
/// loading but plays no role in composition counting.
pub const CLONE_FRACTION_COLUMN: &str = "cloneFraction";

/// An in-memory sequencing report.
///
/// Required columns: `Experiment` (sample id) and `cloneFraction` (float).
/// Every remaining column is treated as a sequence column (strings over the
/// amino-acid alphabet, possibly containing `*`/`_` markers).
#[derive(Debug, Clone)]
pub struct SequencingReport {
    /// Sample id per row.
    experiments: Vec<String>,
    /// Clone fraction per row.
    clone_fractions: Vec<f64>,
    /// Sequence column names, in file order.
    sequence_columns: Vec<String>,
    /// Column-major sequence storage: `sequences[col][row]`.
    sequences: Vec<Vec<String>>,
}

impl SequencingReport {
    /// Build a report from in-memory columns.
    ///
    /// `sequence_columns` maps column name to one sequence per row. All
    /// columns must have the same length as `experiments`.
    pub fn from_columns(
        experiments: Vec<String>,
        clone_fractions: Vec<f64>,
        sequence_columns: Vec<(String, Vec<String>)>,
    ) -> Result<Self> {
        let n_rows = experiments.len();
        if clone_fractions.len() != n_rows {
            return Err(LogoError::DimensionMismatch {
                expected: n_rows,
                actual: clone_fractions.len(),
            });
        }
        let mut names = Vec::with_capacity(sequence_columns.len());
        let mut columns = Vec::with_capacity(sequence_columns.len());
        for (name, column) in sequence_columns {
            if column.len() != n_rows {
                return Err(LogoError::DimensionMismatch {
                    expected: n_rows,
                    actual: column.len(),
                });
            }
            names.push(name);
            columns.push(column);
        }
        if names.is_empty() {
            return Err(LogoError::EmptyData(
                "Report needs at least one sequence column".to_string(),
            ));
        }
        Ok(Self {
            experiments,
            clone_fractions,
            sequence_columns: names,
            sequences: columns,
        })
    }

    /// Load a report from a tab-separated file.
    pub fn from_tsv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_delimited(path, b'\t')
    }

    /// Load a report from a comma-separated file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_delimited(path, b',')
    }

    fn from_delimited<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        let experiment_idx = headers
            .iter()
            .position(|h| h == EXPERIMENT_COLUMN)
            .ok_or_else(|| LogoError::MissingColumn(EXPERIMENT_COLUMN.to_string()))?;
        let fraction_idx = headers
            .iter()
            .position(|h| h == CLONE_FRACTION_COLUMN)
            .ok_or_else(|| LogoError::MissingColumn(CLONE_FRACTION_COLUMN.to_string()))?;

        let sequence_indices: Vec<usize> = (0..headers.len())
            .filter(|&i| i != experiment_idx && i != fraction_idx)
            .collect();
        if sequence_indices.is_empty() {
            return Err(LogoError::EmptyData(
                "Report needs at least one sequence column".to_string(),
            ));
        }
        let sequence_columns: Vec<String> = sequence_indices
            .iter()
            .map(|&i| headers[i].to_string())
            .collect();

        let mut experiments = Vec::new();
        let mut clone_fractions = Vec::new();
        let mut sequences: Vec<Vec<String>> = vec![Vec::new(); sequence_indices.len()];

        for (row, record) in reader.records().enumerate() {
            let record = record?;
            experiments.push(record[experiment_idx].to_string());

            let raw_fraction = record[fraction_idx].trim();
            let fraction: f64 = raw_fraction
                .parse()
                .map_err(|_| LogoError::InvalidFraction {
                    value: raw_fraction.to_string(),
                    row,
                })?;
            clone_fractions.push(fraction);

            for (slot, &idx) in sequence_indices.iter().enumerate() {
                sequences[slot].push(record[idx].to_string());
            }
        }

        Ok(Self {
            experiments,
            clone_fractions,
            sequence_columns,
            sequences,
        })
    }

    /// Number of rows (clonotypes).
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.experiments.len()
    }

    /// Sample id per row, in file order.
    #[inline]
    pub fn experiments(&self) -> &[String] {
        &self.experiments
    }

    /// Clone fraction per row.
    #[inline]
    pub fn clone_fractions(&self) -> &[f64] {
        &self.clone_fractions
    }

    /// Sequence column names.
    #[inline]
    pub fn sequence_columns(&self) -> &[String] {
        &self.sequence_columns
    }

    /// Whether a sample id occurs in the `Experiment` column.
    pub fn contains_sample(&self, sample: &str) -> bool {
        self.experiments.iter().any(|e| e == sample)
    }

    /// Sorted, deduplicated sample ids.
    pub fn unique_experiments(&self) -> Vec<String> {
        let mut unique: Vec<String> = self.experiments.clone();
        unique.sort();
        unique.dedup();
        unique
    }

    fn column_index(&self, column: &str) -> Result<usize> {
        self.sequence_columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| LogoError::MissingColumn(column.to_string()))
    }

    /// Sequences from one column, restricted to rows belonging to the given
    /// samples. Row order is preserved.
    pub fn sequences_for(&self, column: &str, samples: &[String]) -> Result<Vec<&str>> {
        let col = self.column_index(column)?;
        Ok(self
            .experiments
            .iter()
            .zip(self.sequences[col].iter())
            .filter(|(experiment, _)| samples.iter().any(|s| s == *experiment))
            .map(|(_, sequence)| sequence.as_str())
            .collect())
    }
}
