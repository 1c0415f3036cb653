//! Data structures for repertoire composition analysis.

pub mod alphabet;
mod composition;
mod report;

pub use composition::{CompositionMatrix, CompositionMethod};
pub use report::{SequencingReport, CLONE_FRACTION_COLUMN, EXPERIMENT_COLUMN};
