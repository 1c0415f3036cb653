//! Error types for the repseq-logo library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum LogoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{0}' in sequencing report")]
    MissingColumn(String),

    #[error("Invalid clone fraction '{value}' at row {row}")]
    InvalidFraction { value: String, row: usize },

    #[error("Sample '{0}' is not present in the sequencing report")]
    UnknownSample(String),

    #[error("At least one sample must be given")]
    EmptySampleList,

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Chosen sequence length {requested} exceeds the longest sequence in the selection ({max})")]
    LengthUnavailable { requested: usize, max: usize },

    #[error("Unexpected residue '{residue}' at sequence position {position}")]
    InvalidResidue { residue: char, position: usize },

    #[error("Label count mismatch: expected {expected} labels, got {actual}")]
    LabelMismatch { expected: usize, actual: usize },

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, LogoError>;
