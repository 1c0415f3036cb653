//! Sequence-logo composition statistics and plots for immune repertoire
//! sequencing data.
//!
//! # Overview
//!
//! The library is organized into small focused modules:
//!
//! - **data**: Core data structures (SequencingReport, CompositionMatrix,
//!   the amino-acid alphabet)
//! - **prepare**: The data preparer (filtering, counting, frequency and
//!   information-bit scoring, effective-length selection)
//! - **label**: Position labels (1-based numbers or IMGT region numbering)
//! - **plot**: Logo rendering onto caller-supplied drawing areas, single
//!   panel or per-sample grid
//! - **error**: The error taxonomy
//!
//! Every call is synchronous and stateless: a report and a sample selection
//! go in, a composition matrix and a populated drawing area come out.
//!
//! # Example
//!
//! ```no_run
//! use plotters::prelude::*;
//! use repseq_logo::prelude::*;
//!
//! # fn main() -> repseq_logo::error::Result<()> {
//! let report = SequencingReport::from_tsv("sequencing_report.tsv")?;
//!
//! let area = BitMapBackend::new("logo.png", (1024, 768)).into_drawing_area();
//! let composition = render_sample_logo(
//!     &area,
//!     &report,
//!     &["donor_1".to_string()],
//!     "aaSeqCDR3",
//!     Some(14),
//!     CompositionMethod::Bits,
//!     &ImgtNumbering,
//!     &LogoOptions::default(),
//! )?;
//! assert_eq!(composition.n_positions(), 14);
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod error;
pub mod label;
pub mod plot;
pub mod prepare;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::data::{
        CompositionMatrix, CompositionMethod, SequencingReport, CLONE_FRACTION_COLUMN,
        EXPERIMENT_COLUMN,
    };
    pub use crate::error::{LogoError, Result};
    pub use crate::label::{
        imgt_labels, position_labels, ImgtNumbering, PositionNumbering, Region,
        TARGET_SEQUENCES_COLUMN,
    };
    pub use crate::plot::{
        best_layout, draw_logo, render_logo_grid, render_sample_logo, ColorScheme, FontSettings,
        LogoOptions, SampleSelection, DEFAULT_GRID_LENGTH,
    };
    pub use crate::prepare::{effective_length, prepare_composition, shannon_entropy};
}
