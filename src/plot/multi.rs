//! Multi-sample grid rendering: one logo panel per sample.

use crate::data::{CompositionMethod, SequencingReport};
use crate::error::{LogoError, Result};
use crate::label::{position_labels, PositionNumbering};
use crate::plot::layout::best_layout;
use crate::plot::logo::{draw_err, draw_logo};
use crate::plot::style::LogoOptions;
use crate::prepare::prepare_composition;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::warn;

/// Grid sequence length used when the caller passes none.
pub const DEFAULT_GRID_LENGTH: usize = 16;

/// Which samples go into the grid.
#[derive(Debug, Clone)]
pub enum SampleSelection {
    /// Every sample in the report.
    All,
    /// Only the listed samples (ids absent from the report are ignored).
    Subset(Vec<String>),
}

/// Render one logo panel per sample onto a caller-owned drawing area.
///
/// Samples are drawn in sorted order into a `best_layout` grid. A sample
/// with no usable sequences at the chosen length is skipped with a warning,
/// not failed; the skipped sample ids are returned. Panel font sizes shrink
/// with the column count.
#[allow(clippy::too_many_arguments)]
pub fn render_logo_grid<DB: DrawingBackend, N: PositionNumbering>(
    area: &DrawingArea<DB, Shift>,
    report: &SequencingReport,
    selection: &SampleSelection,
    sequence_column: &str,
    chosen_length: Option<usize>,
    method: CompositionMethod,
    numbering: &N,
    options: &LogoOptions,
) -> Result<Vec<String>> {
    let length = chosen_length.unwrap_or(DEFAULT_GRID_LENGTH);

    let mut samples = report.unique_experiments();
    if let SampleSelection::Subset(subset) = selection {
        samples.retain(|sample| subset.iter().any(|s| s == sample));
    }
    if samples.is_empty() {
        return Err(LogoError::EmptyData(
            "No samples selected for the grid".to_string(),
        ));
    }

    let (rows, columns) = best_layout(samples.len());
    let panel_options = options.scaled_for_columns(columns);
    let labels = position_labels(sequence_column, length, numbering)?;

    area.fill(&WHITE).map_err(draw_err)?;
    let titled = area
        .titled(
            &format!("Logo Plots for sequence Length {}", length),
            (options.font.family.as_str(), options.font.title_size),
        )
        .map_err(draw_err)?;
    let panels = titled.split_evenly((rows, columns));

    let mut skipped = Vec::new();
    let mut next_panel = 0;
    for sample in samples {
        let single = [sample.clone()];
        let composition =
            match prepare_composition(report, &single, sequence_column, Some(length), method) {
                Ok(composition) => composition,
                Err(LogoError::LengthUnavailable { .. }) => {
                    warn!(sample = %sample, length, "Sample skipped: no sequence reaches the chosen length");
                    skipped.push(sample);
                    continue;
                }
                Err(error) => return Err(error),
            };
        if composition.has_nan() {
            warn!(sample = %sample, length, "Sample skipped: no sequence at the chosen length");
            skipped.push(sample);
            continue;
        }

        draw_logo(&panels[next_panel], &composition, &labels, &sample, &panel_options)?;
        next_panel += 1;
    }

    area.present().map_err(draw_err)?;
    Ok(skipped)
}
