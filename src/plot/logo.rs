//! Single-panel stacked-letter logo rendering.

use crate::data::{CompositionMatrix, CompositionMethod, SequencingReport};
use crate::error::{LogoError, Result};
use crate::label::{position_labels, PositionNumbering};
use crate::plot::style::LogoOptions;
use crate::prepare::{effective_length, prepare_composition, validate_samples};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

/// Backend error types are generic over the backend, so drawing failures
/// are carried as rendering messages.
pub(crate) fn draw_err<E: std::error::Error>(error: E) -> LogoError {
    LogoError::Render(error.to_string())
}

/// Draw a composition matrix as a stacked-letter logo onto a caller-owned
/// drawing area.
///
/// Letters with positive score are stacked bottom-up in ascending order, so
/// the highest-scoring letter ends on top. `labels` supplies one tick label
/// per position.
pub fn draw_logo<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    composition: &CompositionMatrix,
    labels: &[String],
    title: &str,
    options: &LogoOptions,
) -> Result<()> {
    let length = composition.n_positions();
    if labels.len() != length {
        return Err(LogoError::LabelMismatch {
            expected: length,
            actual: labels.len(),
        });
    }
    if length == 0 {
        return Err(LogoError::EmptyData(
            "Cannot draw a logo for zero positions".to_string(),
        ));
    }

    let y_max = (composition.max_stack_height() * 1.05).max(1e-6);

    let margin = 10u32;
    let x_label_area = 40u32;
    let y_label_area = 50u32;

    let mut chart = ChartBuilder::on(area)
        .caption(title, (options.font.family.as_str(), options.font.title_size))
        .margin(margin)
        .x_label_area_size(x_label_area)
        .y_label_area_size(y_label_area)
        .build_cartesian_2d(-0.5f64..length as f64 - 0.5, 0f64..y_max)
        .map_err(draw_err)?;

    let label_font = (options.font.family.as_str(), options.font.size);
    let tick_formatter = |x: &f64| -> String {
        let nearest = x.round();
        if (x - nearest).abs() > 1e-6 || nearest < 0.0 {
            return String::new();
        }
        labels
            .get(nearest as usize)
            .cloned()
            .unwrap_or_default()
    };

    let mut mesh = chart.configure_mesh();
    mesh.x_desc("Position on sequence")
        .y_desc("Frequency")
        .x_labels(length)
        .x_label_formatter(&tick_formatter)
        .axis_desc_style(label_font)
        .label_style(label_font);
    if !options.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(draw_err)?;

    if let Some(position) = options.highlight_position {
        if position < length {
            let band = Rectangle::new(
                [
                    (position as f64 - 0.5, 0.0),
                    (position as f64 + 0.5, y_max),
                ],
                options.highlight_rgb().mix(0.5).filled(),
            );
            chart.draw_series(std::iter::once(band)).map_err(draw_err)?;
        }
    }

    // Vertical pixels available to one full-height stack, used to convert
    // letter scores into font sizes.
    let (_, area_height) = area.dim_in_pixel();
    let reserved = 2 * margin + x_label_area + options.font.title_size + 8;
    let plot_height = area_height.saturating_sub(reserved).max(1) as f64;
    let pixels_per_unit = plot_height / y_max;

    let mut letters = Vec::new();
    for position in 0..length {
        let mut baseline = 0.0;
        for (residue, value) in composition.stack(position) {
            let glyph_px = (value * pixels_per_unit).round().max(1.0) as u32;
            let style = (options.font.family.as_str(), glyph_px)
                .into_font()
                .color(&options.colors.residue_color(residue))
                .pos(Pos::new(HPos::Center, VPos::Center));
            letters.push(Text::new(
                (residue as char).to_string(),
                (position as f64, baseline + value / 2.0),
                style,
            ));
            baseline += value;
        }
    }
    chart.draw_series(letters).map_err(draw_err)?;

    Ok(())
}

/// Render one sample selection as a logo: resolve the effective length,
/// prepare the composition, label the positions, and draw.
///
/// Returns the composition matrix that was drawn.
#[allow(clippy::too_many_arguments)]
pub fn render_sample_logo<DB: DrawingBackend, N: PositionNumbering>(
    area: &DrawingArea<DB, Shift>,
    report: &SequencingReport,
    samples: &[String],
    sequence_column: &str,
    chosen_length: Option<usize>,
    method: CompositionMethod,
    numbering: &N,
    options: &LogoOptions,
) -> Result<CompositionMatrix> {
    validate_samples(report, samples)?;
    let length = effective_length(report, samples, sequence_column, chosen_length)?;
    let composition = prepare_composition(report, samples, sequence_column, Some(length), method)?;
    let labels = position_labels(sequence_column, length, numbering)?;

    area.fill(&WHITE).map_err(draw_err)?;
    let title = format!(
        "Logo Plot of {} with sequence length {}",
        samples.join(" "),
        length
    );
    draw_logo(area, &composition, &labels, &title, options)?;
    area.present().map_err(draw_err)?;

    Ok(composition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::ImgtNumbering;

    fn report() -> SequencingReport {
        SequencingReport::from_columns(
            vec!["s1".to_string(); 4],
            vec![0.25; 4],
            vec![(
                "aaSeqCDR3".to_string(),
                vec![
                    "CARW".to_string(),
                    "CARW".to_string(),
                    "CSRW".to_string(),
                    "CAKW".to_string(),
                ],
            )],
        )
        .unwrap()
    }

    #[test]
    fn test_render_sample_logo_svg() {
        let mut svg = String::new();
        {
            let area = SVGBackend::with_string(&mut svg, (800, 600)).into_drawing_area();
            let composition = render_sample_logo(
                &area,
                &report(),
                &["s1".to_string()],
                "aaSeqCDR3",
                Some(4),
                CompositionMethod::Frequency,
                &ImgtNumbering,
                &LogoOptions::default(),
            )
            .unwrap();
            assert_eq!(composition.n_positions(), 4);
        }
        assert!(svg.contains("Logo Plot of s1 with sequence length 4"));
        // The conserved anchor cysteine shows up as a drawn glyph.
        assert!(svg.contains(">C<"));
    }

    #[test]
    fn test_highlight_band_drawn() {
        let mut options = LogoOptions::default();
        options.highlight_position = Some(1);

        let mut svg = String::new();
        {
            let area = SVGBackend::with_string(&mut svg, (640, 480)).into_drawing_area();
            render_sample_logo(
                &area,
                &report(),
                &["s1".to_string()],
                "aaSeqCDR3",
                None,
                CompositionMethod::Bits,
                &ImgtNumbering,
                &options,
            )
            .unwrap();
        }
        // Gold rectangle from the highlight.
        assert!(svg.contains("#FFD700"));
    }

    #[test]
    fn test_label_count_checked() {
        let composition = prepare_composition(
            &report(),
            &["s1".to_string()],
            "aaSeqCDR3",
            Some(4),
            CompositionMethod::Frequency,
        )
        .unwrap();

        let mut svg = String::new();
        let area = SVGBackend::with_string(&mut svg, (200, 200)).into_drawing_area();
        let err = draw_logo(
            &area,
            &composition,
            &["1".to_string(), "2".to_string()],
            "title",
            &LogoOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            LogoError::LabelMismatch { expected: 4, actual: 2 }
        ));
    }
}
