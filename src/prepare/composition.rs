//! Composition counting and scoring over a filtered sequence selection.

use crate::data::alphabet::{aa_index, is_skip_marker, ALPHABET_SIZE};
use crate::data::{CompositionMatrix, CompositionMethod, SequencingReport};
use crate::error::{LogoError, Result};
use nalgebra::DMatrix;
use tracing::warn;

/// Check the sample selection against the report before any computation.
pub(crate) fn validate_samples(report: &SequencingReport, samples: &[String]) -> Result<()> {
    if samples.is_empty() {
        return Err(LogoError::EmptySampleList);
    }
    for sample in samples {
        if !report.contains_sample(sample) {
            return Err(LogoError::UnknownSample(sample.clone()));
        }
    }
    Ok(())
}

/// Shannon entropy `-Σ p·log2(p)` over a probability slice; zero and
/// undefined terms contribute nothing.
pub fn shannon_entropy(probabilities: &[f64]) -> f64 {
    -probabilities
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.log2())
        .sum::<f64>()
}

/// Build the per-position composition matrix for a sample selection.
///
/// Rows are filtered to the requested samples and to sequences of exactly
/// `chosen_length`. When no length is given, the maximum observed length is
/// used after a warning, since mixing lengths would compare unrelated
/// positions. Sequences of other lengths are dropped silently; zero retained
/// sequences is allowed and produces an undefined (NaN) frequency table,
/// which grid rendering skips.
///
/// Counting skips `*`/`_` markers without incrementing anything, so
/// marker-bearing positions lower frequency row sums below 1.
pub fn prepare_composition(
    report: &SequencingReport,
    samples: &[String],
    sequence_column: &str,
    chosen_length: Option<usize>,
    method: CompositionMethod,
) -> Result<CompositionMatrix> {
    validate_samples(report, samples)?;
    let sequences = report.sequences_for(sequence_column, samples)?;
    if sequences.is_empty() {
        return Err(LogoError::EmptyData(format!(
            "No sequences in column '{}' for the selected samples",
            sequence_column
        )));
    }

    let max_len = sequences.iter().map(|s| s.len()).max().unwrap_or(0);
    let length = match chosen_length {
        Some(0) => {
            return Err(LogoError::InvalidParameter(
                "Chosen sequence length must be positive".to_string(),
            ));
        }
        Some(len) => {
            if len > max_len {
                return Err(LogoError::LengthUnavailable {
                    requested: len,
                    max: max_len,
                });
            }
            len
        }
        None => {
            warn!(
                fallback = max_len,
                "No sequence length chosen; comparing positions across mixed lengths assumes \
                 equal positional properties, which need not hold. Narrowing to the maximum \
                 observed length."
            );
            max_len
        }
    };

    let retained: Vec<&str> = sequences
        .iter()
        .copied()
        .filter(|s| s.len() == length)
        .collect();
    let n_retained = retained.len();

    let mut counts = DMatrix::<f64>::zeros(length, ALPHABET_SIZE);
    for seq in &retained {
        for (position, &byte) in seq.as_bytes().iter().enumerate() {
            if is_skip_marker(byte) {
                continue;
            }
            let column = aa_index(byte).ok_or(LogoError::InvalidResidue {
                residue: byte as char,
                position,
            })?;
            counts[(position, column)] += 1.0;
        }
    }

    let data = match method {
        CompositionMethod::Frequency => counts / n_retained as f64,
        CompositionMethod::Bits => {
            let frequencies = counts / n_retained as f64;
            let mut bits = DMatrix::<f64>::zeros(length, ALPHABET_SIZE);
            for position in 0..length {
                let row: Vec<f64> = frequencies.row(position).iter().cloned().collect();
                let entropy = shannon_entropy(&row);
                // 2 = log2(4), the nucleotide-logo ceiling kept by convention;
                // clamped so high-entropy positions score 0, not negative.
                let content = (2.0 - entropy).max(0.0);
                for column in 0..ALPHABET_SIZE {
                    if frequencies[(position, column)] > 0.0 {
                        bits[(position, column)] = content;
                    }
                }
            }
            bits
        }
    };

    CompositionMatrix::new(data, method, n_retained)
}
