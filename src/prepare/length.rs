//! Effective sequence-length selection for the renderers.

use crate::data::SequencingReport;
use crate::error::{LogoError, Result};
use std::collections::HashMap;
use tracing::info;

/// Resolve the sequence length a renderer should use.
///
/// An explicit length that occurs in the selected samples' sequences wins.
/// When it is absent from the data, or when no length was requested, the most
/// frequent observed length is used; the absent-length case additionally
/// emits an informational notice. Ties between equally frequent lengths
/// resolve to the smaller length.
pub fn effective_length(
    report: &SequencingReport,
    samples: &[String],
    sequence_column: &str,
    requested: Option<usize>,
) -> Result<usize> {
    let sequences = report.sequences_for(sequence_column, samples)?;
    if sequences.is_empty() {
        return Err(LogoError::EmptyData(format!(
            "No sequences in column '{}' for the selected samples",
            sequence_column
        )));
    }

    let mut length_counts: HashMap<usize, usize> = HashMap::new();
    for sequence in &sequences {
        *length_counts.entry(sequence.len()).or_default() += 1;
    }

    match requested {
        Some(length) if length_counts.contains_key(&length) => Ok(length),
        Some(length) => {
            let modal = modal_length(&length_counts);
            info!(
                requested = length,
                fallback = modal,
                "Chosen sequence length is not in the data; using the most frequent length"
            );
            Ok(modal)
        }
        None => Ok(modal_length(&length_counts)),
    }
}

fn modal_length(length_counts: &HashMap<usize, usize>) -> usize {
    length_counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
        .map(|(&length, _)| length)
        .expect("length_counts is non-empty")
}
