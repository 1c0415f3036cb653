//! Position labels for logo axes: plain 1-based numbers or IMGT region
//! labels obtained through a numbering collaborator.

mod imgt;

pub use imgt::{imgt_labels, ImgtNumbering, Region};

use crate::error::{LogoError, Result};
use regex::Regex;

/// Column name whose positions are labeled 1..=length instead of by region.
pub const TARGET_SEQUENCES_COLUMN: &str = "targetSequences";

/// A positional numbering scheme for a named region.
///
/// The collaborator only sees the region name and the occupied length; the
/// residues themselves are irrelevant to numbering.
pub trait PositionNumbering {
    /// Produce one label per position for a region of the given length.
    fn region_labels(&self, region: &str, length: usize) -> Result<Vec<String>>;
}

/// Strip the sequence-type prefix from a column name (`aaSeqCDR3` → `CDR3`).
/// Columns without a recognized prefix pass through unchanged.
pub fn region_from_column(column: &str) -> String {
    let re = Regex::new(r"^(?:aaSeq|nSeq)(.+)$").unwrap();
    match re.captures(column) {
        Some(caps) => caps[1].to_string(),
        None => column.to_string(),
    }
}

/// Tick labels for a sequence column at a chosen length.
///
/// `targetSequences` gets plain 1-based position numbers; every other column
/// is resolved to its region and labeled by the numbering collaborator. A
/// label count differing from `length` is a contract violation of the
/// collaborator and reported as `LabelMismatch`.
pub fn position_labels<N: PositionNumbering>(
    sequence_column: &str,
    length: usize,
    numbering: &N,
) -> Result<Vec<String>> {
    let labels: Vec<String> = if sequence_column == TARGET_SEQUENCES_COLUMN {
        (1..=length).map(|p| p.to_string()).collect()
    } else {
        let region = region_from_column(sequence_column);
        numbering.region_labels(&region, length)?
    };

    if labels.len() != length {
        return Err(LogoError::LabelMismatch {
            expected: length,
            actual: labels.len(),
        });
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_positions() {
        let labels = position_labels(TARGET_SEQUENCES_COLUMN, 10, &ImgtNumbering).unwrap();
        let expected: Vec<String> = (1..=10).map(|p| p.to_string()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_region_column_uses_numbering() {
        let labels = position_labels("aaSeqCDR3", 13, &ImgtNumbering).unwrap();
        assert_eq!(labels.first().map(String::as_str), Some("105"));
        assert_eq!(labels.last().map(String::as_str), Some("117"));
    }

    #[test]
    fn test_region_extraction() {
        assert_eq!(region_from_column("aaSeqCDR3"), "CDR3");
        assert_eq!(region_from_column("nSeqFR2"), "FR2");
        assert_eq!(region_from_column("CDR1"), "CDR1");
    }

    #[test]
    fn test_label_mismatch_detected() {
        struct OffByOne;
        impl PositionNumbering for OffByOne {
            fn region_labels(&self, _region: &str, length: usize) -> Result<Vec<String>> {
                Ok((0..length.saturating_sub(1)).map(|p| p.to_string()).collect())
            }
        }

        let err = position_labels("aaSeqCDR3", 6, &OffByOne).unwrap_err();
        assert!(matches!(
            err,
            LogoError::LabelMismatch { expected: 6, actual: 5 }
        ));
    }
}
