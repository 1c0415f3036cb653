//! IMGT unique numbering for V-domain regions.
//!
//! Positions are drawn from the fixed IMGT span of each region. Regions
//! shorter than their span omit positions from the middle of the span
//! outward; CDR3 regions longer than their span gain decimal insertion
//! positions between 111 and 112 (`111.1, …` ascending then `…, 112.1`
//! descending), following the IMGT junction convention.

use crate::error::{LogoError, Result};
use crate::label::PositionNumbering;

/// A V-domain region in the IMGT unique numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Fr1,
    Cdr1,
    Fr2,
    Cdr2,
    Fr3,
    Cdr3,
    Fr4,
}

impl Region {
    /// Inclusive IMGT position span of the region.
    pub fn span(&self) -> (u32, u32) {
        match self {
            Region::Fr1 => (1, 26),
            Region::Cdr1 => (27, 38),
            Region::Fr2 => (39, 55),
            Region::Cdr2 => (56, 65),
            Region::Fr3 => (66, 104),
            Region::Cdr3 => (105, 117),
            Region::Fr4 => (118, 129),
        }
    }
}

impl std::str::FromStr for Region {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "FR1" => Ok(Region::Fr1),
            "CDR1" => Ok(Region::Cdr1),
            "FR2" => Ok(Region::Fr2),
            "CDR2" => Ok(Region::Cdr2),
            "FR3" => Ok(Region::Fr3),
            "CDR3" => Ok(Region::Cdr3),
            "FR4" => Ok(Region::Fr4),
            _ => Err(LogoError::InvalidParameter(format!(
                "Unknown IMGT region: {}",
                s
            ))),
        }
    }
}

/// The built-in IMGT numbering collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImgtNumbering;

impl PositionNumbering for ImgtNumbering {
    fn region_labels(&self, region: &str, length: usize) -> Result<Vec<String>> {
        let region: Region = region.parse()?;
        imgt_labels(region, length)
    }
}

/// IMGT labels for a region occupied by `length` residues.
pub fn imgt_labels(region: Region, length: usize) -> Result<Vec<String>> {
    let (start, end) = region.span();
    let span_len = (end - start + 1) as usize;

    if length <= span_len {
        // Fill from both ends of the span, leaving the gap in the middle.
        let keep_front = (length + 1) / 2;
        let keep_back = length - keep_front;
        let mut labels: Vec<String> = (start..start + keep_front as u32)
            .map(|p| p.to_string())
            .collect();
        labels.extend((end + 1 - keep_back as u32..=end).map(|p| p.to_string()));
        return Ok(labels);
    }

    if region != Region::Cdr3 {
        return Err(LogoError::InvalidParameter(format!(
            "{:?} cannot hold {} residues (span is {})",
            region, length, span_len
        )));
    }

    // Insertions go between 111 and 112, 112-side first for odd counts.
    let extras = length - span_len;
    let n111 = extras / 2;
    let n112 = extras - n111;
    let mut labels: Vec<String> = (start..=111).map(|p| p.to_string()).collect();
    labels.extend((1..=n111).map(|i| format!("111.{}", i)));
    labels.extend((1..=n112).rev().map(|i| format!("112.{}", i)));
    labels.extend((112..=end).map(|p| p.to_string()));
    Ok(labels)
}
