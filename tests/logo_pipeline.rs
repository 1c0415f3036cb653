//! Integration tests for the report-to-logo pipeline.

use plotters::prelude::*;
use repseq_logo::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Write a small synthetic sequencing report.
///
/// - `donor_a` and `donor_b` carry length-4 CDR3 sequences
/// - `donor_c` carries only a length-6 sequence (unusable at length 4)
/// - one `donor_a` sequence has a stop marker at position 2
fn write_synthetic_report() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Experiment\tcloneFraction\taaSeqCDR3\ttargetSequences").unwrap();
    writeln!(file, "donor_a\t0.4\tCARW\tCARWGY").unwrap();
    writeln!(file, "donor_a\t0.3\tCA*W\tCAAWGY").unwrap();
    writeln!(file, "donor_a\t0.1\tCSRW\tCSRWGY").unwrap();
    writeln!(file, "donor_b\t0.6\tCARW\tCARWGY").unwrap();
    writeln!(file, "donor_b\t0.4\tCAKW\tCAKWGY").unwrap();
    writeln!(file, "donor_c\t1.0\tCARWGY\tCARWGYAA").unwrap();
    file.flush().unwrap();
    file
}

fn donors(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn frequency_pipeline_from_tsv() {
    let file = write_synthetic_report();
    let report = SequencingReport::from_tsv(file.path()).unwrap();
    assert_eq!(
        report.unique_experiments(),
        vec!["donor_a", "donor_b", "donor_c"]
    );

    let composition = prepare_composition(
        &report,
        &donors(&["donor_a", "donor_b"]),
        "aaSeqCDR3",
        Some(4),
        CompositionMethod::Frequency,
    )
    .unwrap();

    assert_eq!(composition.n_positions(), 4);
    assert_eq!(composition.n_sequences(), 5);

    // All five retained sequences start with C.
    assert!((composition.value(0, b'C').unwrap() - 1.0).abs() < 1e-12);

    // The stop marker lowers the position-2 row sum below 1.
    let row2: f64 = composition.row(2).iter().sum();
    assert!((row2 - 0.8).abs() < 1e-12);

    // Marker-free positions sum to 1.
    let row0: f64 = composition.row(0).iter().sum();
    assert!((row0 - 1.0).abs() < 1e-12);
}

#[test]
fn bits_pipeline_bounds_and_conservation() {
    let file = write_synthetic_report();
    let report = SequencingReport::from_tsv(file.path()).unwrap();

    let composition = prepare_composition(
        &report,
        &donors(&["donor_a", "donor_b"]),
        "aaSeqCDR3",
        Some(4),
        CompositionMethod::Bits,
    )
    .unwrap();

    for position in 0..composition.n_positions() {
        for value in composition.row(position) {
            assert!(value >= 0.0 && value <= 2.0, "bits out of range: {}", value);
        }
    }

    // Position 0 is pure C across every retained sequence: entropy 0, so the
    // C cell scores the full 2 bits and everything else is 0.
    assert!((composition.value(0, b'C').unwrap() - 2.0).abs() < 1e-12);
    assert_eq!(composition.value(0, b'A').unwrap(), 0.0);
}

#[test]
fn identical_sequences_across_two_samples() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Experiment\tcloneFraction\taaSeqCDR3").unwrap();
    for sample in ["s1", "s1", "s2", "s2"] {
        writeln!(file, "{}\t0.5\tAAAA", sample).unwrap();
    }
    file.flush().unwrap();

    let report = SequencingReport::from_tsv(file.path()).unwrap();
    let composition = prepare_composition(
        &report,
        &donors(&["s1", "s2"]),
        "aaSeqCDR3",
        Some(4),
        CompositionMethod::Frequency,
    )
    .unwrap();

    assert_eq!(composition.n_sequences(), 4);
    for position in 0..4 {
        assert!((composition.value(position, b'A').unwrap() - 1.0).abs() < 1e-12);
        let others: f64 = composition
            .row(position)
            .iter()
            .sum::<f64>()
            - composition.value(position, b'A').unwrap();
        assert_eq!(others, 0.0);
    }
}

#[test]
fn single_logo_renders_with_imgt_labels() {
    let file = write_synthetic_report();
    let report = SequencingReport::from_tsv(file.path()).unwrap();

    let mut svg = String::new();
    {
        let area = SVGBackend::with_string(&mut svg, (900, 600)).into_drawing_area();
        render_sample_logo(
            &area,
            &report,
            &donors(&["donor_a"]),
            "aaSeqCDR3",
            Some(4),
            CompositionMethod::Frequency,
            &ImgtNumbering,
            &LogoOptions::default(),
        )
        .unwrap();
    }

    assert!(svg.contains("Logo Plot of donor_a with sequence length 4"));
    assert!(svg.contains("Position on sequence"));
    // Short-CDR3 IMGT labels fill from both span ends.
    assert!(svg.contains(">105<"));
    assert!(svg.contains(">117<"));
}

#[test]
fn grid_renders_usable_samples_and_skips_the_rest() {
    let file = write_synthetic_report();
    let report = SequencingReport::from_tsv(file.path()).unwrap();

    let mut svg = String::new();
    {
        let area = SVGBackend::with_string(&mut svg, (1400, 900)).into_drawing_area();
        let skipped = render_logo_grid(
            &area,
            &report,
            &SampleSelection::All,
            "aaSeqCDR3",
            Some(4),
            CompositionMethod::Frequency,
            &ImgtNumbering,
            &LogoOptions::default(),
        )
        .unwrap();
        assert_eq!(skipped, vec!["donor_c".to_string()]);
    }

    assert!(svg.contains("Logo Plots for sequence Length 4"));
    assert!(svg.contains(">donor_a<"));
    assert!(svg.contains(">donor_b<"));
    assert!(!svg.contains(">donor_c<"));
}

#[test]
fn unknown_sample_fails_before_rendering() {
    let file = write_synthetic_report();
    let report = SequencingReport::from_tsv(file.path()).unwrap();

    let mut svg = String::new();
    let area = SVGBackend::with_string(&mut svg, (400, 300)).into_drawing_area();
    let err = render_sample_logo(
        &area,
        &report,
        &donors(&["donor_x"]),
        "aaSeqCDR3",
        None,
        CompositionMethod::Frequency,
        &ImgtNumbering,
        &LogoOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, LogoError::UnknownSample(s) if s == "donor_x"));
}
