//! Basic example demonstrating the logo pipeline.
//!
//! This example shows how to:
//! 1. Build a small synthetic sequencing report
//! 2. Prepare frequency and bits composition matrices
//! 3. Render a single-sample logo and a per-sample grid

use plotters::prelude::*;
use repseq_logo::prelude::*;

/// Output directory for the rendered figures.
const OUTPUT_DIR: &str = "target/logos";

fn main() -> Result<()> {
    println!("=== repseq-logo example ===\n");

    let report = create_example_report()?;
    println!("Report:");
    println!("  Rows:    {}", report.n_rows());
    println!("  Samples: {:?}", report.unique_experiments());
    println!();

    let samples = vec!["donor_1".to_string()];
    let composition = prepare_composition(
        &report,
        &samples,
        "aaSeqCDR3",
        Some(6),
        CompositionMethod::Bits,
    )?;
    println!("{}", composition);

    std::fs::create_dir_all(OUTPUT_DIR)?;

    let single_path = format!("{}/donor_1_logo.svg", OUTPUT_DIR);
    {
        let area = SVGBackend::new(&single_path, (1024, 768)).into_drawing_area();
        let mut options = LogoOptions::default();
        options.highlight_position = Some(3);
        render_sample_logo(
            &area,
            &report,
            &samples,
            "aaSeqCDR3",
            Some(6),
            CompositionMethod::Bits,
            &ImgtNumbering,
            &options,
        )?;
    }
    println!("Wrote {}", single_path);

    let grid_path = format!("{}/all_samples_grid.svg", OUTPUT_DIR);
    {
        let area = SVGBackend::new(&grid_path, (1400, 900)).into_drawing_area();
        let skipped = render_logo_grid(
            &area,
            &report,
            &SampleSelection::All,
            "aaSeqCDR3",
            Some(6),
            CompositionMethod::Frequency,
            &ImgtNumbering,
            &LogoOptions::default(),
        )?;
        if !skipped.is_empty() {
            println!("Skipped samples without usable sequences: {:?}", skipped);
        }
    }
    println!("Wrote {}", grid_path);

    Ok(())
}

fn create_example_report() -> Result<SequencingReport> {
    let rows: Vec<(&str, &str)> = vec![
        ("donor_1", "CARWGY"),
        ("donor_1", "CARWAY"),
        ("donor_1", "CSRWGY"),
        ("donor_1", "CARFGY"),
        ("donor_2", "CAKWGY"),
        ("donor_2", "CAKWGY"),
        ("donor_2", "CTRWGY"),
        ("donor_3", "CARW"),
    ];

    SequencingReport::from_columns(
        rows.iter().map(|(sample, _)| sample.to_string()).collect(),
        vec![0.125; rows.len()],
        vec![(
            "aaSeqCDR3".to_string(),
            rows.iter().map(|(_, seq)| seq.to_string()).collect(),
        )],
    )
}
