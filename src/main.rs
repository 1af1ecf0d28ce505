//! catcorr: Categorical Association CLI Tool
//!
//! Loads a CSV or Parquet dataset, computes the association matrix of its
//! categorical features and reports the highly associated ones.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use catcorr::cli::{select_features, select_method, Cli};
use catcorr::pipeline::{
    estimated_size_mb, get_categorical_corr, get_column_names, load_dataset, resolve_features,
    AssociationMethod,
};
use catcorr::report::{build_report, report_to_json, AssociationSummary, ReportParams};
use catcorr::utils::{
    create_spinner, finish_and_clear, finish_with_success, print_banner, print_completion,
    print_config, print_count, print_info, print_step_header,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.json;

    if !quiet {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_step_header(1, "Load Dataset");
    }

    // Step 1: Load dataset
    let step_start = Instant::now();
    let spinner = create_spinner("Loading dataset...");
    let df = load_dataset(&cli.input, cli.infer_schema_length)?;
    let (rows, cols) = df.shape();
    if quiet {
        finish_and_clear(&spinner);
    } else {
        finish_with_success(&spinner, "Dataset loaded");
        println!("\n    {} Dataset Statistics:", style("✧").cyan());
        println!("      Rows: {}", rows);
        println!("      Columns: {}", cols);
        println!("      Estimated memory: {:.2} MB", estimated_size_mb(&df));
        println!(
            "      {}",
            style(format!("⏱  {:.2?}", step_start.elapsed())).dim()
        );
    }

    // Resolve features and method - from flags, prompts, or defaults
    let columns = get_column_names(&df);
    let features = if cli.features.is_empty() && cli.exclude.is_empty() && cli.interactive() {
        select_features(&columns)?
    } else {
        resolve_features(&columns, &cli.features, &cli.exclude)
    };
    let method = match cli.method {
        Some(method) => method,
        None if cli.interactive() => select_method()?,
        None => AssociationMethod::default(),
    };

    if !quiet {
        print_config(
            &cli.input,
            method.display_name(),
            features.len(),
            cli.threshold,
        );
        print_step_header(2, "Association Analysis");
    }

    // Step 2: Association matrix and threshold extraction
    let step_start = Instant::now();
    let pairs = if method.is_symmetric() {
        features.len() * features.len().saturating_sub(1) / 2
    } else {
        features.len() * features.len().saturating_sub(1)
    };
    let spinner = create_spinner(&format!("Computing {} over {} pairs...", method, pairs));
    let feature_refs: Vec<&str> = features.iter().map(|s| s.as_str()).collect();
    let (matrix, correlated) =
        get_categorical_corr(&df, Some(feature_refs.as_slice()), method, cli.threshold)?;

    if quiet {
        finish_and_clear(&spinner);
        let report = build_report(
            &matrix,
            &correlated,
            &ReportParams {
                input_file: &cli.input.display().to_string(),
                method,
                threshold: cli.threshold,
                rows,
            },
        );
        println!("{}", report_to_json(&report)?);
        return Ok(());
    }

    finish_with_success(&spinner, "Association analysis complete");
    if correlated.is_empty() {
        print_info("No feature pairs exceed the association threshold");
    } else {
        print_count(
            "highly associated feature(s)",
            correlated.len(),
            Some(&format!("(>{:.2})", cli.threshold)),
        );
    }
    println!(
        "      {}",
        style(format!("⏱  {:.2?}", step_start.elapsed())).dim()
    );

    AssociationSummary::new(&matrix, &correlated, method, cli.threshold).display();

    print_completion();

    Ok(())
}
