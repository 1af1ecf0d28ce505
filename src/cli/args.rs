//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::AssociationMethod;

/// catcorr - Association analysis for categorical features
#[derive(Parser, Debug)]
#[command(name = "catcorr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Features to analyze (comma-separated), in output order.
    /// If not provided, all columns are used (or selected interactively).
    #[arg(short, long, value_delimiter = ',')]
    pub features: Vec<String>,

    /// Columns to leave out when no explicit feature list is given (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Association method: "cramer", "tschuprow", "pearson" or "theil".
    /// If not provided, defaults to "cramer" (or is selected interactively).
    #[arg(short, long, value_parser = validate_method)]
    pub method: Option<AssociationMethod>,

    /// Association threshold - feature pairs strictly above this value are reported.
    /// Must be written as a floating-point number (e.g. 0.5).
    #[arg(long, default_value = "0.5", value_parser = validate_threshold)]
    pub threshold: f64,

    /// Print the report as JSON on stdout instead of styled tables
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Skip interactive prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl Cli {
    /// Whether interactive prompts may be shown
    pub fn interactive(&self) -> bool {
        !self.no_confirm && !self.json
    }
}

/// Validator for the method parameter
fn validate_method(s: &str) -> Result<AssociationMethod, String> {
    s.parse().map_err(|e: crate::pipeline::AssociationError| e.to_string())
}

/// Validator for the threshold parameter.
///
/// Integer literals such as `1` are rejected so that a threshold is always
/// stated as a floating-point value.
pub fn validate_threshold(s: &str) -> Result<f64, String> {
    let trimmed = s.trim();
    let looks_float = trimmed.contains(['.', 'e', 'E'])
        || matches!(
            trimmed.to_lowercase().trim_start_matches(['+', '-']),
            "inf" | "infinity"
        );
    if !looks_float {
        return Err(format!(
            "threshold must be a floating-point value (e.g. 0.5), got '{}'",
            s
        ));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value.is_nan() {
        Err("threshold must not be NaN".to_string())
    } else {
        Ok(value)
    }
}
