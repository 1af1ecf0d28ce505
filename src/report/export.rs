//! JSON export of association results

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{AssociationMatrix, AssociationMethod, CorrelatedFeatures};

/// Metadata about the analysis run
#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    /// catcorr version
    pub catcorr_version: String,
    /// Input file path
    pub input_file: String,
    /// Association method used
    pub method: AssociationMethod,
    /// Threshold for flagging associated features
    pub threshold: f64,
    /// Number of rows in the dataset
    pub rows: usize,
}

/// One matrix row. Undefined (NaN) cells serialize as `null`.
#[derive(Debug, Serialize)]
pub struct MatrixRow {
    pub feature: String,
    pub values: Vec<f64>,
}

/// Complete association report
#[derive(Debug, Serialize)]
pub struct AssociationReport {
    pub metadata: ReportMetadata,
    /// Feature order shared by matrix rows and columns
    pub features: Vec<String>,
    pub matrix: Vec<MatrixRow>,
    pub correlated_features: CorrelatedFeatures,
}

/// Parameters for report metadata
pub struct ReportParams<'a> {
    pub input_file: &'a str,
    pub method: AssociationMethod,
    pub threshold: f64,
    pub rows: usize,
}

/// Assemble a report from the analysis results
pub fn build_report(
    matrix: &AssociationMatrix,
    correlated: &CorrelatedFeatures,
    params: &ReportParams,
) -> AssociationReport {
    let rows = matrix
        .features()
        .iter()
        .enumerate()
        .map(|(i, feature)| MatrixRow {
            feature: feature.clone(),
            values: matrix.row(i),
        })
        .collect();

    AssociationReport {
        metadata: ReportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            catcorr_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            method: params.method,
            threshold: params.threshold,
            rows: params.rows,
        },
        features: matrix.features().to_vec(),
        matrix: rows,
        correlated_features: correlated.clone(),
    }
}

/// Serialize a report as pretty-printed JSON
pub fn report_to_json(report: &AssociationReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize association report to JSON")
}
