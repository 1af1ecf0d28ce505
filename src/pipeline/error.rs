//! Error types for association analysis.
//!
//! Every variant except `Polars` is an invalid-argument error raised during
//! validation, before any matrix cell is computed. Numerical degeneracy
//! (e.g. a single-category column) is never an error; it surfaces as NaN.

use polars::prelude::PolarsError;
use thiserror::Error;

use super::method::AssociationMethod;

/// Errors returned by the association pipeline.
#[derive(Debug, Error)]
pub enum AssociationError {
    /// Method identifier outside {cramer, tschuprow, pearson, theil}.
    #[error("Unknown association method: '{0}'. Use 'cramer', 'tschuprow', 'pearson' or 'theil'.")]
    UnknownMethod(String),

    /// A directional method was handed to the symmetric builder.
    #[error("'{0}' is not a symmetric association method")]
    NotSymmetric(AssociationMethod),

    /// Threshold is not a usable floating-point value.
    #[error("Threshold must be a floating-point value, got {0}")]
    InvalidThreshold(f64),

    /// Requested feature is not a column of the table.
    #[error("Feature '{0}' not found in table")]
    UnknownFeature(String),

    /// Requested feature appears more than once.
    #[error("Feature '{0}' was requested more than once")]
    DuplicateFeature(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl AssociationError {
    /// True for argument errors detected during validation.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, AssociationError::Polars(_))
    }
}
