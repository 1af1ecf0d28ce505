//! Association matrices between categorical features
//!
//! `get_categorical_corr` is the entry point: it validates its arguments,
//! builds the matrix for the chosen method and extracts the features whose
//! association with some other feature exceeds a threshold.

use std::collections::{BTreeMap, HashSet};

use polars::prelude::*;

use super::contingency::ContingencyTable;
use super::entropy::theils_u;
use super::error::AssociationError;
use super::loader::get_column_names;
use super::matrix::AssociationMatrix;
use super::method::AssociationMethod;

/// Features associated above the threshold with at least one other
/// feature, mapped to those other features in matrix order.
///
/// Keys iterate alphabetically, not in matrix order; use
/// [`AssociationMatrix::features`] for the latter.
pub type CorrelatedFeatures = BTreeMap<String, Vec<String>>;

/// Compute the association matrix of categorical features and the features
/// that are highly associated with one another.
///
/// # Arguments
/// * `df` - Table of categorical features
/// * `features` - Columns to analyze, in output order. `None` uses every column
/// * `method` - Association metric
/// * `threshold` - A feature pair is flagged when its value is strictly greater
///
/// # Errors
/// Fails before any computation if a feature is unknown or repeated, or the
/// threshold is NaN.
pub fn get_categorical_corr(
    df: &DataFrame,
    features: Option<&[&str]>,
    method: AssociationMethod,
    threshold: f64,
) -> Result<(AssociationMatrix, CorrelatedFeatures), AssociationError> {
    let features: Vec<String> = match features {
        Some(names) => names.iter().map(|s| s.to_string()).collect(),
        None => get_column_names(df),
    };
    validate_features(df, &features)?;
    if threshold.is_nan() {
        return Err(AssociationError::InvalidThreshold(threshold));
    }

    let data = df.select(features.iter().map(|s| s.as_str()))?;

    let matrix = if method.is_symmetric() {
        symmetric_association_matrix(&data, method)?
    } else {
        asymmetric_association_matrix(&data)?
    };

    let correlated = find_correlated_features(&matrix, threshold);

    Ok((matrix, correlated))
}

/// Every name must be a column of `df`, and appear once
fn validate_features(df: &DataFrame, features: &[String]) -> Result<(), AssociationError> {
    let columns: HashSet<&str> = df.get_columns().iter().map(|c| c.name().as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::with_capacity(features.len());

    for feature in features {
        if !columns.contains(feature.as_str()) {
            return Err(AssociationError::UnknownFeature(feature.clone()));
        }
        if !seen.insert(feature.as_str()) {
            return Err(AssociationError::DuplicateFeature(feature.clone()));
        }
    }

    Ok(())
}

/// Symmetric association matrix over all columns of `df`.
///
/// Each unordered pair is cross-tabulated once and the statistic is written
/// to both (i, j) and (j, i), so the result is exactly symmetric.
pub fn symmetric_association_matrix(
    df: &DataFrame,
    method: AssociationMethod,
) -> Result<AssociationMatrix, AssociationError> {
    if !method.is_symmetric() {
        return Err(AssociationError::NotSymmetric(method));
    }

    let columns = df.get_columns();
    let mut matrix = AssociationMatrix::identity(get_column_names(df));
    let n = columns.len();

    // Upper triangle only, mirrored below the diagonal
    for i in 0..n {
        for j in (i + 1)..n {
            let table = ContingencyTable::from_columns(&columns[i], &columns[j])?;
            let value = table.association(method)?;
            matrix.set(i, j, value);
            matrix.set(j, i, value);
        }
    }

    Ok(matrix)
}

/// Theil's U matrix over all columns of `df`.
///
/// Cell (i, j) is U(j | i): how much knowing feature i reduces the
/// uncertainty about feature j. Both orientations of every pair are
/// computed independently.
pub fn asymmetric_association_matrix(df: &DataFrame) -> Result<AssociationMatrix, AssociationError> {
    let columns = df.get_columns();
    let mut matrix = AssociationMatrix::identity(get_column_names(df));
    let n = columns.len();

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let value = theils_u(&columns[j], &columns[i])?;
            matrix.set(i, j, value);
        }
    }

    Ok(matrix)
}

/// Features with an off-diagonal row entry strictly above `threshold`.
///
/// NaN cells never compare greater, so undefined pairs are never flagged.
pub fn find_correlated_features(matrix: &AssociationMatrix, threshold: f64) -> CorrelatedFeatures {
    let features = matrix.features();
    let mut correlated = CorrelatedFeatures::new();

    for (i, feature) in features.iter().enumerate() {
        let above: Vec<String> = features
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i && matrix.get(i, *j) > threshold)
            .map(|(_, other)| other.clone())
            .collect();

        if !above.is_empty() {
            correlated.insert(feature.clone(), above);
        }
    }

    correlated
}
