//! Contingency tables and chi-square based association statistics

use std::collections::{BTreeMap, BTreeSet};

use faer::Mat;
use polars::prelude::*;

use super::error::AssociationError;
use super::method::AssociationMethod;

/// Two-way frequency table of co-occurring categories.
///
/// Rows are the categories of the first variable, columns those of the
/// second, both in sorted order. Observations where either value is null
/// are not counted.
#[derive(Debug, Clone)]
pub struct ContingencyTable {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    counts: Mat<f64>,
    total: f64,
}

impl ContingencyTable {
    /// Cross-tabulate two DataFrame columns, treating every value as a label.
    pub fn from_columns(a: &Column, b: &Column) -> PolarsResult<Self> {
        let a = a.cast(&DataType::String)?;
        let b = b.cast(&DataType::String)?;
        Ok(Self::from_labels(a.str()?, b.str()?))
    }

    /// Cross-tabulate two string arrays of equal length
    pub fn from_labels(a: &StringChunked, b: &StringChunked) -> Self {
        let mut pair_counts: BTreeMap<(&str, &str), f64> = BTreeMap::new();
        let mut rows: BTreeSet<&str> = BTreeSet::new();
        let mut cols: BTreeSet<&str> = BTreeSet::new();

        for (x, y) in a.iter().zip(b.iter()) {
            if let (Some(x), Some(y)) = (x, y) {
                *pair_counts.entry((x, y)).or_insert(0.0) += 1.0;
                rows.insert(x);
                cols.insert(y);
            }
        }

        let row_index: BTreeMap<&str, usize> =
            rows.iter().enumerate().map(|(i, label)| (*label, i)).collect();
        let col_index: BTreeMap<&str, usize> =
            cols.iter().enumerate().map(|(j, label)| (*label, j)).collect();

        let mut counts = Mat::<f64>::zeros(rows.len(), cols.len());
        let mut total = 0.0;
        for ((x, y), count) in pair_counts {
            counts[(row_index[x], col_index[y])] = count;
            total += count;
        }

        Self {
            row_labels: rows.into_iter().map(String::from).collect(),
            col_labels: cols.into_iter().map(String::from).collect(),
            counts,
            total,
        }
    }

    pub fn nrows(&self) -> usize {
        self.counts.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.counts.ncols()
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Number of observations counted in the table
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn count(&self, row: usize, col: usize) -> f64 {
        self.counts[(row, col)]
    }

    /// Pearson chi-square statistic of independence.
    ///
    /// With `correction`, Yates' continuity correction is applied when the
    /// table has exactly one degree of freedom: each observed count is moved
    /// toward its expected count by at most 0.5. A table with zero degrees of
    /// freedom yields 0.0; an empty table yields NaN.
    pub fn chi_square(&self, correction: bool) -> f64 {
        if self.total == 0.0 {
            return f64::NAN;
        }

        let (n_rows, n_cols) = (self.nrows(), self.ncols());
        let row_sums: Vec<f64> = (0..n_rows)
            .map(|i| (0..n_cols).map(|j| self.counts[(i, j)]).sum())
            .collect();
        let col_sums: Vec<f64> = (0..n_cols)
            .map(|j| (0..n_rows).map(|i| self.counts[(i, j)]).sum())
            .collect();

        let dof = (n_rows - 1) * (n_cols - 1);
        if dof == 0 {
            return 0.0;
        }
        let yates = correction && dof == 1;

        let mut chi2 = 0.0;
        for (i, row_sum) in row_sums.iter().enumerate() {
            for (j, col_sum) in col_sums.iter().enumerate() {
                let expected = row_sum * col_sum / self.total;
                let mut observed = self.counts[(i, j)];
                if yates {
                    let diff = expected - observed;
                    observed += diff.signum() * diff.abs().min(0.5);
                }
                chi2 += (observed - expected).powi(2) / expected;
            }
        }

        chi2
    }

    /// Bias-corrected association coefficient in [0, 1].
    ///
    /// NaN when the coefficient is undefined, e.g. Cramer's V or
    /// Tschuprow's T over a variable with a single observed category.
    pub fn association(&self, method: AssociationMethod) -> Result<f64, AssociationError> {
        if !method.is_symmetric() {
            return Err(AssociationError::NotSymmetric(method));
        }
        if self.total == 0.0 {
            return Ok(f64::NAN);
        }

        let phi2 = self.chi_square(true) / self.total;
        let r = (self.nrows() - 1) as f64;
        let c = (self.ncols() - 1) as f64;

        let value = match method {
            AssociationMethod::Cramer => phi2 / r.min(c),
            AssociationMethod::Tschuprow => phi2 / (r * c).sqrt(),
            AssociationMethod::Pearson => phi2 / (1.0 + phi2),
            AssociationMethod::Theil => return Err(AssociationError::NotSymmetric(method)),
        };

        Ok(value.sqrt())
    }
}
