//! Square association matrix labelled by feature names

use faer::Mat;
use polars::prelude::*;

/// Association strength for every pair of features.
///
/// Row and column `i` both belong to `features()[i]`. The diagonal is 1.0.
/// Off-diagonal cells hold values in [0, 1], or NaN when the statistic is
/// undefined for that pair.
#[derive(Debug, Clone)]
pub struct AssociationMatrix {
    features: Vec<String>,
    values: Mat<f64>,
}

impl AssociationMatrix {
    /// Identity matrix over `features`: 1.0 on the diagonal, 0.0 elsewhere
    pub fn identity(features: Vec<String>) -> Self {
        let n = features.len();
        let mut values = Mat::<f64>::zeros(n, n);
        for i in 0..n {
            values[(i, i)] = 1.0;
        }
        Self { features, values }
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[(row, col)]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[(row, col)] = value;
    }

    pub fn index_of(&self, feature: &str) -> Option<usize> {
        self.features.iter().position(|f| f == feature)
    }

    /// Cell value by feature names
    pub fn value(&self, row: &str, col: &str) -> Option<f64> {
        Some(self.get(self.index_of(row)?, self.index_of(col)?))
    }

    /// Values of row `i`, in feature order
    pub fn row(&self, i: usize) -> Vec<f64> {
        (0..self.len()).map(|j| self.get(i, j)).collect()
    }

    /// Whether every (i, j) equals (j, i). NaN cells match NaN.
    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| {
            ((i + 1)..n).all(|j| {
                let (a, b) = (self.get(i, j), self.get(j, i));
                a == b || (a.is_nan() && b.is_nan())
            })
        })
    }

    /// Render as a DataFrame: a `feature` column with the row labels,
    /// followed by one Float64 column per feature.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.len() + 1);
        columns.push(Column::new("feature".into(), self.features.clone()));

        for (j, name) in self.features.iter().enumerate() {
            let values: Vec<f64> = (0..self.len()).map(|i| self.get(i, j)).collect();
            columns.push(Column::new(name.as_str().into(), values));
        }

        DataFrame::new(columns)
    }
}
