//! Entropy based directional association (Theil's U)

use std::collections::BTreeMap;

use polars::prelude::*;

/// Theil's uncertainty coefficient U(x | given).
///
/// The fraction of the entropy of `x` removed by knowing `given`:
/// `(H(x) - H(x | given)) / H(x)`. 0 means `given` says nothing about `x`,
/// 1 means `given` fully determines `x`. A constant `x` has no uncertainty
/// left to remove and scores 1.0. Nulls are a category of their own.
pub fn theils_u(x: &Column, given: &Column) -> PolarsResult<f64> {
    let x = x.cast(&DataType::String)?;
    let given = given.cast(&DataType::String)?;
    Ok(theils_u_labels(x.str()?, given.str()?))
}

/// Theil's U over two string arrays of equal length
pub fn theils_u_labels(x: &StringChunked, given: &StringChunked) -> f64 {
    let mut x_counts: BTreeMap<Option<&str>, f64> = BTreeMap::new();
    let mut given_counts: BTreeMap<Option<&str>, f64> = BTreeMap::new();
    let mut joint_counts: BTreeMap<(Option<&str>, Option<&str>), f64> = BTreeMap::new();
    let mut total = 0.0;

    for (xv, gv) in x.iter().zip(given.iter()) {
        *x_counts.entry(xv).or_insert(0.0) += 1.0;
        *given_counts.entry(gv).or_insert(0.0) += 1.0;
        *joint_counts.entry((xv, gv)).or_insert(0.0) += 1.0;
        total += 1.0;
    }

    if total == 0.0 {
        return f64::NAN;
    }

    let h_x = entropy(x_counts.values().copied(), total);
    if h_x == 0.0 {
        return 1.0;
    }

    // H(x | given) = sum p(x, g) * ln(p(g) / p(x, g))
    let h_x_given: f64 = joint_counts
        .iter()
        .map(|((_, g), &n_xg)| {
            let p_xg = n_xg / total;
            let p_g = given_counts[g] / total;
            p_xg * (p_g / p_xg).ln()
        })
        .sum();

    (h_x - h_x_given) / h_x
}

/// Shannon entropy (natural log) of a frequency distribution
pub fn entropy(counts: impl IntoIterator<Item = f64>, total: f64) -> f64 {
    counts
        .into_iter()
        .filter(|&n| n > 0.0)
        .map(|n| {
            let p = n / total;
            -p * p.ln()
        })
        .sum()
}
