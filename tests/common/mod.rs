//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Categorical DataFrame with known association patterns
///
/// - `a`: three labels, four rows each
/// - `b`: one-to-one relabelling of `a` (perfect association)
/// - `c`: alternates within every `a` group (independent of `a` and `b`)
pub fn create_categorical_test_dataframe() -> DataFrame {
    df! {
        "a" => ["x", "x", "x", "x", "y", "y", "y", "y", "z", "z", "z", "z"],
        "b" => ["p", "p", "p", "p", "q", "q", "q", "q", "r", "r", "r", "r"],
        "c" => ["u", "v", "u", "v", "u", "v", "u", "v", "u", "v", "u", "v"],
    }
    .unwrap()
}

/// DataFrame where one feature is a coarsening of another
///
/// - `fine`: three labels, two rows each
/// - `coarse`: `x`,`y` -> `m`, `z` -> `n`
pub fn create_directional_test_dataframe() -> DataFrame {
    df! {
        "fine" => ["x", "x", "y", "y", "z", "z"],
        "coarse" => ["m", "m", "m", "m", "n", "n"],
    }
    .unwrap()
}

/// DataFrame with a constant column, which makes contingency statistics undefined
pub fn create_degenerate_dataframe() -> DataFrame {
    df! {
        "a" => ["x", "x", "y", "y", "z", "z"],
        "b" => ["p", "p", "q", "q", "r", "r"],
        "constant" => ["k", "k", "k", "k", "k", "k"],
    }
    .unwrap()
}

/// Random categorical DataFrame; each column draws from between 2 and
/// `max(max_levels, 2)` labels
pub fn create_random_categorical_dataframe(
    rows: usize,
    cols: usize,
    max_levels: usize,
    seed: u64,
) -> DataFrame {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let columns: Vec<Column> = (0..cols)
        .map(|i| {
            let levels = rng.gen_range(2..=max_levels.max(2));
            let values: Vec<String> = (0..rows)
                .map(|_| format!("L{}", rng.gen_range(0..levels)))
                .collect();
            Column::new(format!("feature_{}", i).into(), values)
        })
        .collect();

    DataFrame::new(columns).unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that two floats agree within `tol`
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "Expected {} (±{}), got {}",
        expected,
        tol,
        actual
    );
}
