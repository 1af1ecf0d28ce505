//! Tests for dataset loading and feature resolution

use catcorr::pipeline::{
    get_categorical_corr, get_column_names, load_dataset, resolve_features, AssociationMethod,
};
use std::path::Path;

#[path = "common/mod.rs"]
mod common;

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_load_csv() {
    let mut df = common::create_categorical_test_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let loaded = load_dataset(&csv_path, 10000).unwrap();

    assert_eq!(loaded.shape(), (12, 3));
    assert_eq!(get_column_names(&loaded), names(&["a", "b", "c"]));
}

#[test]
fn test_load_csv_full_schema_scan() {
    let mut df = common::create_categorical_test_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let loaded = load_dataset(&csv_path, 0).unwrap();

    assert_eq!(loaded.height(), 12);
}

#[test]
fn test_load_parquet() {
    let mut df = common::create_directional_test_dataframe();
    let (_temp_dir, parquet_path) = common::create_temp_parquet(&mut df);

    let loaded = load_dataset(&parquet_path, 10000).unwrap();

    assert_eq!(loaded.shape(), (6, 2));
    assert_eq!(get_column_names(&loaded), names(&["fine", "coarse"]));
}

#[test]
fn test_loaded_csv_gives_same_association() {
    let mut df = common::create_categorical_test_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);
    let loaded = load_dataset(&csv_path, 10000).unwrap();

    let (original, _) = get_categorical_corr(&df, None, AssociationMethod::Cramer, 0.5).unwrap();
    let (reloaded, _) =
        get_categorical_corr(&loaded, None, AssociationMethod::Cramer, 0.5).unwrap();

    for i in 0..original.len() {
        assert_eq!(original.row(i), reloaded.row(i));
    }
}

#[test]
fn test_unsupported_extension() {
    let err = load_dataset(Path::new("data.xlsx"), 10000).unwrap_err();

    assert!(err.to_string().contains("Unsupported file format"));
}

#[test]
fn test_missing_file_fails() {
    assert!(load_dataset(Path::new("/nonexistent/data.csv"), 10000).is_err());
}

#[test]
fn test_resolve_features_defaults_to_all_columns() {
    let columns = names(&["a", "b", "c"]);

    assert_eq!(resolve_features(&columns, &[], &[]), columns);
}

#[test]
fn test_resolve_features_with_exclusions() {
    let columns = names(&["id", "a", "b"]);

    assert_eq!(
        resolve_features(&columns, &[], &names(&["id"])),
        names(&["a", "b"])
    );
}

#[test]
fn test_resolve_features_explicit_selection_wins() {
    let columns = names(&["a", "b", "c"]);

    assert_eq!(
        resolve_features(&columns, &names(&["c", "a"]), &names(&["a"])),
        names(&["c", "a"])
    );
}
