use std::path::Path;

use polars::prelude::*;

use super::utils::{column_to_f64_array, median, round_to};
use super::{read_trial_csv, read_trials, trial_paths};

#[test]
fn test_normalized_columns() {
    let df = read_trial_csv(Path::new("data/test/annealing.1.csv")).unwrap();
    assert_eq!(
        df.get_column_names(),
        vec!["instance", "nodes", "edges", "weight_type", "solution", "time"]
    );
    assert_eq!(df.height(), 4);
    assert_eq!(df.column("solution").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("time").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("nodes").unwrap().dtype(), &DataType::Int64);
    assert_eq!(
        df["instance"],
        Series::new(
            "instance",
            ["berlin52.tsp", "burma14.tsp", "ulysses16.tsp", "ulysses22.tsp"]
        )
    );
}

#[test]
fn test_trial_discovery_is_sorted() {
    let paths = trial_paths(Path::new("data/test"), "annealing").unwrap();
    let names = paths
        .iter()
        .map(|path| path.file_name().unwrap().to_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["annealing.1.csv", "annealing.2.csv", "annealing.3.csv"]
    );
}

#[test]
fn test_discovery_does_not_mix_algorithms() {
    let trials = read_trials(Path::new("data/test"), "exact").unwrap();
    assert_eq!(trials.len(), 1);
}

#[test]
fn test_unknown_algorithm_has_no_trials() {
    let trials = read_trials(Path::new("data/test"), "branchandbound").unwrap();
    assert!(trials.is_empty());
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(0.76923, 2), 0.77);
    assert_eq!(round_to(-4.74675, 2), -4.75);
    assert_eq!(round_to(12.3456, 3), 12.346);
    assert_eq!(round_to(20.0, 2), 20.0);
}

#[test]
fn test_median_odd_and_even() {
    assert_eq!(median(&[100.0, 110.0, 105.0]), Some(105.0));
    assert_eq!(median(&[100.0, 104.0, 101.0, 140.0]), Some(102.5));
    assert_eq!(median(&[42.0]), Some(42.0));
    assert_eq!(median(&[]), None);
}

#[test]
fn test_column_to_f64_array() {
    let df = df! {
        "time" => [9.1, 2.9, 3.9],
    }
    .unwrap();
    let array = column_to_f64_array(&df, "time").unwrap();
    assert_eq!(array, ndarray::arr1(&[9.1, 2.9, 3.9]));
}
