use std::path::Path;

use benchmark_analyzer::csv_parser;
use benchmark_analyzer::datastructures::Precision;
use benchmark_analyzer::reducer;
use polars::prelude::*;

#[test]
fn test_reduce_recorded_trials() {
    let trials = csv_parser::read_trials(Path::new("data/test"), "annealing").unwrap();
    assert_eq!(trials.len(), 3);
    let reduced = reducer::reduce(&trials, &Precision::default()).unwrap();
    assert_eq!(reduced.height(), 4);
    // fastest run per instance
    assert_eq!(reduced["time"], Series::new("time", [9.1, 2.9, 3.9, 5.0]));
    // median solution per instance, not the fastest run's own output
    assert_eq!(
        reduced["solution"],
        Series::new("solution", [7900.0, 3365.0, 6950.0, 7080.0])
    );
    assert_eq!(
        reduced["instance"],
        Series::new(
            "instance",
            ["berlin52.tsp", "burma14.tsp", "ulysses16.tsp", "ulysses22.tsp"]
        )
    );
}
