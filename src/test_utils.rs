use polars::prelude::*;

/// Trial frame over a fixed instance pool with the given measurements.
///
/// Takes up to four rows; metadata columns are filled from the pool in
/// benchmark file order.
pub fn trial_df(times: &[f64], solutions: &[f64]) -> DataFrame {
    assert_eq!(times.len(), solutions.len());
    let instances = ["berlin52.tsp", "burma14.tsp", "ulysses16.tsp", "ulysses22.tsp"];
    let nodes = [52_i64, 14, 16, 22];
    let edges = [1326_i64, 91, 120, 231];
    let n = times.len();
    df! {
        "instance" => &instances[..n],
        "nodes" => &nodes[..n],
        "edges" => &edges[..n],
        "weight_type" => &vec!["EUC_2D"; n],
        "solution" => solutions,
        "time" => times,
    }
    .unwrap()
}
