use anyhow::{Context, Result};
use ndarray::{Array1, Zip};
use polars::prelude::*;

use crate::csv_parser::utils::{column_to_f64_array, round_to};
use crate::datastructures::{Algorithm, Precision};
use crate::error::AnalysisError;
use crate::ground_truth::GroundTruth;

/// Relative deviation of `actual` from `reference`, as a percentage.
fn percentage(reference: f64, actual: f64) -> f64 {
    100.0 * (reference - actual) / reference
}

/// Build the pairwise timing comparison of two reduced tables.
///
/// One column per requested node count, four rows: the times of both
/// algorithms, their elementwise difference and the improvement of the second
/// over the first as a percentage of the first. Times and differences are
/// rounded to `precision.values` decimals, the improvement row to
/// `precision.percentages`.
pub fn compare_times(
    name_a: &str,
    reduced_a: &DataFrame,
    name_b: &str,
    reduced_b: &DataFrame,
    sizes: &[i64],
    precision: &Precision,
) -> Result<DataFrame> {
    let times_a = times_at_sizes(reduced_a, sizes)?;
    let times_b = times_at_sizes(reduced_b, sizes)?;
    let difference = &times_a - &times_b;
    let improvement = Zip::from(&times_a)
        .and(&times_b)
        .map_collect(|&a, &b| round_to(percentage(a, b), precision.percentages));
    let mut columns = vec![Series::new(
        "algorithm",
        [name_a, name_b, "Difference", "Improvement %"],
    )];
    for (i, nodes) in sizes.iter().enumerate() {
        columns.push(Series::new(
            &nodes.to_string(),
            [
                round_to(times_a[i], precision.values),
                round_to(times_b[i], precision.values),
                round_to(difference[i], precision.values),
                improvement[i],
            ],
        ));
    }
    DataFrame::new(columns).map_err(anyhow::Error::from)
}

/// Build the multi-way accuracy comparison of reduced tables against the
/// known optima.
///
/// One row per ground-truth instance; the join is by position, relying on the
/// shared canonical row order the validator establishes. For each algorithm
/// three columns are appended: the reduced solution, its time and the
/// absolute percentage error against the known optimum. The finished table is
/// sorted by instance size for display.
pub fn compare_accuracy(
    reduced: &[(Algorithm, DataFrame)],
    ground_truth: &GroundTruth,
    precision: &Precision,
) -> Result<DataFrame> {
    if let Some(entry) = ground_truth
        .entries()
        .iter()
        .find(|entry| entry.exact == 0.0)
    {
        return Err(AnalysisError::ZeroExactValue(entry.instance.clone()).into());
    }
    let mut table = ground_truth.to_dataframe()?;
    let exact = column_to_f64_array(&table, "exact")?;
    for (algorithm, df) in reduced {
        if df.height() != table.height() {
            return Err(AnalysisError::RowCountMismatch {
                algorithm: algorithm.clone(),
                expected: table.height(),
                found: df.height(),
            }
            .into());
        }
        let solution = column_to_f64_array(df, "solution")?;
        let time = column_to_f64_array(df, "time")?;
        let error = Zip::from(&exact)
            .and(&solution)
            .map_collect(|&e, &s| round_to(percentage(e, s).abs(), precision.percentages));
        table = table.hstack(&[
            Series::new(&format!("{algorithm} solution"), solution.to_vec()),
            Series::new(&format!("{algorithm} time (ms)"), time.to_vec()),
            Series::new(&format!("{algorithm} error (%)"), error.to_vec()),
        ])?;
    }
    let table = table.sort(["nodes"], false)?.drop("nodes")?;
    Ok(table)
}

fn times_at_sizes(reduced: &DataFrame, sizes: &[i64]) -> Result<Array1<f64>> {
    let times = sizes
        .iter()
        .map(|&nodes| {
            let row = row_with_most_edges(reduced, nodes)?;
            row.column("time")?
                .f64()?
                .get(0)
                .with_context(|| format!("missing time for {nodes} nodes"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Array1::from_vec(times))
}

/// A reduced table may contain several instances of the same size; the
/// timing comparison uses the one with the most edges.
fn row_with_most_edges(reduced: &DataFrame, nodes: i64) -> Result<DataFrame> {
    let candidates = reduced
        .clone()
        .lazy()
        .filter(col("nodes").eq(lit(nodes)))
        .sort_by_exprs(vec![col("edges")], vec![true], false)
        .collect()?;
    if candidates.height() == 0 {
        return Err(AnalysisError::MissingSize(nodes).into());
    }
    Ok(candidates.slice(0, 1))
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use super::{compare_accuracy, compare_times};
    use crate::datastructures::Precision;
    use crate::error::AnalysisError;
    use crate::ground_truth::{GroundTruth, GroundTruthEntry};
    use crate::test_utils::trial_df;

    fn entry(instance: &str, nodes: i64, exact: f64) -> GroundTruthEntry {
        GroundTruthEntry {
            instance: instance.to_string(),
            nodes,
            exact,
        }
    }

    #[test]
    fn test_improvement_percentage() {
        let slow = trial_df(&[100.0], &[7542.0]);
        let fast = trial_df(&[80.0], &[7542.0]);
        let table =
            compare_times("slow", &slow, "fast", &fast, &[52], &Precision::default()).unwrap();
        assert_eq!(table.height(), 4);
        assert_eq!(table["52"], Series::new("52", [100.0, 80.0, 20.0, 20.0]));
    }

    #[test]
    fn test_missing_size() {
        let a = trial_df(&[100.0], &[7542.0]);
        let b = trial_df(&[80.0], &[7542.0]);
        let err =
            compare_times("a", &a, "b", &b, &[99], &Precision::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::MissingSize(99))
        ));
    }

    #[test]
    fn test_duplicate_size_resolved_by_edge_count() {
        let reduced = df! {
            "instance" => ["kroA100.tsp", "kroD100.tsp"],
            "nodes" => [100_i64, 100],
            "edges" => [4950_i64, 4951],
            "weight_type" => ["EUC_2D", "EUC_2D"],
            "solution" => [21282.0, 21294.0],
            "time" => [7.0, 9.0],
        }
        .unwrap();
        let table = compare_times(
            "a",
            &reduced,
            "b",
            &reduced,
            &[100],
            &Precision::default(),
        )
        .unwrap();
        // both rows carry 100 nodes, the one with more edges wins
        assert_eq!(table["100"], Series::new("100", [9.0, 9.0, 0.0, 0.0]));
    }

    #[test]
    fn test_error_percentage() {
        let reduced = vec![("approx".to_string(), trial_df(&[5.0], &[7600.0]))];
        let ground_truth = GroundTruth::new(vec![entry("berlin52.tsp", 52, 7542.0)]);
        let table =
            compare_accuracy(&reduced, &ground_truth, &Precision::default()).unwrap();
        assert_eq!(
            table["approx error (%)"],
            Series::new("approx error (%)", [0.77])
        );
    }

    #[test]
    fn test_accuracy_table_is_sorted_by_size() {
        let reduced = vec![(
            "approx".to_string(),
            trial_df(&[5.0, 2.0], &[7900.0, 3370.0]),
        )];
        let ground_truth = GroundTruth::new(vec![
            entry("berlin52.tsp", 52, 7542.0),
            entry("burma14.tsp", 14, 3323.0),
        ]);
        let table =
            compare_accuracy(&reduced, &ground_truth, &Precision::default()).unwrap();
        assert_eq!(
            table["instance"],
            Series::new("instance", ["burma14.tsp", "berlin52.tsp"])
        );
        assert_eq!(
            table["approx solution"],
            Series::new("approx solution", [3370.0, 7900.0])
        );
    }

    #[test]
    fn test_zero_exact_value_is_guarded() {
        let reduced = vec![("approx".to_string(), trial_df(&[5.0], &[7600.0]))];
        let ground_truth = GroundTruth::new(vec![entry("degenerate.tsp", 1, 0.0)]);
        let err =
            compare_accuracy(&reduced, &ground_truth, &Precision::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::ZeroExactValue(instance)) if instance == "degenerate.tsp"
        ));
    }

    #[test]
    fn test_accuracy_row_count_mismatch() {
        let reduced = vec![("approx".to_string(), trial_df(&[5.0], &[7600.0]))];
        let ground_truth = GroundTruth::new(vec![
            entry("berlin52.tsp", 52, 7542.0),
            entry("burma14.tsp", 14, 3323.0),
        ]);
        let err =
            compare_accuracy(&reduced, &ground_truth, &Precision::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::RowCountMismatch { .. })
        ));
    }
}
