use anyhow::{Context, Result};
use polars::prelude::*;

use crate::csv_parser::utils::{median, round_float_columns};
use crate::datastructures::{Algorithm, Precision, TrialSet};

/// Collapse the repeated trials of one algorithm into a single table with one
/// row per instance.
///
/// For every row index the fastest trial supplies the row, except for the
/// solution value, which is replaced by the median over all trials instead of
/// the winning run's own output. Ties on the minimum time keep the first
/// trial in file order. Float columns of the result are rounded to
/// `precision.values` decimals; the source trials are left untouched.
pub fn reduce(trials: &[DataFrame], precision: &Precision) -> Result<DataFrame> {
    let first = trials
        .first()
        .context("cannot reduce an empty list of trials")?;
    let times = float_columns(trials, "time")?;
    let solutions = float_columns(trials, "solution")?;
    let mut reduced = first.slice(0, 0);
    for row in 0..first.height() {
        let winner = fastest_trial(&times, row)?;
        let row_solutions = values_at_row(&solutions, row)?;
        let median_solution =
            median(&row_solutions).context("no solution values to take the median of")?;
        let mut reduced_row = trials[winner].slice(row as i64, 1);
        reduced_row.with_column(Series::new("solution", [median_solution]))?;
        reduced.vstack_mut(&reduced_row)?;
    }
    round_float_columns(&reduced, precision.values)
}

/// Reduce every trial set, keeping the configured algorithm order.
pub fn reduce_all(
    trial_sets: &[TrialSet],
    precision: &Precision,
) -> Result<Vec<(Algorithm, DataFrame)>> {
    trial_sets
        .iter()
        .map(|set| {
            let reduced = reduce(&set.trials, precision)
                .with_context(|| format!("failed to reduce the {} trials", set.algorithm))?;
            Ok((set.algorithm.clone(), reduced))
        })
        .collect()
}

fn float_columns<'a>(
    trials: &'a [DataFrame],
    name: &str,
) -> Result<Vec<&'a Float64Chunked>> {
    trials
        .iter()
        .map(|trial| Ok(trial.column(name)?.f64()?))
        .collect()
}

/// Index of the trial with the minimum value at `row`; strict comparison
/// keeps the first minimal trial on ties.
fn fastest_trial(times: &[&Float64Chunked], row: usize) -> Result<usize> {
    let mut winner = 0;
    let mut best = value_at(times[0], row)?;
    for (trial, column) in times.iter().enumerate().skip(1) {
        let time = value_at(column, row)?;
        if time < best {
            winner = trial;
            best = time;
        }
    }
    Ok(winner)
}

fn values_at_row(columns: &[&Float64Chunked], row: usize) -> Result<Vec<f64>> {
    columns.iter().map(|column| value_at(column, row)).collect()
}

fn value_at(column: &Float64Chunked, row: usize) -> Result<f64> {
    column
        .get(row)
        .with_context(|| format!("unexpected null at row {row}"))
}
