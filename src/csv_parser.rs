use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::info;
use polars::prelude::*;

use anyhow::{Context, Result};

use crate::datastructures::{Config, TrialSet};

pub mod utils;

#[cfg(test)]
mod tests;

/// Read one trial file and normalize its columns.
///
/// Trial files are `;`-delimited with a header row and `.` as the decimal
/// separator. The wire columns `ms`, `output`, `d`, `m`, `weight_type` and
/// `filename` are renamed to `time`, `solution`, `nodes`, `edges`,
/// `weight_type` and `instance`; measurement columns are forced to floats so
/// that integral solution values parse the same as fractional ones.
pub fn read_trial_csv(path: &Path) -> Result<DataFrame> {
    let in_columns = vec![
        "ms".to_string(),
        "output".into(),
        "d".into(),
        "m".into(),
        "weight_type".into(),
        "filename".into(),
    ];
    let df = CsvReader::from_path(path)?
        .with_delimiter(b';')
        .has_header(true)
        .with_columns(Some(in_columns))
        .with_dtypes(Some(&Schema::from(
            [
                Field::new("ms", DataType::Float64),
                Field::new("output", DataType::Float64),
            ]
            .into_iter(),
        )))
        .finish()?
        .lazy()
        .select([
            col("filename").alias("instance"),
            col("d").alias("nodes"),
            col("m").alias("edges"),
            col("weight_type"),
            col("output").alias("solution"),
            col("ms").alias("time"),
        ])
        .collect()?;
    Ok(df)
}

/// Collect the trial files recorded for `algorithm` in `data_dir`.
///
/// Trials are grouped by file name: every `<algorithm>.<run>.csv` belongs to
/// `algorithm`. The result is sorted so that the trial order, and with it the
/// reducer's tie-breaking, does not depend on directory iteration order.
pub fn trial_paths(data_dir: &Path, algorithm: &str) -> Result<Vec<PathBuf>> {
    let prefix = format!("{algorithm}.");
    let mut paths = fs::read_dir(data_dir)
        .with_context(|| format!("cannot read data directory {}", data_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map_or(false, |name| {
                    name.starts_with(&prefix) && name.ends_with(".csv")
                })
        })
        .collect_vec();
    paths.sort();
    Ok(paths)
}

/// Read all recorded trials of one algorithm.
pub fn read_trials(data_dir: &Path, algorithm: &str) -> Result<Vec<DataFrame>> {
    trial_paths(data_dir, algorithm)?
        .iter()
        .map(|path| {
            read_trial_csv(path)
                .with_context(|| format!("failed to read {}", path.display()))
        })
        .collect()
}

/// Read the trial sets of every configured algorithm.
pub fn read_trial_sets(config: &Config) -> Result<Vec<TrialSet>> {
    config
        .algorithms
        .iter()
        .map(|algorithm| {
            let trials = read_trials(&config.data_dir, algorithm)?;
            info!("{}: {} trial files", algorithm, trials.len());
            Ok(TrialSet::new(algorithm.clone(), trials))
        })
        .collect()
}
