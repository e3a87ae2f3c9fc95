use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Name of a benchmarked algorithm, e.g. `HeldKarp` or `MST2Approximation`.
pub type Algorithm = String;

/// All repeated trial tables recorded for one algorithm.
///
/// Each trial is one independent run over the full benchmark instance set,
/// one row per instance. Rows at the same index refer to the same instance
/// across all trials; the validator enforces this structurally.
#[derive(Debug)]
pub struct TrialSet {
    /// Algorithm the trials belong to.
    pub algorithm: Algorithm,
    /// One dataframe per recorded trial, in file-name order.
    pub trials: Vec<DataFrame>,
}

impl TrialSet {
    /// Bundle trial dataframes under an algorithm name.
    pub fn new(algorithm: impl Into<Algorithm>, trials: Vec<DataFrame>) -> Self {
        Self {
            algorithm: algorithm.into(),
            trials,
        }
    }
}

/// Decimal precision applied to reported values before handoff to output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Precision {
    /// Decimals kept on table-reported values (times, solutions).
    #[serde(default = "default_value_decimals")]
    pub values: u32,
    /// Decimals kept on derived percentage rows.
    #[serde(default = "default_percentage_decimals")]
    pub percentages: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            values: default_value_decimals(),
            percentages: default_percentage_decimals(),
        }
    }
}

fn default_value_decimals() -> u32 {
    3
}

fn default_percentage_decimals() -> u32 {
    2
}

/// Run configuration, read from a json file with CLI overrides.
#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the `<algorithm>.<run>.csv` trial files.
    pub data_dir: PathBuf,
    /// Algorithms to load, in display order.
    pub algorithms: Vec<Algorithm>,
    /// Pairs fed to the timing comparison.
    #[serde(default)]
    pub timing_pairs: Vec<(Algorithm, Algorithm)>,
    /// Groups fed to the accuracy comparison.
    #[serde(default)]
    pub accuracy_groups: Vec<Vec<Algorithm>>,
    /// Node counts selected for the timing comparison columns.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<i64>,
    /// Output rounding.
    #[serde(default)]
    pub precision: Precision,
    /// Directory the LaTeX tables are written to.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Config {
    /// Read the json config named by `--config` and apply CLI overrides.
    pub fn from_cli(args: &Args) -> Result<Config> {
        let config_str = fs::read_to_string(&args.config)?;
        let mut config: Config = serde_json::from_str(&config_str)?;
        if let Some(data_dir) = &args.data_dir {
            config.data_dir = data_dir.to_path_buf();
        }
        if let Some(out_dir) = &args.out_dir {
            config.out_dir = out_dir.to_path_buf();
        }
        if let Some(sizes) = &args.sizes {
            config.sizes = sizes.to_vec();
        }
        if let Some(algorithms) = &args.algorithms {
            config.algorithms = algorithms.to_vec();
        }
        Ok(config)
    }
}

fn default_sizes() -> Vec<i64> {
    vec![14, 16, 22, 52, 202, 1000]
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("report")
}

/// Command line interface of the analysis binary.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the json config
    #[arg(short, long)]
    pub config: PathBuf,
    /// Directory containing the benchmark CSV files
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
    /// Algorithms to analyze
    #[arg(short, long, value_delimiter = ' ', num_args = 0..)]
    pub algorithms: Option<Vec<Algorithm>>,
    /// Node counts for the timing comparison columns
    #[arg(long, value_name = "n", value_delimiter = ' ', num_args = 0..)]
    pub sizes: Option<Vec<i64>>,
    /// Print comparison tables
    #[arg(short, long)]
    pub tables: bool,
    /// Export reduced tables as LaTeX
    #[arg(short, long)]
    pub latex: bool,
    /// Path to the output directory for LaTeX tables
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
    #[command(flatten)]
    pub verbosity: Verbosity,
}
