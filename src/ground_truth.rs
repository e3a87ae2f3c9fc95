use anyhow::Result;
use itertools::Itertools;
use once_cell::sync::Lazy;
use polars::prelude::*;

use crate::error::AnalysisError;

/// Known optimum of a single benchmark instance.
#[derive(Debug, Clone)]
pub struct GroundTruthEntry {
    /// Instance file name, e.g. `berlin52.tsp`.
    pub instance: String,
    /// Number of nodes of the instance.
    pub nodes: i64,
    /// Known-optimal tour weight.
    pub exact: f64,
}

/// Reference table of known-optimal tour weights for the benchmark set.
///
/// Entries are kept in benchmark file order (alphabetical by instance name),
/// which is also the row order of every trial file. Comparisons join against
/// this table by position and only sort by instance size for display.
#[derive(Debug, Clone)]
pub struct GroundTruth {
    entries: Vec<GroundTruthEntry>,
}

static REFERENCE: Lazy<GroundTruth> = Lazy::new(|| {
    let entries = [
        ("berlin52.tsp", 52, 7542.0),
        ("burma14.tsp", 14, 3323.0),
        ("ch150.tsp", 150, 6528.0),
        ("d493.tsp", 493, 35002.0),
        ("dsj1000.tsp", 1000, 18659688.0),
        ("eil51.tsp", 51, 426.0),
        ("gr202.tsp", 202, 40160.0),
        ("gr229.tsp", 229, 134602.0),
        ("kroA100.tsp", 100, 21282.0),
        ("kroD100.tsp", 100, 21294.0),
        ("pcb442.tsp", 442, 50778.0),
        ("ulysses16.tsp", 16, 6859.0),
        ("ulysses22.tsp", 22, 7013.0),
    ];
    GroundTruth::new(
        entries
            .iter()
            .map(|&(instance, nodes, exact)| GroundTruthEntry {
                instance: instance.to_string(),
                nodes,
                exact,
            })
            .collect(),
    )
});

impl GroundTruth {
    /// Build a reference table from explicit entries.
    pub fn new(entries: Vec<GroundTruthEntry>) -> Self {
        Self { entries }
    }

    /// The process-wide reference set of the TSPLIB benchmark instances.
    pub fn reference() -> &'static GroundTruth {
        &REFERENCE
    }

    /// Known optimum for `instance`; fails for names outside the set.
    pub fn exact(&self, instance: &str) -> Result<f64> {
        self.entries
            .iter()
            .find(|entry| entry.instance == instance)
            .map(|entry| entry.exact)
            .ok_or_else(|| AnalysisError::UnknownInstance(instance.to_string()).into())
    }

    /// All entries in stored (benchmark file) order.
    pub fn entries(&self) -> &[GroundTruthEntry] {
        &self.entries
    }

    /// Number of known instances.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the reference set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry rows as a dataframe, in stored (benchmark file) order.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let df = df! {
            "nodes" => self.entries.iter().map(|entry| entry.nodes).collect_vec(),
            "instance" => self.entries.iter().map(|entry| entry.instance.as_str()).collect_vec(),
            "exact" => self.entries.iter().map(|entry| entry.exact).collect_vec(),
        }?;
        Ok(df)
    }
}
