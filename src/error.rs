use crate::datastructures::Algorithm;

/// Failure taxonomy of the analysis pipeline.
///
/// Validation variants abort the run before any reduction happens; lookup
/// variants abort the comparison call that raised them. All variants travel
/// inside [`anyhow::Error`] and can be recovered with `downcast_ref`.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// An algorithm has no recorded trial files at all.
    #[error("there are no benchmark data for {0}")]
    EmptyInput(Algorithm),

    /// A trial file deviates from the single global row count.
    #[error("benchmark files have different numbers of rows: expected {expected}, found {found} in a {algorithm} trial")]
    RowCountMismatch {
        /// Algorithm whose trial file deviates.
        algorithm: Algorithm,
        /// Row count established by the first trial file read.
        expected: usize,
        /// Row count actually found.
        found: usize,
    },

    /// A trial file contains a null cell.
    #[error("values cannot be null, check column {column} of the {algorithm} benchmarks")]
    NullValue {
        /// Algorithm whose trial file holds the null.
        algorithm: Algorithm,
        /// Column the null was found in.
        column: String,
    },

    /// A timing comparison asked for a node count no benchmark row has.
    #[error("no benchmark row with {0} nodes")]
    MissingSize(i64),

    /// An instance name is absent from the known-optimum reference table.
    #[error("unknown instance {0}")]
    UnknownInstance(String),

    /// Percentage error against a zero optimum is undefined.
    #[error("exact solution value is zero for {0}")]
    ZeroExactValue(String),
}
