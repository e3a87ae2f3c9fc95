#![warn(missing_docs)]
//! Reduce repeated TSP benchmark trials and compare the algorithms that
//! produced them.
//!
//! Benchmarks are recorded as one `;`-delimited CSV file per trial per
//! algorithm, one row per problem instance. This crate validates that the
//! recorded trials are structurally consistent, collapses them into one
//! canonical table per algorithm (fastest observed time, median reported
//! solution), and derives comparison tables: pairwise timing (difference and
//! improvement percentage) and multi-way accuracy against the known-optimal
//! tour weights of the benchmark set.
//!
//! The pipeline is a straight line — read, validate, reduce, compare — with
//! no recovery: any failed check aborts the run before partial results are
//! produced.
//!
//! Example
//! ```rust
//! use benchmark_analyzer::datastructures::{Precision, TrialSet};
//! use benchmark_analyzer::ground_truth::GroundTruth;
//! use benchmark_analyzer::{comparator, csv_parser, reducer, reporting, validator};
//! # use std::path::Path;
//! # use anyhow::Result;
//!
//! fn example() -> Result<()> {
//!     let data_dir = Path::new("data");
//!     let precision = Precision::default();
//!
//!     // one file per repeated run, named <algorithm>.<run>.csv
//!     let trial_sets = vec![
//!         TrialSet::new("HeldKarp", csv_parser::read_trials(data_dir, "HeldKarp")?),
//!         TrialSet::new(
//!             "MST2Approximation",
//!             csv_parser::read_trials(data_dir, "MST2Approximation")?,
//!         ),
//!     ];
//!     validator::validate(&trial_sets)?;
//!
//!     let reduced = reducer::reduce_all(&trial_sets, &precision)?;
//!
//!     let timing = comparator::compare_times(
//!         &reduced[0].0,
//!         &reduced[0].1,
//!         &reduced[1].0,
//!         &reduced[1].1,
//!         &[14, 16, 22, 52, 202, 1000],
//!         &precision,
//!     )?;
//!     let accuracy =
//!         comparator::compare_accuracy(&reduced, GroundTruth::reference(), &precision)?;
//!
//!     reporting::print_table("Comparison HeldKarp vs MST2Approximation", &timing);
//!     reporting::print_table("Comparison of solution quality", &accuracy);
//!     Ok(())
//! }
//! ```

/// Pairwise timing and multi-way accuracy comparison tables.
pub mod comparator;

/// Trial CSV discovery, reading and column normalization.
pub mod csv_parser;

/// Shared data structures and run configuration.
pub mod datastructures;

/// Failure taxonomy of the analysis pipeline.
pub mod error;

/// Known-optimal reference solutions for the benchmark instances.
pub mod ground_truth;

/// Collapse repeated trials into one canonical row per instance.
pub mod reducer;

/// Console and LaTeX rendering of result tables.
pub mod reporting;

/// Structural consistency checks run before any reduction.
pub mod validator;

#[cfg(test)]
mod test_utils;
