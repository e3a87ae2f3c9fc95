use anyhow::Result;

use crate::datastructures::TrialSet;
use crate::error::AnalysisError;

/// Check structural consistency of all trial sets before any reduction runs.
///
/// This is a precondition check, not a partial-data tolerance mechanism:
/// the first violation aborts the whole run. Cross-trial agreement of the
/// solution values is deliberately not checked, since approximate algorithms
/// may legitimately report different solutions on repeated runs.
pub fn validate(trial_sets: &[TrialSet]) -> Result<()> {
    check_not_empty(trial_sets)?;
    check_same_row_count(trial_sets)?;
    check_no_nulls(trial_sets)?;
    Ok(())
}

fn check_not_empty(trial_sets: &[TrialSet]) -> Result<()> {
    for set in trial_sets {
        if set.trials.is_empty() {
            return Err(AnalysisError::EmptyInput(set.algorithm.clone()).into());
        }
    }
    Ok(())
}

/// Comparisons assume index-aligned instances across algorithms too, so one
/// global row count is required over all trials of all algorithms.
fn check_same_row_count(trial_sets: &[TrialSet]) -> Result<()> {
    let Some(expected) = trial_sets
        .iter()
        .flat_map(|set| &set.trials)
        .map(|trial| trial.height())
        .next()
    else {
        return Ok(());
    };
    for set in trial_sets {
        for trial in &set.trials {
            if trial.height() != expected {
                return Err(AnalysisError::RowCountMismatch {
                    algorithm: set.algorithm.clone(),
                    expected,
                    found: trial.height(),
                }
                .into());
            }
        }
    }
    Ok(())
}

fn check_no_nulls(trial_sets: &[TrialSet]) -> Result<()> {
    for set in trial_sets {
        for trial in &set.trials {
            if let Some(column) = trial
                .get_columns()
                .iter()
                .find(|series| series.null_count() > 0)
            {
                return Err(AnalysisError::NullValue {
                    algorithm: set.algorithm.clone(),
                    column: column.name().to_string(),
                }
                .into());
            }
        }
    }
    Ok(())
}
