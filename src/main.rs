use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use polars::prelude::DataFrame;

use benchmark_analyzer::comparator;
use benchmark_analyzer::csv_parser;
use benchmark_analyzer::datastructures::*;
use benchmark_analyzer::ground_truth::GroundTruth;
use benchmark_analyzer::reducer;
use benchmark_analyzer::reporting;
use benchmark_analyzer::validator;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();
    let config = match Config::from_cli(&args) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to load config: {err}");
            std::process::exit(exitcode::CONFIG);
        }
    };
    let trial_sets = csv_parser::read_trial_sets(&config)?;
    validator::validate(&trial_sets)?;
    info!(
        "validated {} trial files for {} algorithms",
        trial_sets.iter().map(|set| set.trials.len()).sum::<usize>(),
        trial_sets.len()
    );
    let reduced = reducer::reduce_all(&trial_sets, &config.precision)?;
    if args.tables {
        for (first, second) in &config.timing_pairs {
            let table = comparator::compare_times(
                first,
                find_reduced(&reduced, first)?,
                second,
                find_reduced(&reduced, second)?,
                &config.sizes,
                &config.precision,
            )?;
            let title = reporting::names_to_vs(&[first.clone(), second.clone()]);
            reporting::print_table(&format!("Comparison {title}"), &table);
        }
        for group in &config.accuracy_groups {
            let selection = group
                .iter()
                .map(|name| Ok((name.clone(), find_reduced(&reduced, name)?.clone())))
                .collect::<Result<Vec<_>>>()?;
            let table = comparator::compare_accuracy(
                &selection,
                GroundTruth::reference(),
                &config.precision,
            )?;
            let title = reporting::names_to_vs(group);
            reporting::print_table(&format!("Comparison {title}"), &table);
        }
    }
    if args.latex {
        reporting::export_reduced(&reduced, &config.out_dir)?;
        info!("wrote LaTeX tables to {}", config.out_dir.display());
    }
    Ok(())
}

fn find_reduced<'a>(
    reduced: &'a [(Algorithm, DataFrame)],
    name: &str,
) -> Result<&'a DataFrame> {
    reduced
        .iter()
        .find(|(algorithm, _)| algorithm == name)
        .map(|(_, df)| df)
        .with_context(|| format!("{name} is not among the configured algorithms"))
}
