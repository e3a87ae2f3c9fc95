use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Result;
use itertools::Itertools;
use polars::prelude::*;

use crate::datastructures::Algorithm;

/// Print a table to the console under a heading.
pub fn print_table(title: &str, df: &DataFrame) {
    println!("{title}.");
    println!("{df}");
    println!();
}

/// Join algorithm names with " vs " for table headings.
pub fn names_to_vs(names: &[Algorithm]) -> String {
    names.iter().join(" vs ")
}

/// Render a dataframe as a LaTeX `table`/`tabular` environment.
pub fn latex_table(df: &DataFrame, caption: &str, label: &str) -> Result<String> {
    let names = df.get_column_names();
    let alignment = format!("l{}", "c".repeat(names.len().saturating_sub(1)));
    let mut out = String::new();
    writeln!(out, "\\begin{{table}}[htbp]")?;
    writeln!(out, "    \\centering")?;
    writeln!(out, "    \\begin{{tabular}}{{{alignment}}}")?;
    writeln!(out, "        \\toprule")?;
    writeln!(
        out,
        "        {} \\\\",
        names.iter().map(|name| latex_escape(name)).join(" & ")
    )?;
    writeln!(out, "        \\midrule")?;
    for row in 0..df.height() {
        let cells = df
            .get_columns()
            .iter()
            .map(|series| fmt_cell(&series.get(row).unwrap()))
            .join(" & ");
        writeln!(out, "        {cells} \\\\")?;
    }
    writeln!(out, "        \\bottomrule")?;
    writeln!(out, "    \\end{{tabular}}")?;
    writeln!(out, "    \\caption{{{}}}", latex_escape(caption))?;
    writeln!(out, "    \\label{{{label}}}")?;
    writeln!(out, "\\end{{table}}")?;
    Ok(out)
}

/// Write one LaTeX table per reduced algorithm dataframe to `out_dir`,
/// named `<algorithm>.min.tex`.
pub fn export_reduced(reduced: &[(Algorithm, DataFrame)], out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;
    for (algorithm, df) in reduced {
        // the edge count is bookkeeping for the size lookup, not reported
        let display = df.drop("edges")?;
        let table = latex_table(
            &display,
            &format!("Results of {algorithm}"),
            &format!("table:{algorithm}-results"),
        )?;
        fs::write(out_dir.join(format!("{algorithm}.min.tex")), table)?;
    }
    Ok(())
}

fn fmt_cell(value: &AnyValue) -> String {
    match value {
        AnyValue::Utf8(text) => latex_escape(text),
        AnyValue::Float64(v) => format!("{v}"),
        AnyValue::Int64(v) => format!("{v}"),
        other => latex_escape(&other.to_string()),
    }
}

fn latex_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '_' | '#' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
