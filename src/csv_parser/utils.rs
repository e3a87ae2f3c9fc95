use polars::prelude::*;

use anyhow::Result;

pub fn column_to_f64_array(
    df: &DataFrame,
    column_name: &str,
) -> Result<ndarray::Array1<f64>> {
    Ok(df.column(column_name)?.f64()?.rechunk().to_ndarray()?.to_owned())
}

/// Round to a fixed number of decimals, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round every float column of `df` to `decimals` decimals.
pub fn round_float_columns(df: &DataFrame, decimals: u32) -> Result<DataFrame> {
    let columns = df
        .get_columns()
        .iter()
        .map(|series| match series.dtype() {
            DataType::Float64 => Ok(series
                .f64()?
                .rechunk()
                .apply(|v| round_to(v, decimals))
                .into_series()),
            _ => Ok(series.rechunk()),
        })
        .collect::<PolarsResult<Vec<Series>>>()?;
    DataFrame::new(columns).map_err(anyhow::Error::from)
}

/// Median of a sample; even counts average the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
