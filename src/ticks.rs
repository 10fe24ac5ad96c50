//! Lap-time axis ticks and `m:ss.mmm` formatting.

use serde::Serialize;

use crate::error::SummaryError;

/// Evenly spaced axis ticks with their formatted labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickSet {
    pub values: Vec<u64>,
    pub labels: Vec<String>,
}

impl TickSet {
    /// Integer distance between consecutive ticks.
    pub fn step(&self) -> u64 {
        match self.values.as_slice() {
            [first, second, ..] => second - first,
            _ => 0,
        }
    }
}

/// Computes `count` ticks from the minimum to (roughly) the maximum of
/// `values`, spaced by `round((max - min) / (count - 1))`.
///
/// When every value is equal the step is zero and all ticks repeat.
///
/// # Errors
///
/// Returns [`SummaryError::InvalidInput`] if `values` is empty or `count < 2`.
pub fn compute_ticks(values: &[u64], count: usize) -> Result<TickSet, SummaryError> {
    if count < 2 {
        return Err(SummaryError::InvalidInput(format!(
            "tick count must be at least 2, got {count}"
        )));
    }

    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Err(SummaryError::InvalidInput(
            "cannot compute ticks for an empty value set".to_string(),
        ));
    };

    let step = ((max - min) as f64 / (count - 1) as f64).round() as u64;
    let values: Vec<u64> = (0..count as u64).map(|i| min + i * step).collect();
    let labels = values.iter().copied().map(format_lap_time).collect();

    Ok(TickSet { values, labels })
}

/// Formats milliseconds as `minutes:seconds.millis`, seconds zero-padded to
/// two digits (`0:12.000`, `1:31.447`).
pub fn format_lap_time(ms: u64) -> String {
    let minutes = ms / 60_000;
    let rem = ms % 60_000;
    format!("{}:{:02}.{:03}", minutes, rem / 1000, rem % 1000)
}

/// Like [`format_lap_time`], rendering `N/A` when no time was recorded.
pub fn format_optional_lap_time(ms: Option<u64>) -> String {
    ms.map(format_lap_time).unwrap_or_else(|| "N/A".to_string())
}
