//! Chart series derived from race summaries.

use serde::Serialize;
use tracing::debug;

use crate::error::SummaryError;
use crate::grouping::{Point, Series, group};
use crate::summary::{
    CircuitSummary, ConstructorSummary, DriverPoints, LapRecord, PaceRange, PositionRecord,
    TeamPositionRecord,
};
use crate::ticks::{TickSet, compute_ticks, format_lap_time};

/// Lap time per lap for every driver, labelled with the formatted time.
pub fn pace_evolution(laps: &[LapRecord]) -> Vec<Series<Point<u32, u64>>> {
    group(
        laps,
        |r| r.driver.as_str(),
        |r| Point::labeled(r.lap, r.milliseconds, format_lap_time(r.milliseconds)),
    )
}

/// All lap times for every driver, for box plots.
pub fn pace_distribution(laps: &[LapRecord]) -> Vec<Series<u64>> {
    group(laps, |r| r.driver.as_str(), |r| r.milliseconds)
}

/// Running position per lap for every driver.
pub fn position_evolution(positions: &[PositionRecord]) -> Vec<Series<Point<u32, u32>>> {
    group(
        positions,
        |r| r.driver.as_str(),
        |r| Point::labeled(r.lap, r.position, r.driver.clone()),
    )
}

/// Running position per lap for every constructor.
pub fn team_position_evolution(positions: &[TeamPositionRecord]) -> Vec<Series<Point<u32, u32>>> {
    group(
        positions,
        |r| r.team.as_str(),
        |r| Point::labeled(r.lap, r.position, r.team.clone()),
    )
}

/// Driver points, one bar group per constructor.
pub fn driver_points(points: &[DriverPoints]) -> Vec<Series<Point<String, f64>>> {
    group(
        points,
        |r| r.constructor.as_str(),
        |r| Point::new(r.driver.clone(), r.points),
    )
}

/// Fastest, mean, and slowest lap per driver, in first-seen driver order.
pub fn pace_ranges(laps: &[LapRecord]) -> Vec<PaceRange> {
    pace_distribution(laps)
        .into_iter()
        .filter_map(|s| {
            let min = *s.points.iter().min()?;
            let max = *s.points.iter().max()?;
            let avg = s.points.iter().sum::<u64>() as f64 / s.points.len() as f64;
            Some(PaceRange {
                driver: s.key,
                min,
                avg,
                max,
            })
        })
        .collect()
}

/// Lap-time axis shared by the pace charts, or `None` without lap data.
pub fn lap_time_axis(laps: &[LapRecord], tick_count: usize) -> Result<Option<TickSet>, SummaryError> {
    if laps.is_empty() {
        return Ok(None);
    }
    let times: Vec<u64> = laps.iter().map(|l| l.milliseconds).collect();
    compute_ticks(&times, tick_count).map(Some)
}

/// Series behind the circuit tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitCharts {
    pub pace_evolution: Vec<Series<Point<u32, u64>>>,
    pub pace_distribution: Vec<Series<u64>>,
    pub pace_ranges: Vec<PaceRange>,
    pub position_evolution: Vec<Series<Point<u32, u32>>>,
    pub y_axis: Option<TickSet>,
}

impl CircuitCharts {
    pub fn build(summary: &CircuitSummary, tick_count: usize) -> Result<Self, SummaryError> {
        let y_axis = lap_time_axis(&summary.pace_evolution, tick_count)?;
        let charts = Self {
            pace_evolution: pace_evolution(&summary.pace_evolution),
            pace_distribution: pace_distribution(&summary.pace_evolution),
            pace_ranges: pace_ranges(&summary.pace_evolution),
            position_evolution: position_evolution(&summary.position_evolution),
            y_axis,
        };
        debug!(
            drivers = charts.pace_evolution.len(),
            laps = summary.pace_evolution.len(),
            "Circuit charts built"
        );
        Ok(charts)
    }
}

/// Series behind the constructors tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstructorCharts {
    pub driver_points: Vec<Series<Point<String, f64>>>,
    pub position_evolution: Vec<Series<Point<u32, u32>>>,
}

impl ConstructorCharts {
    pub fn build(summary: &ConstructorSummary) -> Self {
        Self {
            driver_points: driver_points(&summary.driver_points),
            position_evolution: team_position_evolution(&summary.position_evolution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::total_points;

    fn lap(driver: &str, lap: u32, ms: u64) -> LapRecord {
        LapRecord {
            driver: driver.to_string(),
            lap,
            milliseconds: ms,
        }
    }

    #[test]
    fn test_pace_evolution_labels_points() {
        let laps = vec![
            lap("Max Verstappen", 1, 98_000),
            lap("Lewis Hamilton", 1, 97_500),
            lap("Max Verstappen", 2, 95_250),
        ];
        let series = pace_evolution(&laps);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].key, "Max Verstappen");
        assert_eq!(series[0].points[1], Point::labeled(2, 95_250, "1:35.250"));
        assert_eq!(total_points(&series), laps.len());
    }

    #[test]
    fn test_pace_ranges() {
        let laps = vec![
            lap("A", 1, 90_000),
            lap("B", 1, 91_000),
            lap("A", 2, 92_000),
            lap("A", 3, 91_000),
        ];
        let ranges = pace_ranges(&laps);

        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].driver, "A");
        assert_eq!(ranges[0].min, 90_000);
        assert_eq!(ranges[0].max, 92_000);
        assert_eq!(ranges[0].avg, 91_000.0);
        assert_eq!(ranges[1].min, ranges[1].max);
    }

    #[test]
    fn test_lap_time_axis_without_laps() {
        assert_eq!(lap_time_axis(&[], 6), Ok(None));
    }

    #[test]
    fn test_lap_time_axis_rejects_bad_count() {
        let laps = vec![lap("A", 1, 90_000)];
        assert!(lap_time_axis(&laps, 1).is_err());
    }

    #[test]
    fn test_driver_points_grouped_by_constructor() {
        let points = vec![
            DriverPoints {
                constructor: "Mercedes".to_string(),
                driver: "Hamilton".to_string(),
                points: 25.0,
            },
            DriverPoints {
                constructor: "Red Bull".to_string(),
                driver: "Verstappen".to_string(),
                points: 19.0,
            },
            DriverPoints {
                constructor: "Mercedes".to_string(),
                driver: "Bottas".to_string(),
                points: 16.0,
            },
        ];
        let series = driver_points(&points);

        assert_eq!(series[0].key, "Mercedes");
        assert_eq!(
            series[0].points,
            vec![
                Point::new("Hamilton".to_string(), 25.0),
                Point::new("Bottas".to_string(), 16.0)
            ]
        );
        assert_eq!(series[1].len(), 1);
    }
}
