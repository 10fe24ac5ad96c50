//! Payload schemas returned by the race summary API.
//!
//! Lap and chart data are strongly typed. Result tables stay as loose JSON
//! objects ([`SummaryRow`]) because the backend passes database nulls through
//! as the `\N` escape in otherwise numeric columns.

use serde::{Deserialize, Serialize};

/// One result row as delivered by the API, keyed by column name.
pub type SummaryRow = serde_json::Map<String, serde_json::Value>;

/// Literal the upstream data uses for a null column.
pub const NULL_SENTINEL: &str = "\\N";

/// A single timed lap for one driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapRecord {
    pub driver: String,
    pub lap: u32,
    pub milliseconds: u64,
}

/// A driver's running position at the end of a lap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub driver: String,
    pub lap: u32,
    pub position: u32,
}

/// A constructor's running position at the end of a lap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPositionRecord {
    pub team: String,
    pub lap: u32,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastestLapInfo {
    pub time: String,
    pub driver: Option<String>,
    pub lap: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverFastestLap {
    pub driver: String,
    pub milliseconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapPosition {
    pub lap: u32,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapTime {
    pub lap: u32,
    pub milliseconds: u64,
}

/// An entry of the overall fastest-laps ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLap {
    pub position: u32,
    pub driver: String,
    pub lap: u32,
    pub milliseconds: u64,
}

/// Slowest, mean, and fastest lap for one driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceRange {
    pub driver: String,
    pub min: u64,
    pub avg: f64,
    pub max: u64,
}

/// Everything shown on the circuit tab of a race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitSummary {
    pub circuit_name: String,
    pub location: String,
    pub race_name: String,
    pub year: i32,
    pub laps: u32,
    pub length_km: f64,
    pub race_distance_km: f64,
    pub fastest_lap: FastestLapInfo,
    #[serde(default)]
    pub fastest_laps_per_driver: Vec<DriverFastestLap>,
    #[serde(default)]
    pub winner_position_changes: Vec<LapPosition>,
    #[serde(default)]
    pub fastest_lap_timeline: Vec<LapTime>,
    #[serde(default)]
    pub top_fastest_laps: Vec<RankedLap>,
    #[serde(default)]
    pub pace_evolution: Vec<LapRecord>,
    #[serde(default)]
    pub pace_candlestick: Vec<PaceRange>,
    #[serde(default)]
    pub position_evolution: Vec<PositionRecord>,
}

/// A highlighted driver result (winner, pole sitter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverCard {
    pub team: String,
    pub driver: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FastestLapCard {
    pub team: String,
    pub driver: String,
    pub lap: u32,
    pub time: String,
}

/// Everything shown on the drivers tab of a race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSummary {
    pub race_winner: DriverCard,
    pub pole_position: DriverCard,
    pub fastest_lap: FastestLapCard,
    #[serde(default)]
    pub results: Vec<SummaryRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestFinisher {
    pub team: String,
    pub position: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostPoints {
    pub team: String,
    pub points: f64,
}

/// Points scored by one driver for their constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverPoints {
    pub constructor: String,
    pub driver: String,
    pub points: f64,
}

/// Everything shown on the constructors tab of a race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorSummary {
    pub best_finisher: Option<BestFinisher>,
    pub most_points: Option<MostPoints>,
    #[serde(default)]
    pub results: Vec<SummaryRow>,
    #[serde(default)]
    pub driver_points: Vec<DriverPoints>,
    #[serde(default)]
    pub position_evolution: Vec<TeamPositionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_circuit_summary_defaults_missing_arrays() {
        let payload = json!({
            "circuit_name": "Bahrain International Circuit",
            "location": "Sakhir",
            "race_name": "Bahrain Grand Prix",
            "year": 2021,
            "laps": 52,
            "length_km": 5.793,
            "race_distance_km": 301.236,
            "fastest_lap": { "time": "N/A", "driver": null, "lap": null }
        });

        let summary: CircuitSummary = serde_json::from_value(payload).unwrap();
        assert!(summary.pace_evolution.is_empty());
        assert!(summary.top_fastest_laps.is_empty());
        assert_eq!(summary.fastest_lap.driver, None);
    }

    #[test]
    fn test_driver_summary_keeps_sentinel_rows() {
        let payload = json!({
            "race_winner": { "team": "Mercedes", "driver": "Lewis Hamilton", "time": "1:32:03.897" },
            "pole_position": { "team": "Red Bull", "driver": "Max Verstappen", "time": "1:28.997" },
            "fastest_lap": { "team": "Red Bull", "driver": "Max Verstappen", "lap": 41, "time": "1:32.090" },
            "results": [
                { "position": "\\N", "driver": "Sergio Perez", "team": "Red Bull", "time": "\\N" }
            ]
        });

        let summary: DriverSummary = serde_json::from_value(payload).unwrap();
        assert_eq!(summary.results.len(), 1);
        assert_eq!(summary.results[0]["position"], NULL_SENTINEL);
    }

    #[test]
    fn test_constructor_summary_optional_cards() {
        let payload = json!({ "best_finisher": null, "results": [] });
        let summary: ConstructorSummary = serde_json::from_value(payload).unwrap();
        assert!(summary.best_finisher.is_none());
        assert!(summary.most_points.is_none());
        assert!(summary.driver_points.is_empty());
    }
}
