//! Grouping of flat records into named chart series.
//!
//! The backend returns lap and result data as flat lists sorted by driver or
//! lap. Charts need one trace per driver (or team), so [`group`] walks the
//! list once and buckets each record under its key, keeping both the order in
//! which keys first appear and the order of points inside every bucket.

use serde::Serialize;
use std::collections::HashMap;

/// One chart trace: every point derived from records sharing `key`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series<P> {
    pub key: String,
    pub points: Vec<P>,
}

impl<P> Series<P> {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A plotted point with an optional hover label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point<X, Y> {
    pub x: X,
    pub y: Y,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl<X, Y> Point<X, Y> {
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y, label: None }
    }

    pub fn labeled(x: X, y: Y, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: Some(label.into()),
        }
    }
}

/// Groups `records` by `key`, mapping each record to a point with `point`.
///
/// Series appear in the order their key is first seen and points keep input
/// order. Nothing is sorted, filtered, or deduplicated, so the total number
/// of points always equals `records.len()`.
pub fn group<'a, R, P, K, F>(records: &'a [R], key: K, point: F) -> Vec<Series<P>>
where
    K: Fn(&'a R) -> &'a str,
    F: Fn(&'a R) -> P,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut series: Vec<Series<P>> = Vec::new();

    for record in records {
        let k = key(record);
        let slot = *index.entry(k).or_insert_with(|| {
            series.push(Series::new(k));
            series.len() - 1
        });
        series[slot].points.push(point(record));
    }

    series
}

/// Sum of points across all series.
pub fn total_points<P>(series: &[Series<P>]) -> usize {
    series.iter().map(Series::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        key: String,
        value: u32,
    }

    fn rows(spec: &[(&str, u32)]) -> Vec<Row> {
        spec.iter()
            .map(|(k, v)| Row {
                key: k.to_string(),
                value: *v,
            })
            .collect()
    }

    #[test]
    fn test_empty_input_gives_no_series() {
        let input: Vec<Row> = Vec::new();
        let out = group(&input, |r| r.key.as_str(), |r| r.value);
        assert!(out.is_empty());
    }

    #[test]
    fn test_first_seen_order() {
        let input = rows(&[("B", 1), ("A", 2), ("B", 3), ("A", 4)]);
        let out = group(&input, |r| r.key.as_str(), |r| r.value);

        let keys: Vec<_> = out.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "A"]);
        assert_eq!(out[0].points, vec![1, 3]);
        assert_eq!(out[1].points, vec![2, 4]);
    }

    #[test]
    fn test_no_records_dropped_or_duplicated() {
        let input = rows(&[
            ("HAM", 1),
            ("VER", 1),
            ("HAM", 2),
            ("LEC", 1),
            ("VER", 2),
            ("HAM", 3),
        ]);
        let out = group(&input, |r| r.key.as_str(), |r| r.value);

        assert_eq!(out.len(), 3);
        assert_eq!(total_points(&out), input.len());
    }

    #[test]
    fn test_within_series_order_is_not_sorted() {
        let input = rows(&[("A", 9), ("A", 1), ("A", 5)]);
        let out = group(&input, |r| r.key.as_str(), |r| r.value);
        assert_eq!(out[0].points, vec![9, 1, 5]);
    }

    #[test]
    fn test_repeat_runs_are_identical() {
        let input = rows(&[("B", 1), ("A", 2), ("B", 3)]);
        let first = group(&input, |r| r.key.as_str(), |r| r.value);
        let second = group(&input, |r| r.key.as_str(), |r| r.value);
        assert_eq!(first, second);
    }

    #[test]
    fn test_labeled_point_serializes_label() {
        let json = serde_json::to_string(&Point::labeled(3, 4, "x")).unwrap();
        assert_eq!(json, r#"{"x":3,"y":4,"label":"x"}"#);

        let json = serde_json::to_string(&Point::new(3, 4)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":4}"#);
    }
}
