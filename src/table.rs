//! Projection of summary rows into display cells.
//!
//! Each column is described by a [`FieldSpec`]: which field to read, whether
//! the record must carry it, which value marks "no data", and how numbers are
//! formatted. Anything that resolves to "no data" renders as [`PLACEHOLDER`].

use serde::Serialize;
use serde_json::Value;

use crate::error::SummaryError;
use crate::summary::{NULL_SENTINEL, RankedLap, SummaryRow};
use crate::ticks::format_lap_time;

/// Cell text for missing values.
pub const PLACEHOLDER: &str = "—";

/// How a single field is read and rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub field: String,
    pub required: bool,
    pub missing_sentinel: Option<String>,
    pub nullable: bool,
    pub precision: Option<usize>,
}

impl FieldSpec {
    /// A field every record must carry.
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            required: true,
            missing_sentinel: None,
            nullable: false,
            precision: None,
        }
    }

    /// A field that may be absent from the record.
    pub fn optional(field: &str) -> Self {
        Self {
            required: false,
            ..Self::required(field)
        }
    }

    /// Treat `sentinel` as "no data".
    pub fn sentinel(mut self, sentinel: &str) -> Self {
        self.missing_sentinel = Some(sentinel.to_string());
        self
    }

    /// Treat an empty string as "no data".
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Render numbers with exactly `digits` decimals.
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    fn render(&self, value: Option<&Value>) -> Result<String, SummaryError> {
        let Some(value) = value else {
            if self.required {
                return Err(SummaryError::missing_field(&self.field));
            }
            return Ok(PLACEHOLDER.to_string());
        };

        if self.is_missing(value) {
            return Ok(PLACEHOLDER.to_string());
        }

        Ok(match value {
            Value::Number(n) => match (self.precision, n.as_f64()) {
                (Some(digits), Some(f)) => format!("{f:.digits$}"),
                _ => n.to_string(),
            },
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        })
    }

    fn is_missing(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(s) => {
                self.missing_sentinel.as_deref() == Some(s.as_str())
                    || (self.nullable && s.is_empty())
            }
            _ => false,
        }
    }
}

/// Renders `record` into one display string per [`FieldSpec`], in order.
///
/// # Errors
///
/// Returns [`SummaryError::InvalidSchema`] when a required field is absent.
pub fn project_row(record: &SummaryRow, specs: &[FieldSpec]) -> Result<Vec<String>, SummaryError> {
    specs
        .iter()
        .map(|spec| spec.render(record.get(&spec.field)))
        .collect()
}

/// A table column: header text plus the field it shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub header: &'static str,
    pub spec: FieldSpec,
}

impl Column {
    pub fn new(header: &'static str, spec: FieldSpec) -> Self {
        Self { header, spec }
    }
}

/// Rendered table ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Projects every record through `columns`.
pub fn project_table(records: &[SummaryRow], columns: &[Column]) -> Result<Table, SummaryError> {
    let specs: Vec<FieldSpec> = columns.iter().map(|c| c.spec.clone()).collect();
    let rows = records
        .iter()
        .map(|record| project_row(record, &specs))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Table {
        headers: columns.iter().map(|c| c.header.to_string()).collect(),
        rows,
    })
}

/// Columns of the race results table on the drivers tab.
pub fn driver_result_columns() -> Vec<Column> {
    vec![
        Column::new("Pos.", FieldSpec::required("position").sentinel(NULL_SENTINEL)),
        Column::new("Driver", FieldSpec::required("driver")),
        Column::new("Team", FieldSpec::required("team")),
        Column::new("Time", FieldSpec::optional("time").sentinel(NULL_SENTINEL)),
        Column::new("Gap", FieldSpec::optional("gap").nullable()),
        Column::new("Interval", FieldSpec::optional("interval").nullable()),
        Column::new("Points", FieldSpec::optional("points")),
        Column::new("Laps", FieldSpec::optional("laps")),
    ]
}

/// Columns of the constructor results table.
pub fn constructor_result_columns() -> Vec<Column> {
    vec![
        Column::new("Team", FieldSpec::required("team")),
        Column::new("Drivers", FieldSpec::optional("drivers")),
        Column::new("Best Pos.", FieldSpec::optional("best_position").sentinel(NULL_SENTINEL)),
        Column::new("Avg Pos.", FieldSpec::optional("avg_position").precision(2)),
        Column::new("Points", FieldSpec::optional("total_points")),
        Column::new("Laps", FieldSpec::optional("laps_completed")),
    ]
}

/// The "top fastest laps" ranking as a table.
pub fn fastest_laps_table(laps: &[RankedLap]) -> Table {
    Table {
        headers: ["Pos.", "Driver", "Lap", "Time"]
            .into_iter()
            .map(String::from)
            .collect(),
        rows: laps
            .iter()
            .map(|l| {
                vec![
                    l.position.to_string(),
                    l.driver.clone(),
                    l.lap.to_string(),
                    format_lap_time(l.milliseconds),
                ]
            })
            .collect(),
    }
}
