//! Output formatting and persistence for projected tables and chart data.
//!
//! Supports aligned text tables, JSON documents, and CSV export.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::table::Table;

/// Writes `table` as left-aligned text columns separated by two spaces.
pub fn write_table<W: Write>(out: &mut W, table: &Table) -> Result<()> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    write_line(out, &table.headers, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(out, &rule, &widths)?;
    for row in &table.rows {
        write_line(out, row, &widths)?;
    }
    Ok(())
}

fn write_line<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

/// Renders `table` into a string.
pub fn render_table(table: &Table) -> Result<String> {
    let mut buf = Vec::new();
    write_table(&mut buf, table)?;
    Ok(String::from_utf8(buf)?)
}

/// Chart data wrapped with the race it belongs to and when it was produced.
#[derive(Debug, Serialize)]
pub struct ChartDocument<'a, T: Serialize> {
    pub race_id: u32,
    pub generated_at: DateTime<Utc>,
    pub charts: &'a T,
}

impl<'a, T: Serialize> ChartDocument<'a, T> {
    pub fn new(race_id: u32, charts: &'a T) -> Self {
        Self {
            race_id,
            generated_at: Utc::now(),
            charts,
        }
    }
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Saves `value` as pretty-printed JSON at `path`, replacing any existing file.
pub fn save_json(path: &str, value: &impl Serialize) -> Result<()> {
    let mut file = File::create(path)?;
    write_json(&mut file, value)?;
    info!(path, "Chart data written");
    Ok(())
}

/// Exports `table` to a CSV file with a header row, replacing any existing file.
pub fn export_csv(path: &str, table: &Table) -> Result<()> {
    debug!(path, rows = table.rows.len(), "Exporting table as CSV");

    let file = File::create(Path::new(path))?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    info!(path, "Table exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_table() -> Table {
        Table {
            headers: vec!["Pos.".to_string(), "Driver".to_string()],
            rows: vec![
                vec!["1".to_string(), "Lewis Hamilton".to_string()],
                vec!["—".to_string(), "Sergio Perez".to_string()],
            ],
        }
    }

    #[test]
    fn test_render_table_pads_to_widest_cell() {
        let text = render_table(&sample_table()).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Pos.  Driver");
        assert_eq!(lines[1], "----  --------------");
        assert_eq!(lines[2], "1     Lewis Hamilton");
        assert_eq!(lines[3], "—     Sergio Perez");
    }

    #[test]
    fn test_write_json_ends_with_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample_table()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"headers\""));
    }

    #[test]
    fn test_chart_document_carries_race_id() {
        let charts = vec![1, 2, 3];
        let doc = ChartDocument::new(1052, &charts);
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["race_id"], 1052);
        assert_eq!(value["charts"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_export_csv_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let path = path.to_str().unwrap();

        export_csv(path, &sample_table()).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines, vec!["Pos.,Driver", "1,Lewis Hamilton", "—,Sergio Perez"]);
    }

    #[test]
    fn test_export_csv_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let path = path.to_str().unwrap();

        export_csv(path, &sample_table()).unwrap();
        export_csv(path, &sample_table()).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }
}
