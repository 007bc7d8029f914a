//! Per-tick match reporting
//!
//! After each tick's score pass the driver pulls zero-or-more
//! `(label, value)` pairs from every actor into one [`ReportRow`]. The
//! log only guarantees the rows stay queryable; rendering them as a
//! table or exporting them as JSON is up to the caller.

use crate::models::score::Score;
use serde::Serialize;
use std::fmt::Write as _;

/// Everything recorded about one tick.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub tick: u32,
    /// Points earned this tick across all actors.
    pub tick_score: Score,
    /// Running total after this tick.
    pub total: Score,
    /// `(actor label, value)` pairs, in registration order.
    pub entries: Vec<(String, String)>,
}

/// Ordered log of report rows for a whole match.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportLog {
    rows: Vec<ReportRow>,
}

impl ReportLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&ReportRow> {
        self.rows.last()
    }

    /// Render the log as a plain-text table, one line per tick.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:>4}  {:>4} {:>4}  activity", "time", "RED", "BLUE");
        for row in &self.rows {
            let activity = row
                .entries
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(label, value)| format!("{}: {}", label, value))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = writeln!(
                out,
                "{:>4}  {:>4} {:>4}  {}",
                row.tick,
                row.total.red(),
                row.total.blue(),
                activity
            );
        }
        out
    }

    /// Export the whole log as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_stay_queryable() {
        let mut log = ReportLog::new();
        assert!(log.is_empty());
        log.log(ReportRow {
            tick: 1,
            tick_score: Score::new(2, 0),
            total: Score::new(2, 0),
            entries: vec![("RED 1 Robot".to_string(), "auto-run".to_string())],
        });
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().unwrap().tick, 1);
    }

    #[test]
    fn test_render_table_skips_empty_values() {
        let mut log = ReportLog::new();
        log.log(ReportRow {
            tick: 3,
            tick_score: Score::ZERO,
            total: Score::new(5, 1),
            entries: vec![
                ("RED 1 Robot".to_string(), String::new()),
                ("Scale".to_string(), "RED owns".to_string()),
            ],
        });
        let table = log.render_table();
        assert!(table.contains("Scale: RED owns"));
        assert!(!table.contains("RED 1 Robot:"));
    }
}
