//! Text rendering for the countdown and the log table.

use chrono::{DateTime, Local};

use crate::client::TimerLogView;

/// Format seconds as zero-padded `MM:SS`.
///
/// Minutes are not wrapped into hours; 90 minutes renders as `90:00`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// One rendered row of the recent-runs table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub date: String,
    pub time: String,
    pub minutes: String,
}

impl LogRow {
    /// Split `executed_at` into local date and time. Unparseable timestamps
    /// are shown verbatim in the date column.
    pub fn from_view(log: &TimerLogView) -> Self {
        let (date, time) = match DateTime::parse_from_rfc3339(&log.executed_at) {
            Ok(ts) => {
                let local = ts.with_timezone(&Local);
                (
                    local.format("%x").to_string(),
                    local.format("%X").to_string(),
                )
            }
            Err(_) => (log.executed_at.clone(), String::new()),
        };

        Self {
            date,
            time,
            minutes: log.configured_minutes.to_string(),
        }
    }
}

/// Render the recent-runs table, or a placeholder when there is nothing to show.
pub fn render_log_table(logs: &[TimerLogView], loading: bool) -> String {
    if loading {
        return "Loading timer logs...".to_string();
    }
    if logs.is_empty() {
        return "No timer runs yet.".to_string();
    }

    let rows: Vec<LogRow> = logs.iter().map(LogRow::from_view).collect();
    let date_width = column_width("Date", rows.iter().map(|r| r.date.as_str()));
    let time_width = column_width("Time", rows.iter().map(|r| r.time.as_str()));

    let mut out = format!("{:<date_width$}  {:<time_width$}  {:>5}\n", "Date", "Time", "Min");
    for row in &rows {
        out.push_str(&format!(
            "{:<date_width$}  {:<time_width$}  {:>5}\n",
            row.date, row.time, row.minutes
        ));
    }
    out
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|c| c.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}
