//! Append-only history log.
//!
//! One line per completed (or force-submitted) session, written in append
//! mode to a plain-text file. The line format is fixed for compatibility
//! with existing history files:
//!
//! ```text
//! Date: <local date-time> | Score: <score>/<total> (<pct>%) | Attempted: <attempted>/<total>
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::session::Summary;

/// Default log location, next to the working directory like the desktop
/// version it replaces.
pub const DEFAULT_HISTORY_FILE: &str = "quiz_history.txt";

/// Append one summary line, creating the file if absent.
///
/// Callers treat this as fire-and-forget: a failure is logged and must not
/// affect the session or prevent a restart.
pub fn append(path: &Path, summary: &Summary) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", format_line(summary, &Local::now().format("%c").to_string()))
}

fn format_line(summary: &Summary, date: &str) -> String {
    format!(
        "Date: {} | Score: {}/{} ({:.1}%) | Attempted: {}/{}",
        date,
        summary.score,
        summary.total_questions,
        summary.percentage(),
        summary.questions_attempted,
        summary.total_questions,
    )
}
