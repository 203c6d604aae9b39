//! Progress tracking for research runs.
//!
//! The tracker holds a single percentage and an append-only activity log.
//! The percentage is clamped at the write boundary and is deliberately not a
//! ratchet: the service may report a smaller value later and that value is
//! shown as-is.

use chrono::{DateTime, Local};
use serde::Serialize;

/// Clamp an arbitrary integer into the `0..=100` percentage range.
pub fn clamp_percent(percent: i64) -> u8 {
    // Lossless: the value is within 0..=100 after clamping.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clamped = percent.clamp(0, 100) as u8;
    clamped
}

/// Clamp a JSON number into the `0..=100` percentage range.
///
/// Fractions are rounded to the nearest whole percent; `NaN` reads as 0.
pub fn clamp_percent_f64(percent: f64) -> u8 {
    if percent.is_nan() {
        return 0;
    }
    // `as` saturates for out-of-range floats, and clamp_percent handles the rest.
    #[allow(clippy::cast_possible_truncation)]
    let whole = percent.round() as i64;
    clamp_percent(whole)
}

/// Kind of an activity log entry; selects the display icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    /// A pipeline stage started or advanced
    Stage,
    /// Informational message from the service
    Info,
    /// The run finished successfully
    Success,
    /// A terminal failure
    Error,
    /// Something worth noticing that did not stop the run
    Warning,
}

impl LogKind {
    /// Fixed icon lookup used by every renderer.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Stage => "⚙️",
            Self::Info => "ℹ️",
            Self::Success => "✅",
            Self::Error => "❌",
            Self::Warning => "⚠️",
        }
    }
}

/// One line of the activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// When the entry was recorded
    pub timestamp: DateTime<Local>,
    /// What kind of entry this is
    pub kind: LogKind,
    /// Message text, shown verbatim
    pub message: String,
}

impl LogEntry {
    /// Icon for this entry's kind.
    pub const fn icon(&self) -> &'static str {
        self.kind.icon()
    }
}

/// Current percentage plus the ordered activity log of one research request.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    percent: u8,
    log: Vec<LogEntry>,
}

impl ProgressTracker {
    /// Create a tracker at 0% with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new percentage, clamped to `0..=100`, and return it.
    pub fn update(&mut self, percent: i64) -> u8 {
        self.percent = clamp_percent(percent);
        self.percent
    }

    /// Current percentage.
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// Append an entry to the log and return a reference to it.
    pub fn append(
        &mut self,
        message: impl Into<String>,
        kind: LogKind,
        timestamp: DateTime<Local>,
    ) -> &LogEntry {
        self.log.push(LogEntry {
            timestamp,
            kind,
            message: message.into(),
        });
        &self.log[self.log.len() - 1]
    }

    /// All entries in the order they were appended.
    pub fn entries(&self) -> &[LogEntry] {
        &self.log
    }
}
