//! State of one research request.
//!
//! [`ResearchSession`] owns everything the front end displays while a
//! research stream is running: the progress tracker, the activity log, the
//! input-enabled flag and, once the run completes, the formatted result. It
//! is mutated only through its methods, each of which returns the
//! [`Transition`]s it caused so observers can redraw incrementally.

use crate::document::StructuredDocument;
use crate::format;
use crate::progress::{LogEntry, LogKind, ProgressTracker};
use crate::stream::{CompletionResult, StreamEvent};
use chrono::{DateTime, Local};

/// Lifecycle of a research request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Stream is being read
    Running,
    /// A `complete` event arrived
    Completed,
    /// The transport failed
    Failed,
    /// The stream ended without a `complete` event
    Incomplete,
    /// The user cancelled the request
    Cancelled,
}

impl Phase {
    /// True once the request can no longer change phase.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Incomplete | Self::Cancelled
        )
    }
}

/// A visible change caused by one session step.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// A research request started
    Started {
        /// Topic as submitted
        topic: String,
    },
    /// The percentage changed
    Progress(u8),
    /// A log entry was appended
    LogAppended(LogEntry),
    /// The run finished and its summary was formatted
    Completed(StructuredDocument),
    /// Input was enabled (`true`) or disabled (`false`)
    InputEnabled(bool),
}

/// Receives session transitions as they happen.
pub trait SessionObserver {
    /// Called once per transition, in order.
    fn on_transition(&mut self, transition: &Transition);
}

impl SessionObserver for Vec<Transition> {
    fn on_transition(&mut self, transition: &Transition) {
        self.push(transition.clone());
    }
}

const INCOMPLETE_MESSAGE: &str = "stream ended before completion";
const WARNING_PREFIX: &str = "[WARNING]";

/// Explicit state object for one research request.
#[derive(Debug, Clone)]
pub struct ResearchSession {
    topic: String,
    phase: Phase,
    tracker: ProgressTracker,
    input_enabled: bool,
    result: Option<CompletionResult>,
    document: Option<StructuredDocument>,
}

impl Default for ResearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ResearchSession {
    /// Idle session with input enabled.
    pub fn new() -> Self {
        Self {
            topic: String::new(),
            phase: Phase::Idle,
            tracker: ProgressTracker::new(),
            input_enabled: true,
            result: None,
            document: None,
        }
    }

    /// Submit a topic: the session starts running and input is disabled.
    pub fn start(&mut self, topic: impl Into<String>) -> Vec<Transition> {
        *self = Self::new();
        self.topic = topic.into();
        self.phase = Phase::Running;
        self.input_enabled = false;
        tracing::debug!(topic = %self.topic, "Research session started");
        vec![
            Transition::Started {
                topic: self.topic.clone(),
            },
            Transition::InputEnabled(false),
        ]
    }

    /// Apply one classified event.
    ///
    /// Events keep being accepted after completion since the transport is
    /// read to its end.
    pub fn handle(&mut self, event: StreamEvent, now: DateTime<Local>) -> Vec<Transition> {
        let mut transitions = Vec::new();
        match event {
            StreamEvent::Progress { percent } => {
                transitions.push(self.set_percent(percent));
            },
            StreamEvent::Stage { message, percent } => {
                if let Some(percent) = percent {
                    transitions.push(self.set_percent(percent));
                }
                if let Some(message) = message {
                    transitions.push(self.log(message, LogKind::Stage, now));
                }
            },
            StreamEvent::Info { message } => {
                if let Some(message) = message {
                    transitions.push(self.log(message, LogKind::Info, now));
                }
            },
            StreamEvent::Unrecognized { line } => {
                let kind = if line.starts_with(WARNING_PREFIX) {
                    LogKind::Warning
                } else {
                    LogKind::Info
                };
                transitions.push(self.log(line, kind, now));
            },
            StreamEvent::Complete { result } => {
                let document = format::research_result(&result);
                self.result = Some(result);
                self.document = Some(document.clone());
                self.phase = Phase::Completed;
                tracing::info!(topic = %self.topic, "Research completed");
                transitions.push(self.log("Research completed", LogKind::Success, now));
                transitions.push(Transition::Completed(document));
                transitions.extend(self.enable_input());
            },
        }
        transitions
    }

    /// Record a terminal transport failure.
    pub fn fail(&mut self, message: impl Into<String>, now: DateTime<Local>) -> Vec<Transition> {
        let mut transitions = vec![self.log(message, LogKind::Error, now)];
        self.phase = Phase::Failed;
        transitions.extend(self.enable_input());
        transitions
    }

    /// The stream ended. A run that never completed is marked incomplete.
    pub fn finish(&mut self, now: DateTime<Local>) -> Vec<Transition> {
        if self.phase != Phase::Running {
            return Vec::new();
        }
        tracing::warn!(topic = %self.topic, "Research stream ended before completion");
        let mut transitions = vec![self.log(INCOMPLETE_MESSAGE, LogKind::Warning, now)];
        self.phase = Phase::Incomplete;
        transitions.extend(self.enable_input());
        transitions
    }

    /// The user abandoned the request. No error entry is recorded.
    pub fn cancel(&mut self) -> Vec<Transition> {
        if self.phase.is_terminal() {
            return Vec::new();
        }
        self.phase = Phase::Cancelled;
        self.enable_input().into_iter().collect()
    }

    /// Topic of the current request.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current percentage.
    pub const fn percent(&self) -> u8 {
        self.tracker.percent()
    }

    /// Activity log in order.
    pub fn log_entries(&self) -> &[LogEntry] {
        self.tracker.entries()
    }

    /// Whether a new request may be submitted.
    pub const fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Completion record, once the run completed.
    pub const fn result(&self) -> Option<&CompletionResult> {
        self.result.as_ref()
    }

    /// Formatted completion record, once the run completed.
    pub const fn document(&self) -> Option<&StructuredDocument> {
        self.document.as_ref()
    }

    fn set_percent(&mut self, percent: u8) -> Transition {
        Transition::Progress(self.tracker.update(i64::from(percent)))
    }

    fn log(&mut self, message: impl Into<String>, kind: LogKind, now: DateTime<Local>) -> Transition {
        Transition::LogAppended(self.tracker.append(message, kind, now).clone())
    }

    fn enable_input(&mut self) -> Option<Transition> {
        if self.input_enabled {
            return None;
        }
        self.input_enabled = true;
        Some(Transition::InputEnabled(true))
    }
}
