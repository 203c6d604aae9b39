//! Research event stream ingestion.
//!
//! Bytes arrive in arbitrary chunks. [`LineBuffer`] turns them into logical
//! lines, [`Classifier`] turns lines into [`StreamEvent`]s and [`pump`] drives
//! both against a [`ResearchSession`](crate::session::ResearchSession).

mod classifier;
mod event;
mod line_buffer;
mod pump;

pub use classifier::{
    bracketed_log, classify, json_event, Classifier, Line, LineMatcher, Match, DEFAULT_MATCHERS,
};
pub use event::{CompletionResult, StreamEvent};
pub use line_buffer::LineBuffer;
pub use pump::{pump, research, StreamOutcome};
