//! # aristotle-core
//!
//! Response ingestion and formatting for the Aristotle research assistant.
//!
//! The service answers in two ways. Plain queries and slash commands get a
//! single JSON payload whose `response` text is re-laid-out client-side by a
//! per-command strategy. Research requests get a chunked event stream that
//! is decoded incrementally, classified line by line and applied to a
//! [`ResearchSession`].
//!
//! ## Architecture
//!
//! - **Stream**: [`LineBuffer`] and [`Classifier`] turn arbitrarily chunked
//!   bytes into [`StreamEvent`]s; [`stream::pump`] drives them into a session
//! - **Session**: [`ResearchSession`] holds progress, the activity log and the
//!   input-enabled flag, and reports [`Transition`]s to a [`SessionObserver`]
//! - **Formatting**: [`format`] maps `(command, raw text)` to a
//!   [`StructuredDocument`] of typed blocks
//! - **Rendering**: [`render::to_html`]; terminal output lives in the CLI
//! - **Client**: [`AristotleClient`] for `/query`, `/research` and `/health`
//!
//! ## Quick Start
//!
//! ```rust
//! use aristotle_core::{format, CommandInvocation};
//!
//! let invocation = CommandInvocation::parse("/fact attention helps context=transformers");
//! let doc = format::format(
//!     invocation.command,
//!     "Verdict: Supported\nConfidence: 80%",
//!     &invocation.argument,
//! );
//! assert_eq!(doc.len(), 4);
//! ```

/// HTTP client for the research-assistant service
pub mod client;
/// Slash-command parsing
pub mod command;
/// Configuration loading
pub mod config;
/// Structured document model
pub mod document;
/// Error types and result aliases
pub mod error;
/// Per-command response formatting
pub mod format;
/// Progress percentage and activity log
pub mod progress;
/// Renderers for structured documents
pub mod render;
/// Research session state
pub mod session;
/// Event stream decoding and classification
pub mod stream;

pub use client::{AristotleClient, HealthStatus, QueryReply};
pub use command::{CommandInvocation, CommandTag, UnknownCommand};
pub use config::{ApiConfig, Config};
pub use document::{Block, RichText, Span, StructuredDocument, Tone};
pub use error::{Error, Result};
pub use progress::{LogEntry, LogKind, ProgressTracker};
pub use session::{Phase, ResearchSession, SessionObserver, Transition};
pub use stream::{Classifier, CompletionResult, LineBuffer, StreamEvent, StreamOutcome};
