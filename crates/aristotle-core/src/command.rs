//! Slash-command parsing.
//!
//! A query that starts with `/` and whose first word names one of the known
//! commands selects a formatting strategy. Everything else is a plain query
//! and is formatted with the generic strategy.

use crate::document::StructuredDocument;
use crate::format::{self, Strategy};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of commands with a dedicated formatting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandTag {
    /// `/search <query> [k]` - numbered paper list
    Search,
    /// `/sum <query or paperId> [k]` - bullet summary with citations
    Sum,
    /// `/fact <claim> [context=...]` - verdict record
    Fact,
    /// `/factpaper <paperId or title>` - claims of one paper, checked
    FactPaper,
    /// `/audit [N | paperId]` - database statistics
    Audit,
    /// `/niche <topic>` - niche indexing report
    Niche,
}

impl CommandTag {
    /// Every command, in help order.
    pub const ALL: [Self; 6] = [
        Self::Search,
        Self::Sum,
        Self::Fact,
        Self::FactPaper,
        Self::Audit,
        Self::Niche,
    ];

    /// Command word without the leading slash.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Sum => "sum",
            Self::Fact => "fact",
            Self::FactPaper => "factpaper",
            Self::Audit => "audit",
            Self::Niche => "niche",
        }
    }

    /// Formatting strategy bound to this command.
    pub fn strategy(self) -> Strategy {
        match self {
            Self::Search => format::search::format,
            Self::Sum => format::summary::format,
            Self::Fact => format::factcheck::format,
            Self::FactPaper => format::factpaper::format,
            Self::Audit => format::audit::format,
            Self::Niche => format::niche::format,
        }
    }

    /// Run this command's strategy on a response.
    pub fn format(self, raw: &str, argument: &str) -> StructuredDocument {
        (self.strategy())(raw, argument)
    }
}

impl fmt::Display for CommandTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.as_str())
    }
}

/// Returned when a word does not name a known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command '{}'", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for CommandTag {
    type Err = UnknownCommand;

    /// Case-insensitive; a leading `/` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().trim_start_matches('/').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == word)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// A query split into its command and argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInvocation {
    /// Selected command, `None` for plain queries
    pub command: Option<CommandTag>,
    /// Text after the command word, or the whole query for plain queries
    pub argument: String,
}

impl CommandInvocation {
    /// Split a raw query on its first space.
    ///
    /// ```rust
    /// use aristotle_core::{CommandInvocation, CommandTag};
    ///
    /// let inv = CommandInvocation::parse("/SEARCH graph neural networks");
    /// assert_eq!(inv.command, Some(CommandTag::Search));
    /// assert_eq!(inv.argument, "graph neural networks");
    ///
    /// let plain = CommandInvocation::parse("what is attention?");
    /// assert_eq!(plain.command, None);
    /// ```
    pub fn parse(query: &str) -> Self {
        let trimmed = query.trim();
        if !trimmed.starts_with('/') {
            return Self::plain(trimmed);
        }

        let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        match word.parse::<CommandTag>() {
            Ok(tag) => Self {
                command: Some(tag),
                argument: rest.trim().to_string(),
            },
            Err(_) => Self::plain(trimmed),
        }
    }

    fn plain(query: &str) -> Self {
        Self {
            command: None,
            argument: query.to_string(),
        }
    }

    /// True for queries without a recognised command.
    pub const fn is_plain(&self) -> bool {
        self.command.is_none()
    }
}
