//! Query command implementation

use anyhow::{Context, Result};
use aristotle_core::{AristotleClient, CommandInvocation, format, render};

use crate::output::json::{self, QueryOutput};
use crate::output::{OutputFormat, text};

/// Submit `query` and print the formatted reply.
///
/// The slash command, if any, selects the formatting strategy; the command
/// echoed back by the service is ignored.
pub async fn run_query(client: &AristotleClient, query: &str, output: OutputFormat) -> Result<()> {
    let invocation = CommandInvocation::parse(query);
    let reply = client
        .query(query)
        .await
        .with_context(|| format!("Query '{query}' failed"))?;

    if reply.response.trim().is_empty() {
        tracing::warn!("The service returned an empty response");
    }
    let doc = format::format(invocation.command, &reply.response, &invocation.argument);

    match output {
        OutputFormat::Text => {
            if !doc.is_empty() {
                println!("{}", text::render(&doc));
            }
        },
        OutputFormat::Json => json::print(&QueryOutput {
            query,
            command: invocation.command.map(|tag| tag.as_str()),
            response: &reply.response,
            blocks: doc.blocks(),
        })?,
        OutputFormat::Html => println!("{}", render::to_html(&doc)),
    }
    Ok(())
}
