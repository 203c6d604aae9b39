//! Research command implementation

use anyhow::Result;
use aristotle_core::stream;
use aristotle_core::{AristotleClient, ResearchSession, SessionObserver, StreamOutcome, render};
use tokio_util::sync::CancellationToken;

use crate::error::{CliError, ErrorCategory};
use crate::output::json::{self, ResearchOutput};
use crate::output::progress::ProgressObserver;
use crate::output::{OutputFormat, text};

/// Run the research pipeline on `topic`, mirroring its progress on stderr.
///
/// Ctrl-C abandons the request without recording an error. A stream that
/// ends without a completion event is reported as a warning, not a failure.
pub async fn run_research(client: &AristotleClient, topic: &str, output: OutputFormat) -> Result<()> {
    let mut observer = match output {
        OutputFormat::Text => ProgressObserver::new(),
        OutputFormat::Json | OutputFormat::Html => ProgressObserver::hidden(),
    };
    let mut session = ResearchSession::new();
    for transition in session.start(topic) {
        observer.on_transition(&transition);
    }

    let cancel = CancellationToken::new();
    let interrupt = spawn_interrupt_handler(cancel.clone());
    let pumped = stream::research(client, topic, &mut session, &mut observer, &cancel).await;
    interrupt.abort();
    observer.finish();

    let outcome = match pumped {
        Ok(outcome) => outcome,
        Err(err) => {
            if output == OutputFormat::Json {
                json::print(&ResearchOutput::from_session(&session))?;
            }
            let error = CliError::new(ErrorCategory::from_core(&err), err);
            // The text log already showed the failure
            return Err(if output == OutputFormat::Text {
                error.reported().into()
            } else {
                error.into()
            });
        },
    };

    tracing::debug!(?outcome, "Research stream finished");
    match output {
        OutputFormat::Json => json::print(&ResearchOutput::from_session(&session))?,
        OutputFormat::Text => {
            if let Some(doc) = session.document() {
                println!("{}", text::render(doc));
            }
        },
        OutputFormat::Html => {
            if let Some(doc) = session.document() {
                println!("{}", render::to_html(doc));
            }
        },
    }

    if outcome == StreamOutcome::Cancelled {
        eprintln!("Research cancelled");
    }
    Ok(())
}

fn spawn_interrupt_handler(cancel: CancellationToken) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Interrupt received, cancelling research");
            cancel.cancel();
        }
    })
}
