//! Async driver that moves bytes from the transport into a session.

use super::classifier::Classifier;
use super::line_buffer::LineBuffer;
use crate::client::AristotleClient;
use crate::session::{ResearchSession, SessionObserver, Transition};
use crate::Result;
use bytes::Bytes;
use chrono::Local;
use futures::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;

/// How a pumped stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOutcome {
    /// A `complete` event was seen and the stream was read to its end
    Completed,
    /// The stream ended without a `complete` event
    Incomplete,
    /// Reading stopped because the token was cancelled
    Cancelled,
}

/// Read `stream` to its end, applying every event to `session`.
///
/// Chunks are awaited one at a time. All lines of a chunk are classified and
/// applied before the next chunk is awaited, so observers see events in
/// arrival order. Cancelling `cancel` stops reading at once and drops the
/// stream.
///
/// # Errors
///
/// A transport error on any chunk marks the session failed and is returned.
pub async fn pump<S, O>(
    stream: S,
    session: &mut ResearchSession,
    observer: &mut O,
    cancel: &CancellationToken,
) -> Result<StreamOutcome>
where
    S: Stream<Item = Result<Bytes>>,
    O: SessionObserver + ?Sized,
{
    let classifier = Classifier::default();
    let mut buffer = LineBuffer::new();
    let mut stream = std::pin::pin!(stream);

    loop {
        let next = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!("Research stream cancelled");
                notify(observer, session.cancel());
                return Ok(StreamOutcome::Cancelled);
            },
            next = stream.next() => next,
        };

        match next {
            Some(Ok(chunk)) => {
                for line in buffer.feed(&chunk) {
                    apply_line(&classifier, &line, session, observer);
                }
            },
            Some(Err(err)) => {
                notify(observer, session.fail(err.to_string(), Local::now()));
                return Err(err);
            },
            None => break,
        }
    }

    if let Some(line) = buffer.flush() {
        apply_line(&classifier, &line, session, observer);
    }
    if buffer.replacements() > 0 {
        tracing::debug!(
            replacements = buffer.replacements(),
            "Research stream contained malformed UTF-8"
        );
    }

    notify(observer, session.finish(Local::now()));
    Ok(if session.result().is_some() {
        StreamOutcome::Completed
    } else {
        StreamOutcome::Incomplete
    })
}

/// Submit `topic` and pump the response into `session`.
///
/// The token is honoured while the request waits for response headers as
/// well as while the body is read. The session must already be started.
///
/// # Errors
///
/// A failed request or a transport error on any chunk marks the session
/// failed and is returned.
pub async fn research<O>(
    client: &AristotleClient,
    topic: &str,
    session: &mut ResearchSession,
    observer: &mut O,
    cancel: &CancellationToken,
) -> Result<StreamOutcome>
where
    O: SessionObserver + ?Sized,
{
    let response = tokio::select! {
        biased;
        () = cancel.cancelled() => {
            tracing::debug!("Research request cancelled before the response arrived");
            notify(observer, session.cancel());
            return Ok(StreamOutcome::Cancelled);
        },
        response = client.research(topic) => response,
    };

    match response {
        Ok(stream) => pump(stream, session, observer, cancel).await,
        Err(err) => {
            notify(observer, session.fail(err.to_string(), Local::now()));
            Err(err)
        },
    }
}

fn apply_line<O>(classifier: &Classifier, line: &str, session: &mut ResearchSession, observer: &mut O)
where
    O: SessionObserver + ?Sized,
{
    if let Some(event) = classifier.classify(line) {
        notify(observer, session.handle(event, Local::now()));
    }
}

fn notify<O>(observer: &mut O, transitions: Vec<Transition>)
where
    O: SessionObserver + ?Sized,
{
    for transition in &transitions {
        observer.on_transition(transition);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::progress::LogKind;
    use crate::session::Phase;
    use futures::stream;

    fn chunks(parts: &[&'static [u8]]) -> impl Stream<Item = Result<Bytes>> {
        stream::iter(
            parts
                .iter()
                .map(|part| Ok(Bytes::from_static(part)))
                .collect::<Vec<_>>(),
        )
    }

    fn started() -> ResearchSession {
        let mut session = ResearchSession::new();
        session.start("topic");
        session
    }

    #[tokio::test]
    async fn test_events_split_across_chunks_are_applied_in_order() {
        // Given: Events whose lines are cut at awkward offsets
        let body = chunks(&[
            b"data: {\"type\":\"stage\",\"mess",
            b"age\":\"Fetching\",\"percent\":10}\n[INFO] 20 pa",
            b"pers\n{\"type\":\"progress\",\"percent\":55}\ndata: {\"type\":\"complete\",\"result\":{\"papers_analyzed\":20}}",
        ]);
        let mut session = started();
        let mut seen: Vec<Transition> = Vec::new();

        // When: Pumping the stream
        let outcome = pump(body, &mut session, &mut seen, &CancellationToken::new())
            .await
            .unwrap();

        // Then: The unterminated final line was flushed and completed the run
        assert_eq!(outcome, StreamOutcome::Completed);
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.percent(), 55);
        let messages: Vec<&str> = session
            .log_entries()
            .iter()
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(messages, ["Fetching", "[INFO] 20 papers", "Research completed"]);
        assert!(seen.contains(&Transition::Progress(10)));
    }

    #[tokio::test]
    async fn test_stream_without_complete_is_incomplete() {
        let body = chunks(&[b"{\"type\":\"progress\",\"percent\":40}\n"]);
        let mut session = started();

        let outcome = pump(body, &mut session, &mut Vec::<Transition>::new(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome, StreamOutcome::Incomplete);
        assert_eq!(session.phase(), Phase::Incomplete);
        assert!(session.input_enabled());
        assert_eq!(session.log_entries().last().unwrap().kind, LogKind::Warning);
    }

    #[tokio::test]
    async fn test_transport_error_fails_session() {
        // Given: A stream whose second chunk is an error
        let body = stream::iter(vec![
            Ok(Bytes::from_static(b"{\"type\":\"progress\",\"percent\":20}\n")),
            Err(Error::HttpStatus { status: 502 }),
        ]);
        let mut session = started();

        // When: Pumping
        let result = pump(body, &mut session, &mut Vec::<Transition>::new(), &CancellationToken::new()).await;

        // Then: The error is returned and logged, input is re-enabled
        assert!(matches!(result, Err(Error::HttpStatus { status: 502 })));
        assert_eq!(session.phase(), Phase::Failed);
        assert!(session.input_enabled());
        let last = session.log_entries().last().unwrap();
        assert_eq!(last.kind, LogKind::Error);
        assert!(last.message.contains("502"));
    }

    #[tokio::test]
    async fn test_cancellation_stops_reading() {
        // Given: A stream that never yields
        let body = stream::pending::<Result<Bytes>>();
        let mut session = started();
        let token = CancellationToken::new();
        token.cancel();

        // When: Pumping with an already-cancelled token
        let outcome = pump(body, &mut session, &mut Vec::<Transition>::new(), &token).await.unwrap();

        // Then: Cancelled without an error entry
        assert_eq!(outcome, StreamOutcome::Cancelled);
        assert_eq!(session.phase(), Phase::Cancelled);
        assert!(session.input_enabled());
        assert!(session.log_entries().is_empty());
    }
}
