//! Server-sent snapshot stream for the call queue.

use eventsource_stream::{Event, EventStreamError, Eventsource};
use futures_util::stream::BoxStream;
use futures_util::StreamExt;

use crate::models::CallList;

type EventResult = Result<Event, EventStreamError<reqwest::Error>>;

/// An open push channel yielding full call list snapshots.
///
/// The sequence is consumed lazily and cannot be restarted: once the transport
/// fails or the backend closes the stream, every further call yields `None`.
/// Dropping the subscription closes the underlying connection.
pub struct CallSubscription {
    events: BoxStream<'static, EventResult>,
    closed: bool,
}

impl CallSubscription {
    pub(crate) fn from_response(response: reqwest::Response) -> Self {
        Self::from_events(response.bytes_stream().eventsource().boxed())
    }

    fn from_events(events: BoxStream<'static, EventResult>) -> Self {
        Self {
            events,
            closed: false,
        }
    }

    /// Wait for the next snapshot.
    ///
    /// Messages that do not decode as a call list are logged and skipped.
    pub async fn next_snapshot(&mut self) -> Option<CallList> {
        if self.closed {
            return None;
        }

        while let Some(event) = self.events.next().await {
            match event {
                Ok(event) => match serde_json::from_str::<CallList>(&event.data) {
                    Ok(list) => return Some(list),
                    Err(e) => {
                        tracing::warn!("Skipping malformed call snapshot: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Call push channel failed: {}", e);
                    break;
                }
            }
        }

        self.closed = true;
        None
    }
}
