//! Server-Sent Events support
//!
//! The page opens one stream and re-renders from it: an `init` event with the
//! full transcript, then one `message` event per transition.

use crate::transcript::{TranscriptEvent, TranscriptSnapshot};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use serde_json::json;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

/// Convert a snapshot plus the broadcast receiver into an SSE stream
pub fn sse_stream(
    init: TranscriptSnapshot,
    broadcast_rx: broadcast::Receiver<TranscriptEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let init = futures::stream::once(async move { Ok(init_event(&init)) });

    let broadcasts = BroadcastStream::new(broadcast_rx).filter_map(|result| match result {
        Ok(event) => Some(Ok(transcript_event_to_axum(&event))),
        Err(_) => None, // Skip lagged messages
    });

    let combined = init.chain(broadcasts);

    Sse::new(combined).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("ping"),
    )
}

fn init_event(snapshot: &TranscriptSnapshot) -> Event {
    let data = json!({
        "type": "init",
        "messages": snapshot.messages,
        "busy": snapshot.busy,
    });
    Event::default().event("init").data(data.to_string())
}

fn transcript_event_to_axum(event: &TranscriptEvent) -> Event {
    let (event_type, data) = match event {
        TranscriptEvent::Appended { message, busy } => (
            "message",
            json!({
                "type": "message",
                "message": message,
                "busy": busy,
            }),
        ),
    };

    Event::default().event(event_type).data(data.to_string())
}
