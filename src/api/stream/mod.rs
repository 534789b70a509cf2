//! HTTP to pub/sub bridge for BI notifications
//!
//! `publish` fans a message out to every registered consumer; `register`
//! hands back a long-lived SSE stream; `unregister` bumps a generation
//! counter that every open stream watches, which ends them all. The bridge
//! is independent of the entity CRUD surface.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::Query,
    response::sse::{Event, Sse},
    routing::{get, post},
    Extension, Router,
};
use futures::{Stream, StreamExt};
use serde::Deserialize;
use tokio::sync::{broadcast, watch};
use tokio_stream::wrappers::BroadcastStream;
use tracing::info;

const CHANNEL_CAPACITY: usize = 256;

/// Shared fan-out state for the bridge
pub struct NotificationHub {
    messages: broadcast::Sender<String>,
    generation: watch::Sender<u64>,
}

impl Default for NotificationHub {
    fn default() -> Self {
        let (messages, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (generation, _) = watch::channel(0);
        Self {
            messages,
            generation,
        }
    }
}

impl NotificationHub {
    /// Number of consumers delivered to (zero when nobody is registered)
    pub fn publish(&self, message: String) -> usize {
        self.messages.send(message).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.messages.subscribe()
    }

    /// Ends every stream opened before this call
    pub fn unregister_all(&self) {
        self.generation.send_modify(|g| *g += 1);
    }

    fn generation_watch(&self) -> watch::Receiver<u64> {
        self.generation.subscribe()
    }
}

#[derive(Debug, Deserialize)]
pub struct PublishParams {
    pub message: String,
}

async fn publish(
    Extension(hub): Extension<Arc<NotificationHub>>,
    Query(params): Query<PublishParams>,
) -> String {
    let delivered = hub.publish(params.message.clone());
    info!(consumers = delivered, "published BI notification");
    params.message
}

async fn register(
    Extension(hub): Extension<Arc<NotificationHub>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let messages = hub.subscribe();
    let mut generation = hub.generation_watch();
    info!("registered BI notification consumer");

    // Lagged consumers skip ahead; an unregister call ends the stream.
    let stream = BroadcastStream::new(messages)
        .filter_map(|received| async move {
            received
                .ok()
                .map(|message| Ok::<_, Infallible>(Event::default().data(message)))
        })
        .take_until(async move {
            let _ = generation.changed().await;
        });

    Sse::new(stream)
}

async fn unregister(Extension(hub): Extension<Arc<NotificationHub>>) -> &'static str {
    hub.unregister_all();
    info!("unregistered all BI notification consumers");
    "unregistered"
}

pub fn router() -> Router {
    Router::new()
        .route("/money-market-bi-kafka/publish", post(publish))
        .route("/money-market-bi-kafka/register", get(register))
        .route("/money-market-bi-kafka/unregister", get(unregister))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_reaches_subscribers() {
        let hub = NotificationHub::default();
        let mut rx = hub.subscribe();
        assert_eq!(hub.publish("batch ready".to_string()), 1);
        assert_eq!(rx.recv().await.unwrap(), "batch ready");
    }

    #[tokio::test]
    async fn publish_without_consumers_is_fine() {
        let hub = NotificationHub::default();
        assert_eq!(hub.publish("nobody listening".to_string()), 0);
    }

    #[tokio::test]
    async fn unregister_bumps_the_generation() {
        let hub = NotificationHub::default();
        let mut generation = hub.generation_watch();
        hub.unregister_all();
        generation.changed().await.unwrap();
        assert_eq!(*generation.borrow(), 1);
    }
}
