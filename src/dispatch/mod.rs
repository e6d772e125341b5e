//! Retry-resilient answer dispatch
//!
//! Receives inbound requests, invokes the reasoning collaborator, and
//! delivers the eventual answer back to the requester under unreliable
//! network conditions. Each request moves through
//! `RECEIVED -> PROCESSING -> {DELIVERED | EXHAUSTED}`; at most one success
//! message and at most one failure message per request, never both.

use crate::agent::Responder;
use crate::config::DispatchSettings;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Greeting sent in response to the `/start` control command
pub const GREETING: &str =
    "Hello! I am a web search assistant. Send me a query and I'll find information for you.";

/// Fixed message sent when all attempts are exhausted; the underlying
/// errors are logged, never shown to the requester.
pub const APOLOGY: &str =
    "Sorry, I was unable to process your request after multiple attempts. Please try again later.";

/// One inbound request from the messaging front end
#[derive(Debug, Clone)]
pub struct InboundMessage {
    pub requester_id: String,
    pub text: String,
}

impl InboundMessage {
    pub fn new(requester_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            requester_id: requester_id.into(),
            text: text.into(),
        }
    }
}

/// Outbound half of the messaging front end
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver a text message to a requester
    async fn send_message(&self, requester_id: &str, text: &str) -> anyhow::Result<()>;
}

/// Dispatches inbound requests to the reasoning collaborator with bounded
/// retry, and supervises a task per request.
pub struct DispatchLoop {
    responder: Arc<dyn Responder>,
    messenger: Arc<dyn Messenger>,
    max_retries: u32,
    retry_delay: Duration,
}

impl DispatchLoop {
    pub fn new(
        responder: Arc<dyn Responder>,
        messenger: Arc<dyn Messenger>,
        settings: &DispatchSettings,
    ) -> Self {
        Self {
            responder,
            messenger,
            // At least one attempt, even with a zero configured
            max_retries: settings.max_retries.max(1),
            retry_delay: Duration::from_secs_f64(settings.retry_delay.max(0.0)),
        }
    }

    /// Handle one inbound request to completion.
    ///
    /// Control commands and empty text short-circuit without retry
    /// accounting. Everything else runs up to `max_retries` attempts with a
    /// fixed wait between them; no backoff growth, no jitter. An attempt
    /// covers both the collaborator invocation and the delivery of its
    /// answer, so a transient send failure is retried from the top rather
    /// than losing the answer.
    pub async fn handle_message(&self, requester_id: &str, text: &str) {
        if text.is_empty() {
            debug!(requester_id, "ignoring empty message");
            return;
        }

        if text.starts_with('/') {
            if text == "/start" {
                self.deliver(requester_id, GREETING).await;
            } else {
                debug!(requester_id, command = text, "ignoring unknown command");
            }
            return;
        }

        for attempt in 1..=self.max_retries {
            debug!(
                requester_id,
                attempt,
                max_retries = self.max_retries,
                "processing message"
            );

            match self.process(requester_id, text).await {
                Ok(()) => {
                    info!(requester_id, attempt, "response delivered");
                    return;
                }
                Err(e) => {
                    warn!(
                        requester_id,
                        attempt,
                        max_retries = self.max_retries,
                        error = %e,
                        "attempt failed"
                    );
                    if attempt < self.max_retries {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        error!(
            requester_id,
            attempts = self.max_retries,
            "all attempts failed"
        );
        self.deliver(requester_id, APOLOGY).await;
    }

    /// Consume inbound messages, handling each in its own task.
    ///
    /// A panic in one request's handler is logged and does not affect other
    /// in-flight requests. Returns when the channel closes.
    pub async fn run(self: Arc<Self>, mut rx: mpsc::Receiver<InboundMessage>) {
        while let Some(message) = rx.recv().await {
            let dispatch = Arc::clone(&self);
            let requester_id = message.requester_id.clone();

            let handle = tokio::spawn(async move {
                dispatch
                    .handle_message(&message.requester_id, &message.text)
                    .await;
            });

            tokio::spawn(async move {
                if let Err(e) = handle.await {
                    if e.is_panic() {
                        error!(%requester_id, "request handler panicked");
                    }
                }
            });
        }
    }

    /// One attempt: produce the answer and deliver it. A failed delivery
    /// counts as a failed attempt, so the retry budget covers the send.
    async fn process(&self, requester_id: &str, text: &str) -> anyhow::Result<()> {
        let answer = self.responder.respond(text).await?;
        self.messenger.send_message(requester_id, &answer).await
    }

    async fn deliver(&self, requester_id: &str, text: &str) {
        if let Err(e) = self.messenger.send_message(requester_id, text).await {
            warn!(requester_id, error = %e, "failed to deliver message");
        }
    }
}
