//! Completion gateway port
//!
//! Defines the interface for communicating with the local model service.

use async_trait::async_trait;
use studyhall_domain::{Model, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

use super::chunk_sink::{ChunkSink, NullSink};

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Transport closed")]
    TransportClosed,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to the completion service
///
/// This port defines how the application layer reaches the model service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Create a session bound to the specified model.
    ///
    /// Fails with [`GatewayError::ModelNotAvailable`] when the service does
    /// not have the model installed.
    async fn create_session(
        &self,
        model: &Model,
    ) -> Result<Box<dyn CompletionSession>, GatewayError>;

    /// List the models the service has installed.
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;
}

/// Handle for receiving streaming events from a completion session.
///
/// Wraps an `mpsc::Receiver<StreamEvent>` and provides convenience methods
/// for consuming the stream.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Drain the stream, pushing each delta into `sink` in arrival order,
    /// and return the complete text.
    ///
    /// A channel that closes without a terminal event means the transport
    /// died mid-stream; the partial text cannot be trusted, so that is an
    /// error rather than a silently truncated result.
    pub async fn forward(mut self, sink: &dyn ChunkSink) -> Result<String, GatewayError> {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => {
                    sink.on_chunk(&chunk);
                    full_text.push_str(&chunk);
                }
                StreamEvent::Completed(text) => {
                    if full_text.is_empty() {
                        return Ok(text);
                    }
                    return Ok(full_text);
                }
                StreamEvent::Error(e) => {
                    return Err(GatewayError::RequestFailed(e));
                }
            }
        }
        Err(GatewayError::TransportClosed)
    }

    /// Consume the stream silently and collect the final text.
    pub async fn collect_text(self) -> Result<String, GatewayError> {
        self.forward(&NullSink).await
    }
}

/// An active completion session
#[async_trait]
pub trait CompletionSession: Send + Sync {
    /// Get the model this session is bound to
    fn model(&self) -> &Model;

    /// Send a prompt and wait for the full response text
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Send a prompt and get a streaming response.
    ///
    /// Default implementation calls `complete()` and wraps the result in a
    /// single `Completed` event, so non-streaming implementations work
    /// without changes.
    async fn complete_streaming(&self, prompt: &str) -> Result<StreamHandle, GatewayError> {
        let result = self.complete(prompt).await?;
        let (tx, rx) = mpsc::channel(1);
        // If the receiver is dropped before this lands, that's fine
        let _ = tx.send(StreamEvent::Completed(result)).await;
        Ok(StreamHandle::new(rx))
    }
}
