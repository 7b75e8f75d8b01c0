//! Ollama session.
//!
//! Provides [`OllamaSession`] which implements [`CompletionSession`] for a
//! single model over the `/api/generate` endpoint. One instance is created
//! at startup and reused for every request.

use async_trait::async_trait;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::debug;

use crate::ollama::error::{Result, check_status};
use crate::ollama::gateway::OllamaConfig;
use crate::ollama::protocol::{GenerateChunk, GenerateOptions, GenerateRequest};
use studyhall_application::{CompletionSession, GatewayError, StreamHandle};
use studyhall_domain::util::truncate_str;
use studyhall_domain::{Model, StreamEvent};

/// An active completion session bound to one model.
///
/// Holds a clone of the gateway's HTTP client (connection pool shared) plus
/// the connection settings and the model identifier. Stateless between
/// requests; the server is asked to keep the model loaded via `keep_alive`.
pub struct OllamaSession {
    client: reqwest::Client,
    config: OllamaConfig,
    model: Model,
}

impl OllamaSession {
    pub(crate) fn new(client: reqwest::Client, config: OllamaConfig, model: Model) -> Self {
        Self {
            client,
            config,
            model,
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url)
    }

    fn request_body(&self, prompt: &str, stream: bool) -> GenerateRequest {
        GenerateRequest {
            model: self.model.to_string(),
            prompt: prompt.to_string(),
            stream,
            options: GenerateOptions::new(self.config.temperature, self.config.num_predict),
            keep_alive: self.config.keep_alive.clone(),
        }
    }

    /// Send one non-streaming generate request and return the full text.
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.generate_url();
        debug!(
            "POST {} (model {}, {} byte prompt)",
            url,
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&self.request_body(prompt, false))
            .send()
            .await?;
        let response = check_status(response).await?;
        let chunk: GenerateChunk = response.json().await?;

        if let Some(ns) = chunk.total_duration {
            debug!("Server reported {}ms total generation time", ns / 1_000_000);
        }
        debug!("Response preview: {}", truncate_str(&chunk.response, 120));
        Ok(chunk.response)
    }

    /// Send one streaming generate request; chunks arrive over the handle.
    async fn generate_stream(&self, prompt: &str) -> Result<StreamHandle> {
        let url = self.generate_url();
        debug!(
            "POST {} streaming (model {}, {} byte prompt)",
            url,
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&self.request_body(prompt, true))
            .send()
            .await?;
        let response = check_status(response).await?;

        let (tx, rx) = mpsc::channel(32);
        tokio::spawn(read_chunks(response, tx));
        Ok(StreamHandle::new(rx))
    }
}

#[async_trait]
impl CompletionSession for OllamaSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> std::result::Result<String, GatewayError> {
        Ok(self.generate(prompt).await?)
    }

    async fn complete_streaming(
        &self,
        prompt: &str,
    ) -> std::result::Result<StreamHandle, GatewayError> {
        Ok(self.generate_stream(prompt).await?)
    }
}

/// Read the NDJSON response body, emitting one event per chunk line.
///
/// Ends after forwarding the `done: true` line as a `Completed` event. A
/// body that ends without one closes the channel with no terminal event,
/// which the receiving side reports as a transport failure. Send errors
/// mean the receiver is gone; the task just stops.
async fn read_chunks(response: reqwest::Response, tx: mpsc::Sender<StreamEvent>) {
    let mut body = response.bytes_stream();
    let mut buffer = LineBuffer::new();

    while let Some(next) = body.next().await {
        let bytes = match next {
            Ok(bytes) => bytes,
            Err(e) => {
                let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                return;
            }
        };
        buffer.push(&bytes);

        while let Some(line) = buffer.next_line() {
            let chunk = match GenerateChunk::parse_line(&line) {
                Ok(chunk) => chunk,
                Err(e) => {
                    let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                    return;
                }
            };

            if !chunk.response.is_empty()
                && tx.send(StreamEvent::Delta(chunk.response)).await.is_err()
            {
                return;
            }
            if chunk.done {
                if let Some(ns) = chunk.total_duration {
                    debug!("Server reported {}ms total generation time", ns / 1_000_000);
                }
                let _ = tx.send(StreamEvent::Completed(String::new())).await;
                return;
            }
        }
    }
}

/// Accumulates body bytes and yields complete newline-terminated lines.
///
/// Network reads can split a line (or a multi-byte character) anywhere;
/// partial data stays buffered until its newline arrives, so only whole
/// lines are ever handed to the JSON parser.
struct LineBuffer {
    buffer: Vec<u8>,
}

impl LineBuffer {
    fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    fn push(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(&bytes[..]);
    }

    /// Pop the next complete line, without its newline. Blank lines are
    /// skipped. Returns `None` until a full line is available.
    fn next_line(&mut self) -> Option<String> {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw).trim().to_string();
            if !line.is_empty() {
                return Some(line);
            }
        }
        None
    }
}
