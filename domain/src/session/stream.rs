//! Streaming events for model responses.
//!
//! [`StreamEvent`] represents individual events in a streaming completion,
//! enabling real-time display of model output as it is generated.

/// An event in a streaming model response.
///
/// Bridges infrastructure-level streaming (NDJSON chunks from Ollama) to the
/// application layer without exposing transport details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text chunk from the model, in arrival order.
    Delta(String),
    /// The stream finished cleanly (carries any final text the transport
    /// reported; empty when the text only arrived as deltas).
    Completed(String),
    /// An error that occurred mid-stream.
    Error(String),
}

impl StreamEvent {
    /// Returns the text content if this is a Delta or Completed event.
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamEvent::Delta(s) | StreamEvent::Completed(s) => Some(s),
            StreamEvent::Error(_) => None,
        }
    }

    /// Returns true if this event signals the end of the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Completed(_) | StreamEvent::Error(_))
    }
}
