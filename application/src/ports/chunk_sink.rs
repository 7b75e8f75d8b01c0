//! Streamed-output port
//!
//! Defines the interface for receiving model output chunks as they arrive.

/// Callback for streamed output chunks
///
/// Implementations live in the presentation layer (console display) or in
/// tests (capture buffers). Chunks are delivered in arrival order, one call
/// per chunk, before the final text is assembled.
pub trait ChunkSink: Send + Sync {
    /// Called once per chunk of model output.
    fn on_chunk(&self, chunk: &str);
}

/// No-op sink for when streamed display is not needed
pub struct NullSink;

impl ChunkSink for NullSink {
    fn on_chunk(&self, _chunk: &str) {}
}
