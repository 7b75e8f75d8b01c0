//! Application layer for studyhall
//!
//! This crate contains use cases and port definitions. It orchestrates the
//! domain layer and defines the contracts (ports) that infrastructure
//! adapters implement.
//!
//! # Architecture
//!
//! - **Ports**: [`CompletionGateway`] / [`CompletionSession`] for talking to
//!   the local model service, [`ChunkSink`] for streamed output
//! - **Use cases**: [`GenerateGuideUseCase`] — the single request/response
//!   flow from raw topic input to a finished guide
//! - **Config**: [`GenerationParams`] — per-run generation settings

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::chunk_sink::{ChunkSink, NullSink};
pub use ports::completion_gateway::{
    CompletionGateway, CompletionSession, GatewayError, StreamHandle,
};
pub use use_cases::generate_guide::{GenerateGuideError, GenerateGuideUseCase};
