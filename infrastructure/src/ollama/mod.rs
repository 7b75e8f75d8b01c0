//! Ollama HTTP adapter
//!
//! Implements CompletionGateway for a locally running Ollama server.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
