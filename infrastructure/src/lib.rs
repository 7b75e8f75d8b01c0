//! Infrastructure layer for studyhall
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGenerationConfig, FileOllamaConfig, FileOutputConfig,
    FileReplConfig,
};
pub use ollama::{
    error::{OllamaError, Result},
    gateway::{OllamaConfig, OllamaGateway},
    session::OllamaSession,
};
