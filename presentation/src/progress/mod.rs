//! Progress display during generation

pub mod reporter;

pub use reporter::{ConsoleSink, GenerationProgress};
