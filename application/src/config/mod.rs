//! Application-level configuration.
//!
//! - [`GenerationParams`] — per-run generation settings (template, request
//!   budget, streaming)

pub mod generation_params;

pub use generation_params::GenerationParams;
