//! Core domain concepts shared across all subdomains.
//!
//! - [`topic::Topic`] — a validated study topic
//! - [`model::Model`] — known local models served by Ollama
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod topic;
