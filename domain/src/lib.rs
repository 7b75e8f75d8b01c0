//! Domain layer for studyhall
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Study Guide
//!
//! A study guide is the unit of work in studyhall: one validated [`Topic`]
//! rendered through a [`GuideTemplate`] into a prompt, answered by a local
//! model in a single request, and returned as a [`StudyGuide`].
//!
//! ## Streaming
//!
//! Model output may arrive incrementally. [`StreamEvent`] is the
//! layer-neutral representation of that stream; higher layers decide whether
//! chunks are displayed as they arrive or collected silently.

pub mod config;
pub mod core;
pub mod guide;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, model::Model, topic::Topic};
pub use guide::{study_guide::StudyGuide, template::GuideTemplate};
pub use session::stream::StreamEvent;
