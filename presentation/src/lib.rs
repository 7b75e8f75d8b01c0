//! Presentation layer for studyhall
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporting, and the interactive study REPL.

pub mod cli;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputArg, TemplateArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ConsoleSink, GenerationProgress};
pub use repl::StudyRepl;
