//! Interactive study loop
//!
//! Provides a readline-based loop that keeps prompting for topics until the
//! user quits.

mod study_repl;

pub use study_repl::StudyRepl;
