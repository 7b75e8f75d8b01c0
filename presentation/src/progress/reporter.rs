//! Progress reporting for guide generation

use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;
use studyhall_application::ChunkSink;

/// Spinner shown while waiting for a full (non-streaming) response
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message("Generating study guide...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Stop the spinner and clear its line so the guide prints cleanly.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}

/// Sink that prints chunks to stdout as they arrive
///
/// Each chunk is flushed immediately; buffering until a newline would defeat
/// the point of streaming.
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkSink for ConsoleSink {
    fn on_chunk(&self, chunk: &str) {
        print!("{}", chunk);
        let _ = std::io::stdout().flush();
    }
}
