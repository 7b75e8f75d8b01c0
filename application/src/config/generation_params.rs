//! Generation parameters — per-run use case settings.
//!
//! [`GenerationParams`] groups the static parameters that control a single
//! guide generation in
//! [`GenerateGuideUseCase`](crate::use_cases::generate_guide::GenerateGuideUseCase).
//! These are application-layer concerns, not domain policy.

use std::time::Duration;

use studyhall_domain::GuideTemplate;

/// Settings for one generation run.
///
/// Assembled by the binary from file configuration and CLI flags, then
/// injected into the use case at construction. Immutable afterwards.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Template the topic is rendered through.
    pub template: GuideTemplate,
    /// Wall-clock budget for a single completion request, streaming or not.
    pub timeout: Duration,
    /// Stream chunks as they arrive instead of waiting for the full text.
    pub streaming: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            template: GuideTemplate::default(),
            timeout: Duration::from_secs(120),
            streaming: true,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_template(mut self, template: GuideTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_streaming(mut self, streaming: bool) -> Self {
        self.streaming = streaming;
        self
    }
}
