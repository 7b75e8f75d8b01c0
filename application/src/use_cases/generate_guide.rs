//! Generate Guide use case.
//!
//! Executes one study-guide generation: validate the raw topic, render it
//! through the configured template, send exactly one completion request, and
//! wrap the response in a [`StudyGuide`].
//!
//! The use case never retries and never terminates the process; every
//! failure comes back as a [`GenerateGuideError`] variant the caller can
//! match on.

use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::GenerationParams;
use crate::ports::chunk_sink::ChunkSink;
use crate::ports::completion_gateway::{CompletionSession, GatewayError};
use studyhall_domain::util::{format_elapsed, truncate_str};
use studyhall_domain::{DomainError, Model, StudyGuide, Topic};

/// Errors that can occur during guide generation.
#[derive(Error, Debug)]
pub enum GenerateGuideError {
    /// The raw input did not make a valid topic. Recoverable; the message
    /// is meant for direct display.
    #[error("Invalid topic: {0}")]
    InvalidTopic(#[from] DomainError),

    /// The completion service failed mid-request. Recoverable; the cause is
    /// for the log, not the user.
    #[error("Generation failed: {0}")]
    Generation(#[from] GatewayError),

    /// The service answered successfully but with no usable text.
    #[error("No response from model")]
    EmptyResponse,
}

/// Use case for generating a study guide.
///
/// Holds the session created once at startup plus the per-run parameters.
/// One call produces at most one request to the service:
/// 1. Parse and validate the topic
/// 2. Render the prompt through the template (single substitution pass)
/// 3. Send the prompt, bounded by the configured timeout
/// 4. Return a [`StudyGuide`] or a typed failure
pub struct GenerateGuideUseCase {
    session: Arc<dyn CompletionSession>,
    params: GenerationParams,
}

impl GenerateGuideUseCase {
    pub fn new(session: Arc<dyn CompletionSession>, params: GenerationParams) -> Self {
        Self { session, params }
    }

    /// The model the underlying session is bound to.
    pub fn model(&self) -> &Model {
        self.session.model()
    }

    /// The parameters this use case was built with.
    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Generate a guide, waiting for the full response text.
    pub async fn execute(&self, raw_topic: &str) -> Result<StudyGuide, GenerateGuideError> {
        let (topic, prompt) = self.prepare(raw_topic)?;
        let started = Instant::now();

        info!("Generating study guide for \"{}\"", topic);
        let text = timeout(self.params.timeout, self.session.complete(&prompt))
            .await
            .map_err(|_| GatewayError::Timeout)??;

        self.finish(topic, text, started.elapsed())
    }

    /// Generate a guide, pushing chunks into `sink` as they arrive.
    ///
    /// The sink sees every delta in arrival order before this returns; the
    /// returned guide carries the same text the sink received.
    pub async fn execute_streaming(
        &self,
        raw_topic: &str,
        sink: &dyn ChunkSink,
    ) -> Result<StudyGuide, GenerateGuideError> {
        let (topic, prompt) = self.prepare(raw_topic)?;
        let started = Instant::now();

        info!("Generating study guide for \"{}\" (streaming)", topic);
        let text = timeout(self.params.timeout, async {
            let handle = self.session.complete_streaming(&prompt).await?;
            handle.forward(sink).await
        })
        .await
        .map_err(|_| GatewayError::Timeout)??;

        self.finish(topic, text, started.elapsed())
    }

    fn prepare(&self, raw_topic: &str) -> Result<(Topic, String), GenerateGuideError> {
        let topic = Topic::parse(raw_topic)?;
        let prompt = self.params.template.render(&topic);
        debug!(
            "Rendered prompt ({} bytes) with template \"{}\"",
            prompt.len(),
            self.params.template.name()
        );
        Ok((topic, prompt))
    }

    fn finish(
        &self,
        topic: Topic,
        text: String,
        elapsed: Duration,
    ) -> Result<StudyGuide, GenerateGuideError> {
        let content = text.trim();
        if content.is_empty() {
            warn!("Model returned an empty guide for \"{}\"", topic);
            return Err(GenerateGuideError::EmptyResponse);
        }

        debug!("Guide preview: {}", truncate_str(content, 120));
        let guide = StudyGuide::new(topic, self.session.model().clone(), content, elapsed);
        info!(
            "Guide generated in {} ({} words)",
            format_elapsed(elapsed),
            guide.word_count()
        );
        Ok(guide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chunk_sink::NullSink;
    use crate::ports::completion_gateway::StreamHandle;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use studyhall_domain::{GuideTemplate, StreamEvent};
    use tokio::sync::mpsc;

    // ==================== Test Mocks ====================

    /// Echoes the rendered prompt back, prefixed so tests can tell the
    /// prompt apart from real model output.
    struct EchoSession {
        model: Model,
    }

    impl EchoSession {
        fn new() -> Self {
            Self {
                model: Model::Llama32,
            }
        }
    }

    #[async_trait]
    impl CompletionSession for EchoSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
            Ok(format!("ECHO: {}", prompt))
        }
    }

    /// Pops one scripted result per request.
    struct QueueSession {
        model: Model,
        responses: Mutex<VecDeque<Result<String, GatewayError>>>,
    }

    impl QueueSession {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                model: Model::Llama32,
                responses: Mutex::new(VecDeque::from(responses)),
            }
        }
    }

    #[async_trait]
    impl CompletionSession for QueueSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn complete(&self, _prompt: &str) -> Result<String, GatewayError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
        }
    }

    /// Sleeps past any reasonable test timeout before answering.
    struct SlowSession {
        model: Model,
        delay: Duration,
    }

    #[async_trait]
    impl CompletionSession for SlowSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn complete(&self, _prompt: &str) -> Result<String, GatewayError> {
            tokio::time::sleep(self.delay).await;
            Ok("too late".to_string())
        }
    }

    /// Replays scripted stream events through a real channel.
    struct StreamingSession {
        model: Model,
        events: Mutex<VecDeque<StreamEvent>>,
    }

    impl StreamingSession {
        fn new(events: Vec<StreamEvent>) -> Self {
            Self {
                model: Model::Llama32,
                events: Mutex::new(VecDeque::from(events)),
            }
        }
    }

    #[async_trait]
    impl CompletionSession for StreamingSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn complete(&self, _prompt: &str) -> Result<String, GatewayError> {
            Err(GatewayError::Other("streaming only".to_string()))
        }

        async fn complete_streaming(&self, _prompt: &str) -> Result<StreamHandle, GatewayError> {
            let events: Vec<StreamEvent> = self.events.lock().unwrap().drain(..).collect();
            let (tx, rx) = mpsc::channel(8);
            tokio::spawn(async move {
                for event in events {
                    if tx.send(event).await.is_err() {
                        break;
                    }
                }
            });
            Ok(StreamHandle::new(rx))
        }
    }

    struct CaptureSink {
        chunks: Mutex<Vec<String>>,
    }

    impl CaptureSink {
        fn new() -> Self {
            Self {
                chunks: Mutex::new(Vec::new()),
            }
        }

        fn chunks(&self) -> Vec<String> {
            self.chunks.lock().unwrap().clone()
        }
    }

    impl ChunkSink for CaptureSink {
        fn on_chunk(&self, chunk: &str) {
            self.chunks.lock().unwrap().push(chunk.to_string());
        }
    }

    fn use_case(session: impl CompletionSession + 'static) -> GenerateGuideUseCase {
        GenerateGuideUseCase::new(Arc::new(session), GenerationParams::default())
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_execute_renders_topic_into_prompt_exactly_once() {
        let use_case = use_case(EchoSession::new());

        let guide = use_case.execute("Photosynthesis").await.unwrap();

        assert!(
            guide
                .content()
                .contains("Create a concise study guide about Photosynthesis.")
        );
        assert!(!guide.content().contains("{topic}"));
        assert_eq!(guide.content().matches("Photosynthesis").count(), 1);
    }

    #[tokio::test]
    async fn test_execute_trims_input_before_validation() {
        let use_case = use_case(EchoSession::new());
        let guide = use_case.execute("  Go  ").await.unwrap();
        assert_eq!(guide.topic().content(), "Go");
    }

    #[tokio::test]
    async fn test_execute_rejects_short_input() {
        let use_case = use_case(EchoSession::new());

        for input in ["", "   ", "x", " x "] {
            let result = use_case.execute(input).await;
            assert!(
                matches!(result, Err(GenerateGuideError::InvalidTopic(_))),
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[tokio::test]
    async fn test_execute_is_idempotent_against_deterministic_session() {
        let use_case = use_case(EchoSession::new());

        let first = use_case.execute("French Revolution").await.unwrap();
        let second = use_case.execute("French Revolution").await.unwrap();

        assert_eq!(first.content(), second.content());
    }

    #[tokio::test]
    async fn test_execute_times_out_on_unresponsive_session() {
        let session = SlowSession {
            model: Model::Llama32,
            delay: Duration::from_millis(100),
        };
        let params = GenerationParams::default().with_timeout(Duration::from_millis(5));
        let use_case = GenerateGuideUseCase::new(Arc::new(session), params);

        let result = use_case.execute("Photosynthesis").await;

        assert!(matches!(
            result,
            Err(GenerateGuideError::Generation(GatewayError::Timeout))
        ));
    }

    #[tokio::test]
    async fn test_execute_maps_gateway_failure() {
        let session = QueueSession::new(vec![Err(GatewayError::RequestFailed(
            "server returned 500".to_string(),
        ))]);
        let use_case = use_case(session);

        let result = use_case.execute("Photosynthesis").await;

        assert!(matches!(
            result,
            Err(GenerateGuideError::Generation(GatewayError::RequestFailed(_)))
        ));
    }

    #[tokio::test]
    async fn test_execute_rejects_blank_response() {
        let session = QueueSession::new(vec![Ok("   \n  ".to_string())]);
        let use_case = use_case(session);

        let result = use_case.execute("Photosynthesis").await;

        assert!(matches!(result, Err(GenerateGuideError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_streaming_chunks_arrive_in_order() {
        let session = StreamingSession::new(vec![
            StreamEvent::Delta("Key ".to_string()),
            StreamEvent::Delta("concepts ".to_string()),
            StreamEvent::Delta("first.".to_string()),
            StreamEvent::Completed(String::new()),
        ]);
        let use_case = use_case(session);
        let sink = CaptureSink::new();

        let guide = use_case
            .execute_streaming("Photosynthesis", &sink)
            .await
            .unwrap();

        assert_eq!(sink.chunks(), vec!["Key ", "concepts ", "first."]);
        assert_eq!(guide.content(), "Key concepts first.");
    }

    #[tokio::test]
    async fn test_streaming_closed_mid_stream_is_an_error() {
        let session = StreamingSession::new(vec![StreamEvent::Delta("partial".to_string())]);
        let use_case = use_case(session);

        let result = use_case.execute_streaming("Photosynthesis", &NullSink).await;

        assert!(matches!(
            result,
            Err(GenerateGuideError::Generation(GatewayError::TransportClosed))
        ));
    }

    #[tokio::test]
    async fn test_streaming_error_event_fails_generation() {
        let session = StreamingSession::new(vec![
            StreamEvent::Delta("par".to_string()),
            StreamEvent::Error("connection reset".to_string()),
        ]);
        let use_case = use_case(session);

        let result = use_case.execute_streaming("Photosynthesis", &NullSink).await;

        assert!(matches!(
            result,
            Err(GenerateGuideError::Generation(GatewayError::RequestFailed(_)))
        ));
    }

    #[tokio::test]
    async fn test_streaming_falls_back_to_single_completed_event() {
        // EchoSession has no streaming override, so the default wraps the
        // full text in one Completed event and the sink sees no deltas.
        let use_case = use_case(EchoSession::new());
        let sink = CaptureSink::new();

        let guide = use_case
            .execute_streaming("Photosynthesis", &sink)
            .await
            .unwrap();

        assert!(sink.chunks().is_empty());
        assert!(guide.content().starts_with("ECHO:"));
    }

    #[tokio::test]
    async fn test_streaming_and_buffered_paths_render_the_same_prompt() {
        let use_case = use_case(EchoSession::new());

        let buffered = use_case.execute("Photosynthesis").await.unwrap();
        let streamed = use_case
            .execute_streaming("Photosynthesis", &NullSink)
            .await
            .unwrap();

        assert_eq!(buffered.content(), streamed.content());
    }

    #[tokio::test]
    async fn test_custom_template_flows_through() {
        let params = GenerationParams::default()
            .with_template(GuideTemplate::custom("Quiz me on {topic}.").unwrap());
        let use_case = GenerateGuideUseCase::new(Arc::new(EchoSession::new()), params);

        let guide = use_case.execute("ohms law").await.unwrap();

        assert_eq!(guide.content(), "ECHO: Quiz me on ohms law.");
    }

    #[tokio::test]
    async fn test_guide_carries_session_model_and_elapsed() {
        let use_case = use_case(EchoSession::new());
        let guide = use_case.execute("Photosynthesis").await.unwrap();

        assert_eq!(guide.model(), &Model::Llama32);
        assert_eq!(use_case.model(), &Model::Llama32);
        assert!(guide.elapsed() < Duration::from_secs(5));
    }
}
