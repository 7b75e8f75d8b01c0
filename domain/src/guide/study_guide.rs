//! Study guide result entity

use std::time::Duration;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::core::model::Model;
use crate::core::topic::Topic;

/// A generated study guide.
///
/// Produced by one completed generation request: the topic it answers, the
/// model that produced it, the guide text itself, and how long generation
/// took. Content is non-empty; empty model output is rejected before a
/// `StudyGuide` is constructed.
#[derive(Debug, Clone)]
pub struct StudyGuide {
    topic: Topic,
    model: Model,
    content: String,
    elapsed: Duration,
}

impl StudyGuide {
    pub fn new(topic: Topic, model: Model, content: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            topic,
            model,
            content: content.into(),
            elapsed,
        }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whitespace-separated word count of the guide text.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}

// Serialized flat for `-o json`: topic and model as plain strings, elapsed
// in integer milliseconds.
impl Serialize for StudyGuide {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("StudyGuide", 4)?;
        state.serialize_field("topic", self.topic.content())?;
        state.serialize_field("model", self.model.as_str())?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("elapsed_ms", &(self.elapsed.as_millis() as u64))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guide() -> StudyGuide {
        StudyGuide::new(
            Topic::parse("Photosynthesis").unwrap(),
            Model::Llama32,
            "Light reactions convert sunlight into chemical energy.",
            Duration::from_millis(1250),
        )
    }

    #[test]
    fn test_accessors() {
        let g = guide();
        assert_eq!(g.topic().content(), "Photosynthesis");
        assert_eq!(g.model(), &Model::Llama32);
        assert!(g.content().starts_with("Light reactions"));
        assert_eq!(g.elapsed(), Duration::from_millis(1250));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(guide().word_count(), 7);
    }

    #[test]
    fn test_serializes_flat_json() {
        let json = serde_json::to_value(guide()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "topic": "Photosynthesis",
                "model": "llama3.2",
                "content": "Light reactions convert sunlight into chemical energy.",
                "elapsed_ms": 1250,
            })
        );
    }
}
