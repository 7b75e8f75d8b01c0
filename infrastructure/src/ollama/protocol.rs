//! Wire types for the Ollama REST API.
//!
//! Request bodies serialize exactly what the server expects; optional fields
//! are omitted rather than sent as null. Response types deserialize
//! leniently with defaults so new server fields never break parsing.
//!
//! # Endpoints
//!
//! - `GET /api/version` — [`VersionResponse`], used as the startup probe
//! - `GET /api/tags` — [`TagsResponse`], the installed-model listing
//! - `POST /api/generate` — [`GenerateRequest`] in, one [`GenerateChunk`]
//!   out (non-streaming) or one NDJSON line per chunk (streaming)

use serde::{Deserialize, Serialize};

use super::error::OllamaError;

/// Body for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<String>,
}

/// Sampling options forwarded to the server inside a generate request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<u32>,
}

impl GenerateOptions {
    /// Build an options block, or `None` when every option is unset so the
    /// request omits the field entirely.
    pub fn new(temperature: Option<f32>, num_predict: Option<u32>) -> Option<Self> {
        if temperature.is_none() && num_predict.is_none() {
            return None;
        }
        Some(Self {
            temperature,
            num_predict,
        })
    }
}

/// One generate response chunk.
///
/// Streaming responses emit one of these per NDJSON line with `done: false`
/// until the final line reports `done: true`. Non-streaming responses are a
/// single object of the same shape.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateChunk {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub done: bool,
    /// Total server-side generation time in nanoseconds, on the final chunk.
    #[serde(default)]
    pub total_duration: Option<u64>,
}

impl GenerateChunk {
    /// Parse a single NDJSON line into a chunk.
    pub fn parse_line(line: &str) -> Result<Self, OllamaError> {
        serde_json::from_str(line).map_err(|e| OllamaError::Parse {
            error: e.to_string(),
            raw: line.to_string(),
        })
    }
}

/// Response body of `GET /api/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Vec<ModelTag>,
}

/// One installed model in a tags listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelTag {
    pub name: String,
}

/// Response body of `GET /api/version`.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionResponse {
    #[serde(default)]
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_unset_fields() {
        let request = GenerateRequest {
            model: "llama3.2".to_string(),
            prompt: "hello".to_string(),
            stream: true,
            options: None,
            keep_alive: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3.2");
        assert_eq!(json["stream"], true);
        assert!(json.get("options").is_none());
        assert!(json.get("keep_alive").is_none());
    }

    #[test]
    fn request_serializes_options_and_keep_alive() {
        let request = GenerateRequest {
            model: "mistral".to_string(),
            prompt: "hi".to_string(),
            stream: false,
            options: GenerateOptions::new(Some(0.7), Some(500)),
            keep_alive: Some("5m".to_string()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["options"]["temperature"], 0.7);
        assert_eq!(json["options"]["num_predict"], 500);
        assert_eq!(json["keep_alive"], "5m");
    }

    #[test]
    fn options_collapse_to_none_when_empty() {
        assert!(GenerateOptions::new(None, None).is_none());
        assert!(GenerateOptions::new(Some(0.2), None).is_some());
    }

    #[test]
    fn options_omit_unset_half() {
        let options = GenerateOptions::new(None, Some(128)).unwrap();
        let json = serde_json::to_value(&options).unwrap();
        assert!(json.get("temperature").is_none());
        assert_eq!(json["num_predict"], 128);
    }

    #[test]
    fn parse_streaming_chunk_line() {
        let chunk = GenerateChunk::parse_line(r#"{"response":"The sun","done":false}"#).unwrap();
        assert_eq!(chunk.response, "The sun");
        assert!(!chunk.done);
        assert!(chunk.total_duration.is_none());
    }

    #[test]
    fn parse_final_chunk_line() {
        let line = r#"{"response":"","done":true,"total_duration":1250000000}"#;
        let chunk = GenerateChunk::parse_line(line).unwrap();
        assert!(chunk.done);
        assert_eq!(chunk.total_duration, Some(1_250_000_000));
    }

    #[test]
    fn parse_chunk_ignores_unknown_fields() {
        let line = r#"{"model":"llama3.2","created_at":"2026-01-01T00:00:00Z","response":"x","done":false}"#;
        let chunk = GenerateChunk::parse_line(line).unwrap();
        assert_eq!(chunk.response, "x");
    }

    #[test]
    fn parse_malformed_line_is_typed_error() {
        let err = GenerateChunk::parse_line("{not json").unwrap_err();
        assert!(matches!(err, OllamaError::Parse { raw, .. } if raw == "{not json"));
    }

    #[test]
    fn parse_tags_listing() {
        let json = r#"{"models":[{"name":"llama3.2:latest","size":2019393189},{"name":"phi4:latest"}]}"#;
        let tags: TagsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(tags.models.len(), 2);
        assert_eq!(tags.models[0].name, "llama3.2:latest");
    }

    #[test]
    fn parse_empty_tags_listing() {
        let tags: TagsResponse = serde_json::from_str(r#"{"models":[]}"#).unwrap();
        assert!(tags.models.is_empty());
    }

    #[test]
    fn parse_version() {
        let version: VersionResponse = serde_json::from_str(r#"{"version":"0.6.2"}"#).unwrap();
        assert_eq!(version.version, "0.6.2");
    }
}
