//! Ollama server configuration from TOML (`[ollama]` section)

use serde::{Deserialize, Serialize};
use studyhall_domain::{ConfigIssue, ConfigIssueCode, Model, Severity};

/// Raw Ollama connection configuration from TOML
///
/// # Example
///
/// ```toml
/// [ollama]
/// model = "llama3.2"
/// base_url = "http://127.0.0.1:11434"
/// timeout_secs = 120
/// keep_alive = "5m"
/// temperature = 0.7
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Model identifier, with or without a `:tag`
    pub model: String,
    /// Base URL of the Ollama server
    pub base_url: String,
    /// Wall-clock budget in seconds for one completion request
    pub timeout_secs: u64,
    /// How long the server keeps the model loaded after a request (e.g. "5m")
    pub keep_alive: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Cap on generated tokens
    pub num_predict: Option<u32>,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            model: Model::default().to_string(),
            base_url: "http://127.0.0.1:11434".to_string(),
            timeout_secs: 120,
            keep_alive: None,
            temperature: None,
            num_predict: None,
        }
    }
}

impl FileOllamaConfig {
    /// Parse the model string, collecting issues for empty names.
    pub fn parse_model(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::EmptyModelName {
                    field: "ollama.model".to_string(),
                },
                message: "ollama.model: model name cannot be empty".to_string(),
            });
            return (None, issues);
        }
        // Model::from_str is infallible; unknown names become Custom(...)
        let model: Model = self.model.parse().unwrap();
        (Some(model), issues)
    }

    /// Validate the connection settings, collecting all detected issues.
    pub fn validate_connection(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.timeout_secs == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::ZeroTimeout {
                    field: "ollama.timeout_secs".to_string(),
                },
                message: "ollama.timeout_secs: a timeout of zero would fail every request"
                    .to_string(),
            });
        }

        let url = self.base_url.trim();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidBaseUrl {
                    value: self.base_url.clone(),
                },
                message: format!(
                    "ollama.base_url: '{}' is not an http(s) URL",
                    self.base_url
                ),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileOllamaConfig::default();
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.base_url, "http://127.0.0.1:11434");
        assert_eq!(config.timeout_secs, 120);
        assert!(config.keep_alive.is_none());
    }

    #[test]
    fn test_parse_model() {
        let config = FileOllamaConfig {
            model: "phi4".to_string(),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert_eq!(model, Some(Model::Phi4));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_parse_empty_model_is_error() {
        let config = FileOllamaConfig {
            model: "   ".to_string(),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert!(model.is_none());
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::EmptyModelName { field } if field == "ollama.model"
        )));
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let config = FileOllamaConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let issues = config.validate_connection();
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::ZeroTimeout { field } if field == "ollama.timeout_secs"
        )));
    }

    #[test]
    fn test_non_http_base_url_is_error() {
        let config = FileOllamaConfig {
            base_url: "127.0.0.1:11434".to_string(),
            ..Default::default()
        };
        let issues = config.validate_connection();
        assert!(
            issues
                .iter()
                .any(|i| matches!(&i.code, ConfigIssueCode::InvalidBaseUrl { .. }))
        );
    }

    #[test]
    fn test_default_connection_is_valid() {
        assert!(FileOllamaConfig::default().validate_connection().is_empty());
    }
}
