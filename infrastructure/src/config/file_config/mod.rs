//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod ollama;
mod output;
mod repl;

pub use generation::FileGenerationConfig;
pub use ollama::FileOllamaConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use studyhall_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Ollama server settings
    pub ollama: FileOllamaConfig,
    /// Generation settings (template, streaming)
    pub generation: FileGenerationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. The model name (empty names cannot be resolved against the server)
    /// 2. Connection settings (zero timeout, unusable base URL)
    /// 3. Template selection (unknown names, broken custom wording)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.ollama.parse_model().1);
        issues.extend(self.ollama.validate_connection());
        issues.extend(self.generation.parse_template().1);

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyhall_domain::{GuideTemplate, Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[ollama]
model = "phi4"
base_url = "http://10.0.0.5:11434"
timeout_secs = 60
keep_alive = "5m"

[generation]
template = "brief"
streaming = false

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/studyhall/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama.parse_model().0, Some(Model::Phi4));
        assert_eq!(config.ollama.base_url, "http://10.0.0.5:11434");
        assert_eq!(config.ollama.timeout_secs, 60);
        assert_eq!(config.ollama.keep_alive.as_deref(), Some("5m"));
        assert_eq!(config.generation.parse_template().0, GuideTemplate::Brief);
        assert!(!config.generation.streaming);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.repl.history_file.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[ollama]
model = "mistral"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama.parse_model().0, Some(Model::Mistral));
        // Defaults should apply
        assert_eq!(config.ollama.timeout_secs, 120);
        assert!(config.generation.streaming);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.ollama.parse_model().0, Some(Model::default()));
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_issues_across_sections() {
        let toml_str = r#"
[ollama]
model = ""
timeout_secs = 0

[generation]
template = "flashcards"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
    }
}
