//! Generation configuration from TOML (`[generation]` section)

use serde::{Deserialize, Serialize};
use studyhall_domain::{ConfigIssue, ConfigIssueCode, GuideTemplate, Severity};

/// Raw generation configuration from TOML
///
/// # Example
///
/// ```toml
/// [generation]
/// template = "structured"       # or "brief", or "custom"
/// streaming = true
///
/// # only read when template = "custom"
/// custom_template = "Explain {topic} like I'm twelve."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Template variant name: "structured", "brief" or "custom"
    pub template: String,
    /// Template wording used when `template = "custom"`
    pub custom_template: Option<String>,
    /// Stream chunks to the terminal as they arrive
    pub streaming: bool,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            template: GuideTemplate::default().name().to_string(),
            custom_template: None,
            streaming: true,
        }
    }
}

impl FileGenerationConfig {
    /// Resolve the configured template, collecting issues.
    ///
    /// Unknown names fall back to the default with a warning; a broken
    /// custom template is an error because silently generating identical
    /// guides for every topic would be worse than refusing to start.
    pub fn parse_template(&self) -> (GuideTemplate, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        if self.template == "custom" {
            match self.custom_template.as_deref() {
                None | Some("") => {
                    issues.push(ConfigIssue {
                        severity: Severity::Error,
                        code: ConfigIssueCode::MissingCustomTemplate,
                        message: "generation.template is \"custom\" but generation.custom_template is not set"
                            .to_string(),
                    });
                    return (GuideTemplate::default(), issues);
                }
                Some(text) => match GuideTemplate::custom(text) {
                    Ok(template) => return (template, issues),
                    Err(e) => {
                        issues.push(ConfigIssue {
                            severity: Severity::Error,
                            code: ConfigIssueCode::PlaceholderMissing {
                                field: "generation.custom_template".to_string(),
                            },
                            message: format!("generation.custom_template: {}", e),
                        });
                        return (GuideTemplate::default(), issues);
                    }
                },
            }
        }

        match self.template.parse::<GuideTemplate>() {
            Ok(template) => (template, issues),
            Err(_) => {
                issues.push(ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "generation.template".to_string(),
                        value: self.template.clone(),
                    },
                    message: format!(
                        "generation.template: unknown value '{}', falling back to '{}'",
                        self.template,
                        GuideTemplate::default().name()
                    ),
                });
                (GuideTemplate::default(), issues)
            }
        }
    }
}
