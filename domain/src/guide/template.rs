//! Prompt templates for study-guide generation
//!
//! Template wording is configuration, not contract: callers pick a variant
//! (or supply their own text) and the rest of the pipeline only sees the
//! rendered prompt string.

use crate::core::error::DomainError;
use crate::core::topic::Topic;

/// Placeholder replaced by the topic during rendering.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

const STRUCTURED_TEMPLATE: &str = r#"Create a concise study guide about {topic}. Include:
1. Key concepts
2. Important points
3. Simple examples

Keep it brief and clear."#;

const BRIEF_TEMPLATE: &str = r#"List the 3-5 most important points to know about {topic}.
Keep each point to a single short sentence."#;

/// Prompt wording a [`Topic`] is rendered into.
///
/// `Structured` is the default long form with numbered sections; `Brief`
/// asks for a handful of key points; `Custom` carries user-supplied wording
/// that must contain the `{topic}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideTemplate {
    /// Numbered sections: key concepts, important points, simple examples.
    Structured,
    /// A short list of 3-5 key points.
    Brief,
    /// User-supplied wording containing `{topic}`.
    Custom(String),
}

impl GuideTemplate {
    /// Create a custom template from user-supplied wording.
    ///
    /// The wording must contain [`TOPIC_PLACEHOLDER`] at least once,
    /// otherwise every rendered prompt would be identical regardless of
    /// topic.
    pub fn custom(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if !text.contains(TOPIC_PLACEHOLDER) {
            return Err(DomainError::MissingPlaceholder);
        }
        Ok(GuideTemplate::Custom(text))
    }

    /// Render the template into a prompt for the given topic.
    ///
    /// Substitution is a single pass over the template text; every
    /// `{topic}` occurrence is replaced and the rendered prompt contains no
    /// residual placeholder.
    pub fn render(&self, topic: &Topic) -> String {
        self.text().replace(TOPIC_PLACEHOLDER, topic.content())
    }

    /// The raw template text before substitution.
    pub fn text(&self) -> &str {
        match self {
            GuideTemplate::Structured => STRUCTURED_TEMPLATE,
            GuideTemplate::Brief => BRIEF_TEMPLATE,
            GuideTemplate::Custom(text) => text,
        }
    }

    /// The configuration name of this variant.
    pub fn name(&self) -> &str {
        match self {
            GuideTemplate::Structured => "structured",
            GuideTemplate::Brief => "brief",
            GuideTemplate::Custom(_) => "custom",
        }
    }
}

impl Default for GuideTemplate {
    fn default() -> Self {
        GuideTemplate::Structured
    }
}

impl std::fmt::Display for GuideTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for GuideTemplate {
    type Err = DomainError;

    /// Parse a fixed variant by name. `custom` is not parseable here since
    /// it needs wording; resolve it where the wording is available.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structured" => Ok(GuideTemplate::Structured),
            "brief" => Ok(GuideTemplate::Brief),
            other => Err(DomainError::UnknownTemplate(other.to_string())),
        }
    }
}
