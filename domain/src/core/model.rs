//! Model value object representing a local LLM served by Ollama

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known local models (Value Object)
///
/// This is a domain concept naming the models a study guide can be generated
/// with. Any identifier Ollama accepts is valid; the named variants only
/// cover the common ones so defaults and tests can refer to them directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Llama family
    Llama2,
    Llama32,
    Llama33,
    // Other families
    Mistral,
    Gemma3,
    Qwen3,
    Phi4,
    DeepseekR1,
    // Anything else Ollama serves
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama2 => "llama2",
            Model::Llama32 => "llama3.2",
            Model::Llama33 => "llama3.3",
            Model::Mistral => "mistral",
            Model::Gemma3 => "gemma3",
            Model::Qwen3 => "qwen3",
            Model::Phi4 => "phi4",
            Model::DeepseekR1 => "deepseek-r1",
            Model::Custom(s) => s,
        }
    }

    /// Check whether an installed tag refers to this model.
    ///
    /// Ollama reports installed models as `name:tag` (e.g. `llama3.2:latest`,
    /// `llama3.2:3b`). A model named without a tag matches any tag of the
    /// same name; a model named with an explicit tag requires that exact tag.
    pub fn matches_tag(&self, tag: &str) -> bool {
        if self.as_str() == tag {
            return true;
        }
        match tag.split_once(':') {
            Some((name, _)) => self.as_str() == name,
            None => false,
        }
    }
}

impl Default for Model {
    /// Returns the default model (llama3.2)
    fn default() -> Self {
        Model::Llama32
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama2" => Model::Llama2,
            "llama3.2" => Model::Llama32,
            "llama3.3" => Model::Llama33,
            "mistral" => Model::Mistral,
            "gemma3" => Model::Gemma3,
            "qwen3" => Model::Qwen3,
            "phi4" => Model::Phi4,
            "deepseek-r1" => Model::DeepseekR1,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}
