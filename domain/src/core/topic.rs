//! Topic value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DomainError;

/// Minimum number of characters a topic must contain after trimming.
pub const MIN_TOPIC_CHARS: usize = 2;

/// A study topic (Value Object)
///
/// Represents the subject the user wants a study guide about. Construction
/// goes through [`Topic::parse`], so the rest of the system never sees a
/// blank or single-character topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Parse raw user input into a topic.
    ///
    /// Leading and trailing whitespace is removed before validation. Length
    /// is counted in `char`s, not bytes, so a two-character CJK topic is
    /// accepted.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let got = trimmed.chars().count();
        if got < MIN_TOPIC_CHARS {
            return Err(DomainError::InvalidTopic {
                min: MIN_TOPIC_CHARS,
                got,
            });
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// Get the topic content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl std::str::FromStr for Topic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::parse(s)
    }
}

impl Serialize for Topic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Topic::parse(&s).map_err(serde::de::Error::custom)
    }
}
