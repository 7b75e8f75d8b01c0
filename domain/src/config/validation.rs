//! Structured configuration validation issues.
//!
//! Configuration is loaded leniently: unknown or unusable values never abort
//! deserialization. Instead, validation walks the loaded values and returns
//! structured issues so the caller can warn (or refuse to start) with the
//! exact field named.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name that is empty or whitespace.
    EmptyModelName { field: String },
    /// A field whose value is not one of the accepted names.
    InvalidEnumValue { field: String, value: String },
    /// A zero timeout that would fail every request.
    ZeroTimeout { field: String },
    /// `template = "custom"` with no wording to go with it.
    MissingCustomTemplate,
    /// Custom wording that never mentions the topic.
    PlaceholderMissing { field: String },
    /// A base URL that cannot be used to reach the server.
    InvalidBaseUrl { value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// True if any issue in the slice is fatal.
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}
