//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for generated guides
///
/// This is a domain concept representing how a result is rendered, not how
/// it is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable console output (default)
    Text,
    /// One JSON document per guide
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}
