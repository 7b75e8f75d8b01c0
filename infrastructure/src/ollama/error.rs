//! Error types for the Ollama adapter

use studyhall_application::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when communicating with the Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response line: {error}\nRaw line: {raw}")]
    Parse { error: String, raw: String },
}

impl From<OllamaError> for GatewayError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Http(e) => {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else if e.is_connect() {
                    GatewayError::ConnectionFailed(e.to_string())
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            }
            OllamaError::Status { status, body } => {
                GatewayError::RequestFailed(format!("server returned {}: {}", status, body))
            }
            OllamaError::Parse { error, raw } => {
                GatewayError::RequestFailed(format!("malformed response line: {} ({})", error, raw))
            }
        }
    }
}

/// Promote a non-2xx response to a typed error, preserving the body text.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(OllamaError::Status {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_maps_to_request_failed() {
        let err = OllamaError::Status {
            status: 500,
            body: "model runner crashed".to_string(),
        };
        let gateway: GatewayError = err.into();
        assert!(matches!(
            gateway,
            GatewayError::RequestFailed(msg) if msg.contains("500") && msg.contains("model runner crashed")
        ));
    }

    #[test]
    fn parse_error_maps_to_request_failed() {
        let err = OllamaError::Parse {
            error: "expected value".to_string(),
            raw: "not json".to_string(),
        };
        let gateway: GatewayError = err.into();
        assert!(matches!(gateway, GatewayError::RequestFailed(_)));
    }
}
