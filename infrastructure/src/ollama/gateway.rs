//! Ollama gateway.
//!
//! Owns the shared HTTP client and implements [`CompletionGateway`].
//! [`OllamaGateway::connect`] is the single place server reachability is
//! verified; it runs once per process and is never retried.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::ollama::error::{Result, check_status};
use crate::ollama::protocol::{TagsResponse, VersionResponse};
use crate::ollama::session::OllamaSession;
use studyhall_application::{CompletionGateway, CompletionSession, GatewayError};
use studyhall_domain::Model;

/// Connection settings for the Ollama adapter.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server, without a trailing slash.
    pub base_url: String,
    /// TCP connect timeout for every request.
    pub connect_timeout: Duration,
    /// Budget for the startup liveness probe.
    pub probe_timeout: Duration,
    /// How long the server keeps the model loaded after a request
    /// (e.g. `"5m"`), forwarded verbatim.
    pub keep_alive: Option<String>,
    /// Sampling temperature forwarded to the server.
    pub temperature: Option<f32>,
    /// Cap on generated tokens.
    pub num_predict: Option<u32>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:11434".to_string(),
            connect_timeout: Duration::from_secs(10),
            probe_timeout: Duration::from_secs(5),
            keep_alive: None,
            temperature: None,
            num_predict: None,
        }
    }
}

impl OllamaConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Gateway to a locally running Ollama server.
pub struct OllamaGateway {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaGateway {
    /// Connect to the server and verify it is alive.
    ///
    /// Builds the shared HTTP client and probes `GET /api/version`. A
    /// failure here means the server is unreachable and the caller should
    /// not proceed to session creation.
    pub async fn connect(config: OllamaConfig) -> std::result::Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| GatewayError::Other(e.to_string()))?;

        let gateway = Self { client, config };
        let version = gateway.probe().await?;
        info!(
            "Connected to Ollama {} at {}",
            version, gateway.config.base_url
        );
        Ok(gateway)
    }

    /// The base URL this gateway talks to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn probe(&self) -> Result<String> {
        let url = format!("{}/api/version", self.config.base_url);
        debug!("Probing {}", url);
        let response = self
            .client
            .get(&url)
            .timeout(self.config.probe_timeout)
            .send()
            .await?;
        let response = check_status(response).await?;
        let version: VersionResponse = response.json().await?;
        Ok(version.version)
    }

    async fn fetch_tags(&self) -> Result<TagsResponse> {
        let url = format!("{}/api/tags", self.config.base_url);
        debug!("Fetching installed models from {}", url);
        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl CompletionGateway for OllamaGateway {
    async fn create_session(
        &self,
        model: &Model,
    ) -> std::result::Result<Box<dyn CompletionSession>, GatewayError> {
        info!("Creating session with model: {}", model);

        let tags = self.fetch_tags().await?;
        let installed: Vec<String> = tags.models.into_iter().map(|tag| tag.name).collect();
        if !installed.iter().any(|tag| model.matches_tag(tag)) {
            warn!(
                "Model {} not installed; server has: [{}]",
                model,
                installed.join(", ")
            );
            return Err(GatewayError::ModelNotAvailable(model.to_string()));
        }

        Ok(Box::new(OllamaSession::new(
            self.client.clone(),
            self.config.clone(),
            model.clone(),
        )))
    }

    async fn available_models(&self) -> std::result::Result<Vec<Model>, GatewayError> {
        let tags = self.fetch_tags().await?;
        Ok(tags
            .models
            .into_iter()
            // Model::from_str is infallible; unknown tags become Custom(...)
            .map(|tag| tag.name.parse().unwrap())
            .collect())
    }
}
