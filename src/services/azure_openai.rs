use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::model_client::{ModelClient, ProviderError};
use crate::config::Config;

const RESPONSES_PATH: &str = "openai/responses";

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Vec<ContentSegment>,
}

#[derive(Debug, Deserialize)]
pub struct ContentSegment {
    pub text: Option<String>,
}

impl ResponsesResponse {
    /// Text of the first content segment of the first output item.
    pub fn into_first_text(self) -> Result<String, ProviderError> {
        let item = self
            .output
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyOutput)?;
        let segment = item
            .content
            .into_iter()
            .next()
            .ok_or(ProviderError::MissingContent)?;
        segment.text.ok_or(ProviderError::MissingText)
    }
}

/// Client for the Azure OpenAI Responses API.
///
/// Uses reqwest's default client, so connect and read timeouts are whatever the
/// transport provides. Each `complete` call issues exactly one request.
pub struct AzureOpenAiClient {
    client: reqwest::Client,
    url: Url,
    api_key: String,
    deployment: String,
}

impl AzureOpenAiClient {
    pub fn new(
        endpoint: &Url,
        api_key: impl Into<String>,
        deployment: impl Into<String>,
        api_version: &str,
    ) -> Self {
        // Url::join drops the last path segment unless it ends with '/'.
        let mut base = endpoint.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let mut url = base
            .join(RESPONSES_PATH)
            .unwrap_or_else(|_| endpoint.clone());
        url.query_pairs_mut().append_pair("api-version", api_version);

        Self {
            client: reqwest::Client::new(),
            url,
            api_key: api_key.into(),
            deployment: deployment.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.endpoint,
            config.api_key.clone(),
            config.deployment.clone(),
            &config.api_version,
        )
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ModelClient for AzureOpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ResponsesRequest {
            model: &self.deployment,
            input: prompt,
        };

        debug!(deployment = %self.deployment, "sending responses request");
        let response = self
            .client
            .post(self.url.clone())
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ProviderError::Transport)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ProviderError::Unauthorized(status));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, "provider returned an error status");
            return Err(ProviderError::Status { status });
        }

        let parsed: ResponsesResponse = response.json().await.map_err(ProviderError::Decode)?;
        parsed.into_first_text()
    }
}
