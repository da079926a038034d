//! HTTP client for the generation endpoint.

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use mutanabi_model::ValidatedInput;

use crate::config::ClientSettings;
use crate::error::{ClientError, Result};
use crate::generator::PoemGenerator;
use crate::payload::PoemPayload;

/// User agent string for generation requests.
const USER_AGENT_VALUE: &str = concat!("mutanabi/", env!("CARGO_PKG_VERSION"));

/// Build `{endpoint}?seed={word}&length={count}` with percent-encoded values.
pub fn request_url(endpoint: &str, input: &ValidatedInput) -> Result<Url> {
    let length = input.count.to_string();
    Url::parse_with_params(
        endpoint,
        &[("seed", input.word.as_str()), ("length", length.as_str())],
    )
    .map_err(|e| ClientError::InvalidEndpoint(format!("{endpoint}: {e}")))
}

/// Client for the remote poem generation service.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GenerationClient {
    /// Creates a client for the configured endpoint.
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        // Fail early on an unusable endpoint rather than on first submit.
        Url::parse(&settings.endpoint)
            .map_err(|e| ClientError::InvalidEndpoint(format!("{}: {e}", settings.endpoint)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT_VALUE);
        if let Some(timeout) = settings.timeout_duration() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Requests a poem for the given input.
    pub async fn generate(&self, input: &ValidatedInput) -> Result<String> {
        let url = request_url(&self.endpoint, input)?;

        tracing::debug!(endpoint = %self.endpoint, length = input.count, "requesting poem");

        let response = self.client.get(url).send().await?;
        let payload = self.handle_response(response).await?;
        let text = payload.into_text();

        tracing::debug!(chars = text.chars().count(), "poem received");
        Ok(text)
    }

    /// Checks the status and parses the body.
    async fn handle_response(&self, response: reqwest::Response) -> Result<PoemPayload> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Network(format!(
                "generation service error ({status}): {body}"
            )));
        }

        let body = response.text().await?;
        PoemPayload::from_body(&body)
    }
}

impl PoemGenerator for GenerationClient {
    async fn generate(&self, input: &ValidatedInput) -> Result<String> {
        GenerationClient::generate(self, input).await
    }
}
