//! Transport seam between the clients and the hosted model.

use std::future::Future;
use std::time::Duration;

use chartxo_config::GeminiConfig;

use crate::error::AiError;
use crate::http::check_response;
use crate::wire::{GenerateContentRequest, GenerateContentResponse};

/// Sends one `generateContent` request and returns the answer text.
///
/// The returned string may be empty; interpreting that is up to the caller.
pub trait GenerativeTransport: Send + Sync {
    fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> impl Future<Output = Result<String, AiError>> + Send;
}

/// REST client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    /// Build a client from the `gemini` config section.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("chartxo/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            endpoint: endpoint(&config.base_url, &config.model),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn endpoint(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{model}:generateContent",
        base_url.trim_end_matches('/')
    )
}

impl GenerativeTransport for GeminiClient {
    async fn generate(&self, request: &GenerateContentRequest) -> Result<String, AiError> {
        tracing::debug!(endpoint = %self.endpoint, "sending generateContent request");
        let resp = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let body: GenerateContentResponse = resp.json().await?;

        if let Some(reason) = body.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            tracing::debug!(finish_reason = reason, "generateContent finished");
        }
        Ok(body.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_model() {
        assert_eq!(
            endpoint("https://generativelanguage.googleapis.com/v1beta/", "gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn from_config_uses_configured_model() {
        let config = GeminiConfig {
            api_key: "k".into(),
            model: "gemini-test".into(),
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 5,
        };
        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:9/models/gemini-test:generateContent"
        );
    }
}
