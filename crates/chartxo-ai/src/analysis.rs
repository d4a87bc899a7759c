//! Chart analysis client: one request per scan, fail loud.

use chartxo_core::{ChartAnalysis, ImagePayload};

use crate::cancel::CancelToken;
use crate::error::AiError;
use crate::parse::{ParsedAnalysis, parse_analysis};
use crate::prompt::ANALYSIS_PROMPT;
use crate::schema::response_schema;
use crate::transport::GenerativeTransport;
use crate::wire::{GenerateContentRequest, GenerationConfig, ThinkingConfig};

pub struct AnalysisClient<T> {
    transport: T,
}

impl<T: GenerativeTransport> AnalysisClient<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The request sent for `image`: image part, instruction prompt, JSON
    /// output constrained by the analysis schema, no thinking budget.
    #[must_use]
    pub fn request_for(image: &ImagePayload) -> GenerateContentRequest {
        GenerateContentRequest::image_and_text(image, ANALYSIS_PROMPT).with_config(
            GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(response_schema()),
                thinking_config: Some(ThinkingConfig { thinking_budget: 0 }),
            },
        )
    }

    /// Analyze a chart image.
    ///
    /// # Errors
    ///
    /// See [`Self::analyze_detailed`].
    pub async fn analyze(&self, image: &ImagePayload) -> Result<ChartAnalysis, AiError> {
        self.analyze_detailed(image).await.map(|p| p.analysis)
    }

    /// Analyze a chart image, also reporting which parse stage succeeded.
    ///
    /// Single attempt, no retries. Transport failures are returned with the
    /// service's message attached.
    ///
    /// # Errors
    ///
    /// - [`AiError::EmptyImage`] before any request is made.
    /// - Transport errors ([`AiError::Http`], [`AiError::Api`], [`AiError::RateLimited`]).
    /// - Parse errors from [`parse_analysis`].
    pub async fn analyze_detailed(&self, image: &ImagePayload) -> Result<ParsedAnalysis, AiError> {
        if image.is_empty() {
            return Err(AiError::EmptyImage);
        }

        let request = Self::request_for(image);
        let text = self.transport.generate(&request).await.inspect_err(|e| {
            tracing::warn!(error = %e, "analysis request failed");
        })?;

        let parsed = parse_analysis(&text).inspect_err(|e| {
            tracing::warn!(error = %e, "analysis response rejected");
        })?;
        tracing::info!(
            pattern = %parsed.analysis.detected_pattern,
            direction = %parsed.analysis.direction,
            stage = parsed.stage.as_str(),
            "chart analyzed"
        );
        Ok(parsed)
    }

    /// Like [`Self::analyze_detailed`], abandoned as soon as `token` fires.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Cancelled`] if cancelled first, else as
    /// [`Self::analyze_detailed`].
    pub async fn analyze_cancellable(
        &self,
        image: &ImagePayload,
        token: &CancelToken,
    ) -> Result<ParsedAnalysis, AiError> {
        if token.is_cancelled() {
            return Err(AiError::Cancelled);
        }
        tokio::select! {
            biased;
            () = token.cancelled() => {
                tracing::debug!("analysis cancelled");
                Err(AiError::Cancelled)
            }
            result = self.analyze_detailed(image) => result,
        }
    }
}
