//! Two-stage parsing of the model's analysis text.
//!
//! Stage one parses the fence-stripped text as-is. Stage two retries once on
//! the substring between the first `{` and the last `}`. Whichever stage
//! yields JSON, the value is then held to the analysis schema.

use chartxo_core::ChartAnalysis;
use serde::Serialize;
use serde_json::Value;

use crate::error::AiError;
use crate::schema::validate_analysis;

/// Which parse stage produced the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStage {
    Strict,
    Recovered,
}

impl ParseStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Recovered => "recovered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAnalysis {
    pub analysis: ChartAnalysis,
    pub stage: ParseStage,
}

/// Trim and remove a leading ```` ```json ```` / ```` ``` ```` marker and a
/// trailing ```` ``` ````. Text without fences is returned trimmed.
#[must_use]
pub fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        let rest = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
        text = rest.strip_suffix("```").unwrap_or(rest).trim();
    }
    text
}

/// The substring from the first `{` to the last `}` inclusive, if any.
#[must_use]
pub fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Parse raw model output into a validated [`ChartAnalysis`].
///
/// # Errors
///
/// - [`AiError::EmptyResponse`] when the text is blank.
/// - [`AiError::MalformedResponse`] when neither stage yields JSON.
/// - [`AiError::InvalidShape`] when JSON was found but breaks the schema.
pub fn parse_analysis(raw: &str) -> Result<ParsedAnalysis, AiError> {
    let text = strip_fences(raw);
    if text.is_empty() {
        return Err(AiError::EmptyResponse);
    }

    let (value, stage) = match serde_json::from_str::<Value>(text) {
        Ok(value) => (value, ParseStage::Strict),
        Err(strict_err) => {
            tracing::debug!(error = %strict_err, "strict parse failed, trying brace recovery");
            let span = brace_span(text).ok_or_else(|| {
                AiError::MalformedResponse(format!("no JSON object found ({strict_err})"))
            })?;
            let value = serde_json::from_str::<Value>(span)
                .map_err(|e| AiError::MalformedResponse(e.to_string()))?;
            (value, ParseStage::Recovered)
        }
    };

    let analysis = validate_analysis(value)?;
    Ok(ParsedAnalysis { analysis, stage })
}
