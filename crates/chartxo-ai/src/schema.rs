//! The analysis contract in two forms.
//!
//! [`response_schema`] is the OpenAPI-subset schema sent to the model to
//! constrain its output. [`validate_analysis`] checks a parsed value against
//! the JSON Schema generated from [`ChartAnalysis`] itself, so the two can
//! never drift without a test noticing.

use chartxo_core::{ChartAnalysis, Direction};
use schemars::schema_for;
use serde_json::{Value, json};

use crate::error::AiError;

fn string() -> Value {
    json!({ "type": "STRING" })
}

/// Output schema declared on the analysis request.
#[must_use]
pub fn response_schema() -> Value {
    let directions: Vec<&str> = Direction::ALL.iter().map(|d| d.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "detected_pattern": string(),
            "confidence_score": string(),
            "direction": { "type": "STRING", "enum": directions },
            "market_bias": string(),
            "analysis_summary": string(),
            "trade_setup": {
                "type": "OBJECT",
                "properties": {
                    "suggested_entry": string(),
                    "stop_loss": string(),
                    "stop_loss_logic": string(),
                    "target_1": string(),
                    "target_2": string(),
                    "win_rate_simulation": string()
                },
                "required": [
                    "suggested_entry", "stop_loss", "stop_loss_logic",
                    "target_1", "target_2", "win_rate_simulation"
                ]
            },
            "why_this_works": string(),
            "risk_shield": {
                "type": "OBJECT",
                "properties": {
                    "recommended_leverage": string(),
                    "risk_per_trade": string()
                },
                "required": ["recommended_leverage", "risk_per_trade"]
            },
            "insider_tip": string(),
            "micro_insights": { "type": "ARRAY", "items": string() },
            "disclaimer_text": string()
        },
        "required": [
            "detected_pattern", "confidence_score", "direction", "market_bias",
            "analysis_summary", "trade_setup", "why_this_works", "risk_shield",
            "insider_tip", "micro_insights", "disclaimer_text"
        ]
    })
}

/// JSON Schema generated from [`ChartAnalysis`].
///
/// # Errors
///
/// Returns [`AiError::Schema`] if the generated schema cannot be converted.
pub fn analysis_json_schema() -> Result<Value, AiError> {
    serde_json::to_value(schema_for!(ChartAnalysis)).map_err(|e| AiError::Schema(e.to_string()))
}

/// Validate `instance` against the analysis schema and convert it.
///
/// Either every required field is present with the right type, or the call
/// fails; a partially populated value is never returned.
///
/// # Errors
///
/// Returns [`AiError::InvalidShape`] listing every violation.
pub fn validate_analysis(instance: Value) -> Result<ChartAnalysis, AiError> {
    let schema = analysis_json_schema()?;
    let validator =
        jsonschema::validator_for(&schema).map_err(|e| AiError::Schema(e.to_string()))?;

    let errors: Vec<String> = validator
        .iter_errors(&instance)
        .map(|e| format!("{e}"))
        .collect();
    if !errors.is_empty() {
        return Err(AiError::InvalidShape { errors });
    }

    serde_json::from_value(instance).map_err(|e| AiError::InvalidShape {
        errors: vec![e.to_string()],
    })
}
