//! # chartxo-ai
//!
//! Clients for the hosted generative model.
//!
//! - [`AnalysisClient`] sends a chart image with a constrained output schema
//!   and returns a validated [`chartxo_core::ChartAnalysis`] or a typed error.
//! - [`ChatClient`] / [`ChatSession`] handle free-text follow-up questions and
//!   never surface errors to the caller.
//!
//! Both go through the [`GenerativeTransport`] seam; [`GeminiClient`] is the
//! production transport.

mod analysis;
mod cancel;
mod chat;
mod error;
mod http;
mod parse;
mod prompt;
mod schema;
mod transport;
mod wire;

pub use analysis::AnalysisClient;
pub use cancel::{CancelHandle, CancelToken, cancel_pair};
pub use chat::{ChatClient, ChatSession};
pub use error::AiError;
pub use parse::{ParseStage, ParsedAnalysis, brace_span, parse_analysis, strip_fences};
pub use prompt::{ANALYSIS_PROMPT, CHAT_EMPTY_REPLY, CHAT_ERROR_REPLY, chat_prompt};
pub use schema::{analysis_json_schema, response_schema, validate_analysis};
pub use transport::{GeminiClient, GenerativeTransport};
pub use wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
    ThinkingConfig,
};
