//! Prompt text sent with each request.

use chartxo_core::ChatTurn;

pub const ANALYSIS_PROMPT: &str = "Analyze this chart INSTANTLY as an Institutional Technical Analyst.
Focus on Smart Money Concepts (SMC). Be extremely concise.

Identify:
1. MARKET BIAS: Institutional Bias.
2. THE SETUP: Entry, SL (with logic), TP1, TP2.
3. WHY THIS WORKS: Liquidity sweeps or traps.
4. RISK: Leverage & % Risk.
5. INSIDER TIP: One subtle technical secret.

Strict JSON output.";

pub const CHAT_EMPTY_REPLY: &str = "I couldn't generate a response. Please try again.";
pub const CHAT_ERROR_REPLY: &str = "Sorry, I'm having trouble connecting right now.";

/// Follow-up prompt. The transcript is embedded verbatim as JSON.
#[must_use]
pub fn chat_prompt(message: &str, transcript: &[ChatTurn]) -> String {
    let context = serde_json::to_string(transcript).unwrap_or_else(|_| "[]".to_string());
    format!(
        "You are an expert trading mentor using Smart Money Concepts.\n\
         Context: {context}\n\
         User: {message}\n\
         Answer briefly and professionally."
    )
}
