//! Provider response checks.

use serde_json::Value;

use crate::error::PaymentError;

/// Return the response unchanged on success, else [`PaymentError::Provider`]
/// with the provider's own message (`error.message` for Stripe,
/// `error.description` for Razorpay) when the body carries one.
pub async fn check_response(
    provider: &'static str,
    resp: reqwest::Response,
) -> Result<reqwest::Response, PaymentError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(PaymentError::Provider {
        provider,
        status,
        message: provider_message(&body),
    })
}

fn provider_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            let error = v.get("error")?;
            error
                .get("message")
                .or_else(|| error.get("description"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
