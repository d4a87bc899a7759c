//! The payment request handler.
//!
//! Transport-agnostic: takes a method and a body, returns status, headers
//! and body. Every response, errors included, carries the CORS headers so
//! a browser caller always sees the real outcome.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::error::PaymentError;
use crate::gateway::CheckoutGateway;
use crate::razorpay::RazorpayOrderParams;
use crate::request::{CheckoutRequest, Gateway};
use crate::stripe::StripeSessionParams;

pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Max-Age", "86400"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl HandlerResponse {
    fn with_cors(status: u16, content_type: Option<&'static str>, body: String) -> Self {
        let mut headers: Vec<(&'static str, String)> = CORS_HEADERS
            .iter()
            .map(|(k, v)| (*k, (*v).to_string()))
            .collect();
        if let Some(content_type) = content_type {
            headers.push(("Content-Type", content_type.to_string()));
        }
        Self {
            status,
            headers,
            body,
        }
    }

    fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::with_cors(status, Some("application/json"), value.to_string())
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub struct PaymentHandler<G> {
    gateway: G,
    clock: fn() -> DateTime<Utc>,
}

impl<G: CheckoutGateway> PaymentHandler<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            clock: Utc::now,
        }
    }

    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Handle one request.
    ///
    /// `OPTIONS` is answered `200 ok` without looking at the body. Every
    /// other method is treated as a checkout attempt.
    pub async fn handle(&self, method: &str, body: &str) -> HandlerResponse {
        if method.eq_ignore_ascii_case("OPTIONS") {
            return HandlerResponse::with_cors(200, None, "ok".to_string());
        }

        match self.checkout(body).await {
            Ok(value) => HandlerResponse::json(200, &value),
            Err(e) => {
                tracing::error!(error = %e, "payment handler failed");
                HandlerResponse::json(400, &json!({ "error": e.to_string() }))
            }
        }
    }

    async fn checkout(&self, body: &str) -> Result<serde_json::Value, PaymentError> {
        if !self.gateway.is_configured() {
            return Err(PaymentError::MissingCredentials);
        }
        let checkout = CheckoutRequest::from_json(body)?.validate()?;
        tracing::debug!(plan = %checkout.plan, gateway = %checkout.gateway, "checkout requested");

        match checkout.gateway {
            Gateway::Stripe => {
                let params =
                    StripeSessionParams::for_request(&checkout, &self.gateway.checkout_urls());
                let session_id = self.gateway.create_stripe_session(&params).await?;
                Ok(json!({ "sessionId": session_id }))
            }
            Gateway::Razorpay => {
                let params = RazorpayOrderParams::for_request(&checkout, (self.clock)());
                let order = self.gateway.create_razorpay_order(&params).await?;
                Ok(json!({ "order": order }))
            }
        }
    }
}
