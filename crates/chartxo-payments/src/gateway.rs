//! Provider seam and the production HTTP clients.

use std::future::Future;
use std::time::Duration;

use chartxo_config::{RazorpayConfig, StripeConfig};
use serde::Deserialize;
use serde_json::Value;

use crate::error::PaymentError;
use crate::http::check_response;
use crate::razorpay::RazorpayOrderParams;
use crate::stripe::{CheckoutUrls, STRIPE_API_VERSION, StripeSessionParams};

/// Creates checkout sessions and orders with the payment providers.
pub trait CheckoutGateway: Send + Sync {
    /// Whether every provider credential and the card redirect URLs are present.
    fn is_configured(&self) -> bool;

    /// Redirect targets for card checkout.
    fn checkout_urls(&self) -> CheckoutUrls;

    /// Returns the session id.
    fn create_stripe_session(
        &self,
        params: &StripeSessionParams,
    ) -> impl Future<Output = Result<String, PaymentError>> + Send;

    /// Returns the created order object as the provider sent it.
    fn create_razorpay_order(
        &self,
        params: &RazorpayOrderParams,
    ) -> impl Future<Output = Result<Value, PaymentError>> + Send;
}

/// Stripe and Razorpay over reqwest.
#[derive(Debug, Clone)]
pub struct ProviderClients {
    http: reqwest::Client,
    stripe: StripeConfig,
    razorpay: RazorpayConfig,
}

#[derive(Deserialize)]
struct StripeSession {
    id: String,
}

impl ProviderClients {
    /// # Errors
    ///
    /// Returns [`PaymentError::Http`] if the `reqwest::Client` fails to build.
    pub fn from_config(stripe: StripeConfig, razorpay: RazorpayConfig) -> Result<Self, PaymentError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("chartxo-payments/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            stripe,
            razorpay,
        })
    }
}

impl CheckoutGateway for ProviderClients {
    fn is_configured(&self) -> bool {
        self.stripe.is_configured() && self.razorpay.is_configured()
    }

    fn checkout_urls(&self) -> CheckoutUrls {
        CheckoutUrls {
            success_url: self.stripe.success_url.clone(),
            cancel_url: self.stripe.cancel_url.clone(),
        }
    }

    async fn create_stripe_session(&self, params: &StripeSessionParams) -> Result<String, PaymentError> {
        let url = format!(
            "{}/v1/checkout/sessions",
            self.stripe.api_base.trim_end_matches('/')
        );
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.stripe.secret_key)
            .header("Stripe-Version", STRIPE_API_VERSION)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(params.to_form()?)
            .send()
            .await?;
        let resp = check_response("stripe", resp).await?;
        let session: StripeSession = resp.json().await?;
        tracing::info!(session_id = %session.id, plan = %params.plan, "stripe session created");
        Ok(session.id)
    }

    async fn create_razorpay_order(&self, params: &RazorpayOrderParams) -> Result<Value, PaymentError> {
        let url = format!("{}/v1/orders", self.razorpay.api_base.trim_end_matches('/'));
        let resp = self
            .http
            .post(&url)
            .basic_auth(&self.razorpay.key_id, Some(&self.razorpay.key_secret))
            .json(params)
            .send()
            .await?;
        let resp = check_response("razorpay", resp).await?;
        let order: Value = resp.json().await?;
        let order_id = order.get("id").and_then(|id| id.as_str()).unwrap_or_default();
        tracing::info!(
            order_id,
            receipt = %params.receipt,
            "razorpay order created"
        );
        Ok(order)
    }
}
