//! Stripe checkout configuration.

use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    "https://api.stripe.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripeConfig {
    /// Secret API key (`sk_...`).
    #[serde(default)]
    pub secret_key: String,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Redirect after a completed checkout.
    #[serde(default)]
    pub success_url: String,

    /// Redirect after an abandoned checkout.
    #[serde(default)]
    pub cancel_url: String,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            api_base: default_api_base(),
            success_url: String::new(),
            cancel_url: String::new(),
        }
    }
}

impl StripeConfig {
    /// The secret key and both redirect URLs are required; hosted checkout
    /// rejects a session without them.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.secret_key.is_empty() && !self.success_url.is_empty() && !self.cancel_url.is_empty()
    }
}
