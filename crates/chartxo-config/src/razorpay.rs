//! Razorpay order configuration.

use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    "https://api.razorpay.com".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RazorpayConfig {
    #[serde(default)]
    pub key_id: String,

    #[serde(default)]
    pub key_secret: String,

    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for RazorpayConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            key_secret: String::new(),
            api_base: default_api_base(),
        }
    }
}

impl RazorpayConfig {
    /// Both halves of the key pair are required.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.is_empty()
    }
}
