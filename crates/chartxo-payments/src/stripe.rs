//! Stripe checkout session parameters.
//!
//! Stripe takes form-encoded bodies with bracketed keys for nested values,
//! e.g. `line_items[0][price_data][unit_amount]=900`.

use chartxo_core::PlanTier;

use crate::error::PaymentError;
use crate::pricing::{CheckoutMode, Interval, PlanPricing};
use crate::request::Checkout;

pub const STRIPE_API_VERSION: &str = "2022-11-15";

/// Redirect targets after checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutUrls {
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripeSessionParams {
    pub product_name: String,
    pub product_description: String,
    pub currency: &'static str,
    pub unit_amount: u64,
    pub recurring: Option<Interval>,
    pub quantity: u32,
    pub mode: CheckoutMode,
    pub success_url: String,
    pub cancel_url: String,
    pub customer_email: String,
    pub user_id: String,
    pub plan: PlanTier,
}

impl StripeSessionParams {
    #[must_use]
    pub fn for_request(checkout: &Checkout, urls: &CheckoutUrls) -> Self {
        let plan = checkout.plan;
        Self {
            product_name: plan.product_name(),
            product_description: plan.product_description().to_string(),
            currency: "usd",
            unit_amount: plan.amount_minor(),
            recurring: plan.recurring_interval(),
            quantity: 1,
            mode: plan.checkout_mode(),
            success_url: urls.success_url.clone(),
            cancel_url: urls.cancel_url.clone(),
            customer_email: checkout.user_email.clone(),
            user_id: checkout.user_id.clone(),
            plan,
        }
    }

    /// Flattened key/value pairs in Stripe's bracket notation. An empty
    /// customer email is left out.
    #[must_use]
    pub fn form_pairs(&self) -> Vec<(String, String)> {
        const ITEM: &str = "line_items[0]";
        let mut pairs = vec![
            ("payment_method_types[0]".to_string(), "card".to_string()),
            (
                format!("{ITEM}[price_data][currency]"),
                self.currency.to_string(),
            ),
            (
                format!("{ITEM}[price_data][product_data][name]"),
                self.product_name.clone(),
            ),
            (
                format!("{ITEM}[price_data][product_data][description]"),
                self.product_description.clone(),
            ),
            (
                format!("{ITEM}[price_data][unit_amount]"),
                self.unit_amount.to_string(),
            ),
        ];
        if let Some(interval) = self.recurring {
            pairs.push((
                format!("{ITEM}[price_data][recurring][interval]"),
                interval.as_str().to_string(),
            ));
        }
        pairs.push((format!("{ITEM}[quantity]"), self.quantity.to_string()));
        pairs.push(("mode".to_string(), self.mode.as_str().to_string()));

        pairs.push(("success_url".to_string(), self.success_url.clone()));
        pairs.push(("cancel_url".to_string(), self.cancel_url.clone()));
        if !self.customer_email.is_empty() {
            pairs.push(("customer_email".to_string(), self.customer_email.clone()));
        }
        pairs.push(("metadata[userId]".to_string(), self.user_id.clone()));
        pairs.push((
            "metadata[planTier]".to_string(),
            self.plan.as_str().to_string(),
        ));
        pairs
    }

    /// # Errors
    ///
    /// Returns [`PaymentError::Encode`] if encoding fails.
    pub fn to_form(&self) -> Result<String, PaymentError> {
        serde_urlencoded::to_string(self.form_pairs()).map_err(|e| PaymentError::Encode(e.to_string()))
    }
}
