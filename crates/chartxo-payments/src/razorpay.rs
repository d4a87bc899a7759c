//! Razorpay order parameters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::pricing::PlanPricing;
use crate::request::Checkout;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RazorpayOrderParams {
    /// Smallest currency unit.
    pub amount: u64,
    pub currency: &'static str,
    pub receipt: String,
    pub notes: OrderNotes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderNotes {
    pub user_id: String,
    pub plan_tier: String,
}

impl RazorpayOrderParams {
    #[must_use]
    pub fn for_request(checkout: &Checkout, now: DateTime<Utc>) -> Self {
        Self {
            amount: checkout.plan.amount_minor(),
            currency: "USD",
            receipt: format!("order_rcpt_{}_{}", checkout.user_id, now.timestamp_millis()),
            notes: OrderNotes {
                user_id: checkout.user_id.clone(),
                plan_tier: checkout.plan.as_str().to_string(),
            },
        }
    }
}
