//! Checkout request as received from the client.

use std::fmt;
use std::str::FromStr;

use chartxo_core::PlanTier;
use serde::{Deserialize, Serialize};

use crate::error::PaymentError;
use crate::pricing::purchasable_plan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gateway {
    Stripe,
    Razorpay,
}

impl Gateway {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stripe => "stripe",
            Self::Razorpay => "razorpay",
        }
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gateway {
    type Err = PaymentError;

    /// Exact match only; there is no default gateway.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stripe" => Ok(Self::Stripe),
            "razorpay" => Ok(Self::Razorpay),
            other => Err(PaymentError::InvalidGateway(other.to_string())),
        }
    }
}

/// JSON body `{plan, gateway, userId, userEmail}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_email: String,
}

/// A validated [`CheckoutRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub plan: PlanTier,
    pub gateway: Gateway,
    pub user_id: String,
    pub user_email: String,
}

impl CheckoutRequest {
    /// # Errors
    ///
    /// Returns [`PaymentError::BadRequest`] for a body that is not a JSON object.
    pub fn from_json(body: &str) -> Result<Self, PaymentError> {
        serde_json::from_str(body).map_err(|e| PaymentError::BadRequest(e.to_string()))
    }

    /// Resolve gateway and plan.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError::InvalidGateway`] or [`PaymentError::InvalidPlan`].
    pub fn validate(self) -> Result<Checkout, PaymentError> {
        let gateway = self.gateway.parse::<Gateway>()?;
        let plan = purchasable_plan(&self.plan)?;
        Ok(Checkout {
            plan,
            gateway,
            user_id: self.user_id,
            user_email: self.user_email,
        })
    }
}
