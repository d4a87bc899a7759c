//! Fixed plan catalogue.

use chartxo_core::PlanTier;
use serde::Serialize;

use crate::error::PaymentError;

/// Billing interval of a recurring plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    Month,
}

impl Interval {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
        }
    }
}

/// Stripe checkout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutMode {
    Subscription,
    Payment,
}

impl CheckoutMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subscription => "subscription",
            Self::Payment => "payment",
        }
    }
}

/// Price and billing terms per plan tier.
pub trait PlanPricing {
    /// Whole US dollars.
    fn price_usd(self) -> u64;
    /// Cents.
    fn amount_minor(self) -> u64;
    fn recurring_interval(self) -> Option<Interval>;
    fn checkout_mode(self) -> CheckoutMode;
    fn product_name(self) -> String;
    fn product_description(self) -> &'static str;
}

impl PlanPricing for PlanTier {
    fn price_usd(self) -> u64 {
        match self {
            Self::Free => 0,
            Self::Starter => 9,
            Self::Lifetime => 149,
        }
    }

    fn amount_minor(self) -> u64 {
        self.price_usd() * 100
    }

    fn recurring_interval(self) -> Option<Interval> {
        match self {
            Self::Starter => Some(Interval::Month),
            Self::Free | Self::Lifetime => None,
        }
    }

    fn checkout_mode(self) -> CheckoutMode {
        if self.recurring_interval().is_some() {
            CheckoutMode::Subscription
        } else {
            CheckoutMode::Payment
        }
    }

    fn product_name(self) -> String {
        format!("Chartxo {}", self.as_str().to_uppercase())
    }

    fn product_description(self) -> &'static str {
        match self {
            Self::Free => "Free AI Scan Access",
            Self::Starter => "Unlimited Monthly AI Scan Access",
            Self::Lifetime => "Lifetime VIP AI Access",
        }
    }
}

/// Parse a purchasable plan; `free` and unknown names are rejected.
///
/// # Errors
///
/// Returns [`PaymentError::InvalidPlan`].
pub fn purchasable_plan(raw: &str) -> Result<PlanTier, PaymentError> {
    raw.parse::<PlanTier>()
        .ok()
        .filter(|tier| tier.is_purchasable())
        .ok_or_else(|| PaymentError::InvalidPlan(raw.to_string()))
}

/// One row of the public price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanQuote {
    pub plan: PlanTier,
    pub name: String,
    pub description: &'static str,
    pub price_usd: u64,
    pub amount_minor: u64,
    pub interval: Option<Interval>,
    pub mode: CheckoutMode,
}

/// Every purchasable plan, cheapest first.
#[must_use]
pub fn catalogue() -> Vec<PlanQuote> {
    [PlanTier::Starter, PlanTier::Lifetime]
        .into_iter()
        .map(|plan| PlanQuote {
            plan,
            name: plan.product_name(),
            description: plan.product_description(),
            price_usd: plan.price_usd(),
            amount_minor: plan.amount_minor(),
            interval: plan.recurring_interval(),
            mode: plan.checkout_mode(),
        })
        .collect()
}
