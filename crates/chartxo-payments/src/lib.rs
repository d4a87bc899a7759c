//! # chartxo-payments
//!
//! Initiates plan purchases with Stripe (card checkout sessions) or
//! Razorpay (orders). Only initiation: no webhooks, no idempotency keys,
//! nothing persisted.
//!
//! [`PaymentHandler`] is the request handler; [`PaymentServer`] exposes it
//! over HTTP. Providers sit behind [`CheckoutGateway`].

mod error;
mod gateway;
mod handler;
mod http;
mod pricing;
mod razorpay;
mod request;
mod server;
mod stripe;

pub use error::PaymentError;
pub use gateway::{CheckoutGateway, ProviderClients};
pub use handler::{CORS_HEADERS, HandlerResponse, PaymentHandler};
pub use pricing::{CheckoutMode, Interval, PlanPricing, PlanQuote, catalogue, purchasable_plan};
pub use razorpay::{OrderNotes, RazorpayOrderParams};
pub use request::{Checkout, CheckoutRequest, Gateway};
pub use server::PaymentServer;
pub use stripe::{CheckoutUrls, STRIPE_API_VERSION, StripeSessionParams};
