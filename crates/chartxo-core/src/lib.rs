//! # chartxo-core
//!
//! Core types shared across all Chartxo crates.
//!
//! This crate provides:
//! - The chart analysis value contract returned by the AI service
//! - Persisted entities (scan history, user profile) and ephemeral notifications
//! - Status enums, including the scan sub-flow state machine
//! - Image payload handling (data URIs, base64, MIME inference)
//! - The screen navigation state machine and onboarding survey catalogue
//! - The Candle Jump mini game shown while an analysis is in flight
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod game;
pub mod ids;
pub mod image;
pub mod navigation;
pub mod responses;
pub mod survey;
pub mod time;

pub use entities::{
    AppNotification, ChartAnalysis, ChatTurn, RiskShield, ScanHistoryEntry, TradeSetup,
    UserProfile,
};
pub use enums::{ChatRole, Direction, NotificationKind, PlanTier, ScanPhase, Theme};
pub use errors::CoreError;
pub use image::ImagePayload;
