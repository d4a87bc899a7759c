//! Status enums and tags for Chartxo.
//!
//! Wire-facing enums keep the exact spelling the remote services and the
//! persisted records use. Status enums with state machines provide
//! `allowed_next_states()` to enforce valid transitions at the application layer.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Directional call produced by the chart analysis.
///
/// Serialized with the capitalized spelling the model is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Direction {
    Bearish,
    Bullish,
    Neutral,
}

impl Direction {
    pub const ALL: [Self; 3] = [Self::Bearish, Self::Bullish, Self::Neutral];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bearish => "Bearish",
            Self::Bullish => "Bullish",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

/// Tag attached to an in-app notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Login,
    Logout,
    Scan,
    Subscription,
    Profile,
    System,
    Delete,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Scan => "scan",
            Self::Subscription => "subscription",
            Self::Profile => "profile",
            Self::System => "system",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChatRole
// ---------------------------------------------------------------------------

/// Speaker of a follow-up chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// UI colour theme.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PlanTier
// ---------------------------------------------------------------------------

/// Subscription level. Only `Starter` and `Lifetime` can be purchased.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    #[default]
    Free,
    Starter,
    Lifetime,
}

impl PlanTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Starter => "starter",
            Self::Lifetime => "lifetime",
        }
    }

    #[must_use]
    pub const fn is_purchasable(self) -> bool {
        matches!(self, Self::Starter | Self::Lifetime)
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "starter" => Ok(Self::Starter),
            "lifetime" => Ok(Self::Lifetime),
            other => Err(CoreError::Validation(format!("unknown plan '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// ScanPhase
// ---------------------------------------------------------------------------

/// Phase of the image-analysis sub-flow.
///
/// ```text
/// idle → capturing → analyzing → result → idle
///      ↘           ↘ idle      ↘ failed → idle
///        analyzing (file upload) ↘ idle (navigated away)
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ScanPhase {
    #[default]
    Idle,
    Capturing,
    Analyzing,
    Result,
    Failed,
}

impl ScanPhase {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Capturing, Self::Analyzing],
            Self::Capturing => &[Self::Analyzing, Self::Idle],
            Self::Analyzing => &[Self::Result, Self::Failed, Self::Idle],
            Self::Result | Self::Failed => &[Self::Idle],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Transition to `next`, or fail with [`CoreError::InvalidTransition`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` when `next` is not reachable.
    pub fn transition(self, next: Self) -> Result<Self, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::InvalidTransition {
                machine: "scan".to_string(),
                from: self.to_string(),
                to: next.to_string(),
            })
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Capturing => "capturing",
            Self::Analyzing => "analyzing",
            Self::Result => "result",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
