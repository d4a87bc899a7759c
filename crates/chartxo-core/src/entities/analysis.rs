use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// Structured result of one chart scan, exactly as returned by the model.
///
/// The client only validates shape; it never computes a field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChartAnalysis {
    pub detected_pattern: String,
    pub confidence_score: String,
    pub direction: Direction,
    pub market_bias: String,
    pub analysis_summary: String,
    pub trade_setup: TradeSetup,
    pub why_this_works: String,
    pub risk_shield: RiskShield,
    pub insider_tip: String,
    pub micro_insights: Vec<String>,
    pub disclaimer_text: String,
}

/// Entry, stop and targets suggested for the detected setup.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TradeSetup {
    pub suggested_entry: String,
    pub stop_loss: String,
    pub stop_loss_logic: String,
    pub target_1: String,
    pub target_2: String,
    pub win_rate_simulation: String,
}

/// Position sizing guidance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RiskShield {
    pub recommended_leverage: String,
    pub risk_per_trade: String,
}
