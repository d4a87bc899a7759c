//! CLI response types returned as JSON by `chartxo` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ChartAnalysis, ScanHistoryEntry};
use crate::enums::{Direction, Theme};

/// Response from `chartxo analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub scan_id: String,
    /// Which parse stage recovered the model output (`strict` or `recovered`).
    pub parse_stage: String,
    pub analysis: ChartAnalysis,
}

/// One row of `chartxo history list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryRow {
    pub id: String,
    pub pattern: String,
    pub score: String,
    pub trend: Direction,
    pub time: String,
}

impl From<&ScanHistoryEntry> for HistoryRow {
    fn from(entry: &ScanHistoryEntry) -> Self {
        Self {
            id: entry.id.clone(),
            pattern: entry.pattern.clone(),
            score: entry.score.clone(),
            trend: entry.trend,
            time: entry.time.clone(),
        }
    }
}

/// Response from `chartxo history delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteScanResponse {
    pub id: String,
    pub deleted: bool,
    pub remaining: usize,
}

/// Response from `chartxo theme`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// Response from `chartxo game`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GameResponse {
    pub frames: u64,
    pub score: u64,
    pub game_over: bool,
}
