use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ChartAnalysis;
use crate::enums::Direction;

/// Sparkline drawn for bullish scans in the history list.
pub const BULLISH_GRAPH_PATH: &str = "M 0 35 L 20 30 L 40 25 L 60 15 L 80 10 L 100 0";
/// Sparkline drawn for bearish and neutral scans.
pub const BEARISH_GRAPH_PATH: &str = "M 0 5 L 20 10 L 40 15 L 60 25 L 80 30 L 100 35";

/// A completed scan: a full copy of the analysis plus its source image.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScanHistoryEntry {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub pattern: String,
    pub score: String,
    pub trend: Direction,
    /// Display timestamp captured when the scan was recorded.
    pub time: String,
    /// Source image as a data URI.
    pub image: String,
    pub full_analysis: ChartAnalysis,
    pub graph_path: String,
    pub created_at: DateTime<Utc>,
}

impl ScanHistoryEntry {
    /// Build an entry from a fresh analysis. The analysis is copied, never shared.
    #[must_use]
    pub fn new(
        id: String,
        analysis: &ChartAnalysis,
        image: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        let graph_path = match analysis.direction {
            Direction::Bullish => BULLISH_GRAPH_PATH,
            Direction::Bearish | Direction::Neutral => BEARISH_GRAPH_PATH,
        };
        Self {
            id,
            symbol: "SCAN".to_string(),
            name: analysis.detected_pattern.clone(),
            pattern: analysis.detected_pattern.clone(),
            score: analysis.confidence_score.clone(),
            trend: analysis.direction,
            time: "Just now".to_string(),
            image,
            full_analysis: analysis.clone(),
            graph_path: graph_path.to_string(),
            created_at,
        }
    }
}
