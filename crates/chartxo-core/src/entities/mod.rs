//! Entity structs for all Chartxo domain objects.
//!
//! `ChartAnalysis` is the value contract produced by the remote AI service.
//! `ScanHistoryEntry` and `UserProfile` are persisted by `chartxo-store`;
//! `AppNotification` and `ChatTurn` live for the process lifetime only.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod analysis;
mod chat;
mod notification;
mod profile;
mod scan;

pub use analysis::{ChartAnalysis, RiskShield, TradeSetup};
pub use chat::ChatTurn;
pub use notification::AppNotification;
pub use profile::UserProfile;
pub use scan::{BEARISH_GRAPH_PATH, BULLISH_GRAPH_PATH, ScanHistoryEntry};
