use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Trader profile collected by the onboarding survey.
///
/// Persisted as a whole-object overwrite on every change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub experience: String,
    pub market: String,
    pub goal: String,
    pub strategy: String,
    /// Photo as a data URI.
    pub profile_image: Option<String>,
    #[serde(default)]
    pub total_scans: u64,
}
