//! Local storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the persisted profile and scan history.
    /// Empty means the platform data directory.
    #[serde(default)]
    pub data_dir: String,

    /// Maximum number of scans kept in history. Unset keeps everything.
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl StorageConfig {
    /// Resolve the data directory: explicit setting, then `<data dir>/chartxo`,
    /// then `./.chartxo`.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        if !self.data_dir.is_empty() {
            return PathBuf::from(&self.data_dir);
        }
        dirs::data_dir().map_or_else(|| PathBuf::from(".chartxo"), |p| p.join("chartxo"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            data_dir: "/tmp/chartxo-test".into(),
            history_limit: None,
        };
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/chartxo-test"));
    }

    #[test]
    fn default_is_unbounded() {
        let config = StorageConfig::default();
        assert!(config.history_limit.is_none());
        assert!(config.resolved_data_dir().ends_with("chartxo") || config.resolved_data_dir().ends_with(".chartxo"));
    }
}
