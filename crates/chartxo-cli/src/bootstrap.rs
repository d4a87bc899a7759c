use std::path::PathBuf;

use anyhow::Context;
use chartxo_config::ChartxoConfig;
use chartxo_store::{AppState, LocalStore};

use crate::cli::GlobalFlags;

pub fn load_config() -> anyhow::Result<ChartxoConfig> {
    ChartxoConfig::load_with_dotenv().context("failed to load chartxo configuration")
}

/// `--data-dir` wins over `storage.data_dir`.
pub fn data_dir(config: &ChartxoConfig, flags: &GlobalFlags) -> PathBuf {
    flags
        .data_dir
        .clone()
        .unwrap_or_else(|| config.storage.resolved_data_dir())
}

/// Load the persisted profile and history.
pub fn open_state(config: &ChartxoConfig, flags: &GlobalFlags) -> anyhow::Result<AppState> {
    let dir = data_dir(config, flags);
    tracing::debug!(dir = %dir.display(), "opening local store");
    let state = AppState::load(LocalStore::new(&dir))
        .with_context(|| format!("failed to load local data from {}", dir.display()))?;
    Ok(state.with_history_limit(config.storage.history_limit))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(data_dir: Option<&Path>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            data_dir: data_dir.map(Path::to_path_buf),
        }
    }

    #[test]
    fn flag_overrides_configured_dir() {
        let mut config = ChartxoConfig::default();
        config.storage.data_dir = "/srv/chartxo".into();
        assert_eq!(data_dir(&config, &flags(None)), PathBuf::from("/srv/chartxo"));
        assert_eq!(
            data_dir(&config, &flags(Some(Path::new("/tmp/other")))),
            PathBuf::from("/tmp/other")
        );
    }

    #[test]
    fn open_state_on_empty_dir_has_no_profile() {
        let tmp = tempfile::tempdir().unwrap();
        let state = open_state(&ChartxoConfig::default(), &flags(Some(tmp.path()))).unwrap();
        assert!(!state.has_profile());
        assert!(state.history().is_empty());
    }
}
