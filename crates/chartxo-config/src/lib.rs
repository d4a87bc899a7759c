//! # chartxo-config
//!
//! Layered configuration loading for Chartxo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CHARTXO_*` prefix, `__` as separator)
//! 2. Project-level `.chartxo/config.toml`
//! 3. User-level `~/.config/chartxo/config.toml`
//! 4. Built-in defaults
//!
//! `CHARTXO_GEMINI__API_KEY` maps to `gemini.api_key`,
//! `CHARTXO_STRIPE__SECRET_KEY` to `stripe.secret_key`, and so on.
//!
//! ```no_run
//! use chartxo_config::ChartxoConfig;
//!
//! let config = ChartxoConfig::load_with_dotenv().expect("config");
//! if config.gemini.is_configured() {
//!     println!("model: {}", config.gemini.model);
//! }
//! ```

mod error;
mod gemini;
mod razorpay;
mod server;
mod storage;
mod stripe;

pub use error::ConfigError;
pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
pub use razorpay::RazorpayConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;
pub use stripe::StripeConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Value,
};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "CHARTXO_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChartxoConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub stripe: StripeConfig,
    #[serde(default)]
    pub razorpay: RazorpayConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl ChartxoConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading a `.env` file from the workspace root.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Load configuration with externally supplied `CHARTXO_*` pairs layered
    /// between the TOML files and the process environment.
    ///
    /// Used for secrets injected by a hosting platform. Process env still wins.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let mut figment = Self::file_figment();
        for (key, raw) in overrides {
            let Some(path) = override_path(key) else {
                continue;
            };
            let value = raw
                .parse::<Value>()
                .unwrap_or_else(|_| Value::from(raw.clone()));
            figment = figment.merge(Serialized::default(&path, value));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the full provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::file_figment().merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Require the Gemini section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no API key is set.
    pub fn require_gemini(&self) -> Result<&GeminiConfig, ConfigError> {
        if self.gemini.is_configured() {
            Ok(&self.gemini)
        } else {
            Err(ConfigError::NotConfigured {
                section: "gemini".to_string(),
            })
        }
    }

    /// Defaults plus the global and project TOML files.
    fn file_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".chartxo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("chartxo").join("config.toml"))
    }

    /// Walk up from `CARGO_MANIFEST_DIR` looking for `.env`, then fall back
    /// to the current directory. Missing files are ignored.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

/// `CHARTXO_GEMINI__API_KEY` -> `gemini.api_key`.
fn override_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace("__", "."))
}
