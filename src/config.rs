use crate::error::{Result, SpinError};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Connection settings for one platform operator account
#[derive(Clone, Deserialize)]
pub struct SpinConfig {
    pub api_login: String,
    pub api_password: String,
    pub base_url: String,
    pub home_url: String,
    pub cashier_url: String,
}

// Keep the secret out of logs
impl fmt::Debug for SpinConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpinConfig")
            .field("api_login", &self.api_login)
            .field("api_password", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("home_url", &self.home_url)
            .field("cashier_url", &self.cashier_url)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub spin: SpinConfig,
}

impl Config {
    /// Load `config.toml` from the working directory
    pub fn new() -> Result<Self> {
        Self::from_path(DEFAULT_CONFIG_PATH)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .map_err(|e| SpinError::Config(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::from_toml(&config_str)?;
        info!("Config: {:?}", config);
        Ok(config)
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        toml::from_str(config_str).map_err(|e| SpinError::Config(e.to_string()))
    }

    /// Read `SPIN_*` variables, loading a `.env` file first when present
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let var = |name: &str| {
            std::env::var(name).map_err(|_| SpinError::Config(format!("{name} is not set")))
        };

        let config = Config {
            spin: SpinConfig {
                api_login: var("SPIN_API_LOGIN")?,
                api_password: var("SPIN_API_PASSWORD")?,
                base_url: var("SPIN_BASE_URL")?,
                home_url: var("SPIN_HOME_URL")?,
                cashier_url: var("SPIN_CASHIER_URL")?,
            },
        };
        info!("Config: {:?}", config);
        Ok(config)
    }
}
