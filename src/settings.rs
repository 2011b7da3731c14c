//! Client settings read through the `config` crate.
//!
//! Sources, later ones winning:
//! * built-in defaults
//! * an optional TOML file (`screener.toml` unless another path is given)
//! * `SCREENER_*` environment variables, `__` separating nested keys
//!   (e.g. `SCREENER_COOKIES__SESSIONID`)

use std::collections::BTreeMap;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://scanner.tradingview.com";
pub const DEFAULT_CONFIG_FILE: &str = "screener.toml";
pub const DEFAULT_USER_AGENT: &str = concat!("screener/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScreenerConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Flat name to value mapping assembled into a single `Cookie` header.
    #[serde(default)]
    pub cookies: BTreeMap<String, String>,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cookies: BTreeMap::new(),
        }
    }
}

impl ScreenerConfig {
    /// Loads defaults, then the file at `path` if it exists, then the environment.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let path = path.unwrap_or(DEFAULT_CONFIG_FILE);
        let settings = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(File::with_name(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("SCREENER").prefix_separator("_").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Parses settings from TOML text, without consulting the environment.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Endpoint for a market, e.g. `<base>/america/scan`.
    pub fn scan_url(&self, market: &str) -> String {
        format!("{}/{}/scan", self.base_url.trim_end_matches('/'), market)
    }
}
