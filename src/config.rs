//! Configuration loading and validation for the `teamodes` binary.

use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings read from `TEAMODES_*` environment variables.  Command
/// line flags win over `key` and `iv`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Tracing log level, overridden by `RUST_LOG` when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub log_json: bool,

    /// Default key, as four comma-separated hex words.
    #[serde(default)]
    pub key: Option<String>,

    /// Default CBC IV, as two comma-separated hex words.
    #[serde(default)]
    pub iv: Option<String>,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("TEAMODES"))
            .build()
            .context("failed to build teamodes configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise teamodes configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if tracing::Level::from_str(&self.log_level).is_err() {
            anyhow::bail!(
                "TEAMODES_LOG_LEVEL must be one of trace, debug, info, warn, error (got {:?})",
                self.log_level
            );
        }
        if let Some(key) = &self.key {
            teamodes::params::parse_key(key).context("TEAMODES_KEY is invalid")?;
        }
        if let Some(iv) = &self.iv {
            teamodes::params::parse_iv(iv).context("TEAMODES_IV is invalid")?;
        }
        Ok(())
    }
}
