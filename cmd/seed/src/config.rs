//! Layered settings: built-in defaults, then an optional `forum.toml`, then
//! `FORUM__`-prefixed environment variables (e.g. `FORUM__DATABASE__URL`).

use anyhow::Context;
use config::{Config, Environment, File};
use forum_db_sqlite::DatabaseConfig;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Settings {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env(Environment::with_prefix("FORUM"))
    }

    fn from_env(env: Environment) -> anyhow::Result<Self> {
        Config::builder()
            .add_source(File::with_name("forum").required(false))
            .add_source(env.separator("__").try_parsing(true))
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }
}
