//! Daemon settings
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file named by `KITCHEN_CONFIG`, then `KITCHEN_*` environment variables.

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_PATH_VAR: &str = "KITCHEN_CONFIG";
const ENV_PREFIX: &str = "KITCHEN";
const DEFAULT_DB_PATH: &str = "~/.kitchen/kitchen.db";
const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9640;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DaemonConfig {
    pub db_path: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub log_format: LogFormat,
}

impl DaemonConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self> {
        let file = std::env::var(CONFIG_PATH_VAR).ok();
        Self::from_sources(
            file.as_deref().map(Path::new),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn from_sources(file: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("db_path", DEFAULT_DB_PATH)?
            .set_default("rpc_host", DEFAULT_RPC_HOST)?
            .set_default("rpc_port", i64::from(DEFAULT_RPC_PORT))?
            .set_default("log_format", "pretty")?;

        if let Some(path) = file {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        let mut loaded: DaemonConfig = builder
            .add_source(env.try_parsing(true))
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        loaded.db_path = shellexpand::tilde(&loaded.db_path).into_owned();
        Ok(loaded)
    }

    /// sqlx connection URL for the configured database file
    pub fn database_url(&self) -> String {
        if self.db_path.starts_with("sqlite:") {
            self.db_path.clone()
        } else {
            format!("sqlite://{}", self.db_path)
        }
    }
}
