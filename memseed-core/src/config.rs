use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::paths::DEFAULT_STORE_PATH;

/// Env overrides use `MEMSEED_<SECTION>__<KEY>`, e.g. `MEMSEED_STORE__PATH`.
const ENV_PREFIX: &str = "MEMSEED";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MemseedConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServiceConfig {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Explicit target, used as given. Takes precedence over `relative_path`.
    pub path: Option<PathBuf>,
    /// Target relative to the install root.
    pub relative_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            relative_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl StoreConfig {
    pub fn resolve(&self, install_root: &Path) -> PathBuf {
        match &self.path {
            Some(p) => p.clone(),
            None => install_root.join(&self.relative_path),
        }
    }
}

impl MemseedConfig {
    /// Load from an optional TOML file, then apply `MEMSEED_*` env overrides.
    /// A missing file is not an error.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        s.try_deserialize()
    }
}
