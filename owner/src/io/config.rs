//! Owner configuration stored in `owner.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::person::{Person, PersonData};
use crate::core::store::{DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME, OwnerStore};
use crate::spaceship::DEFAULT_SHIP_NAME;

pub const DEFAULT_CONFIG_PATH: &str = "owner.toml";

/// Owner configuration (TOML).
///
/// Missing fields fall back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OwnerConfig {
    /// Record a freshly built store starts with.
    pub default_owner: PersonData,

    /// Spaceship name used by `owner scenario` when `--name` is not given.
    pub ship_name: String,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            default_owner: PersonData::new(DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME),
            ship_name: DEFAULT_SHIP_NAME.to_string(),
        }
    }
}

impl OwnerConfig {
    pub fn build_store(&self) -> OwnerStore {
        OwnerStore::with_owner(Person::new(&self.default_owner))
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `OwnerConfig::default()`.
pub fn load_config(path: &Path) -> Result<OwnerConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        return Ok(OwnerConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: OwnerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), owner = ?cfg.default_owner, "config loaded");
    Ok(cfg)
}
