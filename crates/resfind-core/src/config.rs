//! Configuration types for resfind.
//!
//! [`Config::load`] reads `~/.config/resfind/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then applies `RESFIND_*`
//! environment overrides. [`Config::defaults`] returns the same defaults
//! without touching the filesystem or the environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[delivery]
base_url              = "https://cdn.contentful.com"
space_id              = ""
environment           = "master"
access_token          = ""
resource_content_type = "resource"
timeout_secs          = 30
"#;

/// Prefix for environment overrides, e.g. `RESFIND_DELIVERY__ACCESS_TOKEN`.
const ENV_PREFIX: &str = "RESFIND";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

/// `[delivery]` section of `config.toml`.
#[derive(Clone, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub space_id: String,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub access_token: String,
    /// Content type id of resource entries.
    #[serde(default = "default_resource_content_type")]
    pub resource_content_type: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String { "https://cdn.contentful.com".to_string() }
fn default_environment() -> String { "master".to_string() }
fn default_resource_content_type() -> String { "resource".to_string() }
fn default_timeout_secs() -> u64 { 30 }

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            space_id: String::new(),
            environment: default_environment(),
            access_token: String::new(),
            resource_content_type: default_resource_content_type(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for DeliveryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryConfig")
            .field("base_url", &self.base_url)
            .field("space_id", &self.space_id)
            .field("environment", &self.environment)
            .field("access_token", &"***")
            .field("resource_content_type", &self.resource_content_type)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/resfind/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load from an explicit file (which may be missing), layered on top of
    /// the built-in defaults and below the environment.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("resfind")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
