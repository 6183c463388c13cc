//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quire/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuireConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SiteConfig {
    pub title: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_location: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SITE_TITLE: &str = "Blog";
pub const DEFAULT_START_LOCATION: &str = "/";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub site_title: String,
    pub author: Option<String>,
    pub start_location: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quire/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quire").join("config.toml"))
}

/// Load the config file at `path` (normally `config_path()`) and resolve it
/// against env vars and CLI flags.
///
/// A missing file generates a commented-out default. A malformed file is
/// returned as `ConfigError::Parse`; it is never replaced by defaults.
/// `path` is `None` when there is no home directory, and defaults apply.
pub fn load_resolved(
    path: Option<&Path>,
    cli_api_url: Option<&str>,
    cli_location: Option<&str>,
) -> Result<ResolvedConfig, ConfigError> {
    let config = match path {
        Some(p) => load_config_from(p)?,
        None => {
            warn!("Could not determine home directory, using default config");
            QuireConfig::default()
        }
    };
    Ok(resolve(&config, cli_api_url, cli_location))
}

pub fn load_config_from(path: &Path) -> Result<QuireConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(QuireConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuireConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Quire Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:5000"   # Or set QUIRE_API_URL, or pass --api-url
# timeout_secs = 10

# [site]
# title = "Blog"
# author = "Jane Doe"                  # Or set QUIRE_AUTHOR

# [general]
# start_location = "/"                 # e.g. "/?page=2" or "/post/7"; --location wins
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_api_url` and `cli_location` are from CLI flags (None = not specified).
pub fn resolve(
    config: &QuireConfig,
    cli_api_url: Option<&str>,
    cli_location: Option<&str>,
) -> ResolvedConfig {
    // API URL: CLI → env → config → default
    let api_base_url = cli_api_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("QUIRE_API_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Author: env → config
    let author = std::env::var("QUIRE_AUTHOR")
        .ok()
        .or_else(|| config.site.author.clone())
        .filter(|a| !a.trim().is_empty());

    // Start location: CLI → config → default
    let start_location = cli_location
        .map(|s| s.to_string())
        .or_else(|| config.general.start_location.clone())
        .unwrap_or_else(|| DEFAULT_START_LOCATION.to_string());

    ResolvedConfig {
        api_base_url,
        request_timeout: Duration::from_secs(
            config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
        site_title: config
            .site
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string()),
        author,
        start_location,
    }
}
