//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.halfshell/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::effects::EffectTimings;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HalfshellConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EffectsConfig {
    pub glitch_enabled: Option<bool>,
    pub glitch_interval_secs: Option<u64>,
    pub glitch_probability: Option<f64>,
    pub quote_display_ms: Option<u64>,
    pub select_flash_ms: Option<u64>,
    pub startup_flash_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "halfshell.log";
pub const DEFAULT_LOG_LEVEL: &str = "debug";
pub const DEFAULT_GLITCH_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_GLITCH_PROBABILITY: f64 = 0.1;
pub const DEFAULT_QUOTE_DISPLAY_MS: u64 = 3000;
pub const DEFAULT_SELECT_FLASH_MS: u64 = 100;
pub const DEFAULT_STARTUP_FLASH_MS: u64 = 200;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_file: String,
    pub log_level: String,
    pub glitch_enabled: bool,
    pub glitch_interval: Duration,
    pub timings: EffectTimings,
}

/// Overrides taken from the command line (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub no_glitch: bool,
    pub glitch_interval_secs: Option<u64>,
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

/// Where the loaded config came from.
///
/// Loading runs before the file logger exists, so nothing is logged while
/// loading; the caller reports this with [`ConfigSource::log`] afterwards.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Generated(PathBuf),
    GenerateFailed(PathBuf, std::io::Error),
    NoHomeDir,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed(path, e) => {
                warn!("Failed to write default config to {}: {}", path.display(), e)
            }
            ConfigSource::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.halfshell/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".halfshell").join("config.toml"))
}

/// Load config from `~/.halfshell/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HalfshellConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<(HalfshellConfig, ConfigSource), ConfigError> {
    match config_path() {
        Some(path) => load_or_generate(&path),
        None => Ok((HalfshellConfig::default(), ConfigSource::NoHomeDir)),
    }
}

/// [`load_config`] against an explicit path.
pub fn load_or_generate(path: &Path) -> Result<(HalfshellConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        let source = match generate_default_config(path) {
            Ok(()) => ConfigSource::Generated(path.to_path_buf()),
            Err(e) => ConfigSource::GenerateFailed(path.to_path_buf(), e),
        };
        return Ok((HalfshellConfig::default(), source));
    }

    let config = load_config_from(path)?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<HalfshellConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# halfshell configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "halfshell.log"        # Or set HALFSHELL_LOG_FILE
# log_level = "debug"               # "error", "warn", "info", "debug", "trace", "off"

# [effects]
# glitch_enabled = true             # --no-glitch disables
# glitch_interval_secs = 10         # Or HALFSHELL_GLITCH_INTERVAL / --glitch-interval
# glitch_probability = 0.1          # Chance each title character is corrupted
# quote_display_ms = 3000
# select_flash_ms = 100
# startup_flash_ms = 200
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

/// Parse a `log_level` setting ("off", "error" ... "trace", any case).
pub fn parse_log_level(level: &str) -> Option<LevelFilter> {
    level.parse().ok()
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &HalfshellConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &HalfshellConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Log file: env → config → default
    let log_file = env("HALFSHELL_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    // Log level: env → config → default
    let log_level = env("HALFSHELL_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    // Glitch interval: CLI → env → config → default
    let glitch_interval_secs = cli
        .glitch_interval_secs
        .or_else(|| env("HALFSHELL_GLITCH_INTERVAL").and_then(|v| v.parse().ok()))
        .or(config.effects.glitch_interval_secs)
        .unwrap_or(DEFAULT_GLITCH_INTERVAL_SECS)
        .max(1);

    let glitch_enabled = !cli.no_glitch && config.effects.glitch_enabled.unwrap_or(true);

    let effects = &config.effects;
    let timings = EffectTimings {
        select_flash: Duration::from_millis(
            effects.select_flash_ms.unwrap_or(DEFAULT_SELECT_FLASH_MS),
        ),
        startup_flash: Duration::from_millis(
            effects.startup_flash_ms.unwrap_or(DEFAULT_STARTUP_FLASH_MS),
        ),
        quote_display: Duration::from_millis(
            effects.quote_display_ms.unwrap_or(DEFAULT_QUOTE_DISPLAY_MS),
        ),
        glitch_probability: effects
            .glitch_probability
            .unwrap_or(DEFAULT_GLITCH_PROBABILITY)
            .clamp(0.0, 1.0),
    };

    ResolvedConfig {
        log_file,
        log_level,
        glitch_enabled,
        glitch_interval: Duration::from_secs(glitch_interval_secs),
        timings,
    }
}
