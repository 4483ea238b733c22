//! Layered configuration for the colorizer
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - TOML file (`--config`, `ATG_COLORIZER_CONFIG`, or the user config dir)
//! - `ATG_COLORIZER__<SECTION>__<KEY>` environment variables
//!
//! Command-line flags are applied on top by the binary.

use crate::error::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "ATG_COLORIZER_CONFIG";

/// Prefix for per-setting environment overrides.
pub const ENV_PREFIX: &str = "ATG_COLORIZER";

/// When to emit color escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Print the startup banner
    pub banner: bool,

    pub color: ColorMode,

    /// Switch to the `other` color after each line so stray console output
    /// does not inherit the last line's color
    pub reset_to_other: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            banner: true,
            color: ColorMode::Auto,
            reset_to_other: true,
        }
    }
}

/// `[palette]` section: terminal color names per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub info: String,
    pub warning: String,
    pub debug: String,
    pub error: String,
    pub nucleus: String,
    pub other: String,
    /// Banner and legend text
    pub intro: String,
    /// Interrupt notice
    pub exiting: String,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            info: "green".to_string(),
            warning: "cyan".to_string(),
            debug: "white".to_string(),
            error: "red".to_string(),
            nucleus: "magenta".to_string(),
            other: "yellow".to_string(),
            intro: "white".to_string(),
            exiting: "magenta".to_string(),
        }
    }
}

/// Effective colorizer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorizerConfig {
    pub output: OutputSettings,
    pub palette: PaletteSettings,
}

/// Config file to read and whether its absence is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub required: bool,
}

/// `<config_dir>/atg-log-colorizer/config.toml`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("atg-log-colorizer").join("config.toml"))
}

/// Pick the config file: explicit path, then `ATG_COLORIZER_CONFIG`, then
/// the optional per-user default.
pub fn resolve_location(explicit: Option<&Path>) -> Option<ConfigLocation> {
    if let Some(path) = explicit {
        debug!("Using config file from command line: {}", path.display());
        return Some(ConfigLocation {
            path: path.to_path_buf(),
            required: true,
        });
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            debug!("Using config file from {}: {}", CONFIG_PATH_ENV, path);
            return Some(ConfigLocation {
                path: PathBuf::from(path),
                required: true,
            });
        }
    }

    default_config_path().map(|path| ConfigLocation {
        path,
        required: false,
    })
}

impl ColorizerConfig {
    /// Load configuration from the resolved file and environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::from_location(resolve_location(explicit).as_ref())
    }

    /// Load configuration from `location` (if any) and environment.
    pub fn from_location(location: Option<&ConfigLocation>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(location) = location {
            debug!(
                "Reading config file {} (required: {})",
                location.path.display(),
                location.required
            );
            builder = builder.add_source(File::from(location.path.clone()).required(location.required));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    /// Render as TOML, as accepted by [`ColorizerConfig::load`].
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
