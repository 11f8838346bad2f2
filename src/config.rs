//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/vtree/vtree.toml`
//! 3. Local config: `<dir>/.vtree.toml` (directory given by `-C`, default cwd)
//! 4. Environment variables: `VTREE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Prefix of environment variable overrides, e.g. `VTREE_FORMAT`.
pub const ENV_PREFIX: &str = "VTREE";

/// How traversal results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// All values on one line
    #[default]
    Flat,
    /// One line per column, prefixed by the column index
    Columns,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Flat => write!(f, "flat"),
            OutputFormat::Columns => write!(f, "columns"),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub format: Option<OutputFormat>,
    pub separator: Option<String>,
    pub null_token: Option<String>,
    pub parallel: Option<bool>,
}

/// Unified configuration for vtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output layout for traversal results
    pub format: OutputFormat,
    /// Separator between values in flat output
    pub separator: String,
    /// Token that marks an absent child in level-order input
    pub null_token: String,
    /// Traverse batches of trees on the rayon thread pool
    pub parallel: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Flat,
            separator: " ".into(),
            null_token: "null".into(),
            parallel: true,
        }
    }
}

/// Get the XDG config directory for vtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("vtree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".vtree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if Some.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
            null_token: overlay
                .null_token
                .clone()
                .unwrap_or_else(|| self.null_token.clone()),
            parallel: overlay.parallel.unwrap_or(self.parallel),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.vtree.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with(global_config_path().as_deref(), local_dir)
    }

    /// Load settings from an explicit global config file and local directory.
    ///
    /// Missing files are skipped; unreadable or malformed files are errors.
    pub fn load_with(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!("loading global config: {}", global_path.display());
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("loading local config: {}", local_path.display());
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply VTREE_* environment variables as explicit overrides.
    ///
    /// Unset variables are skipped; a value that does not parse is an error
    /// naming the variable.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<OutputFormat>(&config, "format")? {
            settings.format = val;
        }
        if let Some(val) = env_value::<String>(&config, "separator")? {
            settings.separator = val;
        }
        if let Some(val) = env_value::<String>(&config, "null_token")? {
            settings.null_token = val;
        }
        if let Some(val) = env_value::<bool>(&config, "parallel")? {
            settings.parallel = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# vtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/vtree/vtree.toml
#   Local:  <dir>/.vtree.toml
#   Env:    VTREE_* environment variables (e.g. VTREE_FORMAT=columns)

# Output layout: "flat" (one line per tree) or "columns" (one line per column)
# format = "flat"

# Separator between values in flat output
# separator = " "

# Token marking an absent child in level-order input
# null_token = "null"

# Traverse multiple trees in parallel
# parallel = true
"#
        .to_string()
    }
}

/// Read one key from the environment layer, `None` when the variable is unset.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("{}_{}: {}", ENV_PREFIX, key.to_uppercase(), e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_settings_when_created_then_flat_with_null_token() {
        let settings = Settings::default();
        assert_eq!(settings.format, OutputFormat::Flat);
        assert_eq!(settings.separator, " ");
        assert_eq!(settings.null_token, "null");
        assert!(settings.parallel);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            format: Some(OutputFormat::Columns),
            separator: None,
            null_token: Some("#".to_string()),
            parallel: None,
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.format, OutputFormat::Columns);
        assert_eq!(result.separator, " ");
        assert_eq!(result.null_token, "#");
        assert!(result.parallel);
    }

    #[test]
    fn given_settings_when_serialized_then_round_trips_through_toml() {
        let settings = Settings {
            format: OutputFormat::Columns,
            separator: ", ".to_string(),
            null_token: "nil".to_string(),
            parallel: false,
        };
        let text = settings.to_toml().unwrap();
        assert!(text.contains("format = \"columns\""));
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), Settings::default());
    }
}
