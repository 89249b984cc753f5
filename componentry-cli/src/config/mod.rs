//! Configuration for the componentry CLI
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `COMPONENTRY_` prefix, `__` for nesting)
//! 2. `./componentry.toml` in the project root
//! 3. `~/.config/componentry/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! Command-line flags override all of the above.
//!
//! # Example Configuration
//!
//! ```toml
//! # componentry.toml
//! [registry]
//! base_url = "https://raw.githubusercontent.com/componentry-ui/componentry/main"
//! timeout_secs = 30
//!
//! [defaults]
//! target_dir = "src/ui"
//! format = "untyped"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::OutputFormat;

/// Raw-content host serving the registry files
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/componentry-ui/componentry/main";

/// Project-local configuration file name
pub const PROJECT_CONFIG_FILE: &str = "componentry.toml";

/// Remote registry settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Base URL that manifest source paths are appended to
    pub base_url: String,

    /// Whole-request timeout in seconds; requests never time out when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl RegistrySettings {
    /// Request timeout, if one is configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Defaults for values the `add` command would otherwise prompt for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSettings {
    /// Directory, relative to the project root, that items are installed into
    pub target_dir: PathBuf,

    /// Source variant to install
    pub format: OutputFormat,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("src/components"),
            format: OutputFormat::Typed,
        }
    }
}

/// Complete CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentryConfig {
    /// Registry settings
    #[serde(default)]
    pub registry: RegistrySettings,

    /// Prompt defaults
    #[serde(default)]
    pub defaults: DefaultSettings,
}

impl ComponentryConfig {
    /// Load configuration for a project
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file contains invalid TOML
    /// - A value has the wrong type (e.g. an unknown `format`)
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                tracing::debug!(path = %user_config.display(), "loading user config");
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        let project_config = project_root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            tracing::debug!(path = %project_config.display(), "loading project config");
            figment = figment.merge(Toml::file(&project_config));
        }

        figment = figment.merge(Env::prefixed("COMPONENTRY_").split("__").lowercase(true));

        figment.extract().map_err(|e| ConfigError::Extract(Box::new(e)))
    }

    /// Path of the per-user configuration file
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("componentry").join("config.toml"))
    }

    /// Full URL of a registry file
    #[must_use]
    pub fn source_url(&self, source: &str) -> String {
        format!(
            "{}/{}",
            self.registry.base_url.trim_end_matches('/'),
            source.trim_start_matches('/')
        )
    }
}
