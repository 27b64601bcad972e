//! # wrap-config
//!
//! Layered configuration loading for the chat export analyzer using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WRAPPED_*` prefix, `__` as separator)
//! 2. An explicit config file passed by the caller (`--config`)
//! 3. Project-level `./wrapped.toml`
//! 4. User-level `~/.config/wrapped/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WRAPPED_ANALYSIS__YEAR` -> `analysis.year`,
//! `WRAPPED_ENERGY__PUE` -> `energy.pue`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use wrap_config::WrapConfig;
//!
//! let config = WrapConfig::load_with_dotenv(None).expect("config");
//! println!("reading exports from {}", config.paths.input_dir.display());
//! ```

mod analysis;
mod energy;
mod error;
mod paths;
mod report;
mod topics;

pub use analysis::AnalysisConfig;
pub use energy::EnergyConfig;
pub use error::ConfigError;
pub use paths::PathsConfig;
pub use report::ReportConfig;
pub use topics::{TopicRule, TopicsConfig};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Name of the project-local config file.
pub const PROJECT_CONFIG_FILE: &str = "wrapped.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "WRAPPED_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WrapConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub energy: EnergyConfig,
    #[serde(default)]
    pub topics: TopicsConfig,
}

impl WrapConfig {
    /// Load and validate configuration from all sources.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingFile` when `explicit` does not exist,
    /// `ConfigError::Figment` when a source fails to parse or extract, and
    /// `ConfigError::InvalidValue` when validation fails.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.is_file()
        {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Reads `.env` from the current directory (if any) before building the
    /// figment, so `WRAPPED_*` variables can live there.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(year) = self.analysis.year
            && !(1970..=9999).contains(&year)
        {
            return Err(ConfigError::InvalidValue {
                field: "analysis.year".to_string(),
                reason: format!("{year} is not a plausible export year"),
            });
        }
        self.topics.validate()?;
        self.energy.validate()?;
        Ok(())
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wrapped").join("config.toml"))
    }
}
