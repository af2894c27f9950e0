// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration management for Zeebe-Contacts

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ContactError, Result};
use crate::render::OutputFormat;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset answers for the cluster layout
    #[serde(default)]
    pub cluster: ClusterInputs,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Partially known cluster layout
///
/// Each layer (flags, config file) fills what it knows; anything still
/// missing is asked for interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterInputs {
    /// Namespace of the Camunda installation in region 0
    pub namespace_0: Option<String>,

    /// Namespace of the Camunda installation in region 1
    pub namespace_1: Option<String>,

    /// Helm release name used in both regions
    pub release: Option<String>,

    /// Total number of brokers across both regions
    pub cluster_size: Option<u32>,
}

impl ClusterInputs {
    /// Fill every unset field from `fallback`
    pub fn or(self, fallback: ClusterInputs) -> Self {
        Self {
            namespace_0: self.namespace_0.or(fallback.namespace_0),
            namespace_1: self.namespace_1.or(fallback.namespace_1),
            release: self.release.or(fallback.release),
            cluster_size: self.cluster_size.or(fallback.cluster_size),
        }
    }

    /// True when no prompting is needed
    pub fn is_complete(&self) -> bool {
        self.namespace_0.is_some()
            && self.namespace_1.is_some()
            && self.release.is_some()
            && self.cluster_size.is_some()
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format for `generate`
    #[serde(default)]
    pub format: OutputFormat,

    /// Marker replaced by the contact list in Helm values files
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            placeholder: default_placeholder(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// The parsed configuration or an error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ContactError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ContactError::InvalidConfig {
                message: format!(
                    "Unknown log level '{}', expected one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        if self.output.placeholder.is_empty() {
            return Err(ContactError::InvalidConfig {
                message: "Placeholder cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// Default value functions

fn default_placeholder() -> String {
    "PLACEHOLDER".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}
