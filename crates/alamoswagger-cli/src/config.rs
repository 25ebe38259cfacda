//! alamoswagger.toml configuration

use alamoswagger_core::{DEFAULT_ATTRIBUTION, GeneratorOptions};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;

/// Top-level configuration file structure
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default log level when neither RUST_LOG nor --log-level is set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSection {
    /// Attribution line in the generated header comment
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_attribution() -> String {
    DEFAULT_ATTRIBUTION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            generator: GeneratorSection::default(),
        }
    }
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            attribution: default_attribution(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.log_level.parse::<LevelFilter>().is_err() {
            anyhow::bail!("Invalid log level: {}", self.log_level);
        }

        if self.generator.attribution.trim().is_empty() {
            anyhow::bail!("Generator attribution cannot be empty");
        }

        Ok(())
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            attribution: self.generator.attribution.clone(),
        }
    }
}
