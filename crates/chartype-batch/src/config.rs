//! Batch engine configuration.

use chartype_core::{decoder::MalformedPolicy, error::ConfigError};
use serde::{Deserialize, Serialize};

/// Configuration for a batch classification job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// What ill-formed UTF-8 units decode to
    #[serde(default)]
    pub malformed: MalformedPolicy,
    /// Classify chunks on the Rayon pool instead of sequentially
    #[serde(default)]
    pub parallel: bool,
    /// Max strings per chunk in parallel mode
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Rayon worker count for parallel mode (0 = global pool)
    #[serde(default)]
    pub concurrency: usize,
}

fn default_chunk_size() -> usize { 10_000 }

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            malformed: MalformedPolicy::default(),
            parallel: false,
            chunk_size: default_chunk_size(),
            concurrency: 0,
        }
    }
}

impl BatchConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid {
                reason: "chunk_size must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
