//! Log subscriber setup for chartype.
//!
//! `chartype_batch` emits `info!` per batch (input count, missing entries,
//! code points), `warn!` when ill-formed UTF-8 was substituted, and `debug!`
//! for scratch-buffer sizing and parallel chunk completion. `LogConfig` picks
//! which of those reach the output and whether they are rendered as text or
//! JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when a config omits `level` or its directives fail to parse.
const FALLBACK_LEVEL: &str = "info";

/// Which chartype log events to emit, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level for every target without an override
    #[serde(default = "default_level")]
    pub level: String,
    /// Per-crate overrides, e.g. `chartype-batch → debug` for buffer sizing
    #[serde(default)]
    pub components: BTreeMap<String, String>,
    /// JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    FALLBACK_LEVEL.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            components: BTreeMap::new(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Show scratch-buffer and chunk logs from the batch engine.
    pub fn with_batch_debug(mut self) -> Self {
        self.components.insert("chartype_batch".into(), "debug".into());
        self
    }

    /// `EnvFilter` directives, e.g. `"info,chartype_batch=debug"`.
    /// Crate names are accepted with dashes and rewritten to their target form.
    pub fn directives(&self) -> String {
        self.components
            .iter()
            .fold(self.level.clone(), |mut acc, (component, level)| {
                acc.push_str(&format!(",{}={}", component.replace('-', "_"), level));
                acc
            })
    }
}

/// Install the global subscriber described by `config`.
///
/// Panics if a global subscriber is already set; call it once from `main`.
pub fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_new(config.directives())
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL));

    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_normalise_crate_names() {
        let mut config = LogConfig::default();
        config.components.insert("chartype-batch".into(), "debug".into());
        config.components.insert("chartype-core".into(), "warn".into());
        assert_eq!(
            config.directives(),
            "info,chartype_batch=debug,chartype_core=warn"
        );
    }

    #[test]
    fn batch_debug_override() {
        let config = LogConfig::default().with_batch_debug();
        assert_eq!(config.directives(), "info,chartype_batch=debug");
        assert!(EnvFilter::try_new(config.directives()).is_ok());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: LogConfig = serde_json::from_str(r#"{"json": true}"#).unwrap();
        assert_eq!(config.level, "info");
        assert!(config.json);
        assert!(config.components.is_empty());
    }
}
