//! # with_observability
//!
//! Demonstrates chartype structured logging and metrics via
//! `chartype-observability`.
//!
//! Run with:
//! ```sh
//! cargo run --bin with_observability
//!
//! # With JSON logging:
//! LOG_JSON=1 cargo run --bin with_observability
//! ```

use anyhow::Result;
use chartype_batch::{BatchConfig, BatchEngine, BatchRequest};
use chartype_observability::{
    metrics::ChartypeMetrics,
    tracing_setup::{init_tracing, LogConfig},
};
use opentelemetry::global;
use tracing::info;

const CONFIG_YAML: &str = r#"
malformed: sentinel
parallel: true
chunk_size: 250
"#;

fn main() -> Result<()> {
    // ── 1. Initialise structured logging ──────────────────────────────────────
    let log_config = LogConfig {
        // Set LOG_JSON=1 to emit JSON-structured logs
        json: std::env::var("LOG_JSON").is_ok(),
        ..LogConfig::default()
    }
    .with_batch_debug();
    init_tracing(&log_config);

    // ── 2. Meter + metrics (no-op provider unless one is installed) ───────────
    let meter = global::meter("chartype-demo");
    let metrics = ChartypeMetrics::new(&meter);

    // ── 3. Classify a generated batch ─────────────────────────────────────────
    let config = BatchConfig::from_yaml_str(CONFIG_YAML)?;
    let inputs: Vec<Option<String>> = (0..1_000)
        .map(|i| match i % 10 {
            0 => None,
            1 => Some(String::new()),
            _ => Some(format!("row {i}: naïve café №{i}")),
        })
        .collect();

    let engine = BatchEngine::default();
    let request = BatchRequest::from_inputs(&inputs)
        .config(config.clone())
        .on_progress(|done, total| info!(done, total, "progress"));

    if let Some(result) = engine.classify(request)? {
        metrics.record_batch(&result.stats, &config);
        info!(
            strings = result.stats.total_input,
            missing = result.stats.missing,
            code_points = result.stats.code_points,
            "batch recorded"
        );
    }

    Ok(())
}
