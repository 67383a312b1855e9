//! # chartype-observability
//!
//! Logging and metrics for chartype.
//!
//! ## Built-in metrics
//! - `chartype.strings_classified`  — counter, present inputs classified
//! - `chartype.missing_inputs`      — counter
//! - `chartype.code_points`         — counter
//! - `chartype.malformed_sequences` — counter, tagged with policy
//! - `chartype.batch_size`          — histogram
//!
//! ## Structured logging
//! Text or JSON logs via `tracing-subscriber`, levels configurable per crate.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::ChartypeMetrics;
pub use tracing_setup::{init_tracing, LogConfig};
