//! chartype metrics definitions.
//!
//! All metrics use OpenTelemetry conventions and go to whatever meter
//! provider the application installed (a no-op one by default).

use chartype_batch::{BatchStats, BatchConfig};
use opentelemetry::{
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};

/// Central metrics handle for chartype.
#[derive(Clone)]
pub struct ChartypeMetrics {
    pub strings_classified: Counter<u64>,
    pub missing_inputs: Counter<u64>,
    pub code_points: Counter<u64>,
    pub malformed_sequences: Counter<u64>,
    pub batch_size: Histogram<u64>,
}

impl ChartypeMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            strings_classified: meter
                .u64_counter("chartype.strings_classified")
                .with_description("Present input strings classified")
                .init(),
            missing_inputs: meter
                .u64_counter("chartype.missing_inputs")
                .with_description("Input entries that were missing")
                .init(),
            code_points: meter
                .u64_counter("chartype.code_points")
                .with_description("Code points decoded and classified")
                .init(),
            malformed_sequences: meter
                .u64_counter("chartype.malformed_sequences")
                .with_description("Ill-formed UTF-8 sequences substituted")
                .init(),
            batch_size: meter
                .u64_histogram("chartype.batch_size")
                .with_description("Number of strings in a batch request")
                .init(),
        }
    }

    /// Record one completed batch.
    pub fn record_batch(&self, stats: &BatchStats, config: &BatchConfig) {
        let mode = if config.parallel { "parallel" } else { "sequential" };
        let attrs = [KeyValue::new("mode", mode)];

        let present = stats.total_input - stats.missing;
        self.strings_classified.add(present as u64, &attrs);
        self.missing_inputs.add(stats.missing as u64, &attrs);
        self.code_points.add(stats.code_points as u64, &attrs);
        self.batch_size.record(stats.total_input as u64, &attrs);

        if stats.malformed > 0 {
            self.malformed_sequences.add(
                stats.malformed as u64,
                &[KeyValue::new("policy", config.malformed.as_str())],
            );
        }
    }
}
