//! # chartype-batch
//!
//! Batch engine that turns a sequence of possibly-missing UTF-8 strings into
//! one sequence of Unicode general-category codes per string.
//!
//! ## Features
//! - One scratch buffer per call, sized to the longest input
//! - Missing inputs kept distinct from empty ones
//! - Optional CPU-parallel chunking via Rayon
//! - Progress callbacks
//!
//! ## Usage
//! ```no_run
//! use chartype_batch::{chartype, CharTypes};
//!
//! let out = chartype(&[Some("A"), Some(""), None, Some("1a")]).unwrap().unwrap();
//! assert_eq!(out[2], CharTypes::Missing);
//! ```

pub mod config;
pub mod engine;
pub mod request;
pub mod result;
mod scratch;

pub use chartype_core::table::char_categories;
pub use config::BatchConfig;
pub use engine::BatchEngine;
pub use request::BatchRequest;
pub use result::{BatchResult, BatchStats, CharTypes};

use chartype_core::error::BatchError;

/// Classify `inputs` with the Unicode classifier and default configuration.
///
/// `Ok(None)` for an empty input slice; otherwise one entry per input.
pub fn chartype<S: AsRef<[u8]>>(inputs: &[Option<S>]) -> Result<Option<Vec<CharTypes>>, BatchError> {
    let result = BatchEngine::default().classify(BatchRequest::from_inputs(inputs))?;
    Ok(result.map(BatchResult::into_results))
}
