//! # chartype-core
//!
//! Core types shared across all chartype crates: the Unicode general
//! category enumeration and its reference table, the permissive UTF-8
//! decoder, and the `Classifier` capability the batch engine is built on.

pub mod category;
pub mod classifier;
pub mod decoder;
pub mod error;
pub mod table;

pub use category::CategoryCode;
pub use classifier::{Classifier, UnicodeClassifier};
pub use decoder::{MalformedPolicy, Utf8Decoder, MALFORMED_SENTINEL};
pub use error::{BatchError, ClassifyError, ConfigError};
pub use table::{char_categories, CategoryRow, CategoryTable};
