//! Per-string results and batch statistics.

use chartype_core::category::CategoryCode;
use serde::Serialize;

/// Classification of one input string.
///
/// `Missing` is distinct from an empty `Codes`: the former means the input
/// itself was absent, the latter that it was present but had no code points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CharTypes {
    Missing,
    Codes(Vec<CategoryCode>),
}

impl CharTypes {
    pub fn is_missing(&self) -> bool {
        matches!(self, CharTypes::Missing)
    }

    /// The codes, or `None` for a missing input.
    pub fn codes(&self) -> Option<&[CategoryCode]> {
        match self {
            CharTypes::Missing => None,
            CharTypes::Codes(codes) => Some(codes),
        }
    }

    /// Number of code points; 0 for a missing input.
    pub fn len(&self) -> usize {
        self.codes().map_or(0, <[_]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric codes as host-friendly integers, `None` for a missing input.
    pub fn to_integers(&self) -> Option<Vec<i32>> {
        self.codes()
            .map(|codes| codes.iter().map(|c| i32::from(c.code())).collect())
    }
}

/// Counters describing one completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Strings in the request, missing ones included
    pub total_input: usize,
    /// Inputs that were missing
    pub missing: usize,
    /// Code points decoded across all present inputs
    pub code_points: usize,
    /// Ill-formed UTF-8 units that were substituted
    pub malformed: usize,
}

impl BatchStats {
    pub(crate) fn merge(&mut self, other: &BatchStats) {
        self.total_input += other.total_input;
        self.missing += other.missing;
        self.code_points += other.code_points;
        self.malformed += other.malformed;
    }
}

/// Result of a batch classification job, index-aligned with the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub results: Vec<CharTypes>,
    pub stats: BatchStats,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<CharTypes> {
        self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_is_not_empty_codes() {
        let missing = CharTypes::Missing;
        let empty = CharTypes::Codes(vec![]);
        assert_ne!(missing, empty);
        assert!(missing.is_missing());
        assert!(!empty.is_missing());
        assert_eq!(missing.to_integers(), None);
        assert_eq!(empty.to_integers(), Some(vec![]));
    }

    #[test]
    fn integers_are_native_codes() {
        let r = CharTypes::Codes(vec![
            CategoryCode::DecimalDigitNumber,
            CategoryCode::LowercaseLetter,
        ]);
        assert_eq!(r.to_integers(), Some(vec![9, 2]));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn serializes_missing_as_null() {
        let json = serde_json::to_string(&vec![
            CharTypes::Codes(vec![CategoryCode::UppercaseLetter]),
            CharTypes::Missing,
        ])
        .unwrap();
        assert_eq!(json, r#"[["Lu"],null]"#);
    }
}
