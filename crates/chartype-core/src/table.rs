//! The general-category reference table.
//!
//! One row per category code except `Unassigned`, in numeric order. The
//! table is a closed set, so it is built once on first use and shared
//! read-only for the rest of the process.

use crate::category::CategoryCode;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;

/// Labels of the three table columns: code, long identifier, abbreviation.
pub const COLUMN_NAMES: [&str; 3] = ["Identifier", "CategoryFull", "Category"];

static TABLE: OnceLock<CategoryTable> = OnceLock::new();

/// Returns the process-wide category table.
pub fn char_categories() -> &'static CategoryTable {
    TABLE.get_or_init(CategoryTable::build)
}

/// A single table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub code: u8,
    pub identifier: &'static str,
    pub abbreviation: &'static str,
}

impl From<CategoryCode> for CategoryRow {
    fn from(cat: CategoryCode) -> Self {
        Self {
            code: cat.code(),
            identifier: cat.identifier(),
            abbreviation: cat.abbreviation(),
        }
    }
}

/// Category codes with their long identifiers and abbreviations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    rows: Vec<CategoryRow>,
}

impl CategoryTable {
    /// Build a fresh table. Prefer [`char_categories`], which memoizes it.
    pub fn build() -> Self {
        let rows = CategoryCode::all()
            .filter(|cat| !cat.is_unassigned())
            .map(CategoryRow::from)
            .collect();
        Self { rows }
    }

    pub fn column_names(&self) -> [&'static str; 3] {
        COLUMN_NAMES
    }

    pub fn rows(&self) -> &[CategoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The "Identifier" column.
    pub fn codes(&self) -> Vec<u8> {
        self.rows.iter().map(|r| r.code).collect()
    }

    /// The "CategoryFull" column.
    pub fn identifiers(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.identifier).collect()
    }

    /// The "Category" column.
    pub fn abbreviations(&self) -> Vec<&'static str> {
        self.rows.iter().map(|r| r.abbreviation).collect()
    }

    /// Row for `code`, or `None` for `Unassigned` and out-of-range codes.
    pub fn get(&self, code: u8) -> Option<&CategoryRow> {
        // rows start at code 1
        let idx = (code as usize).checked_sub(1)?;
        self.rows.get(idx)
    }
}

/// Column-oriented form: `{"Identifier": [..], "CategoryFull": [..], "Category": [..]}`.
#[derive(Serialize)]
struct Columns {
    #[serde(rename = "Identifier")]
    identifier: Vec<u8>,
    #[serde(rename = "CategoryFull")]
    category_full: Vec<&'static str>,
    #[serde(rename = "Category")]
    category: Vec<&'static str>,
}

impl Serialize for CategoryTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Columns {
            identifier: self.codes(),
            category_full: self.identifiers(),
            category: self.abbreviations(),
        }
        .serialize(serializer)
    }
}
