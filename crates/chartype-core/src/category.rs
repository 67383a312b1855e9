//! Unicode general category codes.
//!
//! The numeric values are the ones used by ICU's `UCharCategory`, so codes
//! produced here can be compared directly against ICU-based tooling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Unicode general category.
///
/// `Unassigned` (code 0) is a valid classification result but has no row in
/// the [`CategoryTable`](crate::table::CategoryTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[repr(u8)]
pub enum CategoryCode {
    Unassigned = 0,
    UppercaseLetter = 1,
    LowercaseLetter = 2,
    TitlecaseLetter = 3,
    ModifierLetter = 4,
    OtherLetter = 5,
    NonSpacingMark = 6,
    EnclosingMark = 7,
    CombiningSpacingMark = 8,
    DecimalDigitNumber = 9,
    LetterNumber = 10,
    OtherNumber = 11,
    SpaceSeparator = 12,
    LineSeparator = 13,
    ParagraphSeparator = 14,
    ControlChar = 15,
    FormatChar = 16,
    PrivateUseChar = 17,
    Surrogate = 18,
    DashPunctuation = 19,
    StartPunctuation = 20,
    EndPunctuation = 21,
    ConnectorPunctuation = 22,
    OtherPunctuation = 23,
    MathSymbol = 24,
    CurrencySymbol = 25,
    ModifierSymbol = 26,
    OtherSymbol = 27,
    InitialPunctuation = 28,
    FinalPunctuation = 29,
}

/// (category, long identifier, abbreviation), indexed by numeric code.
const CATEGORIES: [(CategoryCode, &str, &str); CategoryCode::COUNT] = [
    (CategoryCode::Unassigned, "U_UNASSIGNED", "Cn"),
    (CategoryCode::UppercaseLetter, "U_UPPERCASE_LETTER", "Lu"),
    (CategoryCode::LowercaseLetter, "U_LOWERCASE_LETTER", "Ll"),
    (CategoryCode::TitlecaseLetter, "U_TITLECASE_LETTER", "Lt"),
    (CategoryCode::ModifierLetter, "U_MODIFIER_LETTER", "Lm"),
    (CategoryCode::OtherLetter, "U_OTHER_LETTER", "Lo"),
    (CategoryCode::NonSpacingMark, "U_NON_SPACING_MARK", "Mn"),
    (CategoryCode::EnclosingMark, "U_ENCLOSING_MARK", "Me"),
    (CategoryCode::CombiningSpacingMark, "U_COMBINING_SPACING_MARK", "Mc"),
    (CategoryCode::DecimalDigitNumber, "U_DECIMAL_DIGIT_NUMBER", "Nd"),
    (CategoryCode::LetterNumber, "U_LETTER_NUMBER", "Nl"),
    (CategoryCode::OtherNumber, "U_OTHER_NUMBER", "No"),
    (CategoryCode::SpaceSeparator, "U_SPACE_SEPARATOR", "Zs"),
    (CategoryCode::LineSeparator, "U_LINE_SEPARATOR", "Zl"),
    (CategoryCode::ParagraphSeparator, "U_PARAGRAPH_SEPARATOR", "Zp"),
    (CategoryCode::ControlChar, "U_CONTROL_CHAR", "Cc"),
    (CategoryCode::FormatChar, "U_FORMAT_CHAR", "Cf"),
    (CategoryCode::PrivateUseChar, "U_PRIVATE_USE_CHAR", "Co"),
    (CategoryCode::Surrogate, "U_SURROGATE", "Cs"),
    (CategoryCode::DashPunctuation, "U_DASH_PUNCTUATION", "Pd"),
    (CategoryCode::StartPunctuation, "U_START_PUNCTUATION", "Ps"),
    (CategoryCode::EndPunctuation, "U_END_PUNCTUATION", "Pe"),
    (CategoryCode::ConnectorPunctuation, "U_CONNECTOR_PUNCTUATION", "Pc"),
    (CategoryCode::OtherPunctuation, "U_OTHER_PUNCTUATION", "Po"),
    (CategoryCode::MathSymbol, "U_MATH_SYMBOL", "Sm"),
    (CategoryCode::CurrencySymbol, "U_CURRENCY_SYMBOL", "Sc"),
    (CategoryCode::ModifierSymbol, "U_MODIFIER_SYMBOL", "Sk"),
    (CategoryCode::OtherSymbol, "U_OTHER_SYMBOL", "So"),
    (CategoryCode::InitialPunctuation, "U_INITIAL_PUNCTUATION", "Pi"),
    (CategoryCode::FinalPunctuation, "U_FINAL_PUNCTUATION", "Pf"),
];

impl CategoryCode {
    /// Number of codes in the enumeration, `Unassigned` included.
    pub const COUNT: usize = 30;

    /// Every category in numeric order, `Unassigned` first.
    pub fn all() -> impl Iterator<Item = CategoryCode> {
        CATEGORIES.iter().map(|(cat, _, _)| *cat)
    }

    /// The numeric code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Long identifier, e.g. `"U_UPPERCASE_LETTER"`.
    pub fn identifier(self) -> &'static str {
        CATEGORIES[self as usize].1
    }

    /// Two-letter abbreviation, e.g. `"Lu"`.
    pub fn abbreviation(self) -> &'static str {
        CATEGORIES[self as usize].2
    }

    pub fn from_code(code: u8) -> Option<Self> {
        CATEGORIES.get(code as usize).map(|(cat, _, _)| *cat)
    }

    pub fn from_abbreviation(abbr: &str) -> Option<Self> {
        CATEGORIES
            .iter()
            .find(|(_, _, a)| *a == abbr)
            .map(|(cat, _, _)| *cat)
    }

    pub fn is_unassigned(self) -> bool {
        self == CategoryCode::Unassigned
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl From<CategoryCode> for String {
    fn from(cat: CategoryCode) -> Self {
        cat.abbreviation().to_string()
    }
}

impl TryFrom<String> for CategoryCode {
    type Error = String;

    fn try_from(abbr: String) -> Result<Self, Self::Error> {
        CategoryCode::from_abbreviation(&abbr)
            .ok_or_else(|| format!("unknown general category abbreviation '{abbr}'"))
    }
}

impl From<CategoryCode> for u8 {
    fn from(cat: CategoryCode) -> Self {
        cat.code()
    }
}
