//! The `Classifier` capability: one code point in, one category out.
//!
//! The batch engine only ever talks to a `Classifier`, so tests can swap in a
//! stub table while production builds use [`UnicodeClassifier`], backed by the
//! ICU4X compiled Unicode character database.

use crate::category::CategoryCode;
use icu_properties::{props::GeneralCategory, CodePointMapData, CodePointMapDataBorrowed};

/// Maps a code point to its general category.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so one classifier can be shared by
/// every Rayon worker of a parallel batch.
pub trait Classifier: Send + Sync {
    /// Total function: values above U+10FFFF (including the decoder's
    /// malformed sentinel) must map to `Unassigned`. Surrogate code points
    /// are classified like any other code point.
    fn category_of(&self, code_point: u32) -> CategoryCode;
}

/// Blanket impl so closures can be used as classifiers.
impl<F: Fn(u32) -> CategoryCode + Send + Sync> Classifier for F {
    fn category_of(&self, code_point: u32) -> CategoryCode {
        self(code_point)
    }
}

/// Production classifier over ICU4X's compiled general-category data.
#[derive(Clone, Copy)]
pub struct UnicodeClassifier {
    map: CodePointMapDataBorrowed<'static, GeneralCategory>,
}

impl UnicodeClassifier {
    pub fn new() -> Self {
        Self {
            map: CodePointMapData::<GeneralCategory>::new(),
        }
    }
}

impl std::fmt::Debug for UnicodeClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnicodeClassifier").finish_non_exhaustive()
    }
}

impl Default for UnicodeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for UnicodeClassifier {
    fn category_of(&self, code_point: u32) -> CategoryCode {
        // out-of-range values (the malformed sentinel included) read as Unassigned
        self.map.get32(code_point).into()
    }
}

impl From<GeneralCategory> for CategoryCode {
    #[allow(unreachable_patterns)]
    fn from(gc: GeneralCategory) -> Self {
        match gc {
            GeneralCategory::Unassigned => CategoryCode::Unassigned,
            GeneralCategory::UppercaseLetter => CategoryCode::UppercaseLetter,
            GeneralCategory::LowercaseLetter => CategoryCode::LowercaseLetter,
            GeneralCategory::TitlecaseLetter => CategoryCode::TitlecaseLetter,
            GeneralCategory::ModifierLetter => CategoryCode::ModifierLetter,
            GeneralCategory::OtherLetter => CategoryCode::OtherLetter,
            GeneralCategory::NonspacingMark => CategoryCode::NonSpacingMark,
            GeneralCategory::EnclosingMark => CategoryCode::EnclosingMark,
            GeneralCategory::SpacingMark => CategoryCode::CombiningSpacingMark,
            GeneralCategory::DecimalNumber => CategoryCode::DecimalDigitNumber,
            GeneralCategory::LetterNumber => CategoryCode::LetterNumber,
            GeneralCategory::OtherNumber => CategoryCode::OtherNumber,
            GeneralCategory::SpaceSeparator => CategoryCode::SpaceSeparator,
            GeneralCategory::LineSeparator => CategoryCode::LineSeparator,
            GeneralCategory::ParagraphSeparator => CategoryCode::ParagraphSeparator,
            GeneralCategory::Control => CategoryCode::ControlChar,
            GeneralCategory::Format => CategoryCode::FormatChar,
            GeneralCategory::PrivateUse => CategoryCode::PrivateUseChar,
            GeneralCategory::Surrogate => CategoryCode::Surrogate,
            GeneralCategory::DashPunctuation => CategoryCode::DashPunctuation,
            GeneralCategory::OpenPunctuation => CategoryCode::StartPunctuation,
            GeneralCategory::ClosePunctuation => CategoryCode::EndPunctuation,
            GeneralCategory::ConnectorPunctuation => CategoryCode::ConnectorPunctuation,
            GeneralCategory::OtherPunctuation => CategoryCode::OtherPunctuation,
            GeneralCategory::MathSymbol => CategoryCode::MathSymbol,
            GeneralCategory::CurrencySymbol => CategoryCode::CurrencySymbol,
            GeneralCategory::ModifierSymbol => CategoryCode::ModifierSymbol,
            GeneralCategory::OtherSymbol => CategoryCode::OtherSymbol,
            GeneralCategory::InitialPunctuation => CategoryCode::InitialPunctuation,
            GeneralCategory::FinalPunctuation => CategoryCode::FinalPunctuation,
            _ => CategoryCode::Unassigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::MALFORMED_SENTINEL;

    #[test]
    fn ascii_categories() {
        let c = UnicodeClassifier::new();
        assert_eq!(c.category_of('A' as u32), CategoryCode::UppercaseLetter);
        assert_eq!(c.category_of('a' as u32), CategoryCode::LowercaseLetter);
        assert_eq!(c.category_of('1' as u32), CategoryCode::DecimalDigitNumber);
        assert_eq!(c.category_of(' ' as u32), CategoryCode::SpaceSeparator);
        assert_eq!(c.category_of('\n' as u32), CategoryCode::ControlChar);
        assert_eq!(c.category_of('(' as u32), CategoryCode::StartPunctuation);
        assert_eq!(c.category_of(')' as u32), CategoryCode::EndPunctuation);
        assert_eq!(c.category_of('$' as u32), CategoryCode::CurrencySymbol);
        assert_eq!(c.category_of('+' as u32), CategoryCode::MathSymbol);
        assert_eq!(c.category_of('_' as u32), CategoryCode::ConnectorPunctuation);
    }

    #[test]
    fn non_ascii_categories() {
        let c = UnicodeClassifier::new();
        assert_eq!(c.category_of(0x01C5), CategoryCode::TitlecaseLetter); // ǅ
        assert_eq!(c.category_of(0x4E2D), CategoryCode::OtherLetter); // 中
        assert_eq!(c.category_of(0x0301), CategoryCode::NonSpacingMark);
        assert_eq!(c.category_of(0x2028), CategoryCode::LineSeparator);
        assert_eq!(c.category_of(0x2029), CategoryCode::ParagraphSeparator);
        assert_eq!(c.category_of(0x00AB), CategoryCode::InitialPunctuation); // «
        assert_eq!(c.category_of(0x00BB), CategoryCode::FinalPunctuation); // »
        assert_eq!(c.category_of(0xE000), CategoryCode::PrivateUseChar);
        assert_eq!(c.category_of(0xFFFD), CategoryCode::OtherSymbol);
    }

    #[test]
    fn out_of_range_values_are_unassigned() {
        let c = UnicodeClassifier::new();
        assert_eq!(c.category_of(MALFORMED_SENTINEL), CategoryCode::Unassigned);
        assert_eq!(c.category_of(0x110000), CategoryCode::Unassigned);
    }

    #[test]
    fn surrogate_code_points_are_surrogates() {
        let c = UnicodeClassifier::new();
        assert_eq!(c.category_of(0xD800), CategoryCode::Surrogate);
        assert_eq!(c.category_of(0xDBFF), CategoryCode::Surrogate);
        assert_eq!(c.category_of(0xDFFF), CategoryCode::Surrogate);
        assert_eq!(c.category_of(0xD7A3), CategoryCode::OtherLetter); // last Hangul syllable
    }

    #[test]
    fn closure_as_classifier() {
        let stub = |cp: u32| {
            if cp < 0x80 {
                CategoryCode::OtherLetter
            } else {
                CategoryCode::Unassigned
            }
        };
        assert_eq!(stub.category_of(0x41), CategoryCode::OtherLetter);
        assert_eq!(stub.category_of(0x4E2D), CategoryCode::Unassigned);
    }
}
