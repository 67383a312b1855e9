//! Permissive UTF-8 decoder.
//!
//! `Utf8Decoder` walks a byte buffer one encoded unit at a time and yields
//! exactly one code point per unit. Ill-formed input never stops the walk:
//! the maximal subpart of an ill-formed sequence (the longest prefix that
//! could still have started a well-formed one, at least one byte) is consumed
//! and replaced by a single substitute value chosen by [`MalformedPolicy`].
//!
//! Well-formedness follows Unicode Table 3-7, so overlong forms, encoded
//! surrogates and values above U+10FFFF are all treated as ill-formed.

use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// Value yielded for an ill-formed unit under [`MalformedPolicy::Sentinel`].
///
/// Bit-identical to ICU's `U_SENTINEL` (-1). It is not a Unicode scalar
/// value, so every classifier maps it to `Unassigned`.
pub const MALFORMED_SENTINEL: u32 = u32::MAX;

/// U+FFFD REPLACEMENT CHARACTER.
const REPLACEMENT: u32 = 0xFFFD;

/// What the decoder yields in place of an ill-formed unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Yield [`MALFORMED_SENTINEL`], classified as `Unassigned` (ICU `U8_NEXT`).
    #[default]
    Sentinel,
    /// Yield U+FFFD, classified as `OtherSymbol` (ICU `U8_NEXT_OR_FFFD`).
    Replacement,
}

impl MalformedPolicy {
    /// The name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            MalformedPolicy::Sentinel => "sentinel",
            MalformedPolicy::Replacement => "replacement",
        }
    }

    pub fn substitute(self) -> u32 {
        match self {
            MalformedPolicy::Sentinel => MALFORMED_SENTINEL,
            MalformedPolicy::Replacement => REPLACEMENT,
        }
    }
}

/// Iterator over the code points of a UTF-8 byte buffer.
#[derive(Debug, Clone)]
pub struct Utf8Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
    policy: MalformedPolicy,
    malformed: usize,
}

impl<'a> Utf8Decoder<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_policy(bytes, MalformedPolicy::default())
    }

    pub fn with_policy(bytes: &'a [u8], policy: MalformedPolicy) -> Self {
        Self {
            bytes,
            pos: 0,
            policy,
            malformed: 0,
        }
    }

    /// Byte offset of the next unit to decode.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of ill-formed units substituted so far.
    pub fn malformed_count(&self) -> usize {
        self.malformed
    }
}

impl Iterator for Utf8Decoder<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.pos >= self.bytes.len() {
            return None;
        }
        let (decoded, consumed) = decode_unit(&self.bytes[self.pos..]);
        self.pos += consumed;
        Some(match decoded {
            Some(cp) => cp,
            None => {
                self.malformed += 1;
                self.policy.substitute()
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.pos;
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for Utf8Decoder<'_> {}

/// Decode one unit from the front of a non-empty `bytes`.
///
/// Returns the scalar value (or `None` if ill-formed) and the number of
/// bytes consumed, which is always in `1..=4`.
fn decode_unit(bytes: &[u8]) -> (Option<u32>, usize) {
    let lead = bytes[0];
    // (total length, allowed range of the second byte, payload bits of lead)
    let (len, second_lo, second_hi, init) = match lead {
        0x00..=0x7F => return (Some(lead as u32), 1),
        0xC2..=0xDF => (2, 0x80, 0xBF, (lead & 0x1F) as u32),
        0xE0 => (3, 0xA0, 0xBF, (lead & 0x0F) as u32),
        0xE1..=0xEC | 0xEE..=0xEF => (3, 0x80, 0xBF, (lead & 0x0F) as u32),
        0xED => (3, 0x80, 0x9F, (lead & 0x0F) as u32),
        0xF0 => (4, 0x90, 0xBF, (lead & 0x07) as u32),
        0xF1..=0xF3 => (4, 0x80, 0xBF, (lead & 0x07) as u32),
        0xF4 => (4, 0x80, 0x8F, (lead & 0x07) as u32),
        // stray continuation, C0/C1 overlong leads, F5..FF
        _ => return (None, 1),
    };

    let mut cp = init;
    for i in 1..len {
        let Some(&b) = bytes.get(i) else {
            return (None, i);
        };
        let (lo, hi) = if i == 1 { (second_lo, second_hi) } else { (0x80, 0xBF) };
        if b < lo || b > hi {
            return (None, i);
        }
        cp = (cp << 6) | (b & 0x3F) as u32;
    }
    (Some(cp), len)
}
