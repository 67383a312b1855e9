//! Call-scoped scratch buffer for classification codes.
//!
//! Sized once per batch (or per parallel chunk) to the longest input's byte
//! length, which bounds the code-point count of every input in it. Dropped
//! when the owning call returns.

use chartype_core::{
    category::CategoryCode, classifier::Classifier, decoder::Utf8Decoder, error::ClassifyError,
};
use std::mem::size_of;

pub(crate) struct ScratchBuffer {
    buf: Vec<CategoryCode>,
}

impl ScratchBuffer {
    /// Allocate room for `capacity` codes. A zero capacity allocates nothing.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, ClassifyError> {
        let mut buf = Vec::new();
        reserve(&mut buf, capacity)?;
        buf.resize(capacity, CategoryCode::Unassigned);
        Ok(Self { buf })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Classify every code point `decoder` yields into the buffer from offset
    /// 0, returning how many were written.
    ///
    /// The decoder's input must be no longer than `capacity()` bytes.
    pub(crate) fn fill(&mut self, decoder: &mut Utf8Decoder<'_>, classifier: &dyn Classifier) -> usize {
        let mut written = 0;
        for (slot, code_point) in self.buf.iter_mut().zip(decoder.by_ref()) {
            *slot = classifier.category_of(code_point);
            written += 1;
        }
        debug_assert!(decoder.next().is_none(), "scratch buffer smaller than input");
        written
    }

    /// Copy the first `n` codes into a freshly sized vector.
    pub(crate) fn copy_out(&self, n: usize) -> Result<Vec<CategoryCode>, ClassifyError> {
        let mut out = Vec::new();
        reserve(&mut out, n)?;
        out.extend_from_slice(&self.buf[..n]);
        Ok(out)
    }
}

/// Fallible exact reservation, reporting the requested size on failure.
pub(crate) fn reserve<T>(v: &mut Vec<T>, additional: usize) -> Result<(), ClassifyError> {
    v.try_reserve_exact(additional)
        .map_err(|_| ClassifyError::AllocationFailed {
            bytes: additional.saturating_mul(size_of::<T>()),
        })
}
