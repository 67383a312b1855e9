//! `BatchEngine` — decodes and classifies a batch of possibly-missing strings.

use crate::request::{BatchRequest, ProgressFn};
use crate::result::{BatchResult, BatchStats, CharTypes};
use crate::scratch::{reserve, ScratchBuffer};
use chartype_core::{
    classifier::{Classifier, UnicodeClassifier},
    decoder::{MalformedPolicy, Utf8Decoder},
    error::{BatchError, ClassifyError},
};
use rayon::prelude::*;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use tracing::{debug, info, warn};

/// Batch classification engine.
///
/// Cheap to clone; the classifier is shared.
#[derive(Clone)]
pub struct BatchEngine {
    classifier: Arc<dyn Classifier>,
}

impl Default for BatchEngine {
    fn default() -> Self {
        Self::new(Arc::new(UnicodeClassifier::new()))
    }
}

impl BatchEngine {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Execute a batch classification request.
    ///
    /// Returns `Ok(None)` for a request with no inputs. Otherwise the result
    /// holds exactly one entry per input, in input order.
    pub fn classify(&self, req: BatchRequest<'_>) -> Result<Option<BatchResult>, BatchError> {
        if req.inputs.is_empty() {
            return Ok(None);
        }
        req.config.validate()?;

        let total_input = req.inputs.len();
        info!(
            "BatchEngine: classifying {} strings (parallel={}, malformed={:?})",
            total_input, req.config.parallel, req.config.malformed
        );

        let result = if req.config.parallel {
            self.classify_parallel(&req)?
        } else {
            let (results, stats) = classify_chunk(
                self.classifier.as_ref(),
                &req.inputs,
                req.config.malformed,
                req.on_progress.as_deref(),
            )?;
            BatchResult { results, stats }
        };

        if result.stats.malformed > 0 {
            warn!(
                "BatchEngine: substituted {} ill-formed UTF-8 sequences",
                result.stats.malformed
            );
        }
        info!(
            "BatchEngine: complete — {} strings, {} missing, {} code points",
            result.stats.total_input, result.stats.missing, result.stats.code_points
        );

        Ok(Some(result))
    }

    /// Split the inputs into `chunk_size` chunks and classify them on the
    /// Rayon pool. Each chunk owns its own scratch buffer.
    fn classify_parallel(&self, req: &BatchRequest<'_>) -> Result<BatchResult, BatchError> {
        let chunk_size = req.config.chunk_size;
        let policy = req.config.malformed;
        let total = req.inputs.len();
        let processed = AtomicUsize::new(0);
        let classifier = self.classifier.as_ref();

        let run = || {
            req.inputs
                .par_chunks(chunk_size)
                .enumerate()
                .map(|(idx, chunk)| {
                    let offset = idx * chunk_size;
                    let out = classify_chunk(classifier, chunk, policy, None)
                        .map_err(|source| BatchError::ChunkFailed { offset, source })?;
                    let done = processed.fetch_add(chunk.len(), Ordering::Relaxed) + chunk.len();
                    debug!("BatchEngine: chunk at {} done ({}/{})", offset, done, total);
                    if let Some(cb) = &req.on_progress {
                        cb(done, total);
                    }
                    Ok(out)
                })
                .collect::<Result<Vec<_>, BatchError>>()
        };

        let chunks = if req.config.concurrency > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(req.config.concurrency)
                .build()
                .map_err(|e| BatchError::ThreadPool(e.to_string()))?;
            pool.install(run)?
        } else {
            run()?
        };

        let mut results = Vec::new();
        reserve(&mut results, total)?;
        let mut stats = BatchStats::default();
        for (chunk_results, chunk_stats) in chunks {
            results.extend(chunk_results);
            stats.merge(&chunk_stats);
        }
        Ok(BatchResult { results, stats })
    }
}

/// Classify `inputs` sequentially with one scratch buffer shared by all of
/// them. Used for the whole batch in sequential mode and per chunk in
/// parallel mode.
fn classify_chunk(
    classifier: &dyn Classifier,
    inputs: &[Option<&[u8]>],
    policy: MalformedPolicy,
    progress: Option<&ProgressFn<'_>>,
) -> Result<(Vec<CharTypes>, BatchStats), ClassifyError> {
    // No input has more code points than bytes.
    let bufsize = inputs.iter().flatten().map(|s| s.len()).max().unwrap_or(0);
    let mut scratch = ScratchBuffer::with_capacity(bufsize)?;
    debug!(
        "BatchEngine: scratch buffer of {} codes for {} strings",
        scratch.capacity(),
        inputs.len()
    );

    let mut results = Vec::new();
    reserve(&mut results, inputs.len())?;
    let mut stats = BatchStats {
        total_input: inputs.len(),
        ..BatchStats::default()
    };

    for (idx, input) in inputs.iter().enumerate() {
        match input {
            None => {
                stats.missing += 1;
                results.push(CharTypes::Missing);
            }
            Some(bytes) => {
                let mut decoder = Utf8Decoder::with_policy(bytes, policy);
                let n = scratch.fill(&mut decoder, classifier);
                stats.code_points += n;
                stats.malformed += decoder.malformed_count();
                results.push(CharTypes::Codes(scratch.copy_out(n)?));
            }
        }

        if let Some(cb) = progress {
            cb(idx + 1, inputs.len());
        }
    }

    Ok((results, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartype_core::category::CategoryCode;
    use std::sync::Mutex;

    /// Every ASCII code point is `OtherLetter`, everything else `OtherSymbol`.
    fn stub_engine() -> BatchEngine {
        BatchEngine::new(Arc::new(|cp: u32| {
            if cp < 0x80 {
                CategoryCode::OtherLetter
            } else {
                CategoryCode::OtherSymbol
            }
        }))
    }

    #[test]
    fn empty_batch_is_no_result() {
        let inputs: Vec<Option<&str>> = vec![];
        let out = stub_engine().classify(BatchRequest::from_inputs(&inputs)).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn empty_batch_skips_config_validation() {
        let inputs: Vec<Option<&str>> = vec![];
        let req = BatchRequest::from_inputs(&inputs).chunk_size(0);
        assert!(stub_engine().classify(req).unwrap().is_none());
    }

    #[test]
    fn all_missing_batch() {
        let inputs: Vec<Option<&str>> = vec![None, None];
        let out = stub_engine()
            .classify(BatchRequest::from_inputs(&inputs))
            .unwrap()
            .unwrap();
        assert_eq!(out.results, vec![CharTypes::Missing, CharTypes::Missing]);
        assert_eq!(out.stats.missing, 2);
        assert_eq!(out.stats.code_points, 0);
    }

    #[test]
    fn stub_classifier_is_used() {
        let inputs = [Some("aé")];
        let out = stub_engine()
            .classify(BatchRequest::from_inputs(&inputs))
            .unwrap()
            .unwrap();
        assert_eq!(
            out.results[0],
            CharTypes::Codes(vec![CategoryCode::OtherLetter, CategoryCode::OtherSymbol])
        );
    }

    #[test]
    fn stats_count_code_points_and_malformed() {
        let inputs = [Some(b"ab".as_slice()), Some(b"\xFF\xC3".as_slice()), None];
        let out = stub_engine()
            .classify(BatchRequest::from_inputs(&inputs))
            .unwrap()
            .unwrap();
        assert_eq!(
            out.stats,
            BatchStats { total_input: 3, missing: 1, code_points: 4, malformed: 2 }
        );
    }

    #[test]
    fn invalid_config_rejected() {
        let inputs = [Some("x")];
        let err = stub_engine()
            .classify(BatchRequest::from_inputs(&inputs).chunk_size(0))
            .unwrap_err();
        assert!(matches!(err, BatchError::Config(_)));
    }

    #[test]
    fn sequential_progress_reports_each_string() {
        let seen = Mutex::new(Vec::new());
        let inputs = [Some("a"), None, Some("b")];
        stub_engine()
            .classify(
                BatchRequest::from_inputs(&inputs)
                    .on_progress(|done, total| seen.lock().unwrap().push((done, total))),
            )
            .unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let owned: Vec<Option<String>> = (0..257)
            .map(|i| match i % 5 {
                0 => None,
                1 => Some(String::new()),
                2 => Some("é".repeat(i)),
                _ => Some("x".repeat(i % 13)),
            })
            .collect();
        let engine = stub_engine();
        let seq = engine
            .classify(BatchRequest::from_inputs(&owned))
            .unwrap()
            .unwrap();
        let par = engine
            .classify(BatchRequest::from_inputs(&owned).parallel(true).chunk_size(10))
            .unwrap()
            .unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn parallel_with_dedicated_pool_reports_all_progress() {
        let last = AtomicUsize::new(0);
        let owned: Vec<Option<String>> = (0..40).map(|i| Some(i.to_string())).collect();
        let out = stub_engine()
            .classify(
                BatchRequest::from_inputs(&owned)
                    .parallel(true)
                    .chunk_size(7)
                    .concurrency(2)
                    .on_progress(|done, _| {
                        last.fetch_max(done, Ordering::Relaxed);
                    }),
            )
            .unwrap()
            .unwrap();
        assert_eq!(out.len(), 40);
        assert_eq!(last.load(Ordering::Relaxed), 40);
    }
}
