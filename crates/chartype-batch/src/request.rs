//! Batch classification request.

use crate::config::BatchConfig;
use chartype_core::decoder::MalformedPolicy;

/// Progress callback: `(processed, total)` strings.
pub type ProgressFn<'a> = dyn Fn(usize, usize) + Send + Sync + 'a;

/// The inputs of one batch call plus how to process them.
pub struct BatchRequest<'a> {
    /// UTF-8 inputs; `None` marks a missing entry
    pub inputs: Vec<Option<&'a [u8]>>,
    pub config: BatchConfig,
    /// Optional progress callback
    pub on_progress: Option<Box<ProgressFn<'a>>>,
}

impl<'a> BatchRequest<'a> {
    pub fn new(inputs: Vec<Option<&'a [u8]>>) -> Self {
        Self {
            inputs,
            config: BatchConfig::default(),
            on_progress: None,
        }
    }

    /// Borrow any string-like inputs (`&str`, `String`, `Vec<u8>`, ...).
    pub fn from_inputs<S: AsRef<[u8]>>(inputs: &'a [Option<S>]) -> Self {
        Self::new(
            inputs
                .iter()
                .map(|s| s.as_ref().map(|b| b.as_ref()))
                .collect(),
        )
    }

    pub fn config(mut self, config: BatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn malformed(mut self, policy: MalformedPolicy) -> Self {
        self.config.malformed = policy;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    pub fn chunk_size(mut self, n: usize) -> Self {
        self.config.chunk_size = n;
        self
    }

    pub fn concurrency(mut self, n: usize) -> Self {
        self.config.concurrency = n;
        self
    }

    pub fn on_progress<F: Fn(usize, usize) + Send + Sync + 'a>(mut self, f: F) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_inputs_keeps_missing_entries() {
        let inputs = [Some("A"), None, Some("")];
        let req = BatchRequest::from_inputs(&inputs);
        assert_eq!(req.inputs, vec![Some(&b"A"[..]), None, Some(&b""[..])]);
    }

    #[test]
    fn builder_sets_config() {
        let inputs: [Option<String>; 0] = [];
        let req = BatchRequest::from_inputs(&inputs)
            .parallel(true)
            .chunk_size(16)
            .malformed(MalformedPolicy::Replacement);
        assert!(req.config.parallel);
        assert_eq!(req.config.chunk_size, 16);
        assert_eq!(req.config.malformed, MalformedPolicy::Replacement);
    }
}
