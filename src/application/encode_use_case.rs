// ============================================================
// Layer 2 — EncodeUseCase
// ============================================================
// Loads a corpus and returns the index encoding of exactly one
// row — the retrieval contract a training loop would consume,
// exposed for eyeballing:
//
//   source_ids  — no control tokens
//   target_ids  — always wrapped in <sos> … <eos>
//
// An out-of-range index surfaces the data layer's typed
// index-error unchanged.

use anyhow::{Context, Result};

use crate::data::dataset::{EncodedPair, TransliterationDataset};

pub struct EncodeUseCase {
    data_path: String,
}

impl EncodeUseCase {
    pub fn new(data_path: impl Into<String>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Encode row `index` of the corpus.
    pub fn execute(&self, index: usize) -> Result<EncodedPair> {
        let dataset = TransliterationDataset::load(&self.data_path)
            .with_context(|| format!("cannot load corpus '{}'", self.data_path))?;

        let (source_ids, target_ids) = dataset.get(index)?;
        Ok(EncodedPair {
            source_ids,
            target_ids,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::DataError;
    use std::io::Write;

    fn corpus() -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all("ab\txy".as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_encode_wraps_target_with_control_tokens() {
        let f = corpus();
        let pair = EncodeUseCase::new(f.path().to_str().unwrap())
            .execute(0)
            .unwrap();
        assert_eq!(pair.source_ids.len(), 2);
        // <sos> a b <eos>
        assert_eq!(pair.target_ids.len(), 4);
    }

    #[test]
    fn test_out_of_range_surfaces_index_error_kind() {
        let f = corpus();
        let err = EncodeUseCase::new(f.path().to_str().unwrap())
            .execute(5)
            .unwrap_err();
        let data_err = err.downcast_ref::<DataError>().unwrap();
        assert!(matches!(data_err, DataError::IndexOutOfRange { .. }));
    }
}
