// ============================================================
// Layer 6 — Vocabulary Store
// ============================================================
// Persists fitted vocabularies as JSON so the exact same
// character ↔ index mapping can be reused across processes.
// A model trained against one index assignment is useless with
// another, so the mapping must outlive the fitting run.
//
// File naming convention:
//   <dir>/
//     src_vocab.json   ← source-side (romanised) vocabulary
//     tgt_vocab.json   ← target-side (native script) vocabulary
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json crate documentation

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::domain::vocab::Vocab;

const SRC_VOCAB_FILE: &str = "src_vocab.json";
const TGT_VOCAB_FILE: &str = "tgt_vocab.json";

/// Saves and restores vocabulary pairs in a directory.
pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    /// Create a store rooted at `dir`. The directory is created
    /// on the first save, not here.
    pub fn new(dir: impl Into<String>) -> Self {
        Self {
            dir: PathBuf::from(dir.into()),
        }
    }

    /// Write both vocabularies as pretty-printed JSON.
    pub fn save_pair(&self, src_vocab: &Vocab, tgt_vocab: &Vocab) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("cannot create '{}'", self.dir.display()))?;
        self.save_one(src_vocab, SRC_VOCAB_FILE)?;
        self.save_one(tgt_vocab, TGT_VOCAB_FILE)?;
        tracing::info!("Saved vocabularies to '{}'", self.dir.display());
        Ok(())
    }

    /// Load both vocabularies back. Fails if either file is
    /// missing or not valid vocabulary JSON.
    pub fn load_pair(&self) -> Result<(Vocab, Vocab)> {
        Ok((
            self.load_one(SRC_VOCAB_FILE)?,
            self.load_one(TGT_VOCAB_FILE)?,
        ))
    }

    fn save_one(&self, vocab: &Vocab, file: &str) -> Result<()> {
        let path = self.dir.join(file);
        let json = serde_json::to_string_pretty(vocab)?;
        fs::write(&path, json)
            .with_context(|| format!("cannot write '{}'", path.display()))?;
        tracing::debug!("Wrote {} ({} symbols)", path.display(), vocab.size());
        Ok(())
    }

    fn load_one(&self, file: &str) -> Result<Vocab> {
        let path = self.dir.join(file);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("cannot read '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("'{}' is not a valid vocabulary file", path.display()))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabStore::new(dir.path().to_str().unwrap());

        let mut src = Vocab::new();
        src.add_sentence("namaste");
        let mut tgt = Vocab::new();
        tgt.add_sentence("नमस्ते");

        store.save_pair(&src, &tgt).unwrap();
        let (src_back, tgt_back) = store.load_pair().unwrap();

        assert_eq!(src_back.size(), src.size());
        assert_eq!(src_back.index_of('n'), src.index_of('n'));
        assert_eq!(src_back.frequency('a'), src.frequency('a'));
        assert_eq!(tgt_back.size(), tgt.size());
        assert_eq!(tgt_back.index_of('न'), tgt.index_of('न'));
    }

    #[test]
    fn test_load_from_missing_directory_fails() {
        let store = VocabStore::new("no/such/dir");
        assert!(store.load_pair().is_err());
    }
}
