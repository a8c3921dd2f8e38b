// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Orchestrates the corpus-inspection workflow:
//
//   Step 1: Load the TSV corpus        (Layer 4 - data)
//   Step 2: Summarise the vocabularies (Layer 3 - domain)
//   Step 3: Encode a few preview rows  (Layer 4 - data)
//   Step 4: Optionally persist vocabs  (Layer 6 - infra)
//
// The use case returns a plain report struct; printing it is
// the CLI layer's job.
//
// Reference: Rust Book §7 (Module System)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::dataset::TransliterationDataset;
use crate::infra::vocab_store::VocabStore;

// ─── Inspect Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    /// Path to the tab-separated corpus
    pub data_path: String,

    /// How many rows to encode for the preview section
    pub preview_rows: usize,

    /// How many top-frequency characters to report per side
    pub top_chars: usize,

    /// Where to persist the fitted vocabularies (None = don't)
    pub vocab_dir: Option<String>,
}

// ─── Report Types ─────────────────────────────────────────────────────────────
/// One preview row: the raw pair next to its encoding.
#[derive(Debug, Clone, Serialize)]
pub struct RowPreview {
    pub index: usize,
    pub src: String,
    pub tgt: String,
    pub source_ids: Vec<u32>,
    pub target_ids: Vec<u32>,
}

/// Everything the inspect command reports about a corpus.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub rows: usize,
    pub src_vocab_size: usize,
    pub tgt_vocab_size: usize,
    pub src_top_chars: Vec<(char, u64)>,
    pub tgt_top_chars: Vec<(char, u64)>,
    pub previews: Vec<RowPreview>,
}

// ─── InspectUseCase ───────────────────────────────────────────────────────────
pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    /// Load the corpus and build the report.
    pub fn execute(&self) -> Result<InspectReport> {
        let cfg = &self.config;

        // ── Step 1: Load and fit ──────────────────────────────────────────────
        tracing::info!("Inspecting corpus '{}'", cfg.data_path);
        let dataset = TransliterationDataset::load(&cfg.data_path)
            .with_context(|| format!("cannot load corpus '{}'", cfg.data_path))?;

        // ── Step 2: Vocabulary summary ────────────────────────────────────────
        let src_vocab = dataset.src_vocab();
        let tgt_vocab = dataset.tgt_vocab();

        // ── Step 3: Preview encodings ─────────────────────────────────────────
        let mut previews = Vec::new();
        for index in 0..cfg.preview_rows.min(dataset.length()) {
            let (source_ids, target_ids) = dataset.get(index)?;
            // record() cannot be None for an index get() accepted
            if let Some(pair) = dataset.record(index) {
                previews.push(RowPreview {
                    index,
                    src: pair.src.clone(),
                    tgt: pair.tgt.clone(),
                    source_ids,
                    target_ids,
                });
            }
        }

        let report = InspectReport {
            rows: dataset.length(),
            src_vocab_size: src_vocab.size(),
            tgt_vocab_size: tgt_vocab.size(),
            src_top_chars: src_vocab.most_frequent(cfg.top_chars),
            tgt_top_chars: tgt_vocab.most_frequent(cfg.top_chars),
            previews,
        };

        // ── Step 4: Optional persistence ──────────────────────────────────────
        if let Some(dir) = &cfg.vocab_dir {
            VocabStore::new(dir).save_pair(src_vocab, tgt_vocab)?;
        }

        Ok(report)
    }
}
