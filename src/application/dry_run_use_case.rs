// ============================================================
// Layer 2 — DryRunUseCase
// ============================================================
// A wiring check for the full pipeline:
//
//   Step 1: Load the TSV corpus            (Layer 4 - data)
//   Step 2: Assemble the Seq2Seq model     (Layer 5 - ml)
//           sized from the fitted vocabularies, with randomly
//           initialised weights on the NdArray backend
//   Step 3: Forward the first row through it
//
// No training, no decoding — the only point is to prove the
// shapes line up end to end before anyone burns GPU hours.

use anyhow::{ensure, Context, Result};
use burn::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::dataset::TransliterationDataset;
use crate::ml::cell::CellType;
use crate::ml::model::Seq2SeqConfig;

type WiringBackend = burn::backend::NdArray;

// ─── Dry-Run Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DryRunConfig {
    pub data_path: String,
    pub embedding_dim: usize,
    pub hidden_dim: usize,
    pub num_layers: usize,
    pub cell_type: CellType,
}

/// What the dry run observed.
#[derive(Debug, Clone, Serialize)]
pub struct DryRunReport {
    pub src_len: usize,
    pub tgt_len: usize,
    pub output_vocab_size: usize,
    /// [batch, tgt_len, output_vocab]
    pub logits_shape: [usize; 3],
}

// ─── DryRunUseCase ────────────────────────────────────────────────────────────
pub struct DryRunUseCase {
    config: DryRunConfig,
}

impl DryRunUseCase {
    pub fn new(config: DryRunConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<DryRunReport> {
        let cfg = &self.config;

        // ── Step 1: Load and fit ──────────────────────────────────────────────
        let dataset = TransliterationDataset::load(&cfg.data_path)
            .with_context(|| format!("cannot load corpus '{}'", cfg.data_path))?;
        ensure!(!dataset.is_empty(), "corpus '{}' has no rows", cfg.data_path);

        let (src_ids, tgt_ids) = dataset.get(0)?;
        ensure!(
            !src_ids.is_empty(),
            "row 0 of '{}' has an empty source field",
            cfg.data_path
        );

        // ── Step 2: Assemble the model ────────────────────────────────────────
        let device = burn::backend::ndarray::NdArrayDevice::default();
        let model = Seq2SeqConfig::new(
            dataset.src_vocab().size(),
            dataset.tgt_vocab().size(),
            cfg.embedding_dim,
            cfg.hidden_dim,
        )
        .with_num_layers(cfg.num_layers)
        .with_cell_type(cfg.cell_type)
        .init::<WiringBackend>(&device);

        tracing::info!(
            "Assembled {} seq2seq: vocabs {}→{}, embedding {}, hidden {}, {} layer(s)",
            cfg.cell_type,
            dataset.src_vocab().size(),
            dataset.tgt_vocab().size(),
            cfg.embedding_dim,
            cfg.hidden_dim,
            cfg.num_layers,
        );

        // ── Step 3: Forward the first row ─────────────────────────────────────
        let src = int_sequence(&src_ids, &device);
        let tgt = int_sequence(&tgt_ids, &device);
        let logits = model.forward(src, tgt);

        Ok(DryRunReport {
            src_len: src_ids.len(),
            tgt_len: tgt_ids.len(),
            output_vocab_size: dataset.tgt_vocab().size(),
            logits_shape: logits.dims(),
        })
    }
}

/// A [1, len] Int tensor from a row's index sequence.
fn int_sequence(
    ids: &[u32],
    device: &<WiringBackend as Backend>::Device,
) -> Tensor<WiringBackend, 2, Int> {
    let ids: Vec<i32> = ids.iter().map(|&id| id as i32).collect();
    Tensor::<WiringBackend, 1, Int>::from_ints(ids.as_slice(), device).unsqueeze::<2>()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_dry_run_shapes_line_up() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all("नमस्ते\tnamaste".as_bytes()).unwrap();
        f.flush().unwrap();

        let report = DryRunUseCase::new(DryRunConfig {
            data_path: f.path().to_str().unwrap().to_string(),
            embedding_dim: 8,
            hidden_dim: 16,
            num_layers: 1,
            cell_type: CellType::Gru,
        })
        .execute()
        .unwrap();

        assert_eq!(report.src_len, 7); // "namaste"
        assert_eq!(report.tgt_len, 6 + 2); // <sos> + 6 code points + <eos>
        assert_eq!(
            report.logits_shape,
            [1, report.tgt_len, report.output_vocab_size]
        );
    }

    #[test]
    fn test_dry_run_rejects_empty_corpus() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = DryRunUseCase::new(DryRunConfig {
            data_path: f.path().to_str().unwrap().to_string(),
            embedding_dim: 4,
            hidden_dim: 4,
            num_layers: 1,
            cell_type: CellType::Rnn,
        })
        .execute()
        .unwrap_err();
        assert!(err.to_string().contains("no rows"));
    }
}
