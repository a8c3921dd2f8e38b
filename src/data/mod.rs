// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer takes a raw corpus file and turns it into
// index-encoded sequences the model layer can consume.
//
// The pipeline flows in this order:
//
//   corpus.tsv  (native-script \t romanised, one pair per row)
//       │
//       ▼
//   read_records       → raw (src, tgt) string pairs, columns
//       │                 swapped into model orientation
//       ▼
//   vocabulary fitting → one pass over the rows builds both
//       │                 character vocabularies (Layer 3)
//       ▼
//   TransliterationDataset → implements Burn's Dataset trait,
//                            serves (src_indices, tgt_indices)
//                            with <sos>/<eos> wrapping
//
// Deliberately absent: padding and batching. Collating
// variable-length sequences into fixed-shape batches is an
// external step in front of a training loop, not this layer's
// concern.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Typed load/index error kinds
pub mod error;

/// TSV corpus loading and index-encoded retrieval
pub mod dataset;
