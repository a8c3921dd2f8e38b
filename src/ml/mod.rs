// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// The data layer touches Burn only for the Dataset trait;
// everything tensor-shaped lives here.
//
// What's in this layer:
//
//   cell.rs   — The recurrent building blocks
//               A closed CellType enum {RNN, LSTM, GRU} and one
//               hand-composed Burn module per cell, sharing a
//               single state-passing contract
//
//   model.rs  — The seq2seq assembly
//               Encoder (embedding + recurrent stack),
//               Decoder (embedding + recurrent stack + linear
//               projection) and their Seq2Seq composition
//
// Deliberately NOT in this layer: loss functions, optimisers,
// training loops, greedy/beam decoding, evaluation metrics.
// This crate stops at the forward wiring.
//
// Reference: Burn Book §3 (Building Blocks)
//            Sutskever et al. (2014) Sequence to Sequence Learning

/// CellType enum and the recurrent cell modules
pub mod cell;

/// Encoder / Decoder / Seq2Seq assembly
pub mod model;
