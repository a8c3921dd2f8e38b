// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// specific goal per use case.
//
// Rules for this layer:
//   - No tensor math here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file parsing here (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Corpus statistics, vocabulary report, optional persistence
pub mod inspect_use_case;

// Index encoding of a single row
pub mod encode_use_case;

// Model assembly + one forward pass as a wiring check
pub mod dry_run_use_case;
