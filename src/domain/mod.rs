// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types at the heart of the pipeline.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs and their methods
//
// Why keep this layer pure?
//   - Easy to unit test (no backend, no files)
//   - The vocabulary semantics are the one piece of hand-written
//     logic in the whole pipeline — they deserve to live where
//     nothing can obscure them
//
// Reference: Rust Book §5 (Structs), §7 (Modules)

/// Character ↔ index vocabulary with reserved control tokens
pub mod vocab;

/// A raw (source, target) corpus record
pub mod pair;
