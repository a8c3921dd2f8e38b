// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence concerns:
//
//   vocab_store.rs — Vocabulary persistence
//                    Writes the fitted source/target character
//                    vocabularies as JSON and loads them back,
//                    so the exact index assignment survives
//                    across processes. A checkpointed model is
//                    only meaningful together with the mapping
//                    it was trained against.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Vocabulary JSON persistence
pub mod vocab_store;
