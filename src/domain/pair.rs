// ============================================================
// Layer 3 — Transliteration Pair Domain Type
// ============================================================
// One raw corpus record: a romanised input string and the
// native-script string it should transliterate to.
//
// Both fields are kept exactly as loaded — no trimming, no case
// folding, and an empty string is a legitimate value (a record
// with an absent field, not a missing record).
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A raw (source, target) string pair before any encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransliterationPair {
    /// The model input — romanised (e.g. Latin-script) text
    pub src: String,

    /// The desired output — native-script (e.g. Devanagari) text
    pub tgt: String,
}

impl TransliterationPair {
    /// Create a new pair. Takes impl Into<String> so callers can
    /// pass &str or String.
    pub fn new(src: impl Into<String>, tgt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            tgt: tgt.into(),
        }
    }
}
