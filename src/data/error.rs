// ============================================================
// Layer 4 — Data Errors
// ============================================================
// The two failure kinds the data layer can produce:
//
//   Load failures  — the TSV resource is missing, not valid
//                    UTF-8, or a row has fewer than 2 columns.
//                    Fatal, surfaced at construction, no retry.
//
//   Index failures — a get() call with an index outside
//                    [0, length()). Fatal for that call only.
//
// Unknown characters are NOT errors — the vocabulary handles
// them by substituting <unk> (see domain::vocab).
//
// Reference: Rust Book §9 (Error Handling)

use std::io;

use thiserror::Error;

/// Errors produced when loading a dataset or retrieving a row.
#[derive(Debug, Error)]
pub enum DataError {
    /// The TSV resource could not be opened at all.
    #[error("cannot open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The resource opened but could not be read as tab-separated
    /// UTF-8 text (includes invalid-UTF-8 content).
    #[error("cannot read '{path}' as tab-separated UTF-8: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// A row had fewer than the two required columns.
    /// `row` is the zero-based position in the file.
    #[error("row {row} has {found} column(s), at least 2 required")]
    MissingColumns { row: usize, found: usize },

    /// A get() call with an index outside [0, length()).
    #[error("index {index} out of range for dataset of length {length}")]
    IndexOutOfRange { index: usize, length: usize },
}

impl DataError {
    /// True for the load-time failure kinds (as opposed to the
    /// per-call index failure).
    pub fn is_load_error(&self) -> bool {
        !matches!(self, DataError::IndexOutOfRange { .. })
    }
}
