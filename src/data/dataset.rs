// ============================================================
// Layer 4 — Paired-Sequence Dataset
// ============================================================
// Loads a transliteration corpus from a tab-separated file and
// serves index-encoded (input, output) sequences by position.
//
// On-disk format (no header, UTF-8, ≥ 2 columns per row):
//
//   column 0 — native script   → becomes `tgt` (desired output)
//   column 1 — romanised text  → becomes `src` (model input)
//
// The column swap is deliberate: the file is written
// target-first, the model consumes source-first. Columns beyond
// the first two are ignored; empty fields are valid empty
// strings, never a missing-value marker.
//
// Loading happens in two explicit phases:
//
//   read   — parse every row verbatim, in file order
//   fit    — ingest row by row into the two vocabularies,
//            source before target within each row
//
// so vocabulary growth order follows row order exactly. The
// dataset owns both fitted vocabularies afterwards and exposes
// them through read accessors — callers never hold a mutable
// handle, which keeps retrieval results stable.
//
// Retrieval recomputes the index encoding from vocabulary state
// on every call (nothing is memoized):
//
//   src_indices = encode(src)                  no control tokens
//   tgt_indices = [<sos>] + encode(tgt) + [<eos>]
//
// Padding and batching are NOT done here — that belongs to an
// external collation step in front of the training loop.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            csv crate documentation

use std::fs::File;
use std::path::Path;

use burn::data::dataset::Dataset;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::data::error::DataError;
use crate::domain::pair::TransliterationPair;
use crate::domain::vocab::{Vocab, EOS_IDX, SOS_IDX};

// ─── EncodedPair ──────────────────────────────────────────────────────────────
/// One index-encoded training example, as consumed by an
/// external collation/training step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedPair {
    /// Character indices of the source string — no control tokens
    pub source_ids: Vec<u32>,

    /// `[<sos>] + character indices of the target + [<eos>]`
    pub target_ids: Vec<u32>,
}

// ─── TransliterationDataset ───────────────────────────────────────────────────
/// An in-memory transliteration corpus with its two fitted
/// vocabularies.
#[derive(Debug)]
pub struct TransliterationDataset {
    records: Vec<TransliterationPair>,
    src_vocab: Vocab,
    tgt_vocab: Vocab,
}

impl TransliterationDataset {
    /// Load a TSV corpus and fit fresh vocabularies from it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        Self::load_with_vocabs(path, Vocab::new(), Vocab::new())
    }

    /// Load a TSV corpus, fitting into the given (possibly
    /// pre-populated) vocabularies. The dataset takes ownership
    /// of both; read them back via src_vocab()/tgt_vocab().
    pub fn load_with_vocabs(
        path: impl AsRef<Path>,
        mut src_vocab: Vocab,
        mut tgt_vocab: Vocab,
    ) -> Result<Self, DataError> {
        let records = read_records(path.as_ref())?;

        // One pass in file order; source before target within a
        // row, so index assignment is reproducible.
        for pair in &records {
            src_vocab.add_sentence(&pair.src);
            tgt_vocab.add_sentence(&pair.tgt);
        }

        tracing::info!(
            "Loaded {} pairs (src vocab: {}, tgt vocab: {})",
            records.len(),
            src_vocab.size(),
            tgt_vocab.size(),
        );

        Ok(Self::from_records(records, src_vocab, tgt_vocab))
    }

    /// Assemble a dataset from already-loaded records and
    /// already-fitted vocabularies. Performs no mutation — the
    /// fit phase is entirely the caller's choice here.
    pub fn from_records(
        records: Vec<TransliterationPair>,
        src_vocab: Vocab,
        tgt_vocab: Vocab,
    ) -> Self {
        Self {
            records,
            src_vocab,
            tgt_vocab,
        }
    }

    /// Total row count
    pub fn length(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encode row `index` from current vocabulary state.
    ///
    /// Recomputed on every call, not memoized. The index is a
    /// `usize`, so negative positions are unrepresentable; any
    /// index ≥ length() is an IndexOutOfRange error.
    pub fn get(&self, index: usize) -> Result<(Vec<u32>, Vec<u32>), DataError> {
        let pair = self
            .records
            .get(index)
            .ok_or(DataError::IndexOutOfRange {
                index,
                length: self.records.len(),
            })?;

        let source_ids = self.src_vocab.sentence_to_indices(&pair.src);

        let encoded_tgt = self.tgt_vocab.sentence_to_indices(&pair.tgt);
        let mut target_ids = Vec::with_capacity(encoded_tgt.len() + 2);
        target_ids.push(SOS_IDX);
        target_ids.extend(encoded_tgt);
        target_ids.push(EOS_IDX);

        Ok((source_ids, target_ids))
    }

    /// The raw record at `index`, if any
    pub fn record(&self, index: usize) -> Option<&TransliterationPair> {
        self.records.get(index)
    }

    /// The fitted source-side vocabulary
    pub fn src_vocab(&self) -> &Vocab {
        &self.src_vocab
    }

    /// The fitted target-side vocabulary
    pub fn tgt_vocab(&self) -> &Vocab {
        &self.tgt_vocab
    }
}

// ─── Burn Dataset Trait Implementation ────────────────────────────────────────
// This is what lets an external DataLoader + collation step pull
// samples by position. Out-of-range access maps to None, as the
// trait contract requires.
impl Dataset<EncodedPair> for TransliterationDataset {
    fn get(&self, index: usize) -> Option<EncodedPair> {
        TransliterationDataset::get(self, index)
            .ok()
            .map(|(source_ids, target_ids)| EncodedPair {
                source_ids,
                target_ids,
            })
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

// ─── TSV Reading ──────────────────────────────────────────────────────────────
/// Parse every row of a tab-separated file, verbatim and in file
/// order. Column 0 is the target script, column 1 the source;
/// extra columns are ignored.
fn read_records(path: &Path) -> Result<Vec<TransliterationPair>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.display().to_string(),
        source,
    })?;

    // flexible(true): rows may carry extra columns — we only
    // require the first two and check that ourselves.
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|source| DataError::Read {
            path: path.display().to_string(),
            source,
        })?;

        if record.len() < 2 {
            return Err(DataError::MissingColumns {
                row,
                found: record.len(),
            });
        }

        // Deliberate swap: file order is (target, source)
        let tgt = record.get(0).unwrap_or("");
        let src = record.get(1).unwrap_or("");
        records.push(TransliterationPair::new(src, tgt));
    }

    Ok(records)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vocab::UNK_IDX;
    use std::io::Write;

    fn write_tsv(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_three_row_corpus_end_to_end() {
        let f = write_tsv("a\tb\nc\td\ne\tf");
        let ds = TransliterationDataset::load(f.path()).unwrap();

        assert_eq!(ds.length(), 3);
        // 3 corpus chars + 4 reserved tokens on each side
        assert_eq!(ds.src_vocab().size(), 7);
        assert_eq!(ds.tgt_vocab().size(), 7);
        assert!(ds.src_vocab().contains('b'));
        assert!(ds.src_vocab().contains('d'));
        assert!(ds.src_vocab().contains('f'));
        assert!(ds.tgt_vocab().contains('a'));
        assert!(ds.tgt_vocab().contains('c'));
        assert!(ds.tgt_vocab().contains('e'));

        let (src_ids, tgt_ids) = ds.get(0).unwrap();
        assert_eq!(src_ids, vec![ds.src_vocab().index_of('b').unwrap()]);
        assert_eq!(
            tgt_ids,
            vec![SOS_IDX, ds.tgt_vocab().index_of('a').unwrap(), EOS_IDX]
        );
    }

    #[test]
    fn test_columns_are_swapped_into_src_and_tgt() {
        let f = write_tsv("नमस्ते\tnamaste");
        let ds = TransliterationDataset::load(f.path()).unwrap();

        let pair = ds.record(0).unwrap();
        assert_eq!(pair.src, "namaste");
        assert_eq!(pair.tgt, "नमस्ते");
    }

    #[test]
    fn test_vocab_growth_follows_row_order() {
        // Source chars of row 0 must get lower indices than
        // source chars first seen in row 1.
        let f = write_tsv("x\tab\ny\tcd");
        let ds = TransliterationDataset::load(f.path()).unwrap();

        assert_eq!(ds.src_vocab().index_of('a'), Some(4));
        assert_eq!(ds.src_vocab().index_of('b'), Some(5));
        assert_eq!(ds.src_vocab().index_of('c'), Some(6));
        assert_eq!(ds.src_vocab().index_of('d'), Some(7));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let f = write_tsv("a\tb\textra\tmore");
        let ds = TransliterationDataset::load(f.path()).unwrap();
        assert_eq!(ds.length(), 1);
        assert_eq!(ds.record(0).unwrap().src, "b");
    }

    #[test]
    fn test_empty_fields_become_empty_strings() {
        let f = write_tsv("\tb\na\t");
        let ds = TransliterationDataset::load(f.path()).unwrap();

        assert_eq!(ds.record(0).unwrap().tgt, "");
        assert_eq!(ds.record(1).unwrap().src, "");

        // Empty source encodes to an empty sequence; empty target
        // still gets the <sos>/<eos> wrapping.
        let (src_ids, tgt_ids) = ds.get(1).unwrap();
        assert!(src_ids.is_empty());
        assert_eq!(tgt_ids, vec![SOS_IDX, EOS_IDX]);
    }

    #[test]
    fn test_missing_file_is_an_open_error() {
        let err = TransliterationDataset::load("no/such/file.tsv").unwrap_err();
        assert!(matches!(err, DataError::Open { .. }));
        assert!(err.is_load_error());
    }

    #[test]
    fn test_single_column_row_is_rejected() {
        let f = write_tsv("a\tb\nlonely");
        let err = TransliterationDataset::load(f.path()).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingColumns { row: 1, found: 1 }
        ));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(&[0xff, 0xfe, b'\t', b'x']).unwrap();
        f.flush().unwrap();
        let err = TransliterationDataset::load(f.path()).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
    }

    #[test]
    fn test_get_out_of_range_is_an_index_error() {
        let f = write_tsv("a\tb");
        let ds = TransliterationDataset::load(f.path()).unwrap();
        let err = ds.get(ds.length()).unwrap_err();
        assert!(matches!(
            err,
            DataError::IndexOutOfRange { index: 1, length: 1 }
        ));
        assert!(!err.is_load_error());
    }

    #[test]
    fn test_unknown_source_characters_encode_to_unk() {
        let f = write_tsv("a\tb");
        let records = vec![TransliterationPair::new("bz", "a")];
        let fitted = TransliterationDataset::load(f.path()).unwrap();
        let ds = TransliterationDataset::from_records(
            records,
            fitted.src_vocab().clone(),
            fitted.tgt_vocab().clone(),
        );

        let (src_ids, _) = ds.get(0).unwrap();
        assert_eq!(src_ids[1], UNK_IDX);
    }

    #[test]
    fn test_pre_populated_vocabs_keep_their_indices() {
        let mut src_vocab = Vocab::new();
        src_vocab.add_sentence("b");
        let f = write_tsv("a\tbz");
        let ds =
            TransliterationDataset::load_with_vocabs(f.path(), src_vocab, Vocab::new()).unwrap();

        // 'b' keeps its pre-fit index, 'z' appends after it
        assert_eq!(ds.src_vocab().index_of('b'), Some(4));
        assert_eq!(ds.src_vocab().index_of('z'), Some(5));
    }

    #[test]
    fn test_burn_dataset_protocol() {
        let f = write_tsv("a\tb\nc\td");
        let ds = TransliterationDataset::load(f.path()).unwrap();

        assert_eq!(Dataset::len(&ds), 2);
        let sample: EncodedPair = Dataset::get(&ds, 0).unwrap();
        assert_eq!(sample.target_ids.first(), Some(&SOS_IDX));
        assert_eq!(sample.target_ids.last(), Some(&EOS_IDX));
        assert!(Dataset::get(&ds, 99).is_none());
    }
}
