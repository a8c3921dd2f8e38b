// ============================================================
// Layer 3 — Character Vocabulary
// ============================================================
// Maintains a bijection between characters and dense integer
// indices for one side (source or target) of the corpus.
//
// Index layout:
//   0 = <pad>   padding filler for batched sequences
//   1 = <sos>   start-of-sequence marker
//   2 = <eos>   end-of-sequence marker
//   3 = <unk>   substitute for anything never seen before
//   4.. = corpus characters, in first-seen order
//
// The four reserved tokens are fixed at construction and are
// never removed or reassigned. Corpus characters only ever get
// appended, so the vocabulary grows monotonically and an index
// handed out once stays valid forever.
//
// Unknown characters and unknown indices never raise — they
// degrade to the <unk> sentinel. The model can then learn a
// single "anything else" embedding instead of crashing on a
// stray character at inference time.
//
// Reference: Sutskever et al. (2014) Sequence to Sequence Learning
//            Rust Book §8 (HashMaps)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Literal text of the padding token
pub const PAD_TOKEN: &str = "<pad>";
/// Literal text of the start-of-sequence token
pub const SOS_TOKEN: &str = "<sos>";
/// Literal text of the end-of-sequence token
pub const EOS_TOKEN: &str = "<eos>";
/// Literal text of the unknown-character token
pub const UNK_TOKEN: &str = "<unk>";

/// Fixed index of `<pad>`
pub const PAD_IDX: u32 = 0;
/// Fixed index of `<sos>`
pub const SOS_IDX: u32 = 1;
/// Fixed index of `<eos>`
pub const EOS_IDX: u32 = 2;
/// Fixed index of `<unk>`
pub const UNK_IDX: u32 = 3;

/// The reserved tokens, in index order
pub const RESERVED_TOKENS: [&str; 4] = [PAD_TOKEN, SOS_TOKEN, EOS_TOKEN, UNK_TOKEN];

// ─── Vocab ────────────────────────────────────────────────────────────────────
/// A character ↔ index bijection with per-character frequencies.
///
/// Invariant: `index_to_char[char_to_index[c]] == c` for every
/// known character `c`, after every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocab {
    /// Forward mapping — corpus characters only, reserved tokens
    /// live outside this map at indices 0..4
    char_to_index: HashMap<char, u32>,

    /// Inverse of char_to_index
    index_to_char: HashMap<u32, char>,

    /// Occurrence counts for corpus characters seen via add_sentence.
    /// Reserved tokens are never counted here.
    frequencies: HashMap<char, u64>,
}

impl Vocab {
    /// Create a vocabulary containing only the four reserved tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest every character of `sentence`, left to right.
    ///
    /// Unseen characters are assigned the next unused index
    /// (= current size) and start with frequency 1; already-known
    /// characters just have their frequency incremented.
    /// Never fails, never reassigns an existing index.
    pub fn add_sentence(&mut self, sentence: &str) {
        for ch in sentence.chars() {
            if self.char_to_index.contains_key(&ch) {
                *self.frequencies.entry(ch).or_insert(0) += 1;
            } else {
                let index = self.size() as u32;
                self.char_to_index.insert(ch, index);
                self.index_to_char.insert(index, ch);
                self.frequencies.insert(ch, 1);
            }
        }
    }

    /// Encode a string as one index per character.
    ///
    /// Characters not in the vocabulary map to the `<unk>` index.
    /// Pure read — never mutates the vocabulary.
    pub fn sentence_to_indices(&self, sentence: &str) -> Vec<u32> {
        sentence
            .chars()
            .map(|ch| self.char_to_index.get(&ch).copied().unwrap_or(UNK_IDX))
            .collect()
    }

    /// Decode a sequence of indices back to text.
    ///
    /// Only the `<eos>` index is filtered out. `<pad>` and `<sos>`
    /// render as their literal token text — the asymmetry is
    /// intentional and matches what a greedy decoding loop expects:
    /// everything before the end marker is kept verbatim.
    /// Indices with no known mapping render as the `<unk>` text.
    pub fn indices_to_sentence(&self, indices: &[u32]) -> String {
        let mut out = String::new();
        for &index in indices {
            match index {
                EOS_IDX => {}
                PAD_IDX => out.push_str(PAD_TOKEN),
                SOS_IDX => out.push_str(SOS_TOKEN),
                UNK_IDX => out.push_str(UNK_TOKEN),
                _ => match self.index_to_char.get(&index) {
                    Some(&ch) => out.push(ch),
                    None => out.push_str(UNK_TOKEN),
                },
            }
        }
        out
    }

    /// Number of distinct known symbols, reserved tokens included.
    /// Always at least 4.
    pub fn size(&self) -> usize {
        RESERVED_TOKENS.len() + self.char_to_index.len()
    }

    /// True if `ch` has been seen via add_sentence
    pub fn contains(&self, ch: char) -> bool {
        self.char_to_index.contains_key(&ch)
    }

    /// Index of a known corpus character, None otherwise
    pub fn index_of(&self, ch: char) -> Option<u32> {
        self.char_to_index.get(&ch).copied()
    }

    /// How many times `ch` was ingested (0 for unseen characters)
    pub fn frequency(&self, ch: char) -> u64 {
        self.frequencies.get(&ch).copied().unwrap_or(0)
    }

    /// The `n` most frequent corpus characters, descending.
    /// Ties break on the character itself so reports are stable.
    pub fn most_frequent(&self, n: usize) -> Vec<(char, u64)> {
        let mut entries: Vec<(char, u64)> = self
            .frequencies
            .iter()
            .map(|(&ch, &count)| (ch, count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vocab_has_only_reserved_tokens() {
        let v = Vocab::new();
        assert_eq!(v.size(), 4);
    }

    #[test]
    fn test_add_sentence_assigns_indices_in_first_seen_order() {
        let mut v = Vocab::new();
        v.add_sentence("abca");
        assert_eq!(v.index_of('a'), Some(4));
        assert_eq!(v.index_of('b'), Some(5));
        assert_eq!(v.index_of('c'), Some(6));
        assert_eq!(v.size(), 7);
    }

    #[test]
    fn test_add_sentence_twice_keeps_size_but_accumulates_frequency() {
        let mut v = Vocab::new();
        v.add_sentence("abca");
        assert_eq!(v.frequency('a'), 2);
        assert_eq!(v.frequency('b'), 1);

        let size_before = v.size();
        v.add_sentence("abca");
        assert_eq!(v.size(), size_before);
        // Each occurrence counts again — 'a' appears twice per call
        assert_eq!(v.frequency('a'), 4);
        assert_eq!(v.frequency('b'), 2);
    }

    #[test]
    fn test_indices_stay_in_range() {
        let mut v = Vocab::new();
        v.add_sentence("namaste");
        for ch in "namaste".chars() {
            let idx = v.index_of(ch).unwrap();
            assert!((idx as usize) < v.size());
        }
    }

    #[test]
    fn test_sentence_to_indices_substitutes_unk() {
        let mut v = Vocab::new();
        v.add_sentence("ab");
        assert_eq!(v.sentence_to_indices("abz"), vec![4, 5, UNK_IDX]);
    }

    #[test]
    fn test_sentence_to_indices_never_invents_indices() {
        let mut v = Vocab::new();
        v.add_sentence("xy");
        for idx in v.sentence_to_indices("xyzzy?!") {
            assert!(idx == UNK_IDX || v.index_to_char.contains_key(&idx));
        }
    }

    #[test]
    fn test_round_trip_of_known_characters() {
        let mut v = Vocab::new();
        let s = "transliteración";
        v.add_sentence(s);
        assert_eq!(v.indices_to_sentence(&v.sentence_to_indices(s)), s);
    }

    #[test]
    fn test_only_eos_is_filtered_when_decoding() {
        let v = Vocab::new();
        // <eos> disappears entirely
        assert_eq!(v.indices_to_sentence(&[EOS_IDX]), "");
        // <pad> and <sos> render as their literal text
        assert_eq!(v.indices_to_sentence(&[PAD_IDX]), PAD_TOKEN);
        assert_eq!(v.indices_to_sentence(&[SOS_IDX]), SOS_TOKEN);
    }

    #[test]
    fn test_unknown_index_decodes_to_unk_text() {
        let v = Vocab::new();
        assert_eq!(v.indices_to_sentence(&[999]), UNK_TOKEN);
    }

    #[test]
    fn test_unicode_characters_count_as_single_symbols() {
        let mut v = Vocab::new();
        v.add_sentence("नमस्ते");
        // 6 distinct code points in the Devanagari string
        assert_eq!(v.size(), 4 + 6);
        assert_eq!(v.sentence_to_indices("नमस्ते").len(), 6);
    }
}
