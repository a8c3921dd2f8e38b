// ============================================================
// Layer 5 — Seq2Seq Model Assembly
// ============================================================
// A thin composition of framework layers, nothing more:
//
//   Encoder   embedding → recurrent stack
//             consumes the source indices, its final per-layer
//             states summarise the whole input sequence
//
//   Decoder   embedding → recurrent stack → linear projection
//             consumes the target indices (teacher forcing) with
//             the encoder states as its starting point, and
//             projects every hidden state to vocabulary logits
//
//   Seq2Seq   encoder + decoder, wired together
//
// Deliberately absent: loss, optimiser, training loop, greedy or
// beam decoding. This module only defines the forward wiring; a
// training harness sits in front of it.
//
// Reference: Sutskever et al. (2014) Sequence to Sequence Learning
//            Burn Book §3 (Building Blocks)

use burn::{
    nn::{Embedding, EmbeddingConfig, Linear, LinearConfig},
    prelude::*,
};

use crate::ml::cell::{CellType, Recurrent, RecurrentState};

// ─── Encoder ──────────────────────────────────────────────────────────────────
#[derive(Config, Debug)]
pub struct EncoderConfig {
    pub input_vocab_size: usize,
    pub embedding_dim: usize,
    pub hidden_dim: usize,
    #[config(default = 1)]
    pub num_layers: usize,
    #[config(default = "CellType::Gru")]
    pub cell_type: CellType,
}

impl EncoderConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> Encoder<B> {
        let embedding = EmbeddingConfig::new(self.input_vocab_size, self.embedding_dim)
            .init(device);
        let layers = recurrent_stack(
            self.cell_type,
            self.embedding_dim,
            self.hidden_dim,
            self.num_layers,
            device,
        );
        Encoder { embedding, layers }
    }
}

#[derive(Module, Debug)]
pub struct Encoder<B: Backend> {
    pub embedding: Embedding<B>,
    pub layers: Vec<Recurrent<B>>,
}

impl<B: Backend> Encoder<B> {
    /// src: [batch, src_len] → (outputs [batch, src_len, hidden],
    /// final state of every layer, bottom first)
    pub fn forward(&self, src: Tensor<B, 2, Int>) -> (Tensor<B, 3>, Vec<RecurrentState<B>>) {
        let mut x = self.embedding.forward(src);
        let mut states = Vec::with_capacity(self.layers.len());
        for layer in &self.layers {
            let (output, state) = layer.forward(x, None);
            states.push(state);
            x = output;
        }
        (x, states)
    }
}

// ─── Decoder ──────────────────────────────────────────────────────────────────
#[derive(Config, Debug)]
pub struct DecoderConfig {
    pub output_vocab_size: usize,
    pub embedding_dim: usize,
    pub hidden_dim: usize,
    #[config(default = 1)]
    pub num_layers: usize,
    #[config(default = "CellType::Gru")]
    pub cell_type: CellType,
}

impl DecoderConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> Decoder<B> {
        let embedding = EmbeddingConfig::new(self.output_vocab_size, self.embedding_dim)
            .init(device);
        let layers = recurrent_stack(
            self.cell_type,
            self.embedding_dim,
            self.hidden_dim,
            self.num_layers,
            device,
        );
        let projection = LinearConfig::new(self.hidden_dim, self.output_vocab_size).init(device);
        Decoder {
            embedding,
            layers,
            projection,
        }
    }
}

#[derive(Module, Debug)]
pub struct Decoder<B: Backend> {
    pub embedding: Embedding<B>,
    pub layers: Vec<Recurrent<B>>,
    pub projection: Linear<B>,
}

impl<B: Backend> Decoder<B> {
    /// tgt: [batch, tgt_len], states: encoder final states →
    /// (logits [batch, tgt_len, output_vocab], final states)
    ///
    /// Layers beyond the provided states start from zeros, so a
    /// shallower encoder still composes with a deeper decoder.
    pub fn forward(
        &self,
        tgt: Tensor<B, 2, Int>,
        states: Vec<RecurrentState<B>>,
    ) -> (Tensor<B, 3>, Vec<RecurrentState<B>>) {
        let mut x = self.embedding.forward(tgt);
        let mut initial = states.into_iter();
        let mut final_states = Vec::with_capacity(self.layers.len());
        for layer in &self.layers {
            let (output, state) = layer.forward(x, initial.next());
            final_states.push(state);
            x = output;
        }
        let logits = self.projection.forward(x);
        (logits, final_states)
    }
}

// ─── Seq2Seq ──────────────────────────────────────────────────────────────────
#[derive(Config, Debug)]
pub struct Seq2SeqConfig {
    pub input_vocab_size: usize,
    pub output_vocab_size: usize,
    pub embedding_dim: usize,
    pub hidden_dim: usize,
    #[config(default = 1)]
    pub num_layers: usize,
    #[config(default = "CellType::Gru")]
    pub cell_type: CellType,
}

impl Seq2SeqConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> Seq2Seq<B> {
        let encoder = EncoderConfig::new(self.input_vocab_size, self.embedding_dim, self.hidden_dim)
            .with_num_layers(self.num_layers)
            .with_cell_type(self.cell_type)
            .init(device);
        let decoder =
            DecoderConfig::new(self.output_vocab_size, self.embedding_dim, self.hidden_dim)
                .with_num_layers(self.num_layers)
                .with_cell_type(self.cell_type)
                .init(device);
        Seq2Seq { encoder, decoder }
    }
}

#[derive(Module, Debug)]
pub struct Seq2Seq<B: Backend> {
    pub encoder: Encoder<B>,
    pub decoder: Decoder<B>,
}

impl<B: Backend> Seq2Seq<B> {
    /// src: [batch, src_len], tgt: [batch, tgt_len] →
    /// logits [batch, tgt_len, output_vocab]
    pub fn forward(&self, src: Tensor<B, 2, Int>, tgt: Tensor<B, 2, Int>) -> Tensor<B, 3> {
        let (_, states) = self.encoder.forward(src);
        let (logits, _) = self.decoder.forward(tgt, states);
        logits
    }
}

/// Stack of `num_layers` recurrent layers; the first consumes
/// embeddings, the rest consume the hidden sequence below them.
fn recurrent_stack<B: Backend>(
    cell_type: CellType,
    embedding_dim: usize,
    hidden_dim: usize,
    num_layers: usize,
    device: &B::Device,
) -> Vec<Recurrent<B>> {
    (0..num_layers)
        .map(|layer| {
            let d_input = if layer == 0 { embedding_dim } else { hidden_dim };
            Recurrent::init(cell_type, d_input, hidden_dim, device)
        })
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    type TestBackend = burn::backend::NdArray;

    fn device() -> <TestBackend as Backend>::Device {
        burn::backend::ndarray::NdArrayDevice::default()
    }

    fn int_tensor(ids: &[i32], device: &<TestBackend as Backend>::Device) -> Tensor<TestBackend, 2, Int> {
        Tensor::<TestBackend, 1, Int>::from_ints(ids, device).unsqueeze::<2>()
    }

    #[test]
    fn test_seq2seq_logits_shape_for_every_cell_type() {
        let device = device();
        for cell_type in [CellType::Rnn, CellType::Lstm, CellType::Gru] {
            let model: Seq2Seq<TestBackend> = Seq2SeqConfig::new(11, 13, 8, 16)
                .with_cell_type(cell_type)
                .init(&device);
            let src = int_tensor(&[1, 2, 3, 4], &device);
            let tgt = int_tensor(&[1, 5, 6, 7, 2], &device);
            let logits = model.forward(src, tgt);
            // one logit row per target position, over the output vocabulary
            assert_eq!(logits.dims(), [1, 5, 13]);
        }
    }

    #[test]
    fn test_stacked_layers_forward() {
        let device = device();
        let model: Seq2Seq<TestBackend> = Seq2SeqConfig::new(10, 10, 4, 6)
            .with_num_layers(2)
            .with_cell_type(CellType::Lstm)
            .init(&device);
        let logits = model.forward(int_tensor(&[1, 2], &device), int_tensor(&[1, 3, 2], &device));
        assert_eq!(logits.dims(), [1, 3, 10]);
    }

    #[test]
    fn test_encoder_hands_one_state_per_layer() {
        let device = device();
        let encoder: Encoder<TestBackend> = EncoderConfig::new(10, 4, 6)
            .with_num_layers(3)
            .init(&device);
        let (outputs, states) = encoder.forward(int_tensor(&[1, 2, 3], &device));
        assert_eq!(outputs.dims(), [1, 3, 6]);
        assert_eq!(states.len(), 3);
    }
}
