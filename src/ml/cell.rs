// ============================================================
// Layer 5 — Recurrent Cells
// ============================================================
// Hand-composed recurrent layers built from Burn's Linear
// primitive, one module per cell type:
//
//   RnnCell   h' = tanh(W·x + U·h)
//   GruCell   update/reset gates + candidate state
//   LstmCell  input/forget/cell/output gates + cell state
//
// All three share one shape contract so the encoder/decoder can
// stack them interchangeably:
//
//   step:    [batch, d_input] × state → state
//   forward: [batch, seq_len, d_input] × Option<state>
//            → ([batch, seq_len, d_hidden], final state)
//
// The cell type is a closed enum selected at construction and
// validated with a descriptive parse error — not a free-form
// string looked up in a framework namespace.
//
// Reference: Cho et al. (2014) GRU
//            Hochreiter & Schmidhuber (1997) LSTM
//            Burn Book §3 (Building Blocks)

use std::fmt;
use std::str::FromStr;

use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
    tensor::activation::{sigmoid, tanh},
};
use serde::{Deserialize, Serialize};

// ─── CellType ─────────────────────────────────────────────────────────────────
/// Which recurrent cell the encoder/decoder stacks are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellType {
    Rnn,
    Lstm,
    Gru,
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellType::Rnn => write!(f, "rnn"),
            CellType::Lstm => write!(f, "lstm"),
            CellType::Gru => write!(f, "gru"),
        }
    }
}

impl FromStr for CellType {
    type Err = String;

    /// Parses "rnn", "lstm" or "gru" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rnn" => Ok(CellType::Rnn),
            "lstm" => Ok(CellType::Lstm),
            "gru" => Ok(CellType::Gru),
            other => Err(format!(
                "cell type must be 'rnn', 'lstm', or 'gru', got '{other}'"
            )),
        }
    }
}

// ─── RecurrentState ───────────────────────────────────────────────────────────
/// Per-layer state carried across time steps and handed from the
/// encoder to the decoder.
///
/// `cell` is only populated by LSTM layers — the others carry
/// just the hidden state. An LSTM layer given a state without a
/// cell component starts that component from zeros rather than
/// failing, so encoder/decoder stacks of different cell types
/// still compose.
#[derive(Debug, Clone)]
pub struct RecurrentState<B: Backend> {
    /// Hidden state — shape: [batch, d_hidden]
    pub hidden: Tensor<B, 2>,

    /// LSTM cell state — shape: [batch, d_hidden]
    pub cell: Option<Tensor<B, 2>>,
}

impl<B: Backend> RecurrentState<B> {
    /// An all-zero hidden state (no cell component yet).
    pub fn zeros(batch_size: usize, d_hidden: usize, device: &B::Device) -> Self {
        Self {
            hidden: Tensor::zeros([batch_size, d_hidden], device),
            cell: None,
        }
    }
}

// ─── Recurrent ────────────────────────────────────────────────────────────────
/// One recurrent layer of the selected cell type.
#[derive(Module, Debug)]
pub enum Recurrent<B: Backend> {
    Rnn(RnnCell<B>),
    Lstm(LstmCell<B>),
    Gru(GruCell<B>),
}

impl<B: Backend> Recurrent<B> {
    /// Build a layer of the given cell type.
    pub fn init(
        cell_type: CellType,
        d_input: usize,
        d_hidden: usize,
        device: &B::Device,
    ) -> Self {
        match cell_type {
            CellType::Rnn => Recurrent::Rnn(RnnCell::init(d_input, d_hidden, device)),
            CellType::Lstm => Recurrent::Lstm(LstmCell::init(d_input, d_hidden, device)),
            CellType::Gru => Recurrent::Gru(GruCell::init(d_input, d_hidden, device)),
        }
    }

    pub fn d_hidden(&self) -> usize {
        match self {
            Recurrent::Rnn(cell) => cell.d_hidden,
            Recurrent::Lstm(cell) => cell.d_hidden,
            Recurrent::Gru(cell) => cell.d_hidden,
        }
    }

    /// Advance one time step.
    pub fn step(&self, input: Tensor<B, 2>, state: RecurrentState<B>) -> RecurrentState<B> {
        match self {
            Recurrent::Rnn(cell) => cell.step(input, state),
            Recurrent::Lstm(cell) => cell.step(input, state),
            Recurrent::Gru(cell) => cell.step(input, state),
        }
    }

    /// Run the whole sequence.
    ///
    /// input: [batch, seq_len, d_input] → outputs the hidden
    /// state at every time step, [batch, seq_len, d_hidden],
    /// plus the final state. A zero-length sequence yields an
    /// empty output and the (possibly given) initial state.
    pub fn forward(
        &self,
        input: Tensor<B, 3>,
        state: Option<RecurrentState<B>>,
    ) -> (Tensor<B, 3>, RecurrentState<B>) {
        let [batch_size, seq_len, d_input] = input.dims();
        let device = input.device();
        let d_hidden = self.d_hidden();

        let mut state =
            state.unwrap_or_else(|| RecurrentState::zeros(batch_size, d_hidden, &device));

        let mut outputs: Vec<Tensor<B, 3>> = Vec::with_capacity(seq_len);
        for t in 0..seq_len {
            // x_t: [batch, d_input] — the t-th column of the sequence
            let x_t = input
                .clone()
                .slice([0..batch_size, t..t + 1, 0..d_input])
                .reshape([batch_size, d_input]);
            state = self.step(x_t, state);
            outputs.push(state.hidden.clone().reshape([batch_size, 1, d_hidden]));
        }

        let output = if outputs.is_empty() {
            Tensor::empty([batch_size, 0, d_hidden], &device)
        } else {
            Tensor::cat(outputs, 1)
        };
        (output, state)
    }
}

// ─── RnnCell ──────────────────────────────────────────────────────────────────
/// Vanilla (Elman) recurrent cell: h' = tanh(W·x + U·h)
#[derive(Module, Debug)]
pub struct RnnCell<B: Backend> {
    input: Linear<B>,
    hidden: Linear<B>,
    pub d_hidden: usize,
}

impl<B: Backend> RnnCell<B> {
    pub fn init(d_input: usize, d_hidden: usize, device: &B::Device) -> Self {
        Self {
            input: LinearConfig::new(d_input, d_hidden).init(device),
            hidden: LinearConfig::new(d_hidden, d_hidden).init(device),
            d_hidden,
        }
    }

    pub fn step(&self, input: Tensor<B, 2>, state: RecurrentState<B>) -> RecurrentState<B> {
        let hidden = tanh(self.input.forward(input) + self.hidden.forward(state.hidden));
        RecurrentState { hidden, cell: None }
    }
}

// ─── GruCell ──────────────────────────────────────────────────────────────────
/// Gated recurrent unit:
///   z  = σ(Wz·x + Uz·h)            update gate
///   r  = σ(Wr·x + Ur·h)            reset gate
///   n  = tanh(Wn·x + r ⊙ (Un·h))   candidate state
///   h' = (1 − z) ⊙ n + z ⊙ h
#[derive(Module, Debug)]
pub struct GruCell<B: Backend> {
    update_input: Linear<B>,
    update_hidden: Linear<B>,
    reset_input: Linear<B>,
    reset_hidden: Linear<B>,
    candidate_input: Linear<B>,
    candidate_hidden: Linear<B>,
    pub d_hidden: usize,
}

impl<B: Backend> GruCell<B> {
    pub fn init(d_input: usize, d_hidden: usize, device: &B::Device) -> Self {
        Self {
            update_input: LinearConfig::new(d_input, d_hidden).init(device),
            update_hidden: LinearConfig::new(d_hidden, d_hidden).init(device),
            reset_input: LinearConfig::new(d_input, d_hidden).init(device),
            reset_hidden: LinearConfig::new(d_hidden, d_hidden).init(device),
            candidate_input: LinearConfig::new(d_input, d_hidden).init(device),
            candidate_hidden: LinearConfig::new(d_hidden, d_hidden).init(device),
            d_hidden,
        }
    }

    pub fn step(&self, input: Tensor<B, 2>, state: RecurrentState<B>) -> RecurrentState<B> {
        let h = state.hidden;

        let update = sigmoid(
            self.update_input.forward(input.clone()) + self.update_hidden.forward(h.clone()),
        );
        let reset = sigmoid(
            self.reset_input.forward(input.clone()) + self.reset_hidden.forward(h.clone()),
        );
        let candidate = tanh(
            self.candidate_input.forward(input) + reset * self.candidate_hidden.forward(h.clone()),
        );

        let hidden = (update.ones_like() - update.clone()) * candidate + update * h;
        RecurrentState { hidden, cell: None }
    }
}

// ─── LstmCell ─────────────────────────────────────────────────────────────────
/// Long short-term memory cell:
///   i  = σ(Wi·x + Ui·h)      input gate
///   f  = σ(Wf·x + Uf·h)      forget gate
///   g  = tanh(Wg·x + Ug·h)   candidate cell
///   o  = σ(Wo·x + Uo·h)      output gate
///   c' = f ⊙ c + i ⊙ g
///   h' = o ⊙ tanh(c')
#[derive(Module, Debug)]
pub struct LstmCell<B: Backend> {
    input_gate_input: Linear<B>,
    input_gate_hidden: Linear<B>,
    forget_gate_input: Linear<B>,
    forget_gate_hidden: Linear<B>,
    cell_gate_input: Linear<B>,
    cell_gate_hidden: Linear<B>,
    output_gate_input: Linear<B>,
    output_gate_hidden: Linear<B>,
    pub d_hidden: usize,
}

impl<B: Backend> LstmCell<B> {
    pub fn init(d_input: usize, d_hidden: usize, device: &B::Device) -> Self {
        Self {
            input_gate_input: LinearConfig::new(d_input, d_hidden).init(device),
            input_gate_hidden: LinearConfig::new(d_hidden, d_hidden).init(device),
            forget_gate_input: LinearConfig::new(d_input, d_hidden).init(device),
            forget_gate_hidden: LinearConfig::new(d_hidden, d_hidden).init(device),
            cell_gate_input: LinearConfig::new(d_input, d_hidden).init(device),
            cell_gate_hidden: LinearConfig::new(d_hidden, d_hidden).init(device),
            output_gate_input: LinearConfig::new(d_input, d_hidden).init(device),
            output_gate_hidden: LinearConfig::new(d_hidden, d_hidden).init(device),
            d_hidden,
        }
    }

    pub fn step(&self, input: Tensor<B, 2>, state: RecurrentState<B>) -> RecurrentState<B> {
        let h = state.hidden;
        // A state handed over from a non-LSTM layer has no cell
        // component — start it from zeros.
        let c = state
            .cell
            .unwrap_or_else(|| h.zeros_like());

        let input_gate = sigmoid(
            self.input_gate_input.forward(input.clone())
                + self.input_gate_hidden.forward(h.clone()),
        );
        let forget_gate = sigmoid(
            self.forget_gate_input.forward(input.clone())
                + self.forget_gate_hidden.forward(h.clone()),
        );
        let cell_gate = tanh(
            self.cell_gate_input.forward(input.clone())
                + self.cell_gate_hidden.forward(h.clone()),
        );
        let output_gate = sigmoid(
            self.output_gate_input.forward(input) + self.output_gate_hidden.forward(h),
        );

        let cell = forget_gate * c + input_gate * cell_gate;
        let hidden = output_gate * tanh(cell.clone());
        RecurrentState {
            hidden,
            cell: Some(cell),
        }
    }
}
