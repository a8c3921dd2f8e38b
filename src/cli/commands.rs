// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `inspect`, `encode`, `dry-run`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, enum, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};

use crate::application::dry_run_use_case::DryRunConfig;
use crate::application::inspect_use_case::InspectConfig;
use crate::ml::cell::CellType;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a TSV corpus and report rows, vocabularies, previews
    Inspect(InspectArgs),

    /// Print the index encoding of one corpus row
    Encode(EncodeArgs),

    /// Assemble the seq2seq model and forward one row through it
    DryRun(DryRunArgs),
}

/// All arguments for the `inspect` command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Tab-separated corpus: native script, TAB, romanised text
    #[arg(long)]
    pub data: String,

    /// How many rows to encode in the preview section
    #[arg(long, default_value_t = 3)]
    pub rows: usize,

    /// How many top-frequency characters to list per side
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Directory to persist both vocabularies as JSON
    #[arg(long)]
    pub vocab_dir: Option<String>,
}

/// Convert CLI InspectArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        InspectConfig {
            data_path: a.data,
            preview_rows: a.rows,
            top_chars: a.top,
            vocab_dir: a.vocab_dir,
        }
    }
}

/// All arguments for the `encode` command
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Tab-separated corpus: native script, TAB, romanised text
    #[arg(long)]
    pub data: String,

    /// Zero-based row to encode
    #[arg(long)]
    pub index: usize,
}

/// All arguments for the `dry-run` command
#[derive(Args, Debug)]
pub struct DryRunArgs {
    /// Tab-separated corpus: native script, TAB, romanised text
    #[arg(long)]
    pub data: String,

    /// Size of each character embedding vector
    #[arg(long, default_value_t = 64)]
    pub embedding_dim: usize,

    /// Hidden dimension of every recurrent layer
    #[arg(long, default_value_t = 128)]
    pub hidden_dim: usize,

    /// How many recurrent layers to stack in encoder and decoder
    #[arg(long, default_value_t = 1)]
    pub num_layers: usize,

    /// Which recurrent cell to build the stacks from
    #[arg(long, value_enum, default_value = "gru")]
    pub cell: CellArg,
}

/// clap-facing mirror of ml::cell::CellType, so the ml layer
/// stays free of CLI types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CellArg {
    Rnn,
    Lstm,
    Gru,
}

impl From<CellArg> for CellType {
    fn from(a: CellArg) -> Self {
        match a {
            CellArg::Rnn => CellType::Rnn,
            CellArg::Lstm => CellType::Lstm,
            CellArg::Gru => CellType::Gru,
        }
    }
}

impl From<DryRunArgs> for DryRunConfig {
    fn from(a: DryRunArgs) -> Self {
        DryRunConfig {
            data_path: a.data,
            embedding_dim: a.embedding_dim,
            hidden_dim: a.hidden_dim,
            num_layers: a.num_layers,
            cell_type: a.cell.into(),
        }
    }
}
