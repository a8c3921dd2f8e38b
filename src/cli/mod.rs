// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application);
// this layer only routes and prints.
//
// Three commands are supported:
//   1. `inspect` — corpus statistics and vocabulary report
//   2. `encode`  — index encoding of one row
//   3. `dry-run` — model assembly + one forward pass
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, DryRunArgs, EncodeArgs, InspectArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "char-translit",
    version = "0.1.0",
    about = "Character-level transliteration corpus tooling and seq2seq assembly."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args) => run_inspect(args),
            Commands::Encode(args) => run_encode(args),
            Commands::DryRun(args) => run_dry_run(args),
        }
    }
}

/// Handles the `inspect` subcommand.
fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let report = InspectUseCase::new(args.into()).execute()?;

    println!("rows:            {}", report.rows);
    println!("src vocab size:  {}", report.src_vocab_size);
    println!("tgt vocab size:  {}", report.tgt_vocab_size);

    if !report.src_top_chars.is_empty() {
        println!("\ntop source characters:");
        for (ch, count) in &report.src_top_chars {
            println!("  {:?}  ×{}", ch, count);
        }
        println!("\ntop target characters:");
        for (ch, count) in &report.tgt_top_chars {
            println!("  {:?}  ×{}", ch, count);
        }
    }

    if !report.previews.is_empty() {
        println!("\npreview:");
        for p in &report.previews {
            println!("  [{}] {:?} → {:?}", p.index, p.src, p.tgt);
            println!("      src {:?}", p.source_ids);
            println!("      tgt {:?}", p.target_ids);
        }
    }

    Ok(())
}

/// Handles the `encode` subcommand.
fn run_encode(args: EncodeArgs) -> Result<()> {
    use crate::application::encode_use_case::EncodeUseCase;

    let pair = EncodeUseCase::new(args.data).execute(args.index)?;
    println!("src {:?}", pair.source_ids);
    println!("tgt {:?}", pair.target_ids);
    Ok(())
}

/// Handles the `dry-run` subcommand.
fn run_dry_run(args: DryRunArgs) -> Result<()> {
    use crate::application::dry_run_use_case::DryRunUseCase;

    let report = DryRunUseCase::new(args.into()).execute()?;
    println!(
        "forwarded row 0: src len {}, tgt len {}",
        report.src_len, report.tgt_len
    );
    println!(
        "logits shape: [{}, {}, {}]",
        report.logits_shape[0], report.logits_shape[1], report.logits_shape[2]
    );
    println!("Wiring check passed.");
    Ok(())
}
