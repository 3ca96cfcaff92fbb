//! CLI for fseq.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use fseq_core::config::{self, FseqConfig};
use std::io;
use std::path::PathBuf;

use commands::{run_completions, run_plan, run_rename};

/// Top-level CLI. With no subcommand, behaves like `fseq run`.
#[derive(Debug, Parser)]
#[command(name = "fseq", version)]
#[command(
    about = "Copy ezgif-frame-*.jpg exports to frame_{i}_delay-0.04s.webp for an image-sequence player",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Source/destination overrides shared by `run` and `plan`.
#[derive(Debug, Clone, Default, Args)]
pub struct DirArgs {
    /// Directory holding the exported frames (default: Frames).
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination directory, relative to the working directory (default: public/frames).
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,
}

impl DirArgs {
    fn apply(self, cfg: FseqConfig) -> FseqConfig {
        cfg.with_overrides(self.source, self.dest)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Copy matching frames into the destination under index-based names.
    Run {
        #[command(flatten)]
        dirs: DirArgs,
    },

    /// Show the source -> destination mapping without copying anything.
    Plan {
        #[command(flatten)]
        dirs: DirArgs,

        /// Print a JSON manifest (frame count, delay, mapping) instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Loaded config plus the directory relative paths resolve against.
fn load_context() -> Result<(FseqConfig, PathBuf)> {
    let cfg = config::load()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let base_dir = std::env::current_dir().context("resolve working directory")?;
    Ok((cfg, base_dir))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli.command.unwrap_or(CliCommand::Run {
            dirs: DirArgs::default(),
        });

        match command {
            CliCommand::Run { dirs } => {
                let (cfg, base_dir) = load_context()?;
                run_rename(&dirs.apply(cfg), &base_dir, &mut io::stdout().lock())?;
            }
            CliCommand::Plan { dirs, json } => {
                let (cfg, base_dir) = load_context()?;
                run_plan(&dirs.apply(cfg), &base_dir, json, &mut io::stdout().lock())?;
            }
            CliCommand::Completions { shell } => run_completions(shell, &mut io::stdout()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
