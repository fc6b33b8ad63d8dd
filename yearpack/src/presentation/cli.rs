use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use yearpack_core::options::{DEFAULT_OUTPUT_DIR, DEFAULT_ROOT_DIR};

#[derive(Parser)]
#[command(author, version, about = "Pack exported media into yearly zip archives", long_about = None)]
pub struct Cli {
    /// Debug-level diagnostics on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct PackArgs {
    /// Directory tree to scan
    #[arg(long, default_value = DEFAULT_ROOT_DIR)]
    pub root: PathBuf,

    /// Where `{year}_partNN.zip` files are written
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out: PathBuf,

    /// Per-archive budget in MiB (default 95)
    #[arg(long, conflicts_with = "budget_bytes")]
    pub budget_mib: Option<u64>,

    /// Per-archive budget in bytes
    #[arg(long)]
    pub budget_bytes: Option<u64>,

    /// Delete higher-numbered parts left over from an earlier run
    #[arg(long)]
    pub prune_stale: bool,

    /// Print the run report as JSON instead of progress lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan, bucket by year and write the archives
    Pack {
        #[command(flatten)]
        args: PackArgs,

        /// Plan and report without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show what `pack` would write
    Plan {
        #[command(flatten)]
        args: PackArgs,
    },

    /// Print the year inferred from each file name
    Classify { names: Vec<String> },

    /// List entries of a produced archive
    List { archive: PathBuf },
}
