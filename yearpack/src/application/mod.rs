pub mod handlers;

use crate::logging;
use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use yearpack_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).map_err(std::io::Error::other)?;
    match cli.command {
        Commands::Pack { args, dry_run } => handlers::handle_pack(args, dry_run),
        Commands::Plan { args } => handlers::handle_pack(args, true),
        Commands::Classify { names } => handlers::handle_classify(names),
        Commands::List { archive } => handlers::handle_list(archive),
    }
}
