use std::path::PathBuf;

use crate::presentation::cli::PackArgs;
use crate::presentation::progress::ConsoleProgress;
use yearpack_core::domain::MIB;
use yearpack_core::error::{Result, YearpackError};
use yearpack_core::options::DEFAULT_BUDGET_BYTES;
use yearpack_core::{NoProgress, PackOptions, list, run, year_from_filename};

fn budget_from_args(args: &PackArgs) -> Result<u64> {
    match (args.budget_mib, args.budget_bytes) {
        (Some(m), _) => m
            .checked_mul(MIB)
            .ok_or_else(|| YearpackError::Config(format!("budget of {m} MiB is too large"))),
        (None, Some(b)) => Ok(b),
        (None, None) => Ok(DEFAULT_BUDGET_BYTES),
    }
}

pub fn options_from_args(args: &PackArgs, dry_run: bool) -> Result<PackOptions> {
    Ok(PackOptions {
        root_dir: args.root.clone(),
        output_dir: args.out.clone(),
        budget_bytes: budget_from_args(args)?,
        dry_run,
        prune_stale: args.prune_stale,
    })
}

pub fn handle_pack(args: PackArgs, dry_run: bool) -> Result<()> {
    let opts = options_from_args(&args, dry_run)?;
    tracing::debug!(
        root = %opts.root_dir.display(),
        out = %opts.output_dir.display(),
        budget = opts.budget_bytes,
        dry_run,
        "starting pack"
    );
    if args.json {
        let report = run(&opts, &mut NoProgress)?;
        let s = serde_json::to_string_pretty(&report).map_err(std::io::Error::other)?;
        println!("{s}");
        return Ok(());
    }

    let report = run(&opts, &mut ConsoleProgress::new(dry_run))?;
    for issue in &report.scan_issues {
        eprintln!("skipped unreadable: {} ({})", issue.path, issue.reason);
    }
    for name in report.buckets.iter().flat_map(|b| &b.pruned) {
        eprintln!("pruned: {name}");
    }
    Ok(())
}

pub fn handle_classify(names: Vec<String>) -> Result<()> {
    for n in names {
        match year_from_filename(&n) {
            Some(y) => println!("{n}\t{y}"),
            None => println!("{n}\t-"),
        }
    }
    Ok(())
}

pub fn handle_list(archive: PathBuf) -> Result<()> {
    for e in list(&archive)? {
        println!("{}  {} bytes  {} compressed", e.name, e.size, e.compressed_size);
    }
    Ok(())
}
