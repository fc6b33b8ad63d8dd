use crate::bucket::bucket_by_year;
use crate::error::Result;
use crate::options::PackOptions;
use crate::pack::planner::plan_bucket;
use crate::pack::walker::scan_excluding;
use crate::pack::writer::{WrittenArchive, prune_stale_parts, write_archive};
use crate::progress::ProgressSink;
use crate::report::{BucketReport, RunReport};
use std::fs;

/// Scan, bucket, plan and write every year's archives, one archive at a time.
pub fn run(opts: &PackOptions, progress: &mut dyn ProgressSink) -> Result<RunReport> {
    opts.validate()?;

    progress.scan_started();
    // a nested output dir would feed earlier archives back in as sources
    let outcome = scan_excluding(&opts.root_dir, &opts.output_dir)?;
    let buckets = bucket_by_year(outcome.files);

    progress.summary_started();
    for (year, files) in &buckets {
        progress.summary(*year, files.len(), files.iter().map(|f| f.size).sum());
    }

    progress.archiving_started();
    if !opts.dry_run {
        fs::create_dir_all(&opts.output_dir)?;
    }

    let mut report = RunReport {
        options: opts.clone(),
        buckets: Vec::with_capacity(buckets.len()),
        scan_issues: outcome.issues,
    };

    for (year, files) in buckets {
        let count = files.len();
        let total_bytes = files.iter().map(|f| f.size).sum();
        progress.bucket_started(year, count);

        let plan = plan_bucket(year, files, opts.budget_bytes);
        for f in &plan.skipped {
            tracing::debug!(path = f.path.as_str(), size = f.size, "oversized, not archived");
            progress.skipped_oversized(f);
        }

        let mut written = Vec::with_capacity(plan.archives.len());
        for a in &plan.archives {
            let w = if opts.dry_run {
                WrittenArchive {
                    name: a.file_name(),
                    path: opts.output_dir.join(a.file_name()),
                    members: a.members.len(),
                    bytes: a.bytes,
                }
            } else {
                write_archive(a, &opts.output_dir)?
            };
            progress.archive_created(&w);
            written.push(w);
        }

        let pruned = if opts.prune_stale && !opts.dry_run {
            prune_stale_parts(&opts.output_dir, year, plan.archives.len() as u32)?
        } else {
            Vec::new()
        };

        report.buckets.push(BucketReport {
            year,
            files: count,
            total_bytes,
            archives: written,
            skipped: plan.skipped,
            pruned,
        });
    }

    progress.finished();
    tracing::info!(
        buckets = report.buckets.len(),
        archives = report.archive_count(),
        skipped = report.skipped_count(),
        scan_issues = report.scan_issues.len(),
        "run complete"
    );
    Ok(report)
}
