#![forbid(unsafe_code)]

pub mod error;
pub mod options;

pub mod domain;
pub mod classify;
pub mod bucket;

pub mod pack {
    pub mod planner;
    pub mod walker;
    pub mod writer;
}

pub mod list;
pub mod pipeline;
pub mod progress;
pub mod report;

// Re-exports: stable API surface
pub use classify::{classify, year_from_filename};
pub use domain::{ArchivePlan, BucketPlan, FileRecord, YearKey};
pub use list::{ListedEntry, list};
pub use options::PackOptions;
pub use pack::planner::plan_bucket;
pub use pack::walker::{ScanIssue, ScanOutcome, scan};
pub use pack::writer::{WrittenArchive, write_archive};
pub use pipeline::run;
pub use progress::{NoProgress, ProgressSink};
pub use report::{BucketReport, RunReport};
