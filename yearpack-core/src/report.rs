use crate::domain::{FileRecord, YearKey};
use crate::options::PackOptions;
use crate::pack::walker::ScanIssue;
use crate::pack::writer::WrittenArchive;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
pub struct BucketReport {
    pub year: YearKey,
    pub files: usize,
    pub total_bytes: u64,
    pub archives: Vec<WrittenArchive>,
    pub skipped: Vec<FileRecord>,
    /// Stale parts deleted after this bucket was written.
    pub pruned: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RunReport {
    pub options: PackOptions,
    pub buckets: Vec<BucketReport>,
    pub scan_issues: Vec<ScanIssue>,
}

impl RunReport {
    pub fn archive_count(&self) -> usize {
        self.buckets.iter().map(|b| b.archives.len()).sum()
    }

    pub fn skipped_count(&self) -> usize {
        self.buckets.iter().map(|b| b.skipped.len()).sum()
    }

    pub fn bucket(&self, year: YearKey) -> Option<&BucketReport> {
        self.buckets.iter().find(|b| b.year == year)
    }
}
