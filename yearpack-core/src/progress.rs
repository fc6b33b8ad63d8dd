use crate::domain::{FileRecord, YearKey};
use crate::pack::writer::WrittenArchive;

/// Observer for a pipeline run. Every method defaults to doing nothing.
pub trait ProgressSink {
    fn scan_started(&mut self) {}
    fn summary_started(&mut self) {}
    /// Called once per bucket, in key order, before any archive is written.
    fn summary(&mut self, _year: YearKey, _files: usize, _total_bytes: u64) {}
    fn archiving_started(&mut self) {}
    fn bucket_started(&mut self, _year: YearKey, _files: usize) {}
    fn skipped_oversized(&mut self, _file: &FileRecord) {}
    fn archive_created(&mut self, _archive: &WrittenArchive) {}
    fn finished(&mut self) {}
}

pub struct NoProgress;

impl ProgressSink for NoProgress {}
