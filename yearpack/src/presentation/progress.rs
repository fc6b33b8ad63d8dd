use yearpack_core::domain::mib;
use yearpack_core::{FileRecord, ProgressSink, WrittenArchive, YearKey};

/// Human-readable progress on stdout.
pub struct ConsoleProgress {
    dry_run: bool,
}

impl ConsoleProgress {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl ProgressSink for ConsoleProgress {
    fn scan_started(&mut self) {
        println!("Organizing files by year...");
    }

    fn summary_started(&mut self) {
        println!("\nSummary:");
    }

    fn summary(&mut self, year: YearKey, files: usize, total_bytes: u64) {
        println!("  {year}: {files} files, {:.1}MB", mib(total_bytes));
    }

    fn archiving_started(&mut self) {
        if self.dry_run {
            println!("\nPlanning archives (dry run)...");
        } else {
            println!("\nCreating archives...");
        }
    }

    fn bucket_started(&mut self, year: YearKey, files: usize) {
        println!("\nProcessing {year}: {files} files");
    }

    fn skipped_oversized(&mut self, file: &FileRecord) {
        println!(
            "  Skipping large file: {} ({:.1}MB)",
            file.file_name(),
            mib(file.size)
        );
    }

    fn archive_created(&mut self, archive: &WrittenArchive) {
        let verb = if self.dry_run { "Would create" } else { "Created" };
        println!("  {verb} {} ({:.1}MB)", archive.name, mib(archive.bytes));
    }

    fn finished(&mut self) {
        println!("\nDone!");
    }
}
