use crate::classify::local_time;
use crate::domain::{ArchivePlan, YearKey};
use crate::error::Result;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WrittenArchive {
    pub name: String,
    pub path: PathBuf,
    pub members: usize,
    /// Sum of member sizes before compression.
    pub bytes: u64,
}

/// Zip timestamps are local wall-clock time; anything before 1980 is left at the default.
fn zip_time(t: SystemTime) -> Option<zip::DateTime> {
    let lt = local_time(t);
    zip::DateTime::from_date_and_time(
        u16::try_from(lt.year()).ok()?,
        u8::from(lt.month()),
        lt.day(),
        lt.hour(),
        lt.minute(),
        lt.second(),
    )
    .ok()
}

fn entry_options(size: u64, mtime: Option<SystemTime>) -> SimpleFileOptions {
    let opts = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(size >= u32::MAX as u64);
    match mtime.and_then(zip_time) {
        Some(ts) => opts.last_modified_time(ts),
        None => opts,
    }
}

/// Write one planned part to `out_dir/{year}_partNN.zip`, replacing any
/// previous file of that name. The archive is finished and closed on return.
pub fn write_archive(plan: &ArchivePlan, out_dir: &Path) -> Result<WrittenArchive> {
    let name = plan.file_name();
    let path = out_dir.join(&name);
    tracing::debug!(archive = %name, members = plan.members.len(), "opening archive");

    let mut zip = ZipWriter::new(BufWriter::new(File::create(&path)?));
    for m in &plan.members {
        zip.start_file(m.path.as_str(), entry_options(m.size, m.mtime))?;
        let mut src = File::open(&m.source)?;
        io::copy(&mut src, &mut zip)?;
    }
    let mut out = zip.finish()?;
    out.flush()?;

    tracing::debug!(archive = %name, bytes = plan.bytes, "archive finished");
    Ok(WrittenArchive {
        name,
        path,
        members: plan.members.len(),
        bytes: plan.bytes,
    })
}

fn part_number(file_name: &str, year: YearKey) -> Option<u32> {
    let prefix = format!("{year}_part");
    let digits = file_name.strip_prefix(&prefix)?.strip_suffix(".zip")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Remove `{year}_partNN.zip` files whose part number is above `keep`.
/// Returns the removed file names, sorted.
pub fn prune_stale_parts(out_dir: &Path, year: YearKey, keep: u32) -> Result<Vec<String>> {
    let mut removed = Vec::new();
    for e in fs::read_dir(out_dir)? {
        let e = e?;
        if !e.file_type()?.is_file() {
            continue;
        }
        let name = e.file_name().to_string_lossy().to_string();
        match part_number(&name, year) {
            Some(n) if n > keep => {
                fs::remove_file(e.path())?;
                tracing::info!(archive = %name, "removed stale part");
                removed.push(name);
            }
            _ => {}
        }
    }
    removed.sort();
    Ok(removed)
}
