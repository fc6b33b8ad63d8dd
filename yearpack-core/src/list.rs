use crate::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListedEntry {
    pub name: String,
    pub size: u64,
    pub compressed_size: u64,
}

/// Entries of a produced archive, in the order they were written.
pub fn list(archive: &Path) -> Result<Vec<ListedEntry>> {
    let mut zip = zip::ZipArchive::new(BufReader::new(File::open(archive)?))?;
    let mut out = Vec::with_capacity(zip.len());
    for i in 0..zip.len() {
        let e = zip.by_index_raw(i)?;
        out.push(ListedEntry {
            name: e.name().to_string(),
            size: e.size(),
            compressed_size: e.compressed_size(),
        });
    }
    Ok(out)
}
