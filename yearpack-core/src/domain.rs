// yearpack_core/src/domain.rs
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

pub const MIB: u64 = 1024 * 1024;

/// One regular file captured by a scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path relative to the scan root, `/`-separated. Used as the zip entry name.
    pub path: String,
    #[serde(skip)]
    pub source: PathBuf,
    pub size: u64,
    #[serde(skip)]
    pub mtime: Option<SystemTime>,
}

impl FileRecord {
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Bucket key. Years sort ascending, `Unknown` sorts last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub enum YearKey {
    Year(i32),
    Unknown,
}

impl From<Option<i32>> for YearKey {
    fn from(y: Option<i32>) -> Self {
        y.map_or(YearKey::Unknown, YearKey::Year)
    }
}

impl From<YearKey> for String {
    fn from(k: YearKey) -> Self {
        k.to_string()
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearKey::Year(y) => write!(f, "{y}"),
            YearKey::Unknown => f.write_str("unknown"),
        }
    }
}

/// `{year}_part{NN}.zip`, part zero-padded to two digits.
pub fn archive_name(year: YearKey, part: u32) -> String {
    format!("{year}_part{part:02}.zip")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchivePlan {
    pub year: YearKey,
    pub part: u32,
    pub members: Vec<FileRecord>,
    pub bytes: u64,
}

impl ArchivePlan {
    pub fn file_name(&self) -> String {
        archive_name(self.year, self.part)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketPlan {
    pub year: YearKey,
    pub archives: Vec<ArchivePlan>,
    pub skipped: Vec<FileRecord>,
}

pub fn mib(bytes: u64) -> f64 {
    bytes as f64 / MIB as f64
}
