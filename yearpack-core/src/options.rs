use crate::domain::MIB;
use crate::error::{Result, YearpackError};
use serde::Serialize;
use std::path::PathBuf;

pub const DEFAULT_ROOT_DIR: &str = "takeout/temp_extract";
pub const DEFAULT_OUTPUT_DIR: &str = "takeout/archives";
/// Stays under a 100 MiB hard ceiling on the storage side.
pub const DEFAULT_BUDGET_BYTES: u64 = 95 * MIB;

#[derive(Clone, Debug, Serialize)]
pub struct PackOptions {
    pub root_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Upper bound on the summed (uncompressed) member size of one archive.
    pub budget_bytes: u64,
    /// Plan and report, write nothing.
    pub dry_run: bool,
    /// Delete higher-numbered parts left over from an earlier run.
    pub prune_stale: bool,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            budget_bytes: DEFAULT_BUDGET_BYTES,
            dry_run: false,
            prune_stale: false,
        }
    }
}

impl PackOptions {
    pub fn validate(&self) -> Result<()> {
        if self.budget_bytes == 0 {
            return Err(YearpackError::Config("budget must be at least one byte".into()));
        }
        if self.root_dir.as_os_str().is_empty() {
            return Err(YearpackError::Config("root directory is empty".into()));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(YearpackError::Config("output directory is empty".into()));
        }
        Ok(())
    }
}
