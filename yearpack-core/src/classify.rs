//! Year inference for a single file.
//!
//! The filename is tried against an ordered list of patterns; the first
//! pattern whose leftmost match carries a year inside [`MIN_YEAR`, `MAX_YEAR`]
//! wins. A pattern that matches with an out-of-range year does not look for a
//! later occurrence, the next pattern is tried instead. When no pattern
//! produces a usable year the file's modification time decides.

use crate::domain::FileRecord;
use regex::Regex;
use std::sync::LazyLock;
use std::time::SystemTime;
use time::{OffsetDateTime, UtcOffset};

pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2025;

// Most specific first. Group 1 is always the year.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"([0-9]{4})[0-9]{4}_[0-9]{6}", // 20220517_130347
        r"signal-([0-9]{4})-[0-9]{2}-[0-9]{2}", // signal-2018-10-06
        r"([0-9]{4})-[0-9]{2}-[0-9]{2}", // 2018-10-06
        r"^([0-9]{4})",                 // starts with year
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static year pattern"))
    .collect()
});

/// Year encoded in a bare file name, if any pattern yields one in range.
pub fn year_from_filename(name: &str) -> Option<i32> {
    PATTERNS.iter().find_map(|re| {
        let caps = re.captures(name)?;
        let year: i32 = caps[1].parse().ok()?;
        (MIN_YEAR..=MAX_YEAR).contains(&year).then_some(year)
    })
}

/// `t` in the local time zone, or UTC when the offset cannot be determined.
pub fn local_time(t: SystemTime) -> OffsetDateTime {
    let utc = OffsetDateTime::from(t);
    let offset = UtcOffset::local_offset_at(utc).unwrap_or(UtcOffset::UTC);
    utc.to_offset(offset)
}

/// Calendar year of `t` in the local time zone.
pub fn mtime_year(t: SystemTime) -> i32 {
    local_time(t).year()
}

/// Filename first, then mtime. `None` means the file belongs in the unknown bucket.
pub fn classify(record: &FileRecord) -> Option<i32> {
    year_from_filename(record.file_name()).or_else(|| record.mtime.map(mtime_year))
}
