use crate::classify::classify;
use crate::domain::{FileRecord, YearKey};
use std::collections::BTreeMap;

/// Group files by inferred year. Scan order is kept inside each bucket.
pub fn bucket_by_year(files: Vec<FileRecord>) -> BTreeMap<YearKey, Vec<FileRecord>> {
    let mut buckets: BTreeMap<YearKey, Vec<FileRecord>> = BTreeMap::new();
    for f in files {
        let key = YearKey::from(classify(&f));
        buckets.entry(key).or_default().push(f);
    }
    buckets
}
