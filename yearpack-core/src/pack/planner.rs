//! Greedy size-bounded packing of one year bucket.
//!
//! Files are taken smallest first and appended to the current part until the
//! next one would push it past the budget, at which point a new part starts.
//! This is a simple heuristic and deliberately not an optimal bin packer, so
//! the output is easy to predict from the input.

use crate::domain::{ArchivePlan, BucketPlan, FileRecord, YearKey};

pub fn plan_bucket(year: YearKey, mut files: Vec<FileRecord>, budget: u64) -> BucketPlan {
    // sort_by_key is stable: equal sizes keep scan order
    files.sort_by_key(|f| f.size);

    let mut archives: Vec<ArchivePlan> = Vec::new();
    let mut skipped = Vec::new();
    let mut current: Option<ArchivePlan> = None;

    for f in files {
        if f.size > budget {
            skipped.push(f);
            continue;
        }
        let full = current
            .as_ref()
            .is_none_or(|a| a.bytes.checked_add(f.size).is_none_or(|t| t > budget));
        if full {
            if let Some(done) = current.take() {
                archives.push(done);
            }
            current = Some(ArchivePlan {
                year,
                part: archives.len() as u32 + 1,
                members: Vec::new(),
                bytes: 0,
            });
        }
        if let Some(a) = current.as_mut() {
            a.bytes += f.size;
            a.members.push(f);
        }
    }
    if let Some(done) = current {
        archives.push(done);
    }

    BucketPlan {
        year,
        archives,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MIB;
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn rec(path: &str, size: u64) -> FileRecord {
        FileRecord {
            path: path.into(),
            source: PathBuf::from(path),
            size,
            mtime: None,
        }
    }

    fn names(a: &ArchivePlan) -> Vec<&str> {
        a.members.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn mixed_sizes_example() {
        let files = vec![
            rec("ten", 10 * MIB),
            rec("ninety", 90 * MIB),
            rec("five", 5 * MIB),
            rec("ninety-six", 96 * MIB),
        ];
        let plan = plan_bucket(YearKey::Year(2020), files, 95 * MIB);

        assert_eq!(plan.archives.len(), 2);
        assert_eq!(plan.archives[0].file_name(), "2020_part01.zip");
        assert_eq!(names(&plan.archives[0]), vec!["five", "ten"]);
        assert_eq!(plan.archives[0].bytes, 15 * MIB);
        assert_eq!(plan.archives[1].file_name(), "2020_part02.zip");
        assert_eq!(names(&plan.archives[1]), vec!["ninety"]);
        assert_eq!(plan.archives[1].bytes, 90 * MIB);
        assert_eq!(plan.skipped.len(), 1);
        assert_eq!(plan.skipped[0].path, "ninety-six");
    }

    #[test]
    fn empty_bucket_has_no_archives() {
        let plan = plan_bucket(YearKey::Unknown, Vec::new(), 100);
        assert!(plan.archives.is_empty());
        assert!(plan.skipped.is_empty());
    }

    #[test]
    fn all_oversized() {
        let plan = plan_bucket(YearKey::Year(2001), vec![rec("a", 11), rec("b", 12)], 10);
        assert!(plan.archives.is_empty());
        assert_eq!(plan.skipped.len(), 2);
    }

    #[test]
    fn exact_fit_stays_in_one_part() {
        let plan = plan_bucket(YearKey::Year(2010), vec![rec("a", 4), rec("b", 6)], 10);
        assert_eq!(plan.archives.len(), 1);
        assert_eq!(plan.archives[0].bytes, 10);
    }

    #[test]
    fn file_equal_to_budget_is_archived() {
        let plan = plan_bucket(YearKey::Year(2010), vec![rec("a", 10)], 10);
        assert_eq!(plan.archives.len(), 1);
        assert!(plan.skipped.is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        let files = vec![rec("c", 5), rec("a", 5), rec("b", 5), rec("small", 1)];
        let plan = plan_bucket(YearKey::Year(2011), files, 100);
        assert_eq!(names(&plan.archives[0]), vec!["small", "c", "a", "b"]);
    }

    #[test]
    fn zero_byte_files_pack_together() {
        let files = vec![rec("a", 0), rec("b", 0), rec("c", 10)];
        let plan = plan_bucket(YearKey::Year(2012), files, 10);
        assert_eq!(plan.archives.len(), 1);
        assert_eq!(names(&plan.archives[0]), vec!["a", "b", "c"]);
    }

    #[test]
    fn parts_never_reopen() {
        // sorted: 3, 4, 8 -> [3,4] then [8]; nothing goes back into part 1
        let files = vec![rec("eight", 8), rec("three", 3), rec("four", 4)];
        let plan = plan_bucket(YearKey::Year(2013), files, 10);
        let parts: Vec<_> = plan.archives.iter().map(|a| a.part).collect();
        assert_eq!(parts, vec![1, 2]);
        assert_eq!(names(&plan.archives[0]), vec!["three", "four"]);
        assert_eq!(names(&plan.archives[1]), vec!["eight"]);
    }

    #[test]
    fn budget_near_u64_max_does_not_overflow() {
        let files = vec![rec("big", u64::MAX - 1), rec("small", 5)];
        let plan = plan_bucket(YearKey::Year(2014), files, u64::MAX);
        assert_eq!(plan.archives.len(), 2);
        assert_eq!(names(&plan.archives[0]), vec!["small"]);
        assert_eq!(names(&plan.archives[1]), vec!["big"]);
    }

    proptest! {
        #[test]
        fn packing_properties(
            sizes in prop::collection::vec(0u64..200, 0..60),
            budget in 1u64..150,
        ) {
            let files: Vec<_> = sizes
                .iter()
                .enumerate()
                .map(|(i, s)| rec(&format!("f{i}"), *s))
                .collect();
            let plan = plan_bucket(YearKey::Year(2020), files, budget);

            for (i, a) in plan.archives.iter().enumerate() {
                prop_assert_eq!(a.part as usize, i + 1);
                prop_assert!(!a.members.is_empty());
                prop_assert!(a.bytes <= budget);
                prop_assert_eq!(a.bytes, a.members.iter().map(|f| f.size).sum::<u64>());
            }
            for s in &plan.skipped {
                prop_assert!(s.size > budget);
            }

            let mut seen: Vec<String> = plan
                .archives
                .iter()
                .flat_map(|a| a.members.iter().map(|f| f.path.clone()))
                .chain(plan.skipped.iter().map(|f| f.path.clone()))
                .collect();
            seen.sort();
            let mut want: Vec<String> = (0..sizes.len()).map(|i| format!("f{i}")).collect();
            want.sort();
            prop_assert_eq!(seen, want);

            // members in part order are ascending by size
            let order: Vec<u64> = plan
                .archives
                .iter()
                .flat_map(|a| a.members.iter().map(|f| f.size))
                .collect();
            prop_assert!(order.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
