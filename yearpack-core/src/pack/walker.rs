use crate::domain::FileRecord;
use crate::error::{Result, YearpackError};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// An entry the walk could not read. It is left out of the run, not fatal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScanIssue {
    pub path: String,
    pub reason: String,
}

#[derive(Clone, Debug, Default)]
pub struct ScanOutcome {
    pub files: Vec<FileRecord>,
    pub issues: Vec<ScanIssue>,
}

/// Root-relative path with `/` separators, whatever the host uses.
pub(crate) fn rel_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect();
    parts.join("/")
}

/// Collect every regular file below `root`. Symlinks are not followed.
/// Directory entries come back sorted by name so repeated scans agree.
pub fn scan(root: &Path) -> Result<ScanOutcome> {
    walk(root, None)
}

/// Like [`scan`], but leaves out the subtree at `exclude` when it lies under
/// `root`. An `exclude` that does not exist yet has nothing to leave out.
pub fn scan_excluding(root: &Path, exclude: &Path) -> Result<ScanOutcome> {
    let (Ok(canon_root), Ok(canon_excl)) = (fs::canonicalize(root), fs::canonicalize(exclude))
    else {
        return walk(root, None);
    };
    match canon_excl.strip_prefix(&canon_root) {
        Ok(rel) if rel.as_os_str().is_empty() => Err(YearpackError::Config(format!(
            "output directory is the scan root: {}",
            exclude.display()
        ))),
        Ok(rel) => walk(root, Some(&root.join(rel))),
        Err(_) => walk(root, None),
    }
}

fn walk(root: &Path, skip_dir: Option<&Path>) -> Result<ScanOutcome> {
    let md = fs::metadata(root)?;
    if !md.is_dir() {
        return Err(YearpackError::Config(format!(
            "scan root is not a directory: {}",
            root.display()
        )));
    }

    let mut out = ScanOutcome::default();
    // lossy names of non-UTF-8 files can coincide; zip entry names must not
    let mut seen: HashSet<String> = HashSet::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && skip_dir == Some(e.path())));
    for e in walker {
        let e = match e {
            Ok(e) => e,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                let path = err
                    .path()
                    .map(|p| rel_path(p, root))
                    .unwrap_or_default();
                tracing::warn!(path = path.as_str(), error = %err, "skipping unreadable entry");
                out.issues.push(ScanIssue {
                    path,
                    reason: err.to_string(),
                });
                continue;
            }
        };
        if !e.file_type().is_file() {
            continue;
        }
        let path = rel_path(e.path(), root);
        if seen.contains(&path) {
            tracing::warn!(
                path = path.as_str(),
                source = %e.path().display(),
                "skipping file whose entry name is already taken"
            );
            out.issues.push(ScanIssue {
                reason: format!("entry name already taken by another file: {}", e.path().display()),
                path,
            });
            continue;
        }
        match e.metadata() {
            Ok(md) => {
                seen.insert(path.clone());
                out.files.push(FileRecord {
                    path,
                    source: e.path().to_path_buf(),
                    size: md.len(),
                    mtime: md.modified().ok(),
                });
            }
            Err(err) => {
                tracing::warn!(path = path.as_str(), error = %err, "skipping file without metadata");
                out.issues.push(ScanIssue {
                    path,
                    reason: err.to_string(),
                });
            }
        }
    }
    tracing::debug!(
        root = %root.display(),
        files = out.files.len(),
        issues = out.issues.len(),
        "scan complete"
    );
    Ok(out)
}
