// src/discovery.rs
use crate::config::{Config, PRUNE_DIRS};
use crate::lang::Lang;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Runs the file discovery pipeline over every root. A root may be a
/// directory (walked recursively) or a single file (kept when it is C#).
/// The result is sorted and free of duplicates.
#[must_use]
pub fn discover(roots: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in roots {
        if root.is_file() {
            files.push(root.clone());
        } else {
            files.extend(walk_filesystem(root));
        }
    }
    files.retain(|p| Lang::from_path(p).is_some());

    let mut files = filter_config(files, config);
    files.sort();
    files.dedup();
    tracing::debug!(count = files.len(), "discovered source files");
    files
}

fn walk_filesystem(root: &Path) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy()));

    let (paths, error_count) = accumulate_walker(walker);
    if error_count > 0 {
        tracing::warn!(root = %root.display(), error_count, "errors during file walk");
    }
    paths
}

fn accumulate_walker<I>(walker: I) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    let p = entry.path().strip_prefix(".").unwrap_or(entry.path());
                    paths.push(p.to_path_buf());
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                errors += 1;
            }
        }
    }
    (paths, errors)
}

#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn filter_config(mut paths: Vec<PathBuf>, config: &Config) -> Vec<PathBuf> {
    if !config.include_patterns.is_empty() {
        paths.retain(|p| {
            let s = normalize_path(p);
            config.include_patterns.iter().any(|re| re.is_match(&s))
        });
    }

    if !config.exclude_patterns.is_empty() {
        paths.retain(|p| {
            let s = normalize_path(p);
            !config.exclude_patterns.iter().any(|re| re.is_match(&s))
        });
    }

    paths
}
