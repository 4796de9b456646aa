//! Descriptor file discovery.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Find every descriptor file under `root`, oldest first.
///
/// Files are ordered by modification time so that a later edit overrides an
/// earlier one during the merge. Ties keep lexicographic path order. A file
/// whose mtime cannot be read sorts first; reading it later will most likely
/// fail too, and it is skipped then.
///
/// Symlinks to regular files are followed and ordered by their target's
/// mtime. Symlinked directories are not descended into. Hidden files and
/// directories (leading `.`) below `root` are skipped.
pub fn discover(root: &Path, suffix: &str) -> Vec<PathBuf> {
    let mut found: Vec<(PathBuf, SystemTime)> = Vec::new();

    let walk = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(suffix));
        if !matches {
            continue;
        }

        let mtime = if entry.path_is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
                Ok(_) => continue,
                Err(err) => {
                    warn!(path = %entry.path().display(), error = %err, "skipping dangling descriptor link");
                    continue;
                }
            }
        } else if entry.file_type().is_file() {
            entry
                .metadata()
                .ok()
                .and_then(|meta| meta.modified().ok())
                .unwrap_or(SystemTime::UNIX_EPOCH)
        } else {
            continue;
        };
        found.push((entry.into_path(), mtime));
    }

    found.sort_by(|a, b| a.0.cmp(&b.0));
    found.sort_by_key(|&(_, mtime)| mtime);
    found.into_iter().map(|(path, _)| path).collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}
