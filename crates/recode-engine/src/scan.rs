//! File enumeration for rewrites.

use recode_domain::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Fail unless `root` is an existing directory.
pub fn ensure_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(Error::RootNotFound {
            path: root.to_path_buf(),
        })
    }
}

/// True if `path` has one of `extensions` (exact, case-sensitive).
pub fn has_extension(path: &Path, extensions: &BTreeSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(ext))
}

/// True if the root-relative path of `path` matches any exclude pattern.
///
/// Patterns are compared against whole path components: `target/` matches a
/// directory named `target` anywhere in the tree but not `Retarget`. A
/// trailing `/` restricts the last pattern component to directories.
pub fn is_excluded(root: &Path, path: &Path, is_dir: bool, exclude: &[String]) -> bool {
    if exclude.is_empty() {
        return false;
    }
    let relative = path.strip_prefix(root).unwrap_or(path);
    let components: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if components.is_empty() {
        return false;
    }
    exclude
        .iter()
        .any(|pattern| matches_components(&components, is_dir, pattern))
}

fn matches_components(components: &[String], is_dir: bool, pattern: &str) -> bool {
    let parts: Vec<&str> = pattern.split('/').filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        return false;
    }
    // A file name can never match a directory-only pattern
    let searchable = if pattern.ends_with('/') && !is_dir {
        &components[..components.len() - 1]
    } else {
        components
    };
    searchable
        .windows(parts.len())
        .any(|window| window.iter().zip(&parts).all(|(c, p)| c == p))
}

/// Regular files under `root` with a matching extension, sorted by path.
///
/// Symlinks are not followed. An unreadable directory is an I/O error on that
/// directory.
pub fn collect_files(
    root: &Path,
    extensions: &BTreeSet<String>,
    exclude: &[String],
) -> Result<Vec<PathBuf>> {
    ensure_root(root)?;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded(root, e.path(), e.file_type().is_dir(), exclude));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            Error::io(path, e.into())
        })?;
        if is_candidate(&entry, extensions) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_candidate(entry: &DirEntry, extensions: &BTreeSet<String>) -> bool {
    entry.file_type().is_file() && has_extension(entry.path(), extensions)
}
