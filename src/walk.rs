use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// List every file below `root`, descending into subdirectories.
///
/// Directory entries are not returned and directory symlinks are not
/// descended into. A symlink to a file is listed like a file; a dangling
/// symlink is listed too so copying it fails visibly instead of the name
/// vanishing. An unreadable entry below the root is logged and its subtree
/// skipped; an unreadable root is an error. Entries are sorted by name per
/// directory.
pub fn enumerate_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    enumerate_files_except(root, &[])
}

/// [`enumerate_files`], leaving out everything below the `skip` directories
pub fn enumerate_files_except<P: AsRef<Path>>(root: P, skip: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let skip: Vec<PathBuf> = skip.iter().filter_map(|dir| dir.canonicalize().ok()).collect();
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped(entry, &skip));

    for entry in walker {
        match entry {
            Ok(entry) => {
                if is_listed_file(&entry) {
                    files.push(entry.into_path());
                }
            }
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => warn!("Skipping unreadable entry under {}: {}", root.display(), e),
        }
    }

    debug!("Found {} files under {}", files.len(), root.display());
    Ok(files)
}

fn is_listed_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if file_type.is_symlink() {
        return match std::fs::metadata(entry.path()) {
            Ok(target) => !target.is_dir(),
            Err(_) => {
                debug!("Dangling symlink {}", entry.path().display());
                true
            }
        };
    }
    false
}

fn is_skipped(entry: &DirEntry, skip: &[PathBuf]) -> bool {
    if skip.is_empty() || !entry.file_type().is_dir() {
        return false;
    }
    match entry.path().canonicalize() {
        Ok(path) => skip.contains(&path),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_enumerates_nested_files_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();
        fs::write(dir.path().join("top.txt"), "1").unwrap();
        fs::write(dir.path().join("a/mid.md"), "2").unwrap();
        fs::write(dir.path().join("a/b/deep"), "3").unwrap();

        let files = enumerate_files(dir.path()).unwrap();
        let mut relative: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        relative.sort();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("a/b/deep"),
                PathBuf::from("a/mid.md"),
                PathBuf::from("top.txt"),
            ]
        );
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(enumerate_files(dir.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_listed() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("other")).unwrap();
        fs::write(dir.path().join("real.txt"), "1").unwrap();
        fs::write(dir.path().join("other/linked.txt"), "2").unwrap();
        symlink(dir.path().join("other/linked.txt"), dir.path().join("link.txt")).unwrap();
        symlink(dir.path().join("nowhere.txt"), dir.path().join("dangling.txt")).unwrap();
        symlink(dir.path().join("other"), dir.path().join("dirlink")).unwrap();

        let files = enumerate_files(dir.path()).unwrap();
        let mut relative: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        relative.sort();

        assert_eq!(
            relative,
            vec![
                PathBuf::from("dangling.txt"),
                PathBuf::from("link.txt"),
                PathBuf::from("other/linked.txt"),
                PathBuf::from("real.txt"),
            ]
        );
    }

    #[test]
    fn test_skipped_directory_is_left_out() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".transname/log")).unwrap();
        fs::write(dir.path().join(".transname/log/transname.log"), "log").unwrap();
        fs::write(dir.path().join("keep.txt"), "1").unwrap();

        let files = enumerate_files_except(dir.path(), &[dir.path().join(".transname/log")]).unwrap();

        assert_eq!(files, vec![dir.path().join("keep.txt")]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(enumerate_files(dir.path().join("missing")).is_err());
    }
}
