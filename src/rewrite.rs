use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use crate::error::{Result, TransnameError};

/// Split a file path's base name into its stem and extension.
///
/// The extension keeps its leading dot and is returned verbatim, or empty
/// when there is none: `archive.tar.gz` gives `("archive.tar", ".gz")` and
/// `.bashrc` gives `(".bashrc", "")`. Leading dots always belong to the
/// stem, so `...cfg` and `..foo` have no extension. Both parts are returned
/// as raw OS strings; non-UTF-8 names survive unchanged.
pub fn split_name(path: &Path) -> Result<(OsString, OsString)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| TransnameError::InvalidFileName(path.display().to_string()))?;
    let stem = path
        .file_stem()
        .ok_or_else(|| TransnameError::InvalidFileName(path.display().to_string()))?;

    // `file_stem` splits `...cfg` into `..` and `cfg`; a stem made of dots
    // alone means the name has no extension.
    if stem.to_string_lossy().chars().all(|c| c == '.') {
        return Ok((file_name.to_os_string(), OsString::new()));
    }

    let extension = match path.extension() {
        Some(ext) => {
            let mut dotted = OsString::from(".");
            dotted.push(ext);
            dotted
        }
        None => OsString::new(),
    };

    Ok((stem.to_os_string(), extension))
}

/// Directory of `source_file` relative to `source_root`, empty at the top level
pub fn relative_dir(source_root: &Path, source_file: &Path) -> PathBuf {
    source_file
        .parent()
        .and_then(|parent| pathdiff::diff_paths(parent, source_root))
        .unwrap_or_default()
}

/// Build `target_root/relative_dir/<stem><extension>`.
///
/// A stem that is absolute or walks out of the target with `..` is rejected.
/// Separators inside the stem produce nested directories.
pub fn target_path(
    target_root: &Path,
    relative_dir: &Path,
    translated_stem: &OsStr,
    extension: &OsStr,
) -> Result<PathBuf> {
    let escapes = Path::new(translated_stem).components().any(|component| {
        matches!(component, Component::RootDir | Component::Prefix(_) | Component::ParentDir)
    });
    if escapes || translated_stem.is_empty() {
        return Err(TransnameError::InvalidFileName(format!(
            "translated name '{}' does not stay inside {}",
            translated_stem.to_string_lossy(),
            target_root.display()
        )));
    }

    let mut file_name = translated_stem.to_os_string();
    file_name.push(extension);

    Ok(target_root.join(relative_dir).join(file_name))
}

/// Create every missing directory above `path`; succeeds if they exist
pub async fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    Ok(())
}
