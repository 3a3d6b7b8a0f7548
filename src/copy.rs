use std::path::Path;
use filetime::FileTime;
use tokio::fs;
use tracing::debug;

use crate::error::Result;

/// Copy `source` to `target` with its permissions and, when asked, its
/// access and modification times. An existing `target` is overwritten.
///
/// The parent directory of `target` must already exist. Returns the number of
/// bytes copied. Timestamps are best effort and never fail the copy.
pub async fn copy_with_metadata(source: &Path, target: &Path, preserve_timestamps: bool) -> Result<u64> {
    let bytes = fs::copy(source, target).await?;

    if preserve_timestamps {
        if let Err(e) = copy_timestamps(source, target).await {
            debug!("Could not copy timestamps to {}: {}", target.display(), e);
        }
    }

    Ok(bytes)
}

async fn copy_timestamps(source: &Path, target: &Path) -> Result<()> {
    let metadata = fs::metadata(source).await?;
    let accessed = FileTime::from_last_access_time(&metadata);
    let modified = FileTime::from_last_modification_time(&metadata);

    filetime::set_file_times(target, accessed, modified)?;
    Ok(())
}
