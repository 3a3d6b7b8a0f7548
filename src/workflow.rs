use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::config::{OutputConfig, OutputLayout};
use crate::copy::copy_with_metadata;
use crate::error::{Result, TransnameError};
use crate::rewrite::{ensure_parent_dirs, relative_dir, split_name, target_path};
use crate::translate::{Translation, Translator, translate_name};
use crate::walk::enumerate_files_except;

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Files found under the source directory
    pub discovered: usize,
    /// Files processed, successfully or not
    pub attempted: usize,
    /// Files copied to the target directory
    pub copied: usize,
    /// Files skipped because a step failed
    pub failed: usize,
    /// Copied files that kept their original name because translation failed
    pub fallbacks: usize,
}

/// Result of processing one source file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub target: PathBuf,
    pub translation: Translation,
}

pub struct Workflow {
    translator: Box<dyn Translator>,
    output: OutputConfig,
    skip_dirs: Vec<PathBuf>,
}

/// Fail unless both directories exist
pub fn validate_directories(source_dir: &Path, target_dir: &Path) -> Result<()> {
    for (role, dir) in [("source", source_dir), ("target", target_dir)] {
        if !dir.is_dir() {
            return Err(TransnameError::DirectoryNotFound {
                role: role.to_string(),
                path: dir.display().to_string(),
            });
        }
    }
    Ok(())
}

impl Workflow {
    /// `translator` is the model loaded once for the whole run
    pub fn new(translator: Box<dyn Translator>, output: OutputConfig) -> Self {
        Self {
            translator,
            output,
            skip_dirs: Vec::new(),
        }
    }

    /// Leave files below `dir` out of the run, e.g. our own log directory
    pub fn skip_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.skip_dirs.push(dir.as_ref().to_path_buf());
        self
    }

    /// Copy every file under `source_dir` into `target_dir` under its
    /// translated name.
    ///
    /// A failure on one file is logged and counted; it never stops the run.
    /// Only enumeration of the source root itself can fail the whole call.
    pub async fn translate_filenames<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source_dir: P,
        target_dir: Q,
    ) -> Result<RunReport> {
        let source_dir = source_dir.as_ref();
        let target_dir = target_dir.as_ref();
        info!(
            "Translating file names from {} to {} with model '{}'",
            source_dir.display(),
            target_dir.display(),
            self.translator.model_id()
        );

        let files = enumerate_files_except(source_dir, &self.skip_dirs)?;
        let mut report = RunReport {
            discovered: files.len(),
            ..RunReport::default()
        };
        info!("Found {} files to process", files.len());

        let progress = self.progress_bar(files.len() as u64);

        for file in &files {
            report.attempted += 1;

            match self.process_file(source_dir, target_dir, file).await {
                Ok(outcome) => {
                    report.copied += 1;
                    if outcome.translation.is_fallback() {
                        report.fallbacks += 1;
                    }
                }
                Err(e) => {
                    report.failed += 1;
                    progress.suspend(|| {
                        warn!("Error translating/copying file {}: {}", file.display(), e)
                    });
                }
            }

            progress.inc(1);
        }

        progress.finish_and_clear();
        info!(
            "Done: {} copied, {} failed, {} kept their original name",
            report.copied, report.failed, report.fallbacks
        );

        Ok(report)
    }

    /// Translate the stem of `file`, then copy it below `target_root`
    pub async fn process_file(
        &self,
        source_root: &Path,
        target_root: &Path,
        file: &Path,
    ) -> Result<FileOutcome> {
        let (stem, extension) = split_name(file)?;
        let translation = translate_name(self.translator.as_ref(), &stem.to_string_lossy()).await;

        // A fallback keeps the raw stem so non-UTF-8 names come out unchanged
        let name = match &translation {
            Translation::Translated(text) => OsStr::new(text.as_str()),
            Translation::Fallback { .. } => stem.as_os_str(),
        };

        let relative = match self.output.layout {
            OutputLayout::Flat => PathBuf::new(),
            OutputLayout::Mirror => relative_dir(source_root, file),
        };
        let target = target_path(target_root, &relative, name, &extension)?;

        ensure_parent_dirs(&target).await?;
        copy_with_metadata(file, &target, self.output.preserve_timestamps).await?;
        debug!("Copied {} -> {}", file.display(), target.display());

        Ok(FileOutcome {
            source: file.to_path_buf(),
            target,
            translation,
        })
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.output.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::with_template(
            "{msg}: {percent:>3}%|{bar:40.cyan/blue}| {pos}/{len} [{elapsed_precise}<{eta_precise}]",
        ) {
            progress.set_style(style.progress_chars("#>-"));
        }
        progress.set_message("Translating filenames");
        progress
    }
}
