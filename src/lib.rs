pub mod date;
pub mod error;
pub mod media;
pub mod scan;
pub mod writer;

#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::{info, warn};
use serde::{Deserialize, Serialize};

pub use date::Resolver;
pub use error::{ExportError, FileError, ResolveError};
pub use media::{Media, MediaKind};

fn default_exiftool() -> PathBuf {
    PathBuf::from(date::DEFAULT_EXIFTOOL)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Directory tree to read media from
    pub source: PathBuf,
    /// Existing directory every exported file lands in, flattened
    pub dest: PathBuf,
    /// Program queried for video creation dates
    #[serde(default = "default_exiftool")]
    pub exiftool: PathBuf,
}

impl ExportOptions {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            exiftool: default_exiftool(),
        }
    }

    pub fn with_exiftool(mut self, exiftool: impl Into<PathBuf>) -> Self {
        self.exiftool = exiftool.into();
        self
    }
}

/// What happened to one source file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Copied to `dest` and stamped with `taken`.
    Exported { dest: PathBuf, taken: NaiveDateTime },
    /// No capture date, or not a supported media type. Nothing was copied.
    Skipped,
    /// A capture date was found but the copy or stamp failed.
    Failed(FileError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub files_seen: u64,
    pub exported: u64,
    pub skipped: u64,
    pub failed: u64,
}

/// Type alias for the per-file outcome callback
pub type OutcomeCallback<'a> = dyn FnMut(&Media, &FileOutcome) + 'a;

/// Export every dated media file under `options.source` into `options.dest`.
pub fn export(options: &ExportOptions) -> Result<ExportSummary, ExportError> {
    export_with(options, &mut |_, _| {})
}

/// Like [`export`], also handing each file's outcome to `on_outcome`.
///
/// Per-file failures are counted and logged. The run ends early only when
/// the source cannot be read or the destination is missing or unwritable,
/// checked up front and again whenever a copy fails.
pub fn export_with(
    options: &ExportOptions,
    on_outcome: &mut OutcomeCallback<'_>,
) -> Result<ExportSummary, ExportError> {
    if !options.source.is_dir() {
        return Err(ExportError::SourceNotDir(options.source.clone()));
    }
    ensure_dest_usable(&options.dest)?;

    let resolver = Resolver::new(&options.exiftool);
    let media_list = scan::scan_dir(&options.source)?;

    let mut summary = ExportSummary::default();
    for m in &media_list {
        summary.files_seen += 1;
        let outcome = export_one(&resolver, m, &options.dest);

        match &outcome {
            FileOutcome::Exported { taken, .. } => {
                summary.exported += 1;
                info!("Exported {} with original capture date {}", m.filename, taken);
            }
            FileOutcome::Skipped => {
                summary.skipped += 1;
                info!(
                    "Could not retrieve capture date for {}. Skipping export.",
                    m.path.display()
                );
            }
            FileOutcome::Failed(e) => {
                summary.failed += 1;
                warn!("Error exporting {}: {}", m.path.display(), e);
            }
        }
        on_outcome(m, &outcome);

        if let FileOutcome::Failed(FileError::Copy { .. }) = &outcome {
            ensure_dest_usable(&options.dest)?;
        }
    }

    info!(
        "{} file(s) seen: {} exported, {} skipped, {} failed",
        summary.files_seen, summary.exported, summary.skipped, summary.failed
    );
    Ok(summary)
}

fn ensure_dest_usable(dest: &Path) -> Result<(), ExportError> {
    if !dest.is_dir() {
        return Err(ExportError::DestNotDir(dest.to_path_buf()));
    }
    writer::check_writable(dest).map_err(|source| ExportError::DestUnwritable {
        path: dest.to_path_buf(),
        source,
    })
}

fn export_one(resolver: &Resolver, media: &Media, dest_dir: &Path) -> FileOutcome {
    let Some(taken) = resolver.resolve(media) else {
        return FileOutcome::Skipped;
    };
    match writer::export_file(media, &taken, dest_dir) {
        Ok(dest) => FileOutcome::Exported { dest, taken },
        Err(e) => FileOutcome::Failed(e),
    }
}
