pub mod exif;
pub mod video;

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::error::ResolveError;
use crate::media::{Media, MediaKind};

/// Fixed layout of both EXIF datetimes and the exiftool output we request.
pub const CAPTURE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

pub const DEFAULT_EXIFTOOL: &str = "exiftool";

/// Parse `YYYY:MM:DD HH:MM:SS`. Surrounding whitespace is ignored, nothing else is.
pub fn parse_capture_time(s: &str) -> Result<NaiveDateTime, ResolveError> {
    let value = s.trim();
    NaiveDateTime::parse_from_str(value, CAPTURE_FORMAT).map_err(|source| {
        ResolveError::Timestamp {
            value: value.to_string(),
            source,
        }
    })
}

/// Finds the capture date of a media file.
///
/// Extraction is best effort: every failure is logged here and comes back
/// as `None`, so one unreadable file never stops a batch.
#[derive(Debug, Clone)]
pub struct Resolver {
    exiftool: PathBuf,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_EXIFTOOL)
    }
}

impl Resolver {
    /// `exiftool` is the program run for video files (a name on `PATH` or a full path).
    pub fn new(exiftool: impl Into<PathBuf>) -> Self {
        Self {
            exiftool: exiftool.into(),
        }
    }

    pub fn resolve(&self, media: &Media) -> Option<NaiveDateTime> {
        let kind = media.kind?;
        let result = match kind {
            MediaKind::Image => exif::read_date_time_original(&media.path),
            MediaKind::Video => video::query_creation_date(&self.exiftool, &media.path),
        };

        match result {
            Ok(Some(date)) => Some(date),
            Ok(None) => {
                debug!("No capture date recorded in {}", media.path.display());
                None
            }
            Err(e) => {
                warn!("Error getting capture date for {}: {}", media.path.display(), e);
                None
            }
        }
    }

    pub fn resolve_path(&self, path: &Path) -> Option<NaiveDateTime> {
        self.resolve(&Media::new(path.to_path_buf()))
    }
}
