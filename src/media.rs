use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Which extraction path a file's capture date is read through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Still image, dated by its EXIF `DateTimeOriginal`.
    Image,
    /// Video container, dated by exiftool's `CreationDate`.
    Video,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov"];

impl MediaKind {
    /// Classify by case-insensitive extension. `None` for anything unsupported.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Image)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct Media {
    /// Full path under the source root
    pub path: PathBuf,
    /// Just the filename, lossily decoded for log lines
    pub filename: String,
    /// Inferred from the extension; `None` means the file is never exported
    pub kind: Option<MediaKind>,
}

impl Media {
    pub fn new(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let kind = MediaKind::from_path(&path);
        Self {
            path,
            filename,
            kind,
        }
    }

    /// The untouched base name, used as the destination name.
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }
}
