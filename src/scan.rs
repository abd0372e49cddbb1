use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::ExportError;
use crate::media::Media;

/// Collect every regular file under `root`, recursively, in directory order.
///
/// Directory symlinks are not followed; symlinks to regular files are kept.
/// A nested directory that cannot be read is logged and skipped, but an
/// unreadable `root` fails the whole scan.
pub fn scan_dir(root: &Path) -> Result<Vec<Media>, ExportError> {
    let entries = fs::read_dir(root).map_err(|source| ExportError::ReadSource {
        path: root.to_path_buf(),
        source,
    })?;

    let mut media = Vec::new();
    collect_entries(entries, &mut media);
    debug!("Found {} file(s) under {}", media.len(), root.display());
    Ok(media)
}

fn scan_dir_recursive(dir: &Path, media: &mut Vec<Media>) {
    match fs::read_dir(dir) {
        Ok(entries) => collect_entries(entries, media),
        Err(e) => warn!("Cannot read directory {}: {}", dir.display(), e),
    }
}

fn collect_entries(entries: fs::ReadDir, media: &mut Vec<Media>) {
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Cannot read directory entry: {}", e);
                continue;
            }
        };
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            warn!("Cannot stat {}", path.display());
            continue;
        };

        if file_type.is_dir() {
            scan_dir_recursive(&path, media);
        } else if file_type.is_file() {
            media.push(Media::new(path));
        } else if file_type.is_symlink() {
            // Follow only to check the target is a plain file
            if fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false) {
                media.push(Media::new(path));
            } else {
                debug!("Not following {}", path.display());
            }
        }
    }
}
