use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, LocalResult, NaiveDateTime, TimeZone};
use filetime::FileTime;

use crate::error::FileError;
use crate::media::Media;

/// Capture dates carry no zone: treat them as local time, like the camera did.
pub fn local_file_time(date: &NaiveDateTime) -> FileTime {
    file_time_in(date, &chrono::Local)
}

/// Ambiguous times (DST fold) take the earlier instant. Times skipped by a
/// DST gap keep the offset in force just before the gap, so 02:30 on a
/// spring-forward night lands on 03:30 of the new offset.
fn file_time_in<Tz: TimeZone>(date: &NaiveDateTime, tz: &Tz) -> FileTime {
    let seconds = match tz.from_local_datetime(date) {
        LocalResult::Single(t) => t.timestamp(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
        LocalResult::None => {
            let before = *date - Duration::hours(1);
            tz.from_local_datetime(&before)
                .earliest()
                .map(|t| t.timestamp() + 3600)
                .unwrap_or_else(|| date.and_utc().timestamp())
        }
    };
    FileTime::from_unix_time(seconds, 0)
}

/// Write access to `dir`, checked by creating and removing a scratch file.
pub fn check_writable(dir: &Path) -> std::io::Result<()> {
    let scratch = dir.join(format!(".photo-date-export-{}.tmp", std::process::id()));
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&scratch)?;
    fs::remove_file(&scratch)
}

/// Copy `media` into `dest_dir` under its bare filename and set both its
/// access and modification time to `taken`.
///
/// An existing file of the same name is overwritten.
pub fn export_file(media: &Media, taken: &NaiveDateTime, dest_dir: &Path) -> Result<PathBuf, FileError> {
    let file_name = media
        .file_name()
        .ok_or_else(|| FileError::NoFileName(media.path.clone()))?;
    let dest = dest_dir.join(file_name);

    if is_same_file(&media.path, &dest) {
        return Err(FileError::SameFile(dest));
    }

    // fs::copy carries permissions over, not times
    fs::copy(&media.path, &dest).map_err(|source| FileError::Copy {
        from: media.path.clone(),
        to: dest.clone(),
        source,
    })?;

    let file_time = local_file_time(taken);
    filetime::set_file_times(&dest, file_time, file_time).map_err(|source| FileError::Stamp {
        path: dest.clone(),
        source,
    })?;

    Ok(dest)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
