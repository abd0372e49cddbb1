use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};

use super::parse_capture_time;
use crate::error::ResolveError;

/// Read `DateTimeOriginal` from the EXIF block of a JPEG or PNG file.
///
/// `Ok(None)` means the file has no EXIF block or the block has no such
/// field. No other datetime field is consulted.
pub fn read_date_time_original(path: &Path) -> Result<Option<NaiveDateTime>, ResolveError> {
    let file = File::open(path)?;
    let exif = match Reader::new().read_from_container(&mut BufReader::new(file)) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
        return Ok(None);
    };

    // Raw ASCII, not display_value(): the display form rewrites the separators
    let Value::Ascii(ref values) = field.value else {
        return Err(ResolveError::NotAscii);
    };
    let raw = values.first().map(Vec::as_slice).unwrap_or_default();
    let text = std::str::from_utf8(raw).map_err(|_| ResolveError::NotAscii)?;

    parse_capture_time(text).map(Some)
}
