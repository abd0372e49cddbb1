//! Fixtures shared by the unit tests.

#[cfg(unix)]
use std::path::{Path, PathBuf};

/// Little-endian TIFF body holding only IFD0 -> Exif IFD -> `DateTimeOriginal`.
fn tiff_with_date_time_original(value: &str) -> Vec<u8> {
    // Long enough that the value is stored out of line
    assert!(value.len() >= 4);

    let mut tiff: Vec<u8> = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());

    // IFD0 at 8: one entry pointing at the Exif IFD
    let exif_ifd: u32 = 8 + 2 + 12 + 4;
    tiff.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut tiff, 0x8769, 4, 1, exif_ifd);
    tiff.extend_from_slice(&0u32.to_le_bytes());

    // Exif IFD: DateTimeOriginal as ASCII, stored right after the IFD
    let data_offset = exif_ifd + 2 + 12 + 4;
    tiff.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut tiff, 0x9003, 2, value.len() as u32 + 1, data_offset);
    tiff.extend_from_slice(&0u32.to_le_bytes());
    tiff.extend_from_slice(value.as_bytes());
    tiff.push(0);
    tiff
}

/// Minimal JPEG: SOI, an APP1 EXIF segment holding only `DateTimeOriginal`, EOI.
pub fn jpeg_with_date_time_original(value: &str) -> Vec<u8> {
    let tiff = tiff_with_date_time_original(value);
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let segment_len = (2 + 6 + tiff.len()) as u16;
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

fn push_entry(buf: &mut Vec<u8>, tag: u16, typ: u16, count: u32, value: u32) {
    buf.extend_from_slice(&tag.to_le_bytes());
    buf.extend_from_slice(&typ.to_le_bytes());
    buf.extend_from_slice(&count.to_le_bytes());
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Minimal PNG: signature, a 1x1 IHDR, an `eXIf` chunk, IEND.
pub fn png_with_date_time_original(value: &str) -> Vec<u8> {
    let mut png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    let ihdr = [0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0];
    push_chunk(&mut png, b"IHDR", &ihdr);
    push_chunk(&mut png, b"eXIf", &tiff_with_date_time_original(value));
    push_chunk(&mut png, b"IEND", &[]);
    png
}

fn push_chunk(buf: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    buf.extend_from_slice(&(data.len() as u32).to_be_bytes());
    let start = buf.len();
    buf.extend_from_slice(kind);
    buf.extend_from_slice(data);
    let crc = crc32(&buf[start..]);
    buf.extend_from_slice(&crc.to_be_bytes());
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &b in bytes {
        crc ^= b as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

/// JPEG with a JFIF APP0 segment and no EXIF at all.
pub fn jpeg_without_exif() -> Vec<u8> {
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    jpeg.extend_from_slice(b"JFIF\0");
    jpeg.extend_from_slice(&[0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// Write an executable shell script standing in for exiftool.
#[cfg(unix)]
pub fn fake_exiftool(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-exiftool");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

    // A child forked by another test thread may briefly hold the write handle
    const ETXTBSY: i32 = 26;
    for _ in 0..100 {
        match std::process::Command::new(&path).arg("-ver").output() {
            Err(e) if e.raw_os_error() == Some(ETXTBSY) => {
                std::thread::sleep(std::time::Duration::from_millis(10))
            }
            _ => break,
        }
    }
    path
}
