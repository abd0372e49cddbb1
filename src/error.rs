use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Why a capture date could not be read. Never leaves the resolver.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("cannot open file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unreadable EXIF: {0}")]
    Exif(#[from] exif::Error),

    #[error("DateTimeOriginal is not an ASCII value")]
    NotAscii,

    #[error("cannot run {tool}: {source}")]
    Spawn {
        tool: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("malformed timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Copying or stamping a single file failed. The run continues.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("cannot copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is the source file itself")]
    SameFile(PathBuf),

    #[error("{0} has no file name")]
    NoFileName(PathBuf),

    #[error("cannot set file times on {path}: {source}")]
    Stamp {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ends the whole run. Files exported before it stay in place.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("source {0} is not a directory")]
    SourceNotDir(PathBuf),

    #[error("destination {0} is not a directory")]
    DestNotDir(PathBuf),

    #[error("cannot write to destination {path}: {source}")]
    DestUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read source directory {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
