//! Input directory listing.
//!
//! First step of a batch run. Lists the input directory one level deep and
//! keeps the frames a run will crop:
//!
//! - the entry is a regular file (directories are skipped, symlinks are
//!   followed and judged by what they point at)
//! - the file name ends with the literal `.tiff` suffix — the match is
//!   case-sensitive, so `frame.TIFF` and `frame.tif` are skipped
//!
//! Matches are sorted by filename so runs process frames in a stable order.
//! Names are carried as raw OS strings, so a name that is not valid UTF-8
//! still reaches the output directory byte-for-byte. Nothing is recursive:
//! subdirectories of the input directory are ignored entirely, whatever they
//! are named.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Suffix a frame file must carry. Exact match, no case folding.
pub const FRAME_SUFFIX: &str = ".tiff";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read input directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A matched source frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Name inside the input directory, reused verbatim for the output file.
    /// Raw OS string; convert lossily for display only.
    pub filename: OsString,
    /// Full path to the source frame.
    pub path: PathBuf,
}

/// The frames one batch run will process, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub root: PathBuf,
    pub files: Vec<SourceFile>,
}

pub fn scan(root: &Path) -> Result<Listing, ScanError> {
    let entries = fs::read_dir(root).map_err(|source| ScanError::DirectoryAccess {
        path: root.to_path_buf(),
        source,
    })?;

    let mut files: Vec<SourceFile> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter_map(|p| {
            let filename = p.file_name()?.to_os_string();
            is_frame(&filename).then_some(SourceFile { filename, path: p })
        })
        .collect();

    files.sort_by(|a, b| a.filename.cmp(&b.filename));

    Ok(Listing {
        root: root.to_path_buf(),
        files,
    })
}

/// Frame filter: exact `.tiff` suffix, case-sensitive, matched on raw bytes.
fn is_frame(filename: &OsStr) -> bool {
    filename.as_encoded_bytes().ends_with(FRAME_SUFFIX.as_bytes())
}
