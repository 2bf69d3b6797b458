//! Candidate discovery and ordering.
//!
//! Stage 1 of the assembly pipeline. Lists the input directory
//! (non-recursive), keeps entries whose extension is on the frame allow-list,
//! and orders them by the configured [`SortMode`].
//!
//! ## Filtering Rules
//!
//! - Only the extension is consulted: `.jpg .jpeg .png .bmp .gif`,
//!   case-insensitive. A `.txt` file that happens to contain image bytes is
//!   skipped; a corrupt `.png` is kept here and fails later, at decode.
//! - Directories are skipped, even ones named like `album.png`.
//! - Nothing else is special-cased — dotfiles with a matching extension are
//!   candidates like any other file.
//!
//! Discovery itself returns entries in filename order, so `ByModifiedTime`
//! runs are reproducible: equal timestamps fall back to name order.

use crate::config::SortMode;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read directory {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(
        "no supported image files in {} (supported: .jpg, .jpeg, .png, .bmp, .gif)",
        .0.display()
    )]
    NoImagesFound(PathBuf),
}

/// Extensions accepted as animation frames.
pub const FRAME_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// One qualifying directory entry, not yet decoded.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    /// Bare file name — the sort key for [`SortMode::ByName`] and the name
    /// reported when this file later fails to decode.
    pub file_name: String,
    /// Last-modified timestamp — the sort key for [`SortMode::ByModifiedTime`].
    pub modified: SystemTime,
}

/// List all candidate frames directly inside `dir`, in filename order.
///
/// Fails with [`ScanError::NoImagesFound`] when the filtered list is empty;
/// an unreadable directory or entry is [`ScanError::DirectoryRead`].
pub fn discover(dir: &Path) -> Result<Vec<Candidate>, ScanError> {
    let read_dir = fs::read_dir(dir).map_err(|source| ScanError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| ScanError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !is_frame_source(&path) {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .map_err(|source| ScanError::DirectoryRead {
                path: path.clone(),
                source,
            })?;
        candidates.push(Candidate {
            file_name: entry.file_name().to_string_lossy().into_owned(),
            path,
            modified,
        });
    }

    if candidates.is_empty() {
        return Err(ScanError::NoImagesFound(dir.to_path_buf()));
    }

    candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(candidates)
}

/// Order candidates per the configured sort mode.
///
/// Both sorts are stable. `ByModifiedTime` therefore keeps the discovery
/// (filename) order for files sharing a timestamp.
pub fn sort_candidates(candidates: &mut [Candidate], mode: SortMode) {
    match mode {
        SortMode::ByName => candidates.sort_by(|a, b| a.file_name.cmp(&b.file_name)),
        SortMode::ByModifiedTime => candidates.sort_by_key(|c| c.modified),
    }
}

fn is_frame_source(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    FRAME_EXTENSIONS.contains(&ext.as_str())
}
