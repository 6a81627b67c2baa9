// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

//! Local, append-only storage of anonymized posts.
//!
//! Posts are stored as JSON lines: one JSON-encoded [`PostRecord`] per line,
//! in the order in which they were fetched. Records are never updated or
//! removed by trendwatch.

use crate::thing::PostRecord;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the record log, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "data/posts.jsonl";

/// File name of the trend summary written to the output directory.
pub const SUMMARY_FILE_NAME: &str = "trends.json";

/// An error writing to local storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file or its parent directory could not be written.
    #[error("could not write {}: {source}", .path.display())]
    Io {
        /// The file being written.
        path: PathBuf,

        /// The underlying I/O error.
        source: io::Error,
    },

    /// A record could not be encoded as JSON or decoded from it.
    #[error("invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Appends `record` to the record log at `path`.
///
/// The file and any missing parent directories are created as needed.
pub fn save_post(record: &PostRecord, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let mut line = serde_json::to_string(record)?;
    line.push('\n');

    create_parent_dirs(path)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(line.as_bytes()))
        .map_err(|source| io_error(path, source))
}

/// Reads every record from the record log at `path`.
pub fn load_posts(path: impl AsRef<Path>) -> Result<Vec<PostRecord>, StorageError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(StorageError::from))
        .collect()
}

/// Writes `summary` as pretty-printed JSON to [`SUMMARY_FILE_NAME`] inside
/// `output_dir`, replacing any previous summary.
///
/// Returns the path of the written file.
pub fn save_summary(
    summary: &impl Serialize,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf, StorageError> {
    let path = output_dir.as_ref().join(SUMMARY_FILE_NAME);
    let json = serde_json::to_string_pretty(summary)?;
    create_parent_dirs(&path)?;
    fs::write(&path, json + "\n").map_err(|source| io_error(&path, source))?;
    Ok(path)
}

fn create_parent_dirs(path: &Path) -> Result<(), StorageError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| io_error(parent, source))
        }
        _ => Ok(()),
    }
}

fn io_error(path: &Path, source: io::Error) -> StorageError {
    StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}
