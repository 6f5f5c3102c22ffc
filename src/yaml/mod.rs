// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! YAML syntax validation.
//!
//! Each file is parsed with `serde_yaml`, one document at a time. A file
//! that cannot be read or parsed is recorded in the report; it never stops
//! the remaining files from being checked.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::YamlError;

/// Default file checked when no paths are given.
pub const DEFAULT_FILE: &str = "bitrise.yml";

/// Outcome for one file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Number of documents parsed, or the first error encountered.
    pub result: std::result::Result<usize, YamlError>,
}

/// Outcome for a set of files.
#[derive(Debug, Default)]
pub struct YamlReport {
    pub files: Vec<FileOutcome>,
}

impl YamlReport {
    /// Whether every file parsed.
    pub fn is_valid(&self) -> bool {
        self.files.iter().all(|f| f.result.is_ok())
    }

    /// Files that failed, with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &YamlError)> {
        self.files
            .iter()
            .filter_map(|f| f.result.as_ref().err().map(|e| (f.path.as_path(), e)))
    }
}

/// Check every file in `paths`.
pub fn validate_files<P: AsRef<Path>>(paths: &[P]) -> YamlReport {
    let files = paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            tracing::debug!("Validating YAML file {:?}", path);
            FileOutcome {
                path: path.to_path_buf(),
                result: validate_file(path),
            }
        })
        .collect();
    YamlReport { files }
}

/// Read and parse one file.
pub fn validate_file(path: &Path) -> std::result::Result<usize, YamlError> {
    let content = std::fs::read_to_string(path).map_err(|e| YamlError::ReadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    validate_str(&content)
}

/// Parse YAML text, returning the number of documents.
pub fn validate_str(content: &str) -> std::result::Result<usize, YamlError> {
    let mut count = 0;
    for document in serde_yaml::Deserializer::from_str(content) {
        serde_yaml::Value::deserialize(document).map_err(|e| YamlError::Syntax {
            message: e.to_string(),
        })?;
        count += 1;
    }
    Ok(count)
}
