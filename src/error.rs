// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Error while listing files: {0}")]
    Glob(#[from] glob::GlobError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serde error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File mask {0:?} does not end with \"_*.properties\"")]
    InvalidFileMask(String),
    #[error("No base translation file found for file mask {0:?}")]
    MissingBaseFile(String),
    #[error("Unsupported translation file: {0}")]
    UnsupportedFile(PathBuf),
    #[error("Invalid component line {line:?}: {reason}")]
    InvalidComponent { line: String, reason: String },
    #[error("Component {0:?} already exists")]
    DuplicateComponentName(String),
    #[error("This component already exists and is named {0:?}")]
    DuplicateComponent(String),
    #[error("Command {command:?} failed: {status}")]
    Command {
        command: String,
        status: std::process::ExitStatus,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Read `path` into a string, keeping the path in the error.
pub(crate) fn read_to_string(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `contents` to `path`, creating the parent directories first.
pub(crate) fn write(path: &std::path::Path, contents: &str) -> Result<()> {
    let wrap = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, contents).map_err(wrap)
}
