//! Per-file sidecars: a free-text annotation (`<stem>.txt`) and an optional
//! JSON description (`<stem>.json`) stored in directories of their own.
//!
//! Library API for annotation front-ends; the bundled desktop app does not
//! use it. JSON objects keep the key order of the file.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

/// `dir/<stem of source>.<ext>`
pub fn sidecar_path(dir: &Path, source: &Path, ext: &str) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default();
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(ext);
    dir.join(name)
}

/// Annotation text for `source`, or an empty string when none was saved yet.
pub fn read_annotation(dir: &Path, source: &Path) -> Result<String> {
    let path = sidecar_path(dir, source, "txt");
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(Error::io("reading", path, e)),
    }
}

/// Create or overwrite the annotation of `source`. Returns the path written.
pub fn write_annotation(dir: &Path, source: &Path, text: &str) -> Result<PathBuf> {
    let path = sidecar_path(dir, source, "txt");
    std::fs::write(&path, text).map_err(|e| Error::io("writing", &path, e))?;
    log::info!("Annotation saved to {}", path.display());
    Ok(path)
}

/// The JSON sidecar of `source` re-serialised with 4-space indentation, or
/// `None` when it does not exist.
pub fn read_json_pretty(dir: &Path, source: &Path) -> Result<Option<String>> {
    let path = sidecar_path(dir, source, "json");
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io("reading", path, e)),
    };
    let json_err = |source| Error::Json {
        path: path.clone(),
        source,
    };
    let value: JsonValue = serde_json::from_str(&text).map_err(json_err)?;

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(json_err)?;
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

// ---------------------------------------------------------------------------
// FileCursor – stepping through a list of files
// ---------------------------------------------------------------------------

/// A position in an ordered list of files, moved with next/previous.
#[derive(Debug, Clone, Default)]
pub struct FileCursor {
    files: Vec<PathBuf>,
    index: usize,
}

impl FileCursor {
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files, index: 0 }
    }

    pub fn current(&self) -> Option<&Path> {
        self.files.get(self.index).map(PathBuf::as_path)
    }

    /// Advance unless already at the last file. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.files.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Step back unless already at the first file.
    pub fn prev(&mut self) -> bool {
        if self.index > 0 && !self.files.is_empty() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// "File i/n" counter, 1-based.
    pub fn position(&self) -> String {
        if self.files.is_empty() {
            return String::new();
        }
        format!("File {}/{}", self.index + 1, self.files.len())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
