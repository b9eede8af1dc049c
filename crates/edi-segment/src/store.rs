// store.rs — FileStore: in-memory storage for uploaded EDI files.
//
// Uploaded files are kept in upload order. The file type is derived once at
// upload time for listing; the segment list is re-parsed on every `parse`
// call so the store never hands out stale derived state.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::delimiters::Delimiters;
use crate::error::SegmentError;
use crate::parser;
use crate::segment::{FileType, ParsedFile};

/// One uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedFile {
    pub id: Uuid,
    pub name: String,
    pub content: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub uploaded_at: DateTime<Utc>,
}

/// How the store picks separators for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DelimiterMode {
    /// Read them from the ISA header, else use these.
    Detect(Delimiters),
    /// Always use these.
    Fixed(Delimiters),
}

/// In-memory store of uploaded files.
#[derive(Debug)]
pub struct FileStore {
    files: Vec<UploadedFile>,
    mode: DelimiterMode,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::with_fallback(Delimiters::default())
    }
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that parses with fixed delimiters instead of detecting them
    /// from each file's ISA header.
    pub fn with_delimiters(delimiters: Delimiters) -> Self {
        Self {
            files: Vec::new(),
            mode: DelimiterMode::Fixed(delimiters),
        }
    }

    /// A store that detects delimiters from each file's ISA header and uses
    /// `fallback` for files without a usable one.
    pub fn with_fallback(fallback: Delimiters) -> Self {
        Self {
            files: Vec::new(),
            mode: DelimiterMode::Detect(fallback),
        }
    }

    /// Store raw text under a display name and return the new record.
    pub fn upload(&mut self, name: impl Into<String>, content: impl Into<String>) -> UploadedFile {
        let name = name.into();
        let content = content.into();
        let file_type = self.parse_content(&content).file_type;
        let file = UploadedFile {
            id: Uuid::new_v4(),
            name,
            content,
            file_type,
            uploaded_at: Utc::now(),
        };
        tracing::info!(id = %file.id, name = %file.name, file_type = %file.file_type, "uploaded EDI file");
        self.files.push(file.clone());
        file
    }

    /// Read a file from disk and upload it under its file name.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<UploadedFile, SegmentError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SegmentError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(self.upload(name, content))
    }

    /// All files, in upload order.
    pub fn list(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn get(&self, id: Uuid) -> Result<&UploadedFile, SegmentError> {
        self.files
            .iter()
            .find(|f| f.id == id)
            .ok_or(SegmentError::NotFound(id))
    }

    /// Remove a file. Returns false if it was not stored.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    /// Parse a stored file's current content.
    pub fn parse(&self, id: Uuid) -> Result<ParsedFile, SegmentError> {
        let file = self.get(id)?;
        Ok(self.parse_content(&file.content))
    }

    fn parse_content(&self, content: &str) -> ParsedFile {
        match self.mode {
            DelimiterMode::Detect(fallback) => {
                parser::parse_with(content, &fallback.detect_or(content))
            }
            DelimiterMode::Fixed(d) => parser::parse_with(content, &d),
        }
    }
}
