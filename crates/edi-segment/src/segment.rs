// segment.rs — Parsed segment and file representations.
//
// A Segment is one logical record of an interchange (ISA, GS, ST, INS, ...).
// Segments are immutable once produced; everything downstream (diffing,
// highlighting, filtering) is a read-only view over them.

use serde::{Deserialize, Serialize};

/// One segment of an EDI document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Segment {
    /// Segment identifier: the text before the first element delimiter
    /// (e.g. "ISA", "REF", "NM1").
    pub tag: String,

    /// The raw segment text, including its terminator when present.
    pub raw: String,

    /// 1-based line in the source text where this segment starts.
    pub line_number: usize,
}

impl Segment {
    pub fn new(tag: impl Into<String>, raw: impl Into<String>, line_number: usize) -> Self {
        Self {
            tag: tag.into(),
            raw: raw.into(),
            line_number,
        }
    }

    /// Two segments are the same for diffing when their raw text is identical.
    pub fn same_content(&self, other: &Segment) -> bool {
        self.raw == other.raw
    }
}

/// Transaction set type, taken from the ST header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FileType {
    /// 834 — Benefit Enrollment and Maintenance.
    #[serde(rename = "834")]
    Enrollment834,
    /// 820 — Payroll Deducted and Other Group Premium Payment.
    #[serde(rename = "820")]
    Payment820,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

impl FileType {
    /// Map an ST01 transaction set identifier to a file type.
    pub fn from_transaction_code(code: &str) -> Self {
        match code.trim() {
            "834" => FileType::Enrollment834,
            "820" => FileType::Payment820,
            _ => FileType::Unknown,
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::Enrollment834 => write!(f, "834"),
            FileType::Payment820 => write!(f, "820"),
            FileType::Unknown => write!(f, "unknown"),
        }
    }
}

/// The result of parsing one file's content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ParsedFile {
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub segments: Vec<Segment>,
}

impl ParsedFile {
    pub fn new(file_type: FileType, segments: Vec<Segment>) -> Self {
        Self {
            file_type,
            segments,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Count segments per tag, in order of first appearance.
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for segment in &self.segments {
            match counts.iter_mut().find(|(tag, _)| *tag == segment.tag) {
                Some((_, n)) => *n += 1,
                None => counts.push((segment.tag.clone(), 1)),
            }
        }
        counts
    }
}
