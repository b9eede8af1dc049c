//! # edi-segment
//!
//! Segment-level parsing for X12 EDI interchanges.
//!
//! Raw interchange text is split into an ordered list of [`Segment`]s, each
//! carrying its tag, its raw text and the source line it started on. The
//! result is a [`ParsedFile`] that also records the transaction type
//! (834 enrollment, 820 premium payment, or unknown).
//!
//! ## Key components
//!
//! - [`Delimiters`] — element / segment / sub-element separators, with
//!   detection from the ISA header
//! - [`parse`] / [`parse_with`] — text to [`ParsedFile`]
//! - [`FileStore`] — in-memory store of uploaded files

pub mod delimiters;
pub mod error;
pub mod parser;
pub mod segment;
pub mod store;

pub use delimiters::Delimiters;
pub use error::SegmentError;
pub use parser::{detect_file_type, parse, parse_with};
pub use segment::{FileType, ParsedFile, Segment};
pub use store::{FileStore, UploadedFile};
