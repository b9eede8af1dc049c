//! # edi-diff
//!
//! Segment-level comparison of two parsed EDI files, plus everything needed
//! to show the result to a reviewer.
//!
//! A [`Comparison`] pairs the segments of a left (baseline) and right
//! (candidate) [`edi_segment::ParsedFile`] and classifies each row as added,
//! removed, modified or unchanged. Rows can be filtered for display with a
//! [`ComparisonFilter`] without affecting the [`DiffStats`], highlighted
//! element by element, and rendered through an [`OutputAdapter`].
//!
//! ## Key components
//!
//! - [`compare()`] / [`compare_with`] — positional or Myers alignment
//! - [`classify_element`] / [`highlight_segment`] — element categories
//! - [`ComparisonSession`] — current selection, parse cache, supersession
//! - [`RevealTimeline`] — staggered row reveal
//! - [`ErrorSummary`] — validation issues grouped by severity
//! - [`DiffConfig`] — `.edidiff/config.toml`

pub mod classify;
pub mod compare;
pub mod config;
pub mod error;
pub mod fields;
pub mod filter;
pub mod output_adapters;
pub mod palette;
pub mod reveal;
pub mod session;
pub mod stats;
pub mod summary;
pub mod view;

pub use classify::{
    classify_element, highlight_raw, highlight_segment, ElementCategory, HighlightToken,
    TokenKind,
};
pub use compare::{
    compare, compare_with, AlignmentStrategy, Comparison, ComparisonLine, DiffType,
};
pub use config::DiffConfig;
pub use error::DiffError;
pub use fields::{element_changes, ElementChange};
pub use filter::ComparisonFilter;
pub use output_adapters::{get_adapter, OutputAdapter, OutputFormat, RenderContext, ViewMode};
pub use palette::DiffColor;
pub use reveal::{EntryState, RevealTimeline};
pub use session::{ComparisonJob, ComparisonOutcome, ComparisonSession, ParseCache};
pub use stats::DiffStats;
pub use summary::{ErrorSummary, Severity, SummaryGroup, ValidationIssue, ValidationReport};
pub use view::{diff_segments, filtered_diff_segments, DiffSegment};
