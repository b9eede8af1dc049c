// view.rs — Flattened rows for the animated diff view.
//
// A DiffSegment carries the same information as a ComparisonLine but as
// plain strings ready for rendering. `index` is the row position in the full
// comparison, not a stable identity: it changes whenever inputs change.

use serde::{Deserialize, Serialize};

use crate::compare::{ComparisonLine, DiffType};
use crate::filter::ComparisonFilter;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffSegment {
    #[serde(rename = "type")]
    pub diff_type: DiffType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_content: Option<String>,
    pub index: usize,
}

impl DiffSegment {
    pub fn from_line(index: usize, line: &ComparisonLine) -> Self {
        Self {
            diff_type: line.diff_type,
            left_tag: line.left_segment.as_ref().map(|s| s.tag.clone()),
            right_tag: line.right_segment.as_ref().map(|s| s.tag.clone()),
            left_content: line.left_segment.as_ref().map(|s| s.raw.clone()),
            right_content: line.right_segment.as_ref().map(|s| s.raw.clone()),
            index,
        }
    }

    /// Tag to show for the row, preferring the left side.
    pub fn tag(&self) -> Option<&str> {
        self.left_tag.as_deref().or(self.right_tag.as_deref())
    }
}

/// Flatten every row of a comparison.
pub fn diff_segments(lines: &[ComparisonLine]) -> Vec<DiffSegment> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| DiffSegment::from_line(i, line))
        .collect()
}

/// Flatten the rows that pass a filter; indices still refer to the full
/// comparison.
pub fn filtered_diff_segments(
    lines: &[ComparisonLine],
    filter: &ComparisonFilter,
) -> Vec<DiffSegment> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| filter.matches(line))
        .map(|(i, line)| DiffSegment::from_line(i, line))
        .collect()
}
