// compare.rs — Segment-level comparison of two parsed EDI files.
//
// The default strategy aligns segments strictly by index: row i pairs the
// i-th left segment with the i-th right segment. EDI segments are ordered
// by loop structure, so this is a cheap approximation of a real diff. It does
// not detect insertions: one segment inserted near the top turns every
// following row into "modified". That behaviour is kept as-is.
//
// The Myers strategy is an opt-in alternative behind the same output type.

use edi_segment::{ParsedFile, Segment};
use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffOp};

use crate::stats::DiffStats;

/// Classification of one aligned row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiffType {
    /// Only the right side has a segment here.
    Added,
    /// Only the left side has a segment here.
    Removed,
    /// Both sides have a segment and the raw text differs.
    Modified,
    /// Both sides have the same raw text.
    Unchanged,
}

impl DiffType {
    pub fn is_change(self) -> bool {
        self != DiffType::Unchanged
    }
}

impl std::fmt::Display for DiffType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffType::Added => write!(f, "added"),
            DiffType::Removed => write!(f, "removed"),
            DiffType::Modified => write!(f, "modified"),
            DiffType::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// How rows are paired between the two files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentStrategy {
    /// Pair segments by index.
    #[default]
    Positional,
    /// Myers sequence alignment over raw segment text.
    Myers,
}

impl std::str::FromStr for AlignmentStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positional" | "index" => Ok(AlignmentStrategy::Positional),
            "myers" => Ok(AlignmentStrategy::Myers),
            _ => Err(format!(
                "Invalid alignment: '{}'. Valid alignments: positional, myers",
                s
            )),
        }
    }
}

impl std::fmt::Display for AlignmentStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignmentStrategy::Positional => write!(f, "positional"),
            AlignmentStrategy::Myers => write!(f, "myers"),
        }
    }
}

/// One row of the comparison.
///
/// At least one side is always present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_segment: Option<Segment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_segment: Option<Segment>,
    pub diff_type: DiffType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_line_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_line_number: Option<usize>,
}

impl ComparisonLine {
    /// Build a row from the segments at one aligned position.
    ///
    /// Returns `None` when both sides are absent.
    pub fn from_pair(left: Option<&Segment>, right: Option<&Segment>) -> Option<Self> {
        let diff_type = match (left, right) {
            (None, None) => return None,
            (None, Some(_)) => DiffType::Added,
            (Some(_), None) => DiffType::Removed,
            (Some(l), Some(r)) if l.same_content(r) => DiffType::Unchanged,
            (Some(_), Some(_)) => DiffType::Modified,
        };
        Some(Self {
            left_segment: left.cloned(),
            right_segment: right.cloned(),
            diff_type,
            left_line_number: left.map(|s| s.line_number),
            right_line_number: right.map(|s| s.line_number),
        })
    }

    /// Segments present on this row, left first.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.left_segment.iter().chain(self.right_segment.iter())
    }
}

/// Positional comparison of two segment sequences.
pub fn compare(left: &[Segment], right: &[Segment]) -> Vec<ComparisonLine> {
    let n = left.len().max(right.len());
    (0..n)
        .filter_map(|i| ComparisonLine::from_pair(left.get(i), right.get(i)))
        .collect()
}

/// Compare with an explicit alignment strategy.
pub fn compare_with(
    left: &[Segment],
    right: &[Segment],
    strategy: AlignmentStrategy,
) -> Vec<ComparisonLine> {
    let lines = match strategy {
        AlignmentStrategy::Positional => compare(left, right),
        AlignmentStrategy::Myers => compare_myers(left, right),
    };
    tracing::debug!(
        left = left.len(),
        right = right.len(),
        rows = lines.len(),
        %strategy,
        "compared segment sequences"
    );
    lines
}

fn compare_myers(left: &[Segment], right: &[Segment]) -> Vec<ComparisonLine> {
    let old: Vec<&str> = left.iter().map(|s| s.raw.as_str()).collect();
    let new: Vec<&str> = right.iter().map(|s| s.raw.as_str()).collect();

    let mut lines = Vec::with_capacity(left.len().max(right.len()));
    for op in capture_diff_slices(Algorithm::Myers, &old, &new) {
        match op {
            DiffOp::Equal {
                old_index,
                new_index,
                len,
            } => {
                for k in 0..len {
                    lines.extend(ComparisonLine::from_pair(
                        left.get(old_index + k),
                        right.get(new_index + k),
                    ));
                }
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for seg in &left[old_index..old_index + old_len] {
                    lines.extend(ComparisonLine::from_pair(Some(seg), None));
                }
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for seg in &right[new_index..new_index + new_len] {
                    lines.extend(ComparisonLine::from_pair(None, Some(seg)));
                }
            }
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => {
                // Pair the replaced run by position, spill the rest.
                for k in 0..old_len.max(new_len) {
                    let l = (k < old_len).then(|| &left[old_index + k]);
                    let r = (k < new_len).then(|| &right[new_index + k]);
                    lines.extend(ComparisonLine::from_pair(l, r));
                }
            }
        }
    }
    lines
}

/// A full comparison of two parsed files: rows plus their tally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comparison {
    pub strategy: AlignmentStrategy,
    pub lines: Vec<ComparisonLine>,
    pub stats: DiffStats,
}

impl Comparison {
    pub fn new(left: &ParsedFile, right: &ParsedFile, strategy: AlignmentStrategy) -> Self {
        let lines = compare_with(&left.segments, &right.segments, strategy);
        let stats = DiffStats::from_lines(&lines);
        Self {
            strategy,
            lines,
            stats,
        }
    }

    /// Positional comparison.
    pub fn positional(left: &ParsedFile, right: &ParsedFile) -> Self {
        Self::new(left, right, AlignmentStrategy::Positional)
    }

    pub fn has_changes(&self) -> bool {
        self.stats.changed() > 0
    }
}
