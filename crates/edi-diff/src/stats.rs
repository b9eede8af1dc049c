// stats.rs — Per-type tallies over a full comparison.
//
// Stats are always computed from the unfiltered rows; filtering for display
// never changes them.

use serde::{Deserialize, Serialize};

use crate::compare::{ComparisonLine, DiffType};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn from_lines(lines: &[ComparisonLine]) -> Self {
        Self::from_types(lines.iter().map(|l| l.diff_type))
    }

    pub fn from_types(types: impl IntoIterator<Item = DiffType>) -> Self {
        let mut stats = Self::default();
        for t in types {
            stats.record(t);
        }
        stats
    }

    pub fn record(&mut self, diff_type: DiffType) {
        match diff_type {
            DiffType::Added => self.added += 1,
            DiffType::Removed => self.removed += 1,
            DiffType::Modified => self.modified += 1,
            DiffType::Unchanged => self.unchanged += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified + self.unchanged
    }

    /// Rows that are not unchanged.
    pub fn changed(&self) -> usize {
        self.added + self.removed + self.modified
    }

    pub fn count(&self, diff_type: DiffType) -> usize {
        match diff_type {
            DiffType::Added => self.added,
            DiffType::Removed => self.removed,
            DiffType::Modified => self.modified,
            DiffType::Unchanged => self.unchanged,
        }
    }
}

impl std::fmt::Display for DiffStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} modified, {} unchanged",
            self.added, self.removed, self.modified, self.unchanged
        )
    }
}
