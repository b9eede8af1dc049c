// filter.rs — Display filtering over comparison rows.
//
// Filtering is a projection: it borrows rows from the full comparison and
// keeps their relative order. Stats are never recomputed from the result.

use serde::{Deserialize, Serialize};

use crate::compare::{ComparisonLine, DiffType};

/// Search text plus the "differences only" toggle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonFilter {
    /// Case-insensitive substring matched against tag or raw text of
    /// either side. Empty or whitespace-only means no search.
    #[serde(default)]
    pub search: Option<String>,
    /// Hide unchanged rows.
    #[serde(default)]
    pub differences_only: bool,
}

impl ComparisonFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_differences_only(mut self, enabled: bool) -> Self {
        self.differences_only = enabled;
        self
    }

    fn needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Does a single row pass the filter?
    pub fn matches(&self, line: &ComparisonLine) -> bool {
        if self.differences_only && line.diff_type == DiffType::Unchanged {
            return false;
        }
        match self.needle() {
            Some(needle) => line_contains(line, &needle),
            None => true,
        }
    }

    /// Apply to a full comparison, preserving order.
    pub fn apply<'a>(&self, lines: &'a [ComparisonLine]) -> Vec<&'a ComparisonLine> {
        let needle = self.needle();
        lines
            .iter()
            .filter(|line| !(self.differences_only && line.diff_type == DiffType::Unchanged))
            .filter(|line| needle.as_deref().map_or(true, |n| line_contains(line, n)))
            .collect()
    }

    pub fn is_active(&self) -> bool {
        self.differences_only || self.needle().is_some()
    }
}

fn line_contains(line: &ComparisonLine, needle: &str) -> bool {
    line.segments().any(|seg| {
        seg.raw.to_lowercase().contains(needle) || seg.tag.to_lowercase().contains(needle)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use crate::stats::DiffStats;
    use edi_segment::Segment;

    fn seg(raw: &str, line: usize) -> Segment {
        Segment::new(raw.split('*').next().unwrap_or_default(), raw, line)
    }

    fn sample() -> Vec<ComparisonLine> {
        // unchanged, modified, unchanged, added
        let left = vec![seg("ST*834*0001~", 1), seg("REF*0F*111~", 2), seg("DTP*348*D8*20240101~", 3)];
        let right = vec![
            seg("ST*834*0001~", 1),
            seg("REF*0F*222~", 2),
            seg("DTP*348*D8*20240101~", 3),
            seg("NM1*IL*1*Doe~", 4),
        ];
        compare(&left, &right)
    }

    #[test]
    fn differences_only_keeps_changed_rows_in_order() {
        let lines = sample();
        let filtered = ComparisonFilter::new().with_differences_only(true).apply(&lines);
        let types: Vec<DiffType> = filtered.iter().map(|l| l.diff_type).collect();
        assert_eq!(types, vec![DiffType::Modified, DiffType::Added]);
    }

    #[test]
    fn search_is_case_insensitive_on_either_side() {
        let lines = sample();
        let hits = ComparisonFilter::new().with_search("doe").apply(&lines);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].diff_type, DiffType::Added);

        let by_left_only = ComparisonFilter::new().with_search("111").apply(&lines);
        assert_eq!(by_left_only.len(), 1);

        let by_tag = ComparisonFilter::new().with_search("dtp").apply(&lines);
        assert_eq!(by_tag.len(), 1);
    }

    #[test]
    fn search_and_toggle_combine() {
        let lines = sample();
        let filter = ComparisonFilter::new()
            .with_search("0")
            .with_differences_only(true);
        let hits = filter.apply(&lines);
        assert!(hits.iter().all(|l| l.diff_type != DiffType::Unchanged));
        assert_eq!(hits.len(), 1);
        assert!(filter.matches(&lines[1]));
    }

    #[test]
    fn blank_search_is_inactive() {
        let lines = sample();
        let filter = ComparisonFilter::new().with_search("   ");
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&lines).len(), lines.len());
    }

    #[test]
    fn filtering_leaves_stats_alone() {
        let lines = sample();
        let before = DiffStats::from_lines(&lines);
        let _ = ComparisonFilter::new().with_differences_only(true).apply(&lines);
        assert_eq!(DiffStats::from_lines(&lines), before);
        assert_eq!(before.total(), 4);
    }
}
